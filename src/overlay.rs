use glam::Vec3;
use winit::window::Window;

use crate::core::WindowDimensions;
use crate::projection::ProjectionMode;

/// Values shown in the HUD
#[derive(Debug, Clone, Copy)]
pub struct OverlayStats {
    pub fps: f32,
    pub frame: u64,
    pub mode: ProjectionMode,
    pub speed: f32,
    pub position: Vec3,
}

impl OverlayStats {
    pub fn lines(&self) -> [String; 4] {
        [
            format!("frame {}", self.frame),
            format!("{} projection", self.mode.label()),
            format!("speed {:.1}", self.speed),
            format!(
                "position {:.1} {:.1} {:.1}",
                self.position.x, self.position.y, self.position.z
            ),
        ]
    }
}

/// Lay out the HUD. It is not interactable, so pointer events pass through.
pub fn draw_hud(ctx: &egui::Context, stats: &OverlayStats) {
    egui::Window::new("Stats")
        .title_bar(false)
        .resizable(false)
        .interactable(false)
        .fixed_pos(egui::pos2(10.0, 10.0))
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(format!("{:.0}", stats.fps))
                    .size(48.0)
                    .color(egui::Color32::from_rgb(255, 158, 74)),
            );
            ui.label(
                egui::RichText::new("FPS")
                    .size(12.0)
                    .color(egui::Color32::GRAY),
            );
            for line in stats.lines() {
                ui.label(
                    egui::RichText::new(line)
                        .size(12.0)
                        .color(egui::Color32::LIGHT_GRAY),
                );
            }
        });
}

/// egui HUD drawn on top of the scene
pub struct Overlay {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

impl Overlay {
    pub fn new(window: &Window, device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let ctx = egui::Context::default();
        let state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let renderer =
            egui_wgpu::Renderer::new(device, format, egui_wgpu::RendererOptions::default());

        Self {
            ctx,
            state,
            renderer,
        }
    }

    /// Returns true if egui consumed the event
    pub fn handle_event(&mut self, window: &Window, event: &winit::event::WindowEvent) -> bool {
        self.state.on_window_event(window, event).consumed
    }

    /// Record the HUD into `encoder`, loading the existing frame contents
    ///
    /// Returns any extra command buffers egui needs submitted first.
    #[allow(clippy::too_many_arguments)]
    pub fn render(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        window: &Window,
        dimensions: WindowDimensions,
        stats: &OverlayStats,
    ) -> Vec<wgpu::CommandBuffer> {
        let raw_input = self.state.take_egui_input(window);
        let full_output = self.ctx.run(raw_input, |ctx| draw_hud(ctx, stats));

        self.state
            .handle_platform_output(window, full_output.platform_output);

        let tris = self
            .ctx
            .tessellate(full_output.shapes, self.ctx.pixels_per_point());
        for (id, image_delta) in &full_output.textures_delta.set {
            self.renderer.update_texture(device, queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [dimensions.width, dimensions.height],
            pixels_per_point: window.scale_factor() as f32,
        };

        let command_buffers =
            self.renderer
                .update_buffers(device, queue, encoder, &tris, &screen_descriptor);

        {
            let mut render_pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                        depth_slice: None,
                    })],
                    depth_stencil_attachment: None,
                    occlusion_query_set: None,
                    timestamp_writes: None,
                })
                .forget_lifetime();

            self.renderer
                .render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.renderer.free_texture(id);
        }

        command_buffers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_stats() -> OverlayStats {
        OverlayStats {
            fps: 60.0,
            frame: 120,
            mode: ProjectionMode::Orthographic,
            speed: 2.5,
            position: Vec3::new(0.0, 3.0, 15.0),
        }
    }

    #[test]
    fn hud_does_not_capture_pointer_over_it() {
        let ctx = egui::Context::default();
        let stats = sample_stats();
        let over_hud = egui::pos2(30.0, 30.0);

        for _ in 0..3 {
            let input = egui::RawInput {
                screen_rect: Some(egui::Rect::from_min_size(
                    egui::Pos2::ZERO,
                    egui::vec2(800.0, 600.0),
                )),
                events: vec![egui::Event::PointerMoved(over_hud)],
                ..Default::default()
            };
            let _ = ctx.run(input, |ctx| draw_hud(ctx, &stats));
        }

        assert!(!ctx.is_pointer_over_area());
        assert!(!ctx.wants_pointer_input());
    }

    #[test]
    fn stats_lines_describe_camera() {
        let stats = sample_stats();
        let lines = stats.lines();
        assert_eq!(lines[0], "frame 120");
        assert_eq!(lines[1], "orthographic projection");
        assert_eq!(lines[2], "speed 2.5");
        assert_eq!(lines[3], "position 0.0 3.0 15.0");
    }
}
