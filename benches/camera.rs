use campfire_scene::camera::{Camera, CameraMovement};
use campfire_scene::core::WindowDimensions;
use campfire_scene::projection::ProjectionMode;
use campfire_scene::scene::campfire_scene;
use campfire_scene::transform::FrameTransforms;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Benchmark: one mouse-look update (angles plus basis rebuild)
fn bench_mouse_look(c: &mut Criterion) {
    let mut camera = Camera::default();
    camera.process_mouse_movement(0.0, 0.0, true);

    c.bench_function("mouse_look", |b| {
        b.iter(|| camera.process_mouse_movement(black_box(1.5), black_box(-0.5), true))
    });
}

/// Benchmark: keyboard movement along all six directions
fn bench_keyboard_move(c: &mut Criterion) {
    let mut camera = Camera::default();
    let moves = [
        CameraMovement::Forward,
        CameraMovement::Backward,
        CameraMovement::Left,
        CameraMovement::Right,
        CameraMovement::Up,
        CameraMovement::Down,
    ];

    c.bench_function("keyboard_move", |b| {
        b.iter(|| {
            for direction in moves {
                camera.process_keyboard(direction, black_box(0.016));
            }
        })
    });
}

/// Benchmark: per-frame uniform build for the whole draw list
fn bench_frame_uniforms(c: &mut Criterion) {
    let camera = Camera::default();
    let scene = campfire_scene();
    let dims = WindowDimensions::new(800, 600);

    c.bench_function("frame_uniforms", |b| {
        b.iter(|| {
            let transforms = FrameTransforms::new(&camera, ProjectionMode::Perspective, dims);
            for object in &scene {
                black_box(transforms.object_uniform(object));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_mouse_look,
    bench_keyboard_move,
    bench_frame_uniforms,
);

criterion_main!(benches);
