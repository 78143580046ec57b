use std::time::Instant;

/// Seconds between FPS recomputations
pub const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy)]
pub struct FrameInfo {
    pub number: u64,
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, delta: f32) -> Self {
        Self { number, delta }
    }
}

/// Infinite iterator that yields frame information
pub struct FrameIterator {
    frame_number: u64,
    last_frame_time: Instant,
}

impl FrameIterator {
    pub fn new() -> Self {
        Self {
            frame_number: 0,
            last_frame_time: Instant::now(),
        }
    }

    /// Measure the next delta from now, e.g. after blocking setup work
    pub fn restart(&mut self) {
        self.last_frame_time = Instant::now();
    }
}

impl Default for FrameIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FrameIterator {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_time).as_secs_f32();
        let info = FrameInfo::new(self.frame_number, delta);

        self.frame_number += 1;
        self.last_frame_time = now;

        Some(info)
    }
}

/// Averages frame count over `FPS_UPDATE_INTERVAL` windows
#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    frame_count: u32,
    elapsed: f32,
    fps: f32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Count one frame; returns the new value when it was recomputed
    pub fn tick(&mut self, delta: f32) -> Option<f32> {
        self.frame_count += 1;
        self.elapsed += delta;

        if self.elapsed < FPS_UPDATE_INTERVAL {
            return None;
        }

        self.fps = self.frame_count as f32 / self.elapsed;
        log::debug!("FPS: {:.1}", self.fps);
        self.frame_count = 0;
        self.elapsed = 0.0;
        Some(self.fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_numbers_increase() {
        let mut frames = FrameIterator::new();
        let first = frames.next().unwrap();
        let second = frames.next().unwrap();
        assert_eq!(first.number, 0);
        assert_eq!(second.number, 1);
        assert!(second.delta >= 0.0);
    }

    #[test]
    fn restart_excludes_setup_time() {
        let mut frames = FrameIterator::new();
        std::thread::sleep(std::time::Duration::from_millis(200));
        frames.restart();

        let first = frames.next().unwrap();
        assert_eq!(first.number, 0);
        assert!(first.delta < 0.2, "delta {}", first.delta);
    }

    #[test]
    fn fps_updates_once_per_interval() {
        let mut counter = FpsCounter::new();
        for _ in 0..59 {
            assert_eq!(counter.tick(1.0 / 60.0), None);
        }
        let fps = counter.tick(1.0 / 60.0 + 1e-4).unwrap();
        assert!((fps - 60.0).abs() < 0.1);
        assert_eq!(counter.fps(), fps);
    }

    #[test]
    fn fps_starts_at_zero() {
        assert_eq!(FpsCounter::new().fps(), 0.0);
    }
}
