//=========================================================================
// Frame Clock
//=========================================================================
//
// Caps the loop at a target frame rate and measures frame timing.
//
// Each `tick()` sleeps the loop thread until at least one frame period
// has passed since the previous tick, then reports the elapsed time
// (`dt`) and a smoothed frames-per-second reading.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::VecDeque;
use std::num::NonZeroU32;
use std::thread;
use std::time::{Duration, Instant};

//=== Constants ===========================================================

/// Default frame-rate cap.
pub const DEFAULT_FPS: NonZeroU32 = match NonZeroU32::new(80) {
    Some(fps) => fps,
    None => panic!("default FPS is zero"),
};

/// Upper bound on a single `dt`, so one stall (debugger, window drag)
/// does not hand the state a huge step.
pub const MAX_FRAME_DELTA: Duration = Duration::from_millis(250);

/// Number of recent frames averaged for `actual_fps`.
const FPS_SAMPLES: usize = 10;

//=== FrameTiming =========================================================

/// Timing of one frame as reported by a [`FrameClock`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTiming {
    /// Seconds since the previous tick. Never negative.
    pub dt: f32,

    /// Frames per second averaged over recent frames; 0 until measured.
    pub actual_fps: f32,
}

//=== FrameClock ==========================================================

/// Source of per-frame timing for the loop.
pub trait FrameClock {
    /// Advances to the next frame, blocking if needed to hold the cap.
    fn tick(&mut self) -> FrameTiming;
}

//=== Clock ===============================================================

/// Wall-clock [`FrameClock`] with a frame-rate cap.
///
/// The first tick only records a baseline and returns `dt = 0`, however
/// long it has been since the clock was created.
pub struct Clock {
    frame_period: Duration,
    last_tick: Option<Instant>,
    samples: VecDeque<Duration>,
}

impl Clock {
    /// Creates a clock capped at `fps` frames per second.
    pub fn new(fps: NonZeroU32) -> Self {
        Self {
            frame_period: Duration::from_secs_f64(1.0 / f64::from(fps.get())),
            last_tick: None,
            samples: VecDeque::with_capacity(FPS_SAMPLES),
        }
    }

    pub fn frame_period(&self) -> Duration {
        self.frame_period
    }

    /// Average frame rate over the recorded samples.
    pub fn actual_fps(&self) -> f32 {
        let total: Duration = self.samples.iter().sum();
        if total.is_zero() {
            return 0.0;
        }
        self.samples.len() as f32 / total.as_secs_f32()
    }

    fn record(&mut self, elapsed: Duration) {
        if self.samples.len() == FPS_SAMPLES {
            self.samples.pop_front();
        }
        self.samples.push_back(elapsed);
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(DEFAULT_FPS)
    }
}

impl FrameClock for Clock {
    fn tick(&mut self) -> FrameTiming {
        let Some(last) = self.last_tick else {
            self.last_tick = Some(Instant::now());
            return FrameTiming {
                dt: 0.0,
                actual_fps: 0.0,
            };
        };

        let mut now = Instant::now();
        let elapsed = now.saturating_duration_since(last);
        if elapsed < self.frame_period {
            thread::sleep(self.frame_period - elapsed);
            now = Instant::now();
        }

        let elapsed = now.saturating_duration_since(last);
        self.last_tick = Some(now);
        self.record(elapsed);

        FrameTiming {
            dt: elapsed.min(MAX_FRAME_DELTA).as_secs_f32(),
            actual_fps: self.actual_fps(),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn capped(fps: u32) -> Clock {
        Clock::new(NonZeroU32::new(fps).unwrap())
    }

    #[test]
    fn default_targets_eighty_fps() {
        let clock = Clock::default();
        assert_eq!(clock.frame_period(), Duration::from_secs_f64(1.0 / 80.0));
    }

    #[test]
    fn frame_period_follows_fps() {
        assert_eq!(capped(100).frame_period(), Duration::from_secs_f64(1.0 / 100.0));
        assert_eq!(Clock::new(DEFAULT_FPS).frame_period(), Clock::default().frame_period());
    }

    #[test]
    fn first_tick_is_bounded_after_long_idle() {
        let mut clock = capped(1000);
        thread::sleep(Duration::from_millis(20));

        let timing = clock.tick();

        assert_eq!(timing.dt, 0.0);
        assert_eq!(timing.actual_fps, 0.0);
    }

    #[test]
    fn tick_waits_for_frame_period() {
        let mut clock = capped(100);
        clock.tick();

        let start = Instant::now();
        let timing = clock.tick();

        assert!(start.elapsed() >= Duration::from_millis(9));
        assert!(timing.dt >= 0.009, "dt was {}", timing.dt);
    }

    #[test]
    fn dt_never_negative_and_clamped() {
        let mut clock = capped(1000);
        clock.tick();
        thread::sleep(MAX_FRAME_DELTA + Duration::from_millis(50));

        let timing = clock.tick();
        assert!(timing.dt >= 0.0);
        assert!(timing.dt <= MAX_FRAME_DELTA.as_secs_f32());

        for _ in 0..5 {
            assert!(clock.tick().dt >= 0.0);
        }
    }

    #[test]
    fn actual_fps_averages_recent_frames() {
        let mut clock = capped(60);
        for _ in 0..FPS_SAMPLES + 5 {
            clock.record(Duration::from_millis(20));
        }

        assert_eq!(clock.samples.len(), FPS_SAMPLES);
        assert!((clock.actual_fps() - 50.0).abs() < 0.01);
    }

    #[test]
    fn actual_fps_reported_after_ticks() {
        let mut clock = capped(200);
        clock.tick();
        clock.tick();
        let timing = clock.tick();

        assert!(timing.actual_fps > 0.0);
        assert!(timing.actual_fps <= 200.5, "fps was {}", timing.actual_fps);
    }
}
