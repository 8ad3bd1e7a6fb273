// timer.rs - Frame clock and the fixed-rate evolution timer

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Source of frame-to-frame elapsed time.
pub trait Clock {
    /// Time since the previous call (or since creation, on the first call).
    fn tick(&mut self) -> Duration;
}

/// Wall-clock time.
#[derive(Debug)]
pub struct SystemClock {
    last_tick: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { last_tick: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick);
        self.last_tick = now;
        elapsed
    }
}

/// Replays scripted deltas, then reports zero elapsed time.
#[derive(Debug, Default)]
pub struct ManualClock {
    deltas: VecDeque<Duration>,
}

impl ManualClock {
    pub fn new(deltas: impl IntoIterator<Item = Duration>) -> Self {
        Self { deltas: deltas.into_iter().collect() }
    }

    pub fn push(&mut self, delta: Duration) {
        self.deltas.push_back(delta);
    }
}

impl Clock for ManualClock {
    fn tick(&mut self) -> Duration {
        self.deltas.pop_front().unwrap_or(Duration::ZERO)
    }
}

/// Decides when the next generation is due.
///
/// Elapsed time accumulates until it exceeds the interval; then one step
/// fires and the accumulator goes back to zero. Time past the interval is
/// dropped, so under a slow frame rate the evolution rate is an upper bound
/// rather than a metronome.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionTimer {
    interval: Duration,
    accumulated: Duration,
}

impl EvolutionTimer {
    pub fn new(interval: Duration) -> Self {
        Self { interval, accumulated: Duration::ZERO }
    }

    /// Adds `elapsed`; returns `true` when a step is due.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        self.accumulated = self.accumulated.saturating_add(elapsed);
        if self.accumulated > self.interval {
            self.accumulated = Duration::ZERO;
            true
        } else {
            false
        }
    }

    pub fn accumulated(&self) -> Duration {
        self.accumulated
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

/// Caps how often frames run.
///
/// Elapsed time is banked until a full frame interval has passed; the whole
/// banked amount is then handed out, so nothing is lost for the evolution
/// timer.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameLimiter {
    interval: Duration,
    pending: Duration,
}

impl FrameLimiter {
    pub fn new(interval: Duration) -> Self {
        Self { interval, pending: Duration::ZERO }
    }

    /// Adds `elapsed`; returns the time banked since the last frame once a
    /// frame is due.
    pub fn advance(&mut self, elapsed: Duration) -> Option<Duration> {
        self.pending = self.pending.saturating_add(elapsed);
        (self.pending >= self.interval).then(|| std::mem::take(&mut self.pending))
    }

    /// Time left until the next frame is due.
    pub fn remaining(&self) -> Duration {
        self.interval.saturating_sub(self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn fires_once_interval_is_exceeded() {
        let mut timer = EvolutionTimer::new(ms(125));
        assert!(!timer.advance(ms(60)));
        assert!(!timer.advance(ms(60)));
        assert!(timer.advance(ms(10)));
        assert_eq!(timer.accumulated(), Duration::ZERO);
    }

    #[test]
    fn exactly_the_interval_is_not_enough() {
        let mut timer = EvolutionTimer::new(ms(125));
        assert!(!timer.advance(ms(125)));
        assert!(timer.advance(Duration::from_nanos(1)));
    }

    #[test]
    fn surplus_time_is_discarded() {
        // 0.3s per frame at 8 evolutions per second: one step per frame,
        // the remaining 0.175s is thrown away each time
        let mut timer = EvolutionTimer::new(ms(125));
        let steps = (0..10).filter(|_| timer.advance(ms(300))).count();
        assert_eq!(steps, 10);
        assert_eq!(timer.accumulated(), Duration::ZERO);
    }

    #[test]
    fn steady_frames_give_the_expected_step_count() {
        // 50ms frames: fires on the 3rd frame (150ms > 125ms), then resets
        let mut timer = EvolutionTimer::new(ms(125));
        let fired: Vec<bool> = (0..9).map(|_| timer.advance(ms(50))).collect();
        assert_eq!(
            fired,
            [false, false, true, false, false, true, false, false, true]
        );
    }

    #[test]
    fn frame_limiter_holds_frames_until_the_interval() {
        // 60 fps is ~16.7ms; 5ms repaints only run a frame every fourth call
        let mut limiter = FrameLimiter::new(Duration::from_secs_f64(1.0 / 60.0));
        assert_eq!(limiter.advance(ms(5)), None);
        assert_eq!(limiter.advance(ms(5)), None);
        assert_eq!(limiter.advance(ms(5)), None);
        assert!(limiter.remaining() > Duration::ZERO);
        assert_eq!(limiter.advance(ms(5)), Some(ms(20)));
        assert_eq!(limiter.remaining(), Duration::from_secs_f64(1.0 / 60.0));
    }

    #[test]
    fn frame_limiter_passes_slow_frames_straight_through() {
        let mut limiter = FrameLimiter::new(ms(10));
        assert_eq!(limiter.advance(ms(30)), Some(ms(30)));
        assert_eq!(limiter.advance(ms(10)), Some(ms(10)));
    }

    #[test]
    fn manual_clock_replays_then_idles() {
        let mut clock = ManualClock::new([ms(5), ms(7)]);
        clock.push(ms(9));
        assert_eq!(clock.tick(), ms(5));
        assert_eq!(clock.tick(), ms(7));
        assert_eq!(clock.tick(), ms(9));
        assert_eq!(clock.tick(), Duration::ZERO);
    }

    #[test]
    fn system_clock_measures_since_last_tick() {
        let mut clock = SystemClock::new();
        clock.tick();
        std::thread::sleep(ms(2));
        assert!(clock.tick() >= ms(2));
    }
}
