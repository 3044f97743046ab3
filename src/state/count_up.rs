/// Progress math for an animated integer counter.
///
/// The owning component samples `value_at` with the elapsed time from the
/// animation-frame clock; the task itself holds no clock and no browser
/// state, so the arithmetic can be tested without a DOM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountUpTask {
    end: u32,
    duration_ms: u32,
}

impl CountUpTask {
    pub fn new(end: u32, duration_ms: u32) -> Self {
        Self { end, duration_ms }
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Displayed value after `elapsed_ms` milliseconds.
    ///
    /// Progress is clamped to [0, 1], so a negative or overshooting clock
    /// sample still yields a value in [0, end]. A zero duration snaps
    /// straight to `end`.
    pub fn value_at(&self, elapsed_ms: f64) -> u32 {
        if self.duration_ms == 0 {
            return self.end;
        }
        let progress = (elapsed_ms / self.duration_ms as f64).clamp(0.0, 1.0);
        (progress * self.end as f64).floor() as u32
    }

    /// True once no further frames are needed.
    pub fn is_complete(&self, elapsed_ms: f64) -> bool {
        self.duration_ms == 0 || elapsed_ms >= self.duration_ms as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_and_ends_exactly_at_end() {
        let task = CountUpTask::new(12, 2000);
        assert_eq!(task.value_at(0.0), 0);
        assert_eq!(task.value_at(2000.0), 12);
        assert!(task.is_complete(2000.0));
    }

    #[test]
    fn value_is_monotonically_non_decreasing() {
        let task = CountUpTask::new(20, 2000);
        let mut last = 0;
        // Sample at a 60fps-ish cadence past the end of the animation.
        let mut t = 0.0;
        while t < 2500.0 {
            let v = task.value_at(t);
            assert!(v >= last, "value regressed at t={t}");
            assert!(v <= 20);
            last = v;
            t += 16.7;
        }
        assert_eq!(last, 20);
    }

    #[test]
    fn midpoint_is_roughly_half() {
        let task = CountUpTask::new(12, 2000);
        assert_eq!(task.value_at(1000.0), 6);
    }

    #[test]
    fn zero_duration_snaps_to_end_immediately() {
        let task = CountUpTask::new(10, 0);
        assert_eq!(task.value_at(0.0), 10);
        assert!(task.is_complete(0.0));
    }

    #[test]
    fn zero_end_always_displays_zero() {
        let task = CountUpTask::new(0, 2000);
        assert_eq!(task.value_at(0.0), 0);
        assert_eq!(task.value_at(1000.0), 0);
        assert_eq!(task.value_at(2000.0), 0);
    }

    #[test]
    fn negative_elapsed_clamps_to_zero() {
        let task = CountUpTask::new(12, 2000);
        assert_eq!(task.value_at(-500.0), 0);
        assert!(!task.is_complete(-500.0));
    }

    #[test]
    fn overshoot_clamps_to_end() {
        let task = CountUpTask::new(12, 2000);
        assert_eq!(task.value_at(10_000.0), 12);
    }
}
