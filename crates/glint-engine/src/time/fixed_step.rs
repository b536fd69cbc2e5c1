use std::time::Duration;

/// Fixed-timestep accumulator.
///
/// Feed it variable frame deltas; it reports how many whole simulation ticks
/// are due. Leftover time carries over to the next frame.
#[derive(Debug, Clone)]
pub struct FixedStep {
    tick: f32,
    accumulator: f32,
    max_ticks_per_frame: u32,
}

impl FixedStep {
    /// Shortest accepted tick; shorter ticks are raised to this.
    pub const MIN_TICK: Duration = Duration::from_micros(100);

    pub fn new(tick: Duration) -> Self {
        Self {
            tick: tick.max(Self::MIN_TICK).as_secs_f32(),
            accumulator: 0.0,
            max_ticks_per_frame: 8,
        }
    }

    /// Caps how many ticks one frame may run; excess time is dropped.
    pub fn with_max_ticks_per_frame(mut self, max: u32) -> Self {
        self.max_ticks_per_frame = max.max(1);
        self
    }

    /// Tick length in seconds.
    pub fn tick_secs(&self) -> f32 {
        self.tick
    }

    /// Adds `dt` seconds and returns the number of ticks to run now.
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.max(0.0);

        let mut due = 0;
        while self.accumulator >= self.tick && due < self.max_ticks_per_frame {
            self.accumulator -= self.tick;
            due += 1;
        }

        if due == self.max_ticks_per_frame && self.accumulator >= self.tick {
            // Spiral of death: drop the backlog instead of catching up.
            self.accumulator %= self.tick;
        }

        due
    }

    /// Fraction of the next tick already accumulated, in `[0, 1)`.
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_partial_frames() {
        let mut step = FixedStep::new(Duration::from_millis(100));
        assert_eq!(step.advance(0.06), 0);
        assert_eq!(step.advance(0.06), 1);
        assert!((step.alpha() - 0.2).abs() < 1e-4);
    }

    #[test]
    fn long_frame_runs_several_ticks() {
        let mut step = FixedStep::new(Duration::from_millis(100));
        assert_eq!(step.advance(0.35), 3);
    }

    #[test]
    fn backlog_is_capped() {
        let mut step = FixedStep::new(Duration::from_millis(10)).with_max_ticks_per_frame(4);
        assert_eq!(step.advance(1.0), 4);
        assert!(step.alpha() < 1.0);
        assert_eq!(step.advance(0.0), 0);
    }

    #[test]
    fn zero_tick_is_raised_to_minimum() {
        let mut step = FixedStep::new(Duration::ZERO);
        assert_eq!(step.tick_secs(), FixedStep::MIN_TICK.as_secs_f32());

        assert_eq!(step.advance(0.016), 8);
        assert!(step.alpha().is_finite());
        // The clock keeps producing ticks on later frames.
        assert!(step.advance(0.001) > 0);
        assert!(step.alpha().is_finite());
    }

    #[test]
    fn negative_dt_is_ignored() {
        let mut step = FixedStep::new(Duration::from_millis(100));
        assert_eq!(step.advance(-1.0), 0);
        assert_eq!(step.advance(0.1), 1);
    }
}
