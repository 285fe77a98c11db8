//! Simulation clock
//!
//! Fixed timestep accumulator: callers feed it elapsed time and it tells them
//! how many physics steps to run. Time is supplied by the caller, so the clock
//! itself never reads the system time.

use std::time::Duration;

/// Simulation clock state
#[derive(Debug, Clone)]
pub struct SimulationClock {
    /// Length of one physics step
    timestep: Duration,

    /// Time not yet consumed by a step
    accumulator: Duration,

    /// Cap on steps per tick to prevent a spiral of death
    max_steps_per_tick: u32,

    /// Total steps handed out
    step_count: u64,
}

impl SimulationClock {
    /// Create a clock for the given timestep in seconds.
    ///
    /// `timestep` must be finite and positive; `Scene::new` checks this.
    pub fn new(timestep: f32, max_steps_per_tick: u32) -> Self {
        Self {
            timestep: Duration::from_secs_f32(timestep),
            accumulator: Duration::ZERO,
            max_steps_per_tick,
            step_count: 0,
        }
    }

    /// Feed elapsed time, returns the number of fixed steps to run
    pub fn tick(&mut self, elapsed: Duration) -> u32 {
        if self.timestep.is_zero() {
            return 0;
        }

        self.accumulator += elapsed;

        let mut steps = 0;
        while self.accumulator >= self.timestep && steps < self.max_steps_per_tick {
            self.accumulator -= self.timestep;
            steps += 1;
        }

        // Drop time we could not catch up on rather than carrying it forward
        if steps == self.max_steps_per_tick && self.accumulator >= self.timestep {
            self.accumulator = Duration::ZERO;
        }

        self.step_count += steps as u64;
        steps
    }

    /// Length of one step in seconds
    pub fn timestep_secs(&self) -> f32 {
        self.timestep.as_secs_f32()
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: Duration = Duration::from_millis(10);

    #[test]
    fn test_clock_creation() {
        let clock = SimulationClock::new(0.01, 5);
        assert_eq!(clock.step_count(), 0);
        assert!((clock.timestep_secs() - 0.01).abs() < 0.0001);
    }

    #[test]
    fn test_accumulates_partial_steps() {
        let mut clock = SimulationClock::new(0.01, 5);
        assert_eq!(clock.tick(Duration::from_millis(6)), 0);
        assert_eq!(clock.tick(Duration::from_millis(6)), 1);
        assert_eq!(clock.tick(STEP * 2), 2);
        assert_eq!(clock.step_count(), 3);
    }

    #[test]
    fn test_max_steps_limit() {
        let mut clock = SimulationClock::new(0.01, 5);
        assert_eq!(clock.tick(Duration::from_millis(300)), 5);
        // Backlog is dropped, not replayed
        assert_eq!(clock.tick(Duration::ZERO), 0);
    }
}
