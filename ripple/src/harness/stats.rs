//! Running statistics over rendered samples.

use std::time::Duration;

/// Min/max of the sampled values and the mean time spent inside the sampler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleStats {
    frames: u64,
    min: f64,
    max: f64,
    sample_time: Duration,
}

impl Default for SampleStats {
    fn default() -> Self {
        Self {
            frames: 0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            sample_time: Duration::ZERO,
        }
    }
}

impl SampleStats {
    /// Record one sample and how long it took.
    pub fn record(&mut self, n: f64, elapsed: Duration) {
        self.frames += 1;
        self.min = self.min.min(n);
        self.max = self.max.max(n);
        self.sample_time += elapsed;
    }

    /// Number of recorded samples.
    #[must_use]
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// Smallest recorded sample, if any.
    #[must_use]
    pub fn min(&self) -> Option<f64> {
        (self.frames > 0).then_some(self.min)
    }

    /// Largest recorded sample, if any.
    #[must_use]
    pub fn max(&self) -> Option<f64> {
        (self.frames > 0).then_some(self.max)
    }

    /// Mean time per sample call.
    #[must_use]
    pub fn mean_sample_time(&self) -> Duration {
        if self.frames == 0 {
            return Duration::ZERO;
        }
        let nanos = self.sample_time.as_nanos() / u128::from(self.frames);
        Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }

    /// Format the per-frame stats line for the latest sample `n` at `phase`.
    #[must_use]
    pub fn line(&self, n: f64, phase: f64) -> String {
        let min = self.min().unwrap_or(n);
        let max = self.max().unwrap_or(n);
        let avg = self.mean_sample_time().as_secs_f64();
        format!("n:{n:+.3} ({min:+.3}:{max:+.3}) {phase:+.3} {avg:.4}")
    }
}
