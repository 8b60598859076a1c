use rand::prelude::*;
use rand::distr::Uniform;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::error::{Error, Result};
use crate::problem::Duration;

pub trait DurationDistribution {
	fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration;
}

/// Picks each duration uniformly from `min ..= max`
#[derive(Debug, Copy, Clone)]
pub struct UniformDurations {
	range: Uniform<Duration>,
}

impl UniformDurations {
	pub fn new(min: Duration, max: Duration) -> Result<Self> {
		let range = Uniform::new_inclusive(min, max).map_err(|_| Error::InvalidDistribution(
			format!("minimum duration {} is larger than maximum duration {}", min, max)
		))?;
		Ok(Self { range })
	}
}

impl DurationDistribution for UniformDurations {
	fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
		self.range.sample(rng)
	}
}

/// Draws from a normal distribution, rounded to the nearest integer. Negative samples are
/// mirrored, so durations are never negative.
#[derive(Debug, Copy, Clone)]
pub struct NormalDurations {
	normal: Normal<f64>,
}

impl NormalDurations {
	pub fn new(mean: f64, std_dev: f64) -> Result<Self> {
		if !mean.is_finite() {
			return Err(Error::InvalidDistribution(format!("mean {} is not finite", mean)));
		}
		if !std_dev.is_finite() || std_dev < 0.0 {
			return Err(Error::InvalidDistribution(
				format!("standard deviation {} must be finite and non-negative", std_dev)
			));
		}
		let normal = Normal::new(mean, std_dev).map_err(|error| Error::InvalidDistribution(
			format!("{}", error)
		))?;
		Ok(Self { normal })
	}
}

impl DurationDistribution for NormalDurations {
	fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
		let value = self.normal.sample(rng).round().abs();
		// `as` saturates at Duration::MAX
		value as Duration
	}
}

/// Either of the supported distributions, so the command line can pick one at runtime
#[derive(Debug, Copy, Clone)]
pub enum TaskDistribution {
	Uniform(UniformDurations),
	Normal(NormalDurations),
}

impl DurationDistribution for TaskDistribution {
	fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
		match self {
			TaskDistribution::Uniform(uniform) => uniform.sample(rng),
			TaskDistribution::Normal(normal) => normal.sample(rng),
		}
	}
}

/// Generates random task sequences. The random number generator is owned by the generator and
/// seeded explicitly, so the same seed always yields the same sequences.
pub struct TaskGenerator<D> {
	distribution: D,
	rng: StdRng,
}

impl<D: DurationDistribution> TaskGenerator<D> {
	pub fn new(distribution: D, seed: u64) -> Self {
		Self { distribution, rng: StdRng::seed_from_u64(seed) }
	}

	pub fn generate(&mut self, num_tasks: usize) -> Vec<Duration> {
		(0 .. num_tasks).map(|_| self.distribution.sample(&mut self.rng)).collect()
	}
}
