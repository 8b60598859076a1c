use clap::{Parser, ValueEnum};

use crate::benchmark::BenchmarkConfig;
use crate::error::Result;
use crate::generator::*;
use crate::problem::Duration;
use crate::solver::ExactOptions;

const APP_NAME: &str = env!("CARGO_PKG_NAME");
const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum DistributionKind {
	Uniform,
	Normal,
}

#[derive(Parser, Debug)]
#[command(name = APP_NAME)]
#[command(version = VERSION)]
#[command(author = AUTHOR)]
#[command(about = "Compares the LPT makespan heuristic with the optimal makespan", long_about = None)]
pub struct Args {
	/// The number of random problems to solve
	#[arg(long, default_value_t = 200)]
	pub num_samples: usize,

	/// The number of identical machines
	#[arg(short = 'm', long, default_value_t = 6)]
	pub num_machines: usize,

	/// The number of tasks in each random problem
	#[arg(short = 't', long, default_value_t = 16)]
	pub num_tasks: usize,

	/// The seed of the random number generator
	#[arg(short, long, default_value_t = 0)]
	pub seed: u64,

	/// The distribution of the task durations
	#[arg(short, long, value_enum, default_value_t = DistributionKind::Uniform)]
	pub distribution: DistributionKind,

	/// The minimum task duration of the uniform distribution
	#[arg(long, default_value_t = 50)]
	pub min: Duration,

	/// The maximum task duration of the uniform distribution
	#[arg(long, default_value_t = 150)]
	pub max: Duration,

	/// The mean task duration of the normal distribution
	#[arg(long, default_value_t = 200.0)]
	pub mean: f64,

	/// The standard deviation of the normal distribution
	#[arg(long, default_value_t = 50.0)]
	pub std_dev: f64,

	/// Solve the tasks in this file instead of random problems
	#[arg(short = 'f', long)]
	pub tasks_file: Option<String>,

	/// Print summary statistics after the measures
	#[arg(long)]
	pub summary: bool,

	/// Disable the search optimizations of the exact solver
	#[arg(long)]
	pub plain_search: bool,
}

impl Args {
	pub fn exact_options(&self) -> ExactOptions {
		if self.plain_search { ExactOptions::plain() } else { ExactOptions::default() }
	}

	pub fn benchmark_config(&self) -> BenchmarkConfig {
		BenchmarkConfig {
			num_samples: self.num_samples,
			num_machines: self.num_machines,
			num_tasks: self.num_tasks,
			exact_options: self.exact_options(),
		}
	}

	pub fn task_distribution(&self) -> Result<TaskDistribution> {
		Ok(match self.distribution {
			DistributionKind::Uniform => TaskDistribution::Uniform(UniformDurations::new(self.min, self.max)?),
			DistributionKind::Normal => TaskDistribution::Normal(NormalDurations::new(self.mean, self.std_dev)?),
		})
	}
}
