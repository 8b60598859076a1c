use log::{debug, info};

use crate::error::{Error, Result};
use crate::generator::{DurationDistribution, TaskGenerator};
use crate::problem::*;
use crate::solver::*;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct BenchmarkConfig {
	pub num_samples: usize,
	pub num_machines: usize,
	pub num_tasks: usize,
	pub exact_options: ExactOptions,
}

impl Default for BenchmarkConfig {
	fn default() -> Self {
		Self { num_samples: 200, num_machines: 6, num_tasks: 16, exact_options: ExactOptions::default() }
	}
}

/// The result of running both solvers on the same problem
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Comparison {
	pub approximate: Load,
	pub exact: Load,
	pub ratio: f64,
	pub nodes_explored: u64,
}

/// Divides the approximate makespan by the exact makespan. When the exact makespan is 0, all
/// tasks are empty, and the approximation is perfect.
pub fn approximation_ratio(approximate: Load, exact: Load) -> f64 {
	if exact == 0 {
		1.0
	} else {
		approximate as f64 / exact as f64
	}
}

fn check_dominance(approximate: Load, exact: Load) -> Result<()> {
	if approximate < exact {
		Err(Error::DominanceViolated { approximate, exact })
	} else {
		Ok(())
	}
}

/// Solves `problem` approximately and exactly, and verifies that both solutions are consistent.
pub fn compare(problem: &Problem, exact_solver: &mut ExactSolver) -> Result<Comparison> {
	let approximate_solution = approximate::solve(problem);
	check_conservation(problem.get_tasks(), &approximate_solution)?;

	let exact_solution = exact_solver.solve(problem);
	check_conservation(problem.get_tasks(), &exact_solution)?;

	let approximate = approximate_solution.makespan;
	let exact = exact_solution.makespan;
	check_dominance(approximate, exact)?;
	debug_assert!(exact >= problem.lower_bound());

	Ok(Comparison {
		approximate, exact,
		ratio: approximation_ratio(approximate, exact),
		nodes_explored: exact_solver.get_statistics().nodes_explored,
	})
}

#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
	/// The approximation ratio of each sample, in the order in which the samples were generated
	pub ratios: Vec<f64>,

	/// The number of samples for which the approximate makespan was optimal
	pub num_optimal: usize,

	/// The total number of search nodes explored by the exact solver
	pub nodes_explored: u64,
}

impl BenchmarkResult {
	pub fn min_ratio(&self) -> Option<f64> {
		self.ratios.iter().copied().reduce(f64::min)
	}

	pub fn max_ratio(&self) -> Option<f64> {
		self.ratios.iter().copied().reduce(f64::max)
	}

	pub fn mean_ratio(&self) -> Option<f64> {
		if self.ratios.is_empty() {
			None
		} else {
			Some(self.ratios.iter().sum::<f64>() / self.ratios.len() as f64)
		}
	}
}

/// Measures how close the Longest-Processing-Time-first heuristic gets to the optimal makespan,
/// on randomly generated problems.
pub struct Benchmark<D> {
	config: BenchmarkConfig,
	generator: TaskGenerator<D>,
}

impl<D: DurationDistribution> Benchmark<D> {
	pub fn new(config: BenchmarkConfig, generator: TaskGenerator<D>) -> Self {
		Self { config, generator }
	}

	pub fn run(&mut self) -> Result<BenchmarkResult> {
		let config = self.config;
		info!(
			"Running {} samples of {} tasks on {} machines",
			config.num_samples, config.num_tasks, config.num_machines
		);

		let mut exact_solver = ExactSolver::new(config.exact_options);
		let mut result = BenchmarkResult {
			ratios: Vec::with_capacity(config.num_samples),
			num_optimal: 0,
			nodes_explored: 0,
		};

		for sample in 0 .. config.num_samples {
			let problem = Problem::new(self.generator.generate(config.num_tasks), config.num_machines)?;
			let comparison = compare(&problem, &mut exact_solver)?;
			debug!(
				"Sample {}: approximate {} exact {} ratio {}",
				sample, comparison.approximate, comparison.exact, comparison.ratio
			);

			if comparison.approximate == comparison.exact {
				result.num_optimal += 1;
			}
			result.nodes_explored = result.nodes_explored.saturating_add(comparison.nodes_explored);
			result.ratios.push(comparison.ratio);
		}

		info!(
			"Finished benchmark: approximation was optimal in {}/{} samples",
			result.num_optimal, config.num_samples
		);
		Ok(result)
	}
}
