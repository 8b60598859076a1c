use std::fmt;
use std::time::Instant;

use log::debug;

use crate::error::Result;
use crate::problem::*;
use crate::solver::Solution;

/// Search optimizations of the `ExactSolver`. None of them affects the resulting makespan, they
/// only affect how much of the search tree needs to be explored.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ExactOptions {
	/// Consider the longest tasks first, which tends to find good schedules (and therefore
	/// prune branches) much earlier.
	pub sort_descending: bool,

	/// When a task could be assigned to 2 machines with the same load, only try the first one.
	/// The subtrees of both choices are mirror images of each other.
	pub skip_symmetric: bool,
}

impl ExactOptions {
	/// Plain exhaustive branch-and-bound, without any optimizations
	pub fn plain() -> Self {
		Self { sort_descending: false, skip_symmetric: false }
	}
}

impl Default for ExactOptions {
	fn default() -> Self {
		Self { sort_descending: true, skip_symmetric: true }
	}
}

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct SearchStatistics {
	pub nodes_explored: u64,
	pub prunings_bound: u64,
	pub symmetric_skips: u64,
	pub solutions_found: u64,
	pub time_total: std::time::Duration,
}

impl SearchStatistics {
	fn on_node_explored(&mut self) {
		self.nodes_explored = self.nodes_explored.saturating_add(1);
	}

	fn on_pruning_bound(&mut self) {
		self.prunings_bound = self.prunings_bound.saturating_add(1);
	}

	fn on_symmetric_skip(&mut self) {
		self.symmetric_skips = self.symmetric_skips.saturating_add(1);
	}

	fn on_solution_found(&mut self) {
		self.solutions_found = self.solutions_found.saturating_add(1);
	}
}

impl fmt::Display for SearchStatistics {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f, "{} nodes, {} bound prunings, {} symmetric skips, {} improving solutions in {:.2?}",
			self.nodes_explored, self.prunings_bound, self.symmetric_skips,
			self.solutions_found, self.time_total
		)
	}
}

struct Search<'a> {
	tasks: &'a [Duration],
	loads: Vec<Load>,
	best_makespan: Load,
	best_loads: Vec<Load>,
	skip_symmetric: bool,
	statistics: &'a mut SearchStatistics,
}

impl Search<'_> {

	/// Tries all assignments of the tasks starting at `task_index`, given the current `loads`
	/// of the machines. `running_max` must be the largest of those loads.
	///
	/// Machine loads only grow while tasks are assigned, so a partial schedule whose
	/// `running_max` is already at least the best makespan can never lead to a better schedule.
	fn branch(&mut self, task_index: usize, running_max: Load) {
		self.statistics.on_node_explored();
		if running_max >= self.best_makespan {
			self.statistics.on_pruning_bound();
			return;
		}

		if task_index == self.tasks.len() {
			debug_assert_eq!(total_duration(self.tasks), self.loads.iter().sum::<Load>());
			self.best_makespan = running_max;
			self.best_loads.copy_from_slice(&self.loads);
			self.statistics.on_solution_found();
			return;
		}

		let duration = self.tasks[task_index] as Load;
		for machine in 0 .. self.loads.len() {
			if self.skip_symmetric && self.loads[.. machine].contains(&self.loads[machine]) {
				self.statistics.on_symmetric_skip();
				continue;
			}

			self.loads[machine] += duration;
			let next_max = Load::max(running_max, self.loads[machine]);
			self.branch(task_index + 1, next_max);
			self.loads[machine] -= duration;
		}
	}
}

/// Finds the optimal makespan by trying every assignment of tasks to machines, while pruning
/// partial assignments that can't beat the best schedule found so far.
///
/// The running time is exponential in the number of tasks, so this should only be used for
/// small problems.
#[derive(Debug, Clone, Default)]
pub struct ExactSolver {
	options: ExactOptions,
	statistics: SearchStatistics,
}

impl ExactSolver {
	pub fn new(options: ExactOptions) -> Self {
		Self { options, statistics: SearchStatistics::default() }
	}

	pub fn solve(&mut self, problem: &Problem) -> Solution {
		let start_time = Instant::now();
		self.statistics = SearchStatistics::default();

		let mut tasks = problem.get_tasks().to_vec();
		if self.options.sort_descending {
			tasks.sort_unstable_by(|a, b| b.cmp(a));
		}

		let num_machines = problem.get_num_machines();
		let mut search = Search {
			tasks: &tasks,
			loads: vec![0; num_machines],
			best_makespan: Load::MAX,
			best_loads: vec![0; num_machines],
			skip_symmetric: self.options.skip_symmetric,
			statistics: &mut self.statistics,
		};
		search.branch(0, 0);
		debug_assert!(search.loads.iter().all(|&load| load == 0));

		let solution = Solution { makespan: search.best_makespan, loads: search.best_loads };
		self.statistics.time_total = start_time.elapsed();
		debug!(
			"Exact makespan of {} tasks on {} machines is {}: {}",
			tasks.len(), num_machines, solution.makespan, self.statistics
		);
		solution
	}

	pub fn get_statistics(&self) -> &SearchStatistics { &self.statistics }
}

/// Computes the optimal makespan of `tasks` on `num_machines` identical machines
pub fn solve_exact(tasks: &[Duration], num_machines: usize) -> Result<Load> {
	let problem = Problem::new(tasks.to_vec(), num_machines)?;
	Ok(ExactSolver::default().solve(&problem).makespan)
}
