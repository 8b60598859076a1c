use crate::error::{Error, Result};
use crate::problem::{Duration, Load, total_duration};

pub mod approximate;
pub mod exact;

pub use approximate::solve_approx;
pub use exact::{ExactOptions, ExactSolver, solve_exact};

/// The outcome of a solve: the makespan, and the machine loads it was read from. The loads are
/// not sorted, and for the approximate solver their order has no meaning.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Solution {
	pub makespan: Load,
	pub loads: Vec<Load>,
}

impl Solution {
	fn from_loads(loads: Vec<Load>) -> Self {
		let makespan = loads.iter().copied().max().unwrap_or(0);
		Self { makespan, loads }
	}
}

/// Checks that the machine loads of `solution` add up to the total duration of `tasks`.
pub fn check_conservation(tasks: &[Duration], solution: &Solution) -> Result<()> {
	let expected = total_duration(tasks);
	let actual: Load = solution.loads.iter().sum();
	if expected == actual {
		Ok(())
	} else {
		Err(Error::ConservationViolated { expected, actual })
	}
}


#[cfg(test)]
mod properties {
	use proptest::prelude::*;

	use super::*;
	use crate::problem::Problem;

	fn small_problem() -> impl Strategy<Value = Problem> {
		(prop::collection::vec(0 .. 60u32, 0 .. 9), 1 .. 5usize)
			.prop_map(|(tasks, num_machines)| Problem::new(tasks, num_machines).unwrap())
	}

	proptest! {
		#[test]
		fn test_both_solvers_conserve_work(problem in small_problem()) {
			let approximate = approximate::solve(&problem);
			let exact = ExactSolver::default().solve(&problem);
			prop_assert!(check_conservation(problem.get_tasks(), &approximate).is_ok());
			prop_assert!(check_conservation(problem.get_tasks(), &exact).is_ok());
			prop_assert_eq!(approximate.loads.len(), problem.get_num_machines());
			prop_assert_eq!(exact.loads.len(), problem.get_num_machines());
		}

		#[test]
		fn test_approximation_is_never_better(problem in small_problem()) {
			let tasks = problem.get_tasks();
			let num_machines = problem.get_num_machines();
			prop_assert!(solve_approx(tasks, num_machines).unwrap() >= solve_exact(tasks, num_machines).unwrap());
		}

		#[test]
		fn test_exact_respects_lower_bounds(problem in small_problem()) {
			let exact = solve_exact(problem.get_tasks(), problem.get_num_machines()).unwrap();
			prop_assert!(exact >= problem.lower_bound());
			prop_assert!(exact >= problem.longest_task() as Load);
		}

		#[test]
		fn test_lpt_guarantee(problem in small_problem()) {
			let tasks = problem.get_tasks();
			let num_machines = problem.get_num_machines();
			let approximate = solve_approx(tasks, num_machines).unwrap() as f64;
			let exact = solve_exact(tasks, num_machines).unwrap() as f64;
			let guarantee = 4.0 / 3.0 - 1.0 / (3.0 * num_machines as f64);
			prop_assert!(approximate <= guarantee * exact + 1e-9);
		}

		#[test]
		fn test_repeated_solves_agree(problem in small_problem()) {
			let tasks = problem.get_tasks();
			let num_machines = problem.get_num_machines();
			prop_assert_eq!(solve_approx(tasks, num_machines).unwrap(), solve_approx(tasks, num_machines).unwrap());
			prop_assert_eq!(solve_exact(tasks, num_machines).unwrap(), solve_exact(tasks, num_machines).unwrap());
		}

		#[test]
		fn test_search_options_agree(problem in small_problem()) {
			let optimized = ExactSolver::default().solve(&problem).makespan;
			let plain = ExactSolver::new(ExactOptions::plain()).solve(&problem).makespan;
			let sorted = ExactSolver::new(ExactOptions { sort_descending: true, skip_symmetric: false })
				.solve(&problem).makespan;
			prop_assert_eq!(optimized, plain);
			prop_assert_eq!(optimized, sorted);
		}

		#[test]
		fn test_one_machine_gets_everything(tasks in prop::collection::vec(0 .. 1000u32, 0 .. 12)) {
			let total = total_duration(&tasks);
			prop_assert_eq!(solve_approx(&tasks, 1).unwrap(), total);
			prop_assert_eq!(solve_exact(&tasks, 1).unwrap(), total);
		}

		#[test]
		fn test_enough_machines_for_every_task(
			tasks in prop::collection::vec(0 .. 1000u32, 0 .. 7), extra_machines in 0 .. 3usize
		) {
			let num_machines = tasks.len() + extra_machines + 1;
			let longest = tasks.iter().copied().max().unwrap_or(0) as Load;
			prop_assert_eq!(solve_approx(&tasks, num_machines).unwrap(), longest);
			prop_assert_eq!(solve_exact(&tasks, num_machines).unwrap(), longest);
		}
	}
}
