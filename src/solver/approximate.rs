use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::Result;
use crate::problem::*;
use crate::solver::Solution;

/// The loads of all machines, ordered such that the least busy machine can be taken in
/// `O(log num_machines)` time. Machines are interchangeable, so only their loads are tracked.
struct MachineLoads {
	heap: BinaryHeap<Reverse<Load>>,
}

impl MachineLoads {
	fn new(num_machines: usize) -> Self {
		Self { heap: std::iter::repeat_n(Reverse(0), num_machines).collect() }
	}

	/// Adds `duration` to the least busy machine
	fn assign(&mut self, duration: Duration) {
		let mut least_busy = self.heap.peek_mut().expect("There must be at least 1 machine");
		least_busy.0 += duration as Load;
	}

	fn into_loads(self) -> Vec<Load> {
		self.heap.into_iter().map(|Reverse(load)| load).collect()
	}
}

/// Schedules the tasks using the Longest-Processing-Time-first heuristic: the tasks are
/// considered from long to short, and each task is given to the machine that is least busy at
/// that point.
///
/// The resulting makespan is at most `4/3 - 1/(3 * num_machines)` times the optimal makespan,
/// but it is usually much closer.
pub fn solve(problem: &Problem) -> Solution {
	let mut tasks = problem.get_tasks().to_vec();
	tasks.sort_unstable_by(|a, b| b.cmp(a));

	let mut machines = MachineLoads::new(problem.get_num_machines());
	for task in tasks {
		machines.assign(task);
	}

	let solution = Solution::from_loads(machines.into_loads());
	debug_assert_eq!(problem.total_duration(), solution.loads.iter().sum::<Load>());
	solution
}

/// Computes the makespan of the Longest-Processing-Time-first schedule of `tasks`
pub fn solve_approx(tasks: &[Duration], num_machines: usize) -> Result<Load> {
	let problem = Problem::new(tasks.to_vec(), num_machines)?;
	Ok(solve(&problem).makespan)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::Error;
	use crate::solver::check_conservation;

	#[test]
	fn test_lpt_is_not_optimal() {
		assert_eq!(25, solve_approx(&[9, 9, 8, 8, 8], 2).unwrap());
	}

	#[test]
	fn test_input_order_does_not_matter() {
		assert_eq!(25, solve_approx(&[8, 9, 8, 9, 8], 2).unwrap());
		assert_eq!(25, solve_approx(&[8, 8, 8, 9, 9], 2).unwrap());
	}

	#[test]
	fn test_no_machines() {
		assert!(matches!(solve_approx(&[1, 2], 0), Err(Error::NoMachines)));
	}

	#[test]
	fn test_no_tasks() {
		assert_eq!(0, solve_approx(&[], 1).unwrap());
		assert_eq!(0, solve_approx(&[], 5).unwrap());
	}

	#[test]
	fn test_one_machine() {
		assert_eq!(42, solve_approx(&[9, 9, 8, 8, 8], 1).unwrap());
	}

	#[test]
	fn test_more_machines_than_tasks() {
		assert_eq!(9, solve_approx(&[9, 3, 8], 3).unwrap());
		assert_eq!(9, solve_approx(&[9, 3, 8], 10).unwrap());
	}

	#[test]
	fn test_loads() {
		let problem = Problem::new(vec![9, 9, 8, 8, 8], 2).unwrap();
		let solution = solve(&problem);
		let mut loads = solution.loads.clone();
		loads.sort();
		assert_eq!(loads, vec![17, 25]);
		assert_eq!(solution.makespan, 25);
		assert!(check_conservation(problem.get_tasks(), &solution).is_ok());
	}

	#[test]
	fn test_empty_machines_keep_zero_load() {
		let problem = Problem::new(vec![4], 3).unwrap();
		let mut loads = solve(&problem).loads;
		loads.sort();
		assert_eq!(loads, vec![0, 0, 4]);
	}

	#[test]
	fn test_large_durations() {
		let tasks = vec![Duration::MAX; 3];
		assert_eq!(3 * Duration::MAX as Load, solve_approx(&tasks, 1).unwrap());
		assert_eq!(2 * Duration::MAX as Load, solve_approx(&tasks, 2).unwrap());
	}

	#[test]
	fn test_classic_worst_case() {
		// The tightest instance for 2 machines: LPT gives 7, but 6 is possible
		assert_eq!(7, solve_approx(&[3, 3, 2, 2, 2], 2).unwrap());
	}
}
