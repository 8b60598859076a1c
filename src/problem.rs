use crate::error::{Error, Result};

/// The duration of a single task
pub type Duration = u32;

/// The total duration of all tasks assigned to one machine. This is wider than `Duration`, so
/// summing task durations can't overflow.
pub type Load = u64;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Problem {
	tasks: Vec<Duration>,
	num_machines: usize,
}

impl Problem {
	pub fn new(tasks: Vec<Duration>, num_machines: usize) -> Result<Problem> {
		if num_machines == 0 {
			return Err(Error::NoMachines);
		}
		Ok(Problem { tasks, num_machines })
	}

	pub fn get_tasks(&self) -> &[Duration] { &self.tasks }

	pub fn get_num_machines(&self) -> usize { self.num_machines }

	pub fn total_duration(&self) -> Load {
		total_duration(&self.tasks)
	}

	pub fn longest_task(&self) -> Duration {
		self.tasks.iter().copied().max().unwrap_or(0)
	}

	/// No schedule can have a smaller makespan than this: the total work must be spread over
	/// `num_machines` machines, and the longest task must fit on one of them.
	pub fn lower_bound(&self) -> Load {
		let average = self.total_duration().div_ceil(self.num_machines as Load);
		Load::max(average, self.longest_task() as Load)
	}
}

pub fn total_duration(tasks: &[Duration]) -> Load {
	tasks.iter().map(|&task| task as Load).sum()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_no_machines() {
		assert!(matches!(Problem::new(vec![1, 2, 3], 0), Err(Error::NoMachines)));
		assert!(matches!(Problem::new(Vec::new(), 0), Err(Error::NoMachines)));
	}

	#[test]
	fn test_problem() {
		let problem = Problem::new(vec![9, 9, 8, 8, 8], 2).unwrap();
		assert_eq!(problem.get_tasks(), &[9, 9, 8, 8, 8]);
		assert_eq!(problem.get_num_machines(), 2);
		assert_eq!(problem.total_duration(), 42);
		assert_eq!(problem.longest_task(), 9);
		assert_eq!(problem.lower_bound(), 21);
	}

	#[test]
	fn test_lower_bound_rounds_up() {
		let problem = Problem::new(vec![5, 5, 1], 2).unwrap();
		assert_eq!(problem.lower_bound(), 6);
	}

	#[test]
	fn test_lower_bound_longest_task() {
		let problem = Problem::new(vec![100, 1, 1], 3).unwrap();
		assert_eq!(problem.lower_bound(), 100);
	}

	#[test]
	fn test_empty_problem() {
		let problem = Problem::new(Vec::new(), 4).unwrap();
		assert_eq!(problem.total_duration(), 0);
		assert_eq!(problem.longest_task(), 0);
		assert_eq!(problem.lower_bound(), 0);
	}

	#[test]
	fn test_total_duration_does_not_overflow() {
		let tasks = vec![Duration::MAX; 4];
		assert_eq!(total_duration(&tasks), 4 * Duration::MAX as Load);
	}
}
