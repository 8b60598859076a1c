use crate::problem::Load;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("the number of machines must be at least 1")]
	NoMachines,

	#[error("negative task duration {value} on line {line}")]
	NegativeDuration { line: usize, value: i64 },

	#[error("couldn't parse task duration '{value}' on line {line}")]
	Parse { line: usize, value: String },

	#[error("couldn't read tasks file: {0}")]
	Io(#[from] std::io::Error),

	#[error("invalid task distribution: {0}")]
	InvalidDistribution(String),

	#[error("approximate makespan {approximate} is smaller than exact makespan {exact}")]
	DominanceViolated { approximate: Load, exact: Load },

	#[error("machine loads sum to {actual}, but the tasks sum to {expected}")]
	ConservationViolated { expected: Load, actual: Load },
}

pub type Result<T> = std::result::Result<T, Error>;
