use std::fs::read_to_string;
use std::path::Path;

use crate::error::{Error, Result};
use crate::problem::*;

fn parse_duration(line: usize, raw: &str) -> Result<Duration> {
	let value = raw.parse::<i64>().map_err(|_| Error::Parse { line, value: raw.to_string() })?;
	if value < 0 {
		return Err(Error::NegativeDuration { line, value });
	}
	Duration::try_from(value).map_err(|_| Error::Parse { line, value: raw.to_string() })
}

/// Parses task durations from `raw_text`. Durations are separated by commas and/or whitespace,
/// and may be spread over any number of lines. When the first non-empty line contains letters,
/// it is treated as a header.
pub fn parse_task_list(raw_text: &str) -> Result<Vec<Duration>> {
	let mut tasks = Vec::new();
	let mut allow_header = true;

	for (index, line) in raw_text.lines().enumerate() {
		if line.trim().is_empty() { continue; }
		if allow_header {
			allow_header = false;
			if line.chars().any(|c| c.is_alphabetic()) { continue; }
		}

		let values = line.split(|c: char| c == ',' || c.is_whitespace()).filter(|s| !s.is_empty());
		for raw_value in values {
			tasks.push(parse_duration(index + 1, raw_value)?);
		}
	}

	Ok(tasks)
}

pub fn parse_tasks(file_path: impl AsRef<Path>) -> Result<Vec<Duration>> {
	let raw_text = read_to_string(file_path)?;
	parse_task_list(&raw_text)
}

pub fn parse_problem(file_path: impl AsRef<Path>, num_machines: usize) -> Result<Problem> {
	Problem::new(parse_tasks(file_path)?, num_machines)
}
