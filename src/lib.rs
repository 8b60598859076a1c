//! Makespan minimization on identical machines: the Longest-Processing-Time-first heuristic, an
//! exact branch-and-bound solver, and a benchmark that measures the gap between them.

pub mod benchmark;
pub mod cli;
pub mod error;
pub mod generator;
pub mod parser;
pub mod problem;
pub mod report;
pub mod solver;

pub use error::{Error, Result};
pub use solver::{solve_approx, solve_exact};
