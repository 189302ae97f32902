//! Command implementations

pub mod check;
pub mod simple;
pub mod solutions;

pub use check::{CheckEntry, CheckResult, check_words};
pub use simple::{run_simple, run_simple_with_io};
pub use solutions::{SolutionsResult, find_solutions};
