//! The recursive search engine and its solution collector.

mod core;
mod solutions;

pub use self::core::CountdownSolver;
pub use solutions::SolutionSet;
