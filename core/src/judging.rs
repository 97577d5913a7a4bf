pub mod build;
pub mod compare;
pub mod outcome;
pub mod runner;
pub mod stats;
pub mod testcase;

pub use compare::*;
pub use outcome::*;
pub use runner::*;
pub use stats::*;
pub use testcase::*;
