//! CLI command handlers. Each command is in its own file.

mod algorithms;
mod completions;
mod sign;
mod verify;

pub use algorithms::run_algorithms;
pub use completions::run_completions;
pub use sign::run_sign;
pub use verify::run_verify;
