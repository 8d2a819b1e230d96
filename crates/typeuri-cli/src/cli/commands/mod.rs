//! CLI command handlers, one per file.

mod check;
mod inspect;
mod query;
mod segments;

pub use check::{run_check, Checks};
pub use inspect::run_inspect;
pub use query::run_query;
pub use segments::run_segments;
