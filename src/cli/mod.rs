pub mod args;
pub mod batch;

pub use args::Args;
pub use batch::{Batch, is_batch_pattern};
