mod entry;
pub mod public;

pub use entry::{API_PREFIX, router};
