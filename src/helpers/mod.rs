//! Helper functions
//!
//! Small pure utilities shared by listings, the feed and the CLI:
//! read time estimation, category badges and URL building.

pub mod category;
pub mod read_time;
mod url;

pub use category::{classify, CategoryStyle};
pub use read_time::estimate;
pub use url::*;
