//! Content module - entries, schema validation, posts and listings

mod collection;
mod entry;
mod error;
mod frontmatter;
mod listing;
mod post;
pub mod schema;

pub use collection::{Collections, ExportFormat};
pub use entry::{id_from_path, EntryData, RawEntry};
pub use error::ContentError;
pub use frontmatter::FrontMatter;
pub use listing::{listing, ListingItem};
pub use post::{by_date_desc, normalize, sort_by_date_desc, Post, PostData};
