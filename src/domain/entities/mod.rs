//! Core domain entities.
//!
//! - [`UrlRecord`] - A shortened URL with its validity window and click history
//! - [`Click`] - One redirect access
//! - [`UrlStats`] - Read-only statistics view of a record
//!
//! Creation input is kept separate from the stored entity (`NewUrlRecord`),
//! so a record can only be born with an empty click list.

pub mod click;
pub mod url_record;

pub use click::{Click, DIRECT_REFERER};
pub use url_record::{NewUrlRecord, UrlRecord, UrlStats};
