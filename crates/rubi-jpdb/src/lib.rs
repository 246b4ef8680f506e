mod client;
mod error;
mod format;

pub use client::{JPDB_PARSE_URL, JpdbClient};
pub use error::JpdbError;
pub use format::format_response;
