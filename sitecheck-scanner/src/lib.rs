pub mod client;
pub mod error;
pub mod extract;
pub mod result;

pub use client::{SiteClient, check_links};
pub use error::ScanError;
pub use extract::{PageMeta, extract_links};
pub use result::{HeadFetch, LinkCheck, PageFetch};
