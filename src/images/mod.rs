//! # Images
//!
//! The image-fetch capability consumed by views. A fetcher turns an opaque
//! locator into a small decoded `Thumbnail` or an `ImageLoadError`.
//! Callers run fetches on the tokio runtime and abort them when the owning
//! view goes away.

pub mod fetcher;
pub mod http;

pub use fetcher::{ImageFetcher, ImageLoadError, Thumbnail};
pub use http::HttpImageFetcher;
