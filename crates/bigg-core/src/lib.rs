pub mod config;
pub mod logging;

pub mod catalog;
pub mod error;
pub mod fetcher;
pub mod http;
pub mod request;
pub mod storage;

pub use catalog::{CatalogEntry, ModelCatalog};
pub use error::FetchError;
pub use fetcher::{FetchOutcome, Fetcher, FetcherOptions};
pub use request::DownloadRequest;
