pub mod cambridge;
pub mod fetch;
pub mod parser;

pub use cambridge::RemoteHtmlDictionary;
pub use fetch::{FetchedPage, HttpFetcher, PageFetcher};
