pub mod extractor;
pub mod fetcher;

pub use extractor::extract_reading;
pub use fetcher::fetch_livedata;
