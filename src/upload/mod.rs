pub mod formatter;
pub mod uploader;

pub use formatter::build_query;
pub use uploader::send_reading;
