pub mod base;
pub mod http;

pub use base::JsonSource;
pub use http::HttpJsonClient;
