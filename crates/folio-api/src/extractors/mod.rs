pub mod base_url;

pub use base_url::RequestBaseUrl;
