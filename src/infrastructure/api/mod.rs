pub mod error;
pub mod http_client;
pub mod wire;

pub use error::ApiError;
pub use http_client::HttpAdminApi;
