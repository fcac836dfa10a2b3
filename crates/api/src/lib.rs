pub mod client;
pub mod endpoint;
pub mod error;
pub mod fetch;
pub mod response;
