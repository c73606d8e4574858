// ghview-api: Async client for the GitHub `/users/{username}` endpoint

pub mod client;
pub mod error;
pub mod models;
pub mod transport;

pub use client::GithubClient;
pub use error::Error;
pub use models::UserResponse;
pub use transport::TransportConfig;
