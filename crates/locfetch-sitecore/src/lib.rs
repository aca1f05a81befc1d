pub mod client;
pub mod error;
pub mod graphql;
pub mod token;

pub use client::SitecoreClient;
pub use error::SitecoreError;
pub use graphql::GraphqlClient;
pub use token::{TokenClient, TokenResponse};
