pub mod client;
pub mod error;
pub mod fixture;
#[cfg(test)]
pub mod testing;
pub mod transport;

pub use client::{CollectionClient, ListSource, Mutation};
pub use error::ApiError;
pub use fixture::FixtureSource;
pub use transport::{ApiRequest, ApiResponse, GlooTransport, HttpTransport, Method};
