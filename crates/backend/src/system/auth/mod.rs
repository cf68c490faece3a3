pub mod middleware;

pub use middleware::{authorize, require_bearer, ApiUser};
