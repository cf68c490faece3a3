pub mod context;
pub mod session;
pub mod storage;

pub use context::{set_token, use_session, SessionProvider};
pub use session::{Credential, Session};
