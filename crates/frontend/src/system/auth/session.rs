use super::storage;
use crate::shared::api::ApiError;

/// Authorization credential of the current browser session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    Absent,
    Bearer(String),
}

/// Read-only session handed to every collection client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    credential: Credential,
}

impl Session {
    /// Blank tokens count as absent
    pub fn new(token: Option<String>) -> Self {
        let credential = match token {
            Some(token) if !token.trim().is_empty() => Credential::Bearer(token),
            _ => Credential::Absent,
        };
        Self { credential }
    }

    pub fn from_storage() -> Self {
        Self::new(storage::get_access_token())
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.credential, Credential::Bearer(_))
    }

    /// Token for the `Authorization` header, or `ApiError::Auth`
    pub fn bearer(&self) -> Result<&str, ApiError> {
        match &self.credential {
            Credential::Bearer(token) => Ok(token),
            Credential::Absent => Err(ApiError::Auth),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_token_is_absent() {
        let blank = Session::new(Some("  ".into()));
        assert!(!blank.is_authenticated());
        assert_eq!(blank.bearer(), Err(ApiError::Auth));
        assert_eq!(Session::new(None), blank);
    }

    #[test]
    fn test_bearer() {
        let session = Session::new(Some("abc".into()));
        assert!(session.is_authenticated());
        assert_eq!(session.bearer(), Ok("abc"));
    }
}
