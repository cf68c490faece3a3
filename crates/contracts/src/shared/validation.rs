/// Required-field check shared by the forms and the API handlers.
pub trait Validate {
    /// Names of the required fields that are missing or empty
    fn missing_fields(&self) -> Vec<&'static str>;

    fn is_valid(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// `true` when the value has visible characters
pub fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}
