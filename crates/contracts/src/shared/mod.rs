pub mod date;
pub mod envelope;
pub mod validation;
