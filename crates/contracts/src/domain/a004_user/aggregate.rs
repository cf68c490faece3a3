use serde::{Deserialize, Serialize};

use crate::shared::validation::{is_filled, Validate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
        }
    }
}

impl UserDto {
    pub fn into_user(self, id: i64) -> User {
        User {
            id,
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            role: self.role.trim().to_string(),
        }
    }
}

impl Validate for UserDto {
    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !is_filled(&self.name) {
            missing.push("name");
        }
        if !is_filled(&self.email) {
            missing.push("email");
        }
        if !is_filled(&self.role) {
            missing.push("role");
        }
        missing
    }
}
