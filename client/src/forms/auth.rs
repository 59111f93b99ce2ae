//! Login and registration forms.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::error::ValidationError;
use crate::net::types::{LoginRequest, RegisterRequest};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    #[must_use]
    pub fn request(&self) -> LoginRequest {
        LoginRequest { email: self.email.trim().to_owned(), password: self.password.clone() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub email: String,
    pub name: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    /// # Errors
    ///
    /// `PasswordMismatch` when the two password fields differ.
    pub fn request(&self) -> Result<RegisterRequest, ValidationError> {
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(RegisterRequest {
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
            name: self.name.trim().to_owned(),
        })
    }
}
