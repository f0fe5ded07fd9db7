use serde::{Deserialize, Serialize};

/// Page-local values behind the login form.
///
/// The inputs are uncontrolled: nothing writes keystrokes back into these
/// fields, so every submission carries the values set at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginFields {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl LoginFields {
    /// Fields as the view holds them: empty and never updated.
    pub fn unbound() -> Self {
        Self::default()
    }

    pub fn payload(&self) -> LoginPayload {
        LoginPayload {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

/// JSON body of the login request. Field order is the wire order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginPayload {
    pub username: String,
    pub email: String,
    pub password: String,
}
