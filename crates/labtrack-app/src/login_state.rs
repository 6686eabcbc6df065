//! Login form state

use labtrack_core::Credentials;

use crate::request::RequestId;

/// Focusable login field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

impl LoginField {
    /// The other field (two fields, so next and previous coincide)
    pub fn toggle(self) -> Self {
        match self {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LoginField::Username => "Username",
            LoginField::Password => "Password",
        }
    }
}

/// State owned by the login screen
#[derive(Debug, Clone, Default)]
pub struct LoginState {
    pub username: String,
    pub password: String,
    pub focus: LoginField,
    /// Inline error or required-field hint
    pub error: Option<String>,
    /// Outstanding `POST /login`, if any
    pub pending: Option<RequestId>,
}

impl LoginState {
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn focused_value_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }

    /// First field left empty, in focus order
    pub fn first_missing(&self) -> Option<LoginField> {
        if self.username.is_empty() {
            Some(LoginField::Username)
        } else if self.password.is_empty() {
            Some(LoginField::Password)
        } else {
            None
        }
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.username.clone(), self.password.clone())
    }
}
