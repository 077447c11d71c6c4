//! Login form state machine.
//!
//! `Idle -> Submitting -> { Authenticated | Failed }`, and `Failed ->
//! Submitting` on the next submit. A submit while `Submitting` is ignored.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::api::ApiError;

/// Shown when a login fails without any structured detail.
pub const LOGIN_FAILED_MESSAGE: &str = "Login gagal, silakan coba lagi";

/// What the form shows after a rejected login.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFailure {
    /// `"{path} : {msg}"` per validation error.
    pub field_lines: Vec<String>,
    /// Backend `message`, or a generic message when nothing else is known.
    pub message: Option<String>,
}

impl LoginFailure {
    pub fn from_error(err: &ApiError) -> Self {
        if let ApiError::Rejected { body, .. } = err {
            let failure = Self {
                field_lines: body.field_lines(),
                message: body.message.clone().filter(|m| !m.is_empty()),
            };
            if !failure.field_lines.is_empty() || failure.message.is_some() {
                return failure;
            }
        }
        Self { field_lines: Vec::new(), message: Some(LOGIN_FAILED_MESSAGE.to_owned()) }
    }

    /// Local required-field failure; no request is sent.
    pub fn missing_credentials() -> Self {
        Self { field_lines: Vec::new(), message: Some("Username dan password wajib diisi".to_owned()) }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    Idle,
    Submitting,
    Authenticated,
    Failed(LoginFailure),
}

impl LoginPhase {
    /// Move to `Submitting`. Returns `false` when a submit is already in flight
    /// or the session is already established.
    pub fn begin_submit(&mut self) -> bool {
        match self {
            Self::Submitting | Self::Authenticated => false,
            Self::Idle | Self::Failed(_) => {
                *self = Self::Submitting;
                true
            }
        }
    }

    pub fn succeed(&mut self) {
        *self = Self::Authenticated;
    }

    pub fn fail(&mut self, failure: LoginFailure) {
        *self = Self::Failed(failure);
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn failure(&self) -> Option<&LoginFailure> {
        match self {
            Self::Failed(failure) => Some(failure),
            _ => None,
        }
    }
}
