//! Login against the remote user directory

use std::collections::BTreeSet;

use common::{DirectoryProvider, User};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::directory::find_user_by_email;
use crate::error::{ConferenceError, ConferenceResult};
use crate::validation::{ValidationError, validate_credentials};

/// Reason a login attempt did not succeed, in display priority order
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginFailure {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("User not found")]
    UserNotFound,

    #[error("Could not load data")]
    Unavailable,
}

/// Where a login flow stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginPhase {
    Idle,
    Validating,
    Success,
    Failed,
}

/// Login form state, replaced wholesale on every transition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoginUiState {
    pub is_loading: bool,
    pub errors: BTreeSet<LoginFailure>,
    pub is_success: bool,
    pub user: Option<User>,
}

impl LoginUiState {
    pub fn validating() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }

    pub fn succeeded(user: User) -> Self {
        Self {
            is_success: true,
            user: Some(user),
            ..Self::default()
        }
    }

    pub fn failed(errors: impl IntoIterator<Item = LoginFailure>) -> Self {
        Self {
            errors: errors.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Highest-priority error message, for displays that show only one
    pub fn error(&self) -> Option<String> {
        self.errors.first().map(ToString::to_string)
    }

    pub fn phase(&self) -> LoginPhase {
        if self.is_loading {
            LoginPhase::Validating
        } else if self.is_success {
            LoginPhase::Success
        } else if !self.errors.is_empty() {
            LoginPhase::Failed
        } else {
            LoginPhase::Idle
        }
    }
}

impl From<ConferenceResult<User>> for LoginUiState {
    fn from(result: ConferenceResult<User>) -> Self {
        match result {
            Ok(user) => Self::succeeded(user),
            Err(ConferenceError::ValidationFailed(errors)) => {
                Self::failed(errors.into_iter().map(LoginFailure::from))
            }
            Err(ConferenceError::NotFound) => Self::failed([LoginFailure::UserNotFound]),
            Err(_) => Self::failed([LoginFailure::Unavailable]),
        }
    }
}

/// Checks credentials against the remote directory
#[derive(Debug, Clone)]
pub struct LoginService<P> {
    provider: P,
}

impl<P: DirectoryProvider> LoginService<P> {
    /// Create a new login service
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Validate the credentials, then look the user up and compare passwords
    ///
    /// The directory is only queried when every local rule passes. An unknown
    /// email and a wrong password are reported the same way.
    pub async fn authenticate(&self, email: &str, password: &str) -> ConferenceResult<User> {
        let errors = validate_credentials(email, password);
        if !errors.is_empty() {
            return Err(ConferenceError::ValidationFailed(errors));
        }

        info!("Login attempt for user: {}", email);

        let users = self.provider.fetch_users().await?;
        match find_user_by_email(&users, email) {
            Some(user) if user.password == password => {
                info!("Login succeeded for user: {}", user.id);
                Ok(user.clone())
            }
            _ => {
                warn!("Login failed for user: {}", email);
                Err(ConferenceError::NotFound)
            }
        }
    }

    /// Run a login and fold the outcome into a form state
    pub async fn try_login(&self, email: &str, password: &str) -> LoginUiState {
        self.authenticate(email, password).await.into()
    }

    /// Profile lookup by email
    pub async fn profile(&self, email: &str) -> ConferenceResult<User> {
        let users = self.provider.fetch_users().await?;
        find_user_by_email(&users, email)
            .cloned()
            .ok_or(ConferenceError::NotFound)
    }
}
