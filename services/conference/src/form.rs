//! Login form state holder
//!
//! Each submission takes a ticket with a strictly increasing sequence number.
//! Only the most recently issued ticket may publish, so a slow earlier
//! submission can never overwrite the outcome of a later one.

use std::sync::atomic::{AtomicU64, Ordering};

use common::DirectoryProvider;
use tokio::sync::{Mutex, watch};
use tracing::debug;

use crate::login::{LoginService, LoginUiState};

/// Sequence number handed to one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoginTicket(u64);

/// Published state together with the ticket that produced it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginSnapshot {
    pub sequence: u64,
    pub state: LoginUiState,
}

/// Caller-owned holder of the current login form state
#[derive(Debug)]
pub struct LoginStateHolder {
    issued: AtomicU64,
    state: watch::Sender<LoginSnapshot>,
}

impl Default for LoginStateHolder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginStateHolder {
    pub fn new() -> Self {
        let (state, _) = watch::channel(LoginSnapshot::default());
        Self {
            issued: AtomicU64::new(0),
            state,
        }
    }

    /// Start a submission and publish the validating state for it
    pub fn begin(&self) -> LoginTicket {
        let ticket = LoginTicket(self.issued.fetch_add(1, Ordering::SeqCst) + 1);
        self.apply(ticket, LoginUiState::validating());
        ticket
    }

    /// Publish `state` if `ticket` is still the latest submission
    ///
    /// Returns whether the state was published.
    pub fn apply(&self, ticket: LoginTicket, state: LoginUiState) -> bool {
        let published = self.state.send_if_modified(|snapshot| {
            if ticket.0 < snapshot.sequence || ticket.0 != self.issued.load(Ordering::SeqCst) {
                return false;
            }
            snapshot.sequence = ticket.0;
            snapshot.state = state;
            true
        });

        if !published {
            debug!("Discarding stale login state for submission {}", ticket.0);
        }
        published
    }

    pub fn current(&self) -> LoginUiState {
        self.state.borrow().state.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<LoginSnapshot> {
        self.state.subscribe()
    }
}

#[derive(Debug, Default)]
struct Credentials {
    email: String,
    password: String,
}

/// Email/password fields plus the state of their latest submission
#[derive(Debug)]
pub struct LoginForm<P> {
    service: LoginService<P>,
    credentials: Mutex<Credentials>,
    holder: LoginStateHolder,
}

impl<P: DirectoryProvider> LoginForm<P> {
    pub fn new(service: LoginService<P>) -> Self {
        Self {
            service,
            credentials: Mutex::new(Credentials::default()),
            holder: LoginStateHolder::new(),
        }
    }

    pub async fn update_email(&self, email: impl Into<String>) {
        self.credentials.lock().await.email = email.into();
    }

    pub async fn update_password(&self, password: impl Into<String>) {
        self.credentials.lock().await.password = password.into();
    }

    /// Submit the current fields
    ///
    /// Returns the outcome of this submission, which is published to the
    /// holder only if no later submission started meanwhile.
    pub async fn submit(&self) -> LoginUiState {
        let (email, password) = {
            let credentials = self.credentials.lock().await;
            (credentials.email.clone(), credentials.password.clone())
        };

        let ticket = self.holder.begin();
        let state = self.service.try_login(&email, &password).await;
        self.holder.apply(ticket, state.clone());
        state
    }

    pub fn state(&self) -> &LoginStateHolder {
        &self.holder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::login::{LoginFailure, LoginPhase};
    use crate::test_support::{FakeDirectory, alice};

    #[test]
    fn test_begin_publishes_validating() {
        let holder = LoginStateHolder::new();
        let receiver = holder.subscribe();

        holder.begin();

        assert_eq!(holder.current().phase(), LoginPhase::Validating);
        assert_eq!(receiver.borrow().sequence, 1);
    }

    #[test]
    fn test_stale_submission_is_discarded() {
        let holder = LoginStateHolder::new();

        let first = holder.begin();
        let second = holder.begin();

        assert!(holder.apply(second, LoginUiState::succeeded(alice())));
        assert!(!holder.apply(first, LoginUiState::failed([LoginFailure::UserNotFound])));
        assert_eq!(holder.current().user, Some(alice()));
    }

    #[test]
    fn test_earlier_submission_finishing_first_is_discarded() {
        let holder = LoginStateHolder::new();

        let first = holder.begin();
        let second = holder.begin();

        assert!(!holder.apply(first, LoginUiState::failed([LoginFailure::UserNotFound])));
        assert_eq!(holder.current().phase(), LoginPhase::Validating);

        assert!(holder.apply(second, LoginUiState::succeeded(alice())));
        assert_eq!(holder.current().phase(), LoginPhase::Success);
    }

    #[tokio::test]
    async fn test_form_submit_publishes_outcome() {
        let form = LoginForm::new(LoginService::new(FakeDirectory::new(vec![alice()], vec![])));
        let mut receiver = form.state().subscribe();

        form.update_email("a@x.com").await;
        form.update_password("secret1").await;
        let outcome = form.submit().await;

        assert_eq!(outcome.phase(), LoginPhase::Success);
        assert!(receiver.has_changed().expect("holder alive"));
        assert_eq!(receiver.borrow_and_update().state, outcome);
        assert_eq!(form.state().current(), outcome);
    }

    #[tokio::test]
    async fn test_form_resubmission_replaces_state() {
        let form = LoginForm::new(LoginService::new(FakeDirectory::new(vec![alice()], vec![])));

        form.update_email("a@x.com").await;
        form.update_password("wrong-password").await;
        assert_eq!(form.submit().await.error().as_deref(), Some("User not found"));

        form.update_password("secret1").await;
        form.submit().await;

        let state = form.state().current();
        assert_eq!(state.phase(), LoginPhase::Success);
        assert!(state.errors.is_empty());
    }
}
