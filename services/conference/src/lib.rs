//! Conference service
//!
//! Login, profile lookup and meeting rosters for the conference scheduling
//! app, built on top of the remote directory exposed by the `common` crate.

pub mod directory;
pub mod display;
pub mod error;
pub mod form;
pub mod login;
pub mod roster;
pub mod routes;
pub mod settings;
pub mod state;
pub mod validation;

#[cfg(test)]
mod test_support;

pub use error::{ConferenceError, ConferenceResult};
pub use form::{LoginForm, LoginStateHolder};
pub use login::{LoginPhase, LoginService, LoginUiState};
pub use roster::{Meeting, ParticipantFilter, Roster, RosterService, build_roster};
