//! Application state shared across handlers

use chrono::FixedOffset;
use common::HttpProvider;

use crate::{login::LoginService, roster::RosterService};

/// Application state shared across handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub login_service: LoginService<HttpProvider>,
    pub roster_service: RosterService<HttpProvider>,
    /// Offset meeting times are displayed in
    pub display_offset: FixedOffset,
}
