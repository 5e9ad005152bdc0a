//! Service settings loaded with the `config` crate

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

use crate::roster::ParticipantFilter;

/// Service settings
///
/// # Environment Variables
/// - `CONFERENCE_BIND_ADDRESS`: listen address (default: "0.0.0.0:3000")
/// - `CONFERENCE_PARTICIPANT_FILTER`: `first_participant` or `any_participant`
///   (default: "first_participant")
/// - `CONFERENCE_UTC_OFFSET_MINUTES`: offset used to display meeting times
///   (default: 0)
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub bind_address: String,
    pub participant_filter: ParticipantFilter,
    pub utc_offset_minutes: i32,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("bind_address", "0.0.0.0:3000")?
            .set_default("participant_filter", "first_participant")?
            .set_default("utc_offset_minutes", 0)?
            .add_source(Environment::with_prefix("CONFERENCE").try_parsing(true))
            .build()?
            .try_deserialize()
    }
}
