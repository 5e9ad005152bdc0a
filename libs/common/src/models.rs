//! Records served by the remote data provider

use serde::{Deserialize, Serialize};

/// User entity as stored in the remote directory
///
/// The password travels in plaintext from the provider. It is accepted on
/// the way in and never serialized back out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub full_name: String,
    pub company: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password: String,
}

/// Meeting entity as stored remotely, participants still referenced by id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMeeting {
    pub id: i64,
    /// String-encoded id of the first participant
    pub user1: String,
    /// String-encoded id of the second participant
    pub user2: String,
    pub room: String,
    /// Milliseconds since the Unix epoch, encoded as a string
    pub date: String,
}

/// Response wrapper used by every provider endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub status: String,
    pub result: Vec<T>,
}
