//! Meeting roster assembly
//!
//! Turns raw meeting records, whose participants are user ids, into display
//! records carrying the participants' full names.

use common::{DirectoryProvider, RawMeeting, User};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::directory::find_user_by_id;
use crate::error::{ConferenceError, ConferenceResult};

/// Meeting with participant names resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meeting {
    pub id: i64,
    /// Full name of the first participant
    pub user1: String,
    /// Full name of the second participant
    pub user2: String,
    pub room: String,
    /// Milliseconds since the Unix epoch, encoded as a string
    pub date: String,
}

/// Which participant slot must hold the current user for a meeting to be kept
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantFilter {
    /// Only meetings the user appears in as `user1`
    #[default]
    FirstParticipant,
    /// Meetings the user appears in as either `user1` or `user2`
    AnyParticipant,
}

impl ParticipantFilter {
    fn matches(self, meeting: &RawMeeting, user_id: &str) -> bool {
        match self {
            ParticipantFilter::FirstParticipant => meeting.user1 == user_id,
            ParticipantFilter::AnyParticipant => {
                meeting.user1 == user_id || meeting.user2 == user_id
            }
        }
    }
}

/// A meeting skipped because one of its participants is not in the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedReference {
    pub meeting_id: i64,
    pub user_id: String,
}

/// Result of a roster assembly
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Roster {
    /// Assembled meetings, in input order
    pub meetings: Vec<Meeting>,
    /// Meetings left out because a participant id did not resolve
    pub unresolved: Vec<UnresolvedReference>,
}

/// Resolve both participants of a single meeting
pub fn assemble_meeting(meeting: &RawMeeting, users: &[User]) -> ConferenceResult<Meeting> {
    let resolve = |user_id: &str| {
        find_user_by_id(users, user_id)
            .map(|user| user.full_name.clone())
            .ok_or_else(|| ConferenceError::UnresolvedReference {
                meeting_id: meeting.id,
                user_id: user_id.to_string(),
            })
    };

    Ok(Meeting {
        id: meeting.id,
        user1: resolve(&meeting.user1)?,
        user2: resolve(&meeting.user2)?,
        room: meeting.room.clone(),
        date: meeting.date.clone(),
    })
}

/// Build the roster of meetings organised by `current_user_id`
pub fn build_roster(meetings: &[RawMeeting], users: &[User], current_user_id: &str) -> Roster {
    build_roster_with(
        meetings,
        users,
        current_user_id,
        ParticipantFilter::FirstParticipant,
    )
}

/// Build a roster with an explicit participant filter
pub fn build_roster_with(
    meetings: &[RawMeeting],
    users: &[User],
    current_user_id: &str,
    filter: ParticipantFilter,
) -> Roster {
    let mut roster = Roster::default();

    for meeting in meetings
        .iter()
        .filter(|meeting| filter.matches(meeting, current_user_id))
    {
        match assemble_meeting(meeting, users) {
            Ok(assembled) => roster.meetings.push(assembled),
            Err(ConferenceError::UnresolvedReference {
                meeting_id,
                user_id,
            }) => {
                warn!(
                    "Skipping meeting {}: unknown participant {}",
                    meeting_id, user_id
                );
                roster.unresolved.push(UnresolvedReference {
                    meeting_id,
                    user_id,
                });
            }
            Err(other) => warn!("Skipping meeting {}: {}", meeting.id, other),
        }
    }

    roster
}

/// Fetches directory and meetings and assembles rosters
#[derive(Debug, Clone)]
pub struct RosterService<P> {
    provider: P,
    filter: ParticipantFilter,
}

impl<P: DirectoryProvider> RosterService<P> {
    /// Create a new roster service
    pub fn new(provider: P, filter: ParticipantFilter) -> Self {
        Self { provider, filter }
    }

    /// Roster for one participant
    pub async fn roster_for(&self, user_id: &str) -> ConferenceResult<Roster> {
        info!("Building roster for user: {}", user_id);

        let users = self.provider.fetch_users().await?;
        let meetings = self.provider.fetch_meetings().await?;

        let roster = build_roster_with(&meetings, &users, user_id, self.filter);
        info!(
            "Roster for user {}: {} meetings, {} unresolved",
            user_id,
            roster.meetings.len(),
            roster.unresolved.len()
        );

        Ok(roster)
    }
}
