//! Fixtures shared by the unit tests

use axum::http::StatusCode;
use common::{DirectoryProvider, ProviderError, ProviderResult, RawMeeting, User};

pub fn alice() -> User {
    User {
        id: 1,
        full_name: "Alice".to_string(),
        company: "Acme".to_string(),
        email: "a@x.com".to_string(),
        password: "secret1".to_string(),
    }
}

pub fn bob() -> User {
    User {
        id: 2,
        full_name: "Bob".to_string(),
        company: "Globex".to_string(),
        email: "b@x.com".to_string(),
        password: "secret2".to_string(),
    }
}

pub fn raw_meeting(id: i64, user1: &str, user2: &str) -> RawMeeting {
    RawMeeting {
        id,
        user1: user1.to_string(),
        user2: user2.to_string(),
        room: format!("{}", 100 + id),
        date: "1700000000000".to_string(),
    }
}

/// In-memory provider
#[derive(Debug, Clone, Default)]
pub struct FakeDirectory {
    pub users: Vec<User>,
    pub meetings: Vec<RawMeeting>,
    pub unavailable: bool,
}

impl FakeDirectory {
    pub fn new(users: Vec<User>, meetings: Vec<RawMeeting>) -> Self {
        Self {
            users,
            meetings,
            unavailable: false,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    fn check(&self) -> ProviderResult<()> {
        if self.unavailable {
            return Err(ProviderError::Status(StatusCode::SERVICE_UNAVAILABLE));
        }
        Ok(())
    }
}

impl DirectoryProvider for FakeDirectory {
    async fn fetch_users(&self) -> ProviderResult<Vec<User>> {
        self.check()?;
        Ok(self.users.clone())
    }

    async fn fetch_meetings(&self) -> ProviderResult<Vec<RawMeeting>> {
        self.check()?;
        Ok(self.meetings.clone())
    }
}
