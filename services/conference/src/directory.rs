//! Lookups over a user collection fetched from the remote directory

use common::User;

/// Find the first user whose email matches exactly (case-sensitive)
pub fn find_user_by_email<'a>(users: &'a [User], email: &str) -> Option<&'a User> {
    users.iter().find(|user| user.email == email)
}

/// Find a user by a string-encoded id
///
/// The id is compared against the decimal rendering of each user's integer
/// id, so `"01"` does not match user `1`.
pub fn find_user_by_id<'a>(users: &'a [User], id: &str) -> Option<&'a User> {
    users.iter().find(|user| user.id.to_string() == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{alice, bob};

    #[test]
    fn test_find_user_by_email() {
        let users = vec![alice(), bob()];

        assert_eq!(find_user_by_email(&users, "b@x.com"), Some(&users[1]));
        assert_eq!(find_user_by_email(&users, "B@x.com"), None);
        assert_eq!(find_user_by_email(&users, "c@x.com"), None);
        assert_eq!(find_user_by_email(&[], "a@x.com"), None);
    }

    #[test]
    fn test_find_user_by_email_returns_first_match() {
        let mut duplicate = bob();
        duplicate.email = "a@x.com".to_string();
        let users = vec![alice(), duplicate];

        let found = find_user_by_email(&users, "a@x.com").map(|user| user.id);
        assert_eq!(found, Some(1));
    }

    #[test]
    fn test_find_user_by_id() {
        let users = vec![alice(), bob()];

        assert_eq!(find_user_by_id(&users, "2").map(|u| u.full_name.as_str()), Some("Bob"));
        assert_eq!(find_user_by_id(&users, "3"), None);
        assert_eq!(find_user_by_id(&users, "01"), None);
        assert_eq!(find_user_by_id(&users, " 1"), None);
    }
}
