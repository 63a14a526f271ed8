use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, err};

/// Row identifier, assigned by the directory that owns the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub u32);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::User, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| err!("unknown role: {s}"))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Active,
    Inactive,
}

impl Status {
    pub const ALL: [Status; 2] = [Status::Active, Status::Inactive];

    /// Wire value, also used as the `<option>` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Inactive => "inactive",
        }
    }

    /// Capitalised form for select labels.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| err!("unknown status: {s}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: Status,
}

impl User {
    /// Case-insensitive substring match on name or email.
    ///
    /// `needle` must already be lowercased, see [`crate::UserDirectory::visible`].
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.email.to_lowercase().contains(needle)
    }
}

/// Unsaved form state for the user being created or edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: Status,
}

impl UserDraft {
    /// Same checks a browser applies to a `required` text input and a
    /// `required` email input. A text input keeps whitespace, so a name of
    /// spaces passes; an email input strips it before checking.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(err!("name is required"));
        }
        if self.email.trim().is_empty() {
            return Err(err!("email is required"));
        }
        if !is_email_shaped(&self.email) {
            return Err(err!("'{}' is not an email address", self.email));
        }
        Ok(())
    }

    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            role: self.role,
            status: self.status,
        }
    }
}

impl From<&User> for UserDraft {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            status: user.status,
        }
    }
}

fn is_email_shaped(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// Rows present at first render.
pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: UserId(1),
            name: "Mas".into(),
            email: "john@example.com".into(),
            role: Role::Admin,
            status: Status::Active,
        },
        User {
            id: UserId(2),
            name: "Irwan Budi".into(),
            email: "irwan@example.com".into(),
            role: Role::User,
            status: Status::Active,
        },
        User {
            id: UserId(3),
            name: "Miko Hambalang".into(),
            email: "mike@example.com".into(),
            role: Role::User,
            status: Status::Inactive,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, email: &str) -> UserDraft {
        UserDraft {
            name: name.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    #[test]
    fn default_draft_is_active_user() {
        let draft = UserDraft::default();
        assert_eq!(draft.role, Role::User);
        assert_eq!(draft.status, Status::Active);
        assert!(draft.name.is_empty());
        assert!(draft.email.is_empty());
    }

    #[test]
    fn blank_fields_are_rejected() {
        assert!(draft("", "ana@x.com").validate().is_err());
        assert!(draft("Ana", "").validate().is_err());
        assert!(draft("Ana", "   ").validate().is_err());
    }

    #[test]
    fn whitespace_name_passes_like_a_required_text_input() {
        assert!(draft("   ", "ana@x.com").validate().is_ok());
    }

    #[test]
    fn email_must_have_both_sides_of_at() {
        assert!(draft("Ana", "ana@x.com").validate().is_ok());
        assert!(draft("Ana", "ana").validate().is_err());
        assert!(draft("Ana", "@x.com").validate().is_err());
        assert!(draft("Ana", "ana@").validate().is_err());
        assert!(draft("Ana", "a@b@c").validate().is_err());
        assert!(draft("Ana", "an a@x.com").validate().is_err());
    }

    #[test]
    fn role_and_status_parse_their_option_values() {
        assert_eq!("Admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("inactive".parse::<Status>().unwrap(), Status::Inactive);
        assert!("admin".parse::<Role>().is_err());
        assert!("Active".parse::<Status>().is_err());
    }

    #[test]
    fn matches_name_or_email() {
        let users = seed_users();
        assert!(users[1].matches("irwan"));
        assert!(users[0].matches("john@"));
        assert!(!users[0].matches("irwan"));
        assert!(users[2].matches(""));
    }

    #[test]
    fn draft_round_trips_through_user_keeping_id() {
        let users = seed_users();
        let user = users[1].clone();
        let restored = UserDraft::from(&user).into_user(user.id);
        assert_eq!(restored, user);
    }
}
