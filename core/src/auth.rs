use serde::{Deserialize, Serialize};

/// The authenticated account, as the backend reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Process-wide holder of the current user session.
///
/// Held for the lifetime of the app and cleared on logout; there is no local
/// persistence and no automatic re-hydration from the backend.
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn new(user: Option<User>) -> Self {
        Self { user }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Drop the local session. The logout request itself is the store's job.
    pub fn clear(&mut self) {
        self.user = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_drops_user() {
        let mut session = Session::new(Some(User {
            id: "u1".to_string(),
            name: "Dana".to_string(),
            email: "dana@example.com".to_string(),
        }));
        assert!(session.is_authenticated());
        session.clear();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
    }
}
