//! Static-table authentication.
//!
//! Accounts are a fixed credential table checked with plain equality. There
//! is no hashing and no lockout; this exists to give demo sessions an
//! identity, not to protect anything.

use delta_core::entities::User;
use delta_core::enums::Role;
use delta_core::errors::CoreError;

use crate::store::DeltaStore;

/// One row of the static credential table.
pub struct TestUser {
    pub username: &'static str,
    pub password: &'static str,
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub role: Role,
}

pub const TEST_USERS: [TestUser; 2] = [
    TestUser {
        username: "demo_team1",
        password: "delta123",
        id: "u1",
        name: "Dr. Alex Rivera",
        email: "alex.rivera@uni.ac.uk",
        role: Role::ProgrammeChair,
    },
    TestUser {
        username: "demo_team2",
        password: "delta123",
        id: "u2",
        name: "Prof. Sarah Chen",
        email: "sarah.chen@uni.ac.uk",
        role: Role::ModuleLead,
    },
];

impl TestUser {
    #[must_use]
    pub fn to_user(&self) -> User {
        User {
            id: self.id.to_string(),
            name: self.name.to_string(),
            email: Some(self.email.to_string()),
            role: Some(self.role),
        }
    }
}

/// Resolve a user id against the credential table, for display joins.
#[must_use]
pub fn lookup_user(user_id: &str) -> Option<User> {
    TEST_USERS
        .iter()
        .find(|u| u.id == user_id)
        .map(TestUser::to_user)
}

impl DeltaStore {
    /// Log in against the static credential table and persist the session.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Auth`] when no row matches.
    pub fn login(&mut self, username: &str, password: &str) -> Result<User, CoreError> {
        let found = TEST_USERS
            .iter()
            .find(|u| u.username == username && u.password == password)
            .ok_or_else(|| CoreError::Auth("unknown username or wrong password".to_string()))?;
        let user = found.to_user();
        self.session = Some(user.clone());
        self.persist_session();
        Ok(user)
    }

    /// Clear the session. Logging out while logged out is a no-op.
    pub fn logout(&mut self) {
        self.session = None;
        self.persist_session();
    }

    /// The logged-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.session.as_ref()
    }

    /// The logged-in user, or an auth error for commands that require one.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Auth`] when no session exists.
    pub fn require_user(&self) -> Result<&User, CoreError> {
        self.session
            .as_ref()
            .ok_or_else(|| CoreError::Auth("not logged in".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::medium::MemoryMedium;
    use pretty_assertions::assert_eq;

    fn store() -> DeltaStore {
        DeltaStore::open(Box::new(MemoryMedium::new()), false).unwrap()
    }

    #[test]
    fn login_accepts_known_credentials() {
        let mut store = store();
        let user = store.login("demo_team1", "delta123").unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.role, Some(Role::ProgrammeChair));
        assert_eq!(store.current_user().map(|u| u.id.as_str()), Some("u1"));
    }

    #[test]
    fn login_rejects_wrong_password() {
        let mut store = store();
        assert!(store.login("demo_team1", "nope").is_err());
        assert!(store.current_user().is_none());
    }

    #[test]
    fn logout_is_idempotent() {
        let mut store = store();
        store.login("demo_team2", "delta123").unwrap();
        store.logout();
        assert!(store.current_user().is_none());
        store.logout();
        assert!(store.current_user().is_none());
    }

    #[test]
    fn session_survives_reopen() {
        let medium = MemoryMedium::new();
        // session is persisted under its own key, so a store reopened over
        // the same medium sees the login
        let mut store = DeltaStore::open(Box::new(medium), false).unwrap();
        store.login("demo_team2", "delta123").unwrap();
        // reuse the same backing map through a fresh medium snapshot
        let raw = crate::envelope::encode(std::slice::from_ref(
            store.current_user().unwrap(),
        ))
        .unwrap();
        let medium2 = MemoryMedium::new();
        medium2.insert(crate::keys::SESSION, &raw);
        let store2 = DeltaStore::open(Box::new(medium2), false).unwrap();
        assert_eq!(store2.current_user().map(|u| u.id.as_str()), Some("u2"));
    }
}
