use chrono::Utc;
use std::thread;
use std::time::Duration;

use crate::models::User;

/// Simulated network latency for login/signup, matching the original demo
const MOCK_LATENCY: Duration = Duration::from_secs(1);

/// Mock identity provider.
///
/// There is no real authentication: login and signup block for a simulated
/// round-trip and then fabricate a user record. The rest of the system only
/// reads `current_user` to pre-fill quote/cart forms; no catalog or cart
/// invariant depends on auth state.
pub struct MockAuth {
    current: Option<User>,
    latency: Duration,
}

impl MockAuth {
    /// Provider with the demo's 1 second simulated delay
    pub fn new() -> Self {
        Self::with_latency(MOCK_LATENCY)
    }

    /// Provider with a custom delay (tests pass `Duration::ZERO`)
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            current: None,
            latency,
        }
    }

    /// "Logs in": accepts any password and fabricates a user whose display
    /// name is the local part of the email.
    pub fn login(&mut self, email: &str, _password: &str) -> User {
        thread::sleep(self.latency);

        let name = match email.split_once('@') {
            Some((local, _)) => local,
            None => email,
        };
        let user = User {
            id: "1".to_string(),
            email: email.to_string(),
            name: name.to_string(),
        };

        self.current = Some(user.clone());
        user
    }

    /// "Signs up": fabricates a user with a timestamp-derived id
    pub fn signup(&mut self, name: &str, email: &str, _password: &str) -> User {
        thread::sleep(self.latency);

        let user = User {
            id: Utc::now().timestamp_millis().to_string(),
            email: email.to_string(),
            name: name.to_string(),
        };

        self.current = Some(user.clone());
        user
    }

    /// Clears the session
    pub fn logout(&mut self) {
        self.current = None;
    }

    /// The signed-in user, if any
    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }
}

impl Default for MockAuth {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth() -> MockAuth {
        MockAuth::with_latency(Duration::ZERO)
    }

    #[test]
    fn test_login_derives_name_from_email_local_part() {
        let mut auth = auth();
        let user = auth.login("jane.doe@example.com", "hunter2");

        assert_eq!(user.name, "jane.doe");
        assert_eq!(user.email, "jane.doe@example.com");
        assert_eq!(user.id, "1");
        assert!(auth.is_authenticated());
        assert_eq!(auth.current_user(), Some(&user));
    }

    #[test]
    fn test_login_without_at_sign_uses_whole_email_as_name() {
        let mut auth = auth();
        let user = auth.login("not-an-email", "pw");
        assert_eq!(user.name, "not-an-email");
    }

    #[test]
    fn test_signup_uses_given_name() {
        let mut auth = auth();
        let user = auth.signup("Jane Doe", "jane@example.com", "pw");

        assert_eq!(user.name, "Jane Doe");
        assert_eq!(user.email, "jane@example.com");
        assert!(!user.id.is_empty());
        assert!(auth.is_authenticated());
    }

    #[test]
    fn test_logout_clears_session() {
        let mut auth = auth();
        auth.login("jane@example.com", "pw");
        auth.logout();

        assert!(!auth.is_authenticated());
        assert!(auth.current_user().is_none());
    }
}
