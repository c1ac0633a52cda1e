//! All UI state for the portal lives here, in one struct with explicit
//! transition methods. The components own no logic: they call a `begin_*`
//! method, get back a ticket if the action is allowed, run the network
//! call, and feed the outcome back through the matching completion method.
//!
//! Every ticket carries the session epoch at the time it was issued.
//! `logout` bumps the epoch, so a response that resolves after the user
//! has left the session is dropped instead of overwriting newer state.

use crate::model::{Profile, UserRecord, ViewMode};

pub const ERR_MISSING_FIELDS: &str = "Please enter both email and password";
pub const ERR_LOGIN_FALLBACK: &str = "Invalid email or password";
pub const ERR_USERS_FETCH: &str = "Failed to fetch users";

/// Ticket for an in-flight login + profile sequence.
#[derive(Clone, Debug)]
pub struct LoginAttempt {
    pub epoch: u64,
    pub email: String,
    pub password: String,
}

/// Ticket for an in-flight all-users fetch.
#[derive(Clone, Debug)]
pub struct ListAttempt {
    pub epoch: u64,
    pub token: String,
}

#[derive(Debug, Default)]
pub struct Session {
    email: String,
    password: String,
    token: Option<String>,
    profile: Option<Profile>,
    users: Vec<UserRecord>,
    show_all_users: bool,
    error: Option<String>,
    logging_in: bool,
    loading_users: bool,
    epoch: u64,
}

impl Session {
    pub fn mode(&self) -> ViewMode {
        match (&self.profile, self.show_all_users) {
            (None, _) => ViewMode::Login,
            (Some(_), false) => ViewMode::Profile,
            (Some(_), true) => ViewMode::AllUsers,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn logging_in(&self) -> bool {
        self.logging_in
    }

    pub fn loading_users(&self) -> bool {
        self.loading_users
    }

    pub fn is_admin(&self) -> bool {
        self.profile.as_ref().is_some_and(Profile::is_admin)
    }

    pub fn set_email(&mut self, email: String) {
        self.email = email;
    }

    pub fn set_password(&mut self, password: String) {
        self.password = password;
    }

    /// Validates the credentials and opens the login sequence. Returns
    /// `None` without touching the network when either field is empty.
    pub fn begin_login(&mut self) -> Option<LoginAttempt> {
        if self.email.is_empty() || self.password.is_empty() {
            self.error = Some(ERR_MISSING_FIELDS.to_owned());
            return None;
        }
        if self.logging_in {
            return None;
        }
        self.error = None;
        self.logging_in = true;
        Some(LoginAttempt {
            epoch: self.epoch,
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }

    /// Commits token and profile together, once both calls have resolved.
    /// A login whose profile fetch failed never reaches this point, so no
    /// token is ever stored without a profile to go with it.
    pub fn login_succeeded(&mut self, epoch: u64, token: String, profile: Profile) {
        if epoch != self.epoch {
            return;
        }
        self.token = Some(token);
        self.profile = Some(profile);
        self.error = None;
        self.logging_in = false;
    }

    pub fn login_failed(&mut self, epoch: u64, server_message: Option<String>) {
        if epoch != self.epoch {
            return;
        }
        self.error = Some(server_message.unwrap_or_else(|| ERR_LOGIN_FALLBACK.to_owned()));
        self.logging_in = false;
    }

    /// Opens the all-users fetch. Only an admin with a live token gets a
    /// ticket; the renderer never offers the action to anyone else, so a
    /// `None` here means the call was forged.
    pub fn begin_all_users(&mut self) -> Option<ListAttempt> {
        if !self.is_admin() || self.loading_users {
            return None;
        }
        let token = self.token.clone()?;
        self.loading_users = true;
        Some(ListAttempt {
            epoch: self.epoch,
            token,
        })
    }

    pub fn all_users_loaded(&mut self, epoch: u64, users: Vec<UserRecord>) {
        if epoch != self.epoch {
            return;
        }
        self.users = users;
        self.show_all_users = true;
        self.loading_users = false;
    }

    /// A failed fetch reports the error but stays on the profile screen.
    pub fn all_users_failed(&mut self, epoch: u64) {
        if epoch != self.epoch {
            return;
        }
        self.error = Some(ERR_USERS_FETCH.to_owned());
        self.loading_users = false;
    }

    /// Returns to the profile screen, keeping the fetched list so going
    /// back and forth does not re-fetch.
    pub fn back_to_profile(&mut self) {
        self.show_all_users = false;
    }

    /// Drops the whole session. The epoch bump invalidates any request
    /// still in flight.
    pub fn logout(&mut self) {
        let epoch = self.epoch + 1;
        *self = Session {
            epoch,
            ..Session::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(role: &str) -> Profile {
        Profile {
            name: "Jo".into(),
            email: "a@h.com".into(),
            phone: "555".into(),
            role: role.into(),
        }
    }

    fn user(id: u64, name: &str) -> UserRecord {
        serde_json::from_str(&format!(
            r#"{{"_id":{id},"name":"{name}","email":"x@h.com","phone":"0","role":"doctor"}}"#
        ))
        .unwrap()
    }

    fn logged_in(role: &str) -> Session {
        let mut session = Session::default();
        session.set_email("a@h.com".into());
        session.set_password("pw".into());
        let attempt = session.begin_login().unwrap();
        session.login_succeeded(attempt.epoch, "T1".into(), profile(role));
        session
    }

    #[test]
    fn empty_fields_never_issue_a_call() {
        let mut session = Session::default();
        session.set_email("a@h.com".into());
        assert!(session.begin_login().is_none());
        assert_eq!(session.error(), Some(ERR_MISSING_FIELDS));

        session.set_email(String::new());
        session.set_password("pw".into());
        assert!(session.begin_login().is_none());
        assert_eq!(session.error(), Some(ERR_MISSING_FIELDS));
        assert_eq!(session.mode(), ViewMode::Login);
    }

    #[test]
    fn successful_login_reaches_profile_and_clears_error() {
        let mut session = Session::default();
        session.set_email("a@h.com".into());
        session.set_password("wrong".into());
        let attempt = session.begin_login().unwrap();
        session.login_failed(attempt.epoch, None);
        assert_eq!(session.error(), Some(ERR_LOGIN_FALLBACK));

        session.set_password("pw".into());
        let attempt = session.begin_login().unwrap();
        assert!(session.logging_in());
        session.login_succeeded(attempt.epoch, "T1".into(), profile("admin"));
        assert_eq!(session.mode(), ViewMode::Profile);
        assert_eq!(session.error(), None);
        assert!(!session.logging_in());
    }

    #[test]
    fn failed_login_keeps_inputs_and_prefers_server_message() {
        let mut session = Session::default();
        session.set_email("a@h.com".into());
        session.set_password("pw".into());

        let attempt = session.begin_login().unwrap();
        session.login_failed(attempt.epoch, Some("Account disabled".into()));
        assert_eq!(session.mode(), ViewMode::Login);
        assert_eq!(session.error(), Some("Account disabled"));
        assert_eq!(session.email(), "a@h.com");
        assert_eq!(session.password(), "pw");

        let attempt = session.begin_login().unwrap();
        session.login_failed(attempt.epoch, None);
        assert_eq!(session.error(), Some(ERR_LOGIN_FALLBACK));
    }

    #[test]
    fn login_clears_previous_error_up_front() {
        let mut session = Session::default();
        session.set_email("a@h.com".into());
        session.set_password("pw".into());
        let attempt = session.begin_login().unwrap();
        session.login_failed(attempt.epoch, None);
        assert!(session.error().is_some());

        session.begin_login().unwrap();
        assert_eq!(session.error(), None);
    }

    #[test]
    fn duplicate_submission_is_rejected_while_pending() {
        let mut session = Session::default();
        session.set_email("a@h.com".into());
        session.set_password("pw".into());
        assert!(session.begin_login().is_some());
        assert!(session.begin_login().is_none());
    }

    #[test]
    fn all_users_ticket_is_admin_only() {
        let mut session = logged_in("doctor");
        assert!(session.begin_all_users().is_none());

        let mut session = logged_in("admin");
        let attempt = session.begin_all_users().unwrap();
        assert_eq!(attempt.token, "T1");
    }

    #[test]
    fn list_fetch_switches_mode_and_back_without_refetch() {
        let mut session = logged_in("admin");
        let attempt = session.begin_all_users().unwrap();
        session.all_users_loaded(attempt.epoch, vec![user(1, "Jo"), user(2, "Al")]);
        assert_eq!(session.mode(), ViewMode::AllUsers);
        assert_eq!(session.users().len(), 2);

        session.back_to_profile();
        assert_eq!(session.mode(), ViewMode::Profile);
        // List is retained for the next visit.
        assert_eq!(session.users().len(), 2);
    }

    #[test]
    fn failed_list_fetch_stays_on_profile() {
        let mut session = logged_in("admin");
        let attempt = session.begin_all_users().unwrap();
        session.all_users_failed(attempt.epoch);
        assert_eq!(session.mode(), ViewMode::Profile);
        assert_eq!(session.error(), Some(ERR_USERS_FETCH));
        assert!(!session.loading_users());
    }

    #[test]
    fn logout_resets_everything_from_any_mode() {
        let mut session = logged_in("admin");
        let attempt = session.begin_all_users().unwrap();
        session.all_users_loaded(attempt.epoch, vec![user(1, "Jo")]);
        assert_eq!(session.mode(), ViewMode::AllUsers);

        session.logout();
        assert_eq!(session.mode(), ViewMode::Login);
        assert_eq!(session.email(), "");
        assert_eq!(session.password(), "");
        assert_eq!(session.error(), None);
        assert!(session.users().is_empty());
        assert!(session.profile().is_none());
    }

    #[test]
    fn stale_completions_are_dropped() {
        let mut session = Session::default();
        session.set_email("a@h.com".into());
        session.set_password("pw".into());
        let attempt = session.begin_login().unwrap();

        // User gives up and logs out while the request is in flight.
        session.logout();
        session.login_succeeded(attempt.epoch, "T1".into(), profile("admin"));
        assert_eq!(session.mode(), ViewMode::Login);
        assert!(session.profile().is_none());

        session.login_failed(attempt.epoch, Some("too late".into()));
        assert_eq!(session.error(), None);
    }

    #[test]
    fn stale_list_completion_is_dropped() {
        let mut session = logged_in("admin");
        let attempt = session.begin_all_users().unwrap();
        session.logout();
        session.all_users_loaded(attempt.epoch, vec![user(1, "Jo")]);
        assert_eq!(session.mode(), ViewMode::Login);
        assert!(session.users().is_empty());
        session.all_users_failed(attempt.epoch);
        assert_eq!(session.error(), None);
    }
}
