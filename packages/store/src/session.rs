//! Session-validity state machine.
//!
//! [`SessionState`] tracks whether the stored credentials have been checked
//! against the server and what the verdict was. The machine starts at
//! [`SessionPhase::Unknown`] (the app shell renders but protected content
//! waits), transitions exactly once to a terminal phase, and stays there until
//! an explicit login/logout event calls [`SessionState::reset`].
//!
//! The type is generic over the user payload so it carries no dependency on
//! the wire types; the `ui` crate instantiates it with the API's `UserInfo`.

use crate::time::now_millis;

/// Where the session check currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Validation has not completed yet; treat as loading.
    Unknown,
    /// Server confirmed the stored session.
    Authenticated,
    /// Server rejected the session, or the check failed (fail closed).
    Unauthenticated,
}

/// Shared session slice. Owned by the auth provider; everything else reads.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState<U> {
    pub user: Option<U>,
    pub phase: SessionPhase,
    /// Millis timestamp of the last completed check.
    pub checked_at: Option<u64>,
}

impl<U> Default for SessionState<U> {
    fn default() -> Self {
        Self {
            user: None,
            phase: SessionPhase::Unknown,
            checked_at: None,
        }
    }
}

impl<U> SessionState<U> {
    pub fn new() -> Self {
        Self::default()
    }

    /// True until the first validation verdict lands.
    pub fn is_loading(&self) -> bool {
        self.phase == SessionPhase::Unknown
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase == SessionPhase::Authenticated
    }

    /// Apply the server's verdict. `Some(user)` means the session is valid.
    ///
    /// Only applies while the phase is still [`SessionPhase::Unknown`]; once a
    /// terminal phase is reached, later verdicts are ignored so a duplicated
    /// in-flight check cannot flip settled state. Returns whether the verdict
    /// was applied.
    pub fn resolve(&mut self, user: Option<U>) -> bool {
        if self.phase != SessionPhase::Unknown {
            return false;
        }
        self.phase = if user.is_some() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Unauthenticated
        };
        self.user = user;
        self.checked_at = Some(now_millis());
        true
    }

    /// Transport-level failure during validation: fail closed.
    pub fn fail(&mut self) -> bool {
        self.resolve(None)
    }

    /// Re-arm the machine after an external login/logout event.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state_is_loading() {
        let state = SessionState::<String>::new();
        assert!(state.is_loading());
        assert!(!state.is_authenticated());
        assert!(state.user.is_none());
        assert!(state.checked_at.is_none());
    }

    #[test]
    fn test_valid_verdict_authenticates() {
        let mut state = SessionState::new();
        assert!(state.resolve(Some("alice".to_string())));

        assert!(!state.is_loading());
        assert!(state.is_authenticated());
        assert_eq!(state.user.as_deref(), Some("alice"));
        assert!(state.checked_at.is_some());
    }

    #[test]
    fn test_invalid_verdict_ends_unauthenticated() {
        let mut state = SessionState::<String>::new();
        assert!(state.resolve(None));

        assert!(!state.is_loading());
        assert!(!state.is_authenticated());
        assert!(state.user.is_none());
    }

    #[test]
    fn test_transport_failure_fails_closed() {
        let mut state = SessionState::<String>::new();
        state.fail();

        assert_eq!(state.phase, SessionPhase::Unauthenticated);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_terminal_phase_ignores_late_verdicts() {
        let mut state = SessionState::new();
        state.resolve(Some("alice".to_string()));

        // A duplicated check resolving afterwards must not flip the state.
        assert!(!state.resolve(None));
        assert!(state.is_authenticated());
        assert_eq!(state.user.as_deref(), Some("alice"));
    }

    #[test]
    fn test_reset_rearms_the_machine() {
        let mut state = SessionState::new();
        state.resolve(Some("alice".to_string()));

        state.reset();
        assert!(state.is_loading());
        assert!(state.user.is_none());

        // After re-arm, a new verdict applies again.
        assert!(state.resolve(None));
        assert!(!state.is_authenticated());
    }
}
