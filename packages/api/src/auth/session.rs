//! Cookie-backed session resolution.

use crate::db;
use crate::error::ApiError;
use crate::models::User;
use tower_sessions::Session;

/// Key for storing user ID in session.
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// What the raw session value holds, decided before touching the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SessionCredential {
    /// No session entry at all: anonymous visitor, nothing to clear.
    Missing,
    /// An entry is present but does not parse as a user id.
    Malformed,
    /// A well-formed user id; whether it maps to an account is up to the DB.
    UserId(uuid::Uuid),
}

pub(crate) fn classify_credential(raw: Option<&str>) -> SessionCredential {
    match raw {
        None => SessionCredential::Missing,
        Some(raw) => match uuid::Uuid::parse_str(raw) {
            Ok(id) => SessionCredential::UserId(id),
            Err(_) => SessionCredential::Malformed,
        },
    }
}

/// A stored credential must be cleared when it is present but cannot map to
/// an account: malformed, or well-formed with no matching row.
pub(crate) fn must_flush(credential: SessionCredential, account_found: bool) -> bool {
    match credential {
        SessionCredential::Missing => false,
        SessionCredential::Malformed => true,
        SessionCredential::UserId(_) => !account_found,
    }
}

/// Resolve the current session to an account, if any.
///
/// A session entry that no longer maps to a user row (deleted account,
/// malformed id) is flushed on the spot so the stale credential is cleared
/// from the cookie store, and `None` is returned rather than an error.
pub async fn session_user(session: &Session) -> Result<Option<User>, ApiError> {
    let raw: Option<String> = session
        .get(SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ApiError::Session(e.to_string()))?;

    let credential = classify_credential(raw.as_deref());

    let user: Option<User> = match credential {
        SessionCredential::UserId(user_uuid) => {
            let pool = db::pool().await?;
            sqlx::query_as("SELECT * FROM users WHERE id = $1")
                .bind(user_uuid)
                .fetch_optional(pool)
                .await?
        }
        _ => None,
    };

    if must_flush(credential, user.is_some()) {
        tracing::info!("stored session does not map to an account, clearing it");
        session
            .flush()
            .await
            .map_err(|e| ApiError::Session(e.to_string()))?;
    }

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_session_is_left_alone() {
        let credential = classify_credential(None);
        assert_eq!(credential, SessionCredential::Missing);
        assert!(!must_flush(credential, false));
    }

    #[test]
    fn test_unparseable_session_id_is_cleared() {
        let credential = classify_credential(Some("not-a-uuid"));
        assert_eq!(credential, SessionCredential::Malformed);
        assert!(must_flush(credential, false));
    }

    #[test]
    fn test_deleted_account_session_is_cleared() {
        let id = uuid::Uuid::new_v4();
        let credential = classify_credential(Some(&id.to_string()));
        assert_eq!(credential, SessionCredential::UserId(id));

        // Well-formed id, but the account row is gone: clear the credential.
        assert!(must_flush(credential, false));
    }

    #[test]
    fn test_live_session_is_kept() {
        let id = uuid::Uuid::new_v4();
        let credential = classify_credential(Some(&id.to_string()));
        assert!(!must_flush(credential, true));
    }
}
