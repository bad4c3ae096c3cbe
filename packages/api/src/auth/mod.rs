//! Session lookup and sign-in redirection.
//!
//! Credential issuance (login/register) lives with the external identity
//! provider; this module only resolves an existing cookie-backed session to
//! an account and builds the redirect URL that sends the browser out to the
//! provider.

#[cfg(feature = "server")]
mod session;

#[cfg(feature = "server")]
pub use session::{session_user, SESSION_USER_ID_KEY};

/// Build the external identity-provider URL the login page redirects to.
///
/// Reads `SSO_LOGIN_URL` from the environment; the provider is expected to
/// send the browser back with the session cookie established.
#[cfg(feature = "server")]
pub fn sso_login_url() -> Result<String, String> {
    std::env::var("SSO_LOGIN_URL").map_err(|_| "SSO_LOGIN_URL is not configured".to_string())
}
