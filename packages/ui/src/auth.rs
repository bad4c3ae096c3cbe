//! Authentication context and hooks for the UI.

use api::UserInfo;
use dioxus::prelude::*;
use store::SessionState;

/// Session slice shared through context; see [`store::SessionState`] for the
/// state machine itself.
pub type AuthState = SessionState<UserInfo>;

/// Get the current authentication state.
/// Returns a signal that updates once the session check completes.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that runs the session check once per mount.
/// Wrap your app with this component to enable authentication.
///
/// The check is fire-and-forget: the spawned validation writes its verdict
/// into the shared signal and nothing holds a handle to it or polls for a
/// return value. A transport failure fails closed to unauthenticated.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Validate the stored session on mount
    let _ = use_resource(move || async move {
        match api::validate_session().await {
            Ok(user) => {
                auth_state.write().resolve(user);
            }
            Err(e) => {
                tracing::warn!("session validation failed, treating as signed out: {e}");
                auth_state.write().fail();
            }
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Gate for protected views.
///
/// Renders nothing while the session check is still in flight (the shell
/// around it stays interactive) and bounces to `/login` once the verdict is
/// unauthenticated. Views never trigger validation themselves; they only read
/// the shared state.
#[component]
pub fn RequireAuth(children: Element) -> Element {
    let auth = use_auth();
    let state = auth();

    if state.is_loading() {
        return rsx! {};
    }
    if !state.is_authenticated() {
        redirect_to("/login");
        return rsx! {};
    }

    rsx! {
        {children}
    }
}

/// Button that redirects the browser to the external sign-in page.
#[component]
pub fn LoginButton(
    #[props(default = "Sign in".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut loading = use_signal(|| false);

    let onclick = move |_| async move {
        loading.set(true);
        match api::get_login_url().await {
            Ok(url) => {
                redirect_to(&url);
            }
            Err(e) => {
                tracing::error!("Failed to get login URL: {}", e);
                loading.set(false);
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            disabled: loading(),
            onclick: onclick,
            if loading() {
                "Loading..."
            } else {
                "{label}"
            }
        }
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();

    let onclick = move |_| async move {
        if let Ok(()) = api::logout().await {
            // Re-arm the session machine; the login page takes it from here.
            auth_state.write().reset();
            redirect_to("/login");
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

fn redirect_to(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("redirect to {path} skipped outside the browser");
    }
}
