use dioxus::prelude::*;

use ui::AuthProvider;
use views::{
    Applications, CandidateDashboard, Jobs, Login, ManageRecruiters, RecruiterDashboard,
};

mod views;

/// Route table: logical route names mapped to URL paths. Consumed as pure
/// lookup data by navigation and guards; never mutated.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/jobs")]
    Jobs {},
    #[route("/candidate/dashboard")]
    CandidateDashboard {},
    #[route("/candidate/applications")]
    Applications {},
    #[route("/recruiter/dashboard")]
    RecruiterDashboard {},
    #[route("/admin/recruiters")]
    ManageRecruiters {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use std::time::Duration;
    use tower_sessions::cookie::SameSite;
    use tower_sessions::{Expiry, SessionManagerLayer};
    use tower_sessions_sqlx_store::PostgresStore;

    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();

    // Initialize database pool
    let pool = api::db::pool()
        .await
        .expect("Failed to connect to database");

    // Run migrations
    sqlx::migrate!("../api/migrations")
        .run(pool)
        .await
        .expect("Failed to run migrations");

    // Cookie-backed session store; this is where the bearer credential lives.
    // The store manages its own schema, separate from the app migrations.
    let session_store = PostgresStore::new(pool.clone());
    session_store
        .migrate()
        .await
        .expect("Failed to migrate session store");

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false) // Set to true in production with HTTPS
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(
            Duration::from_secs(60 * 60 * 24 * 7).try_into().unwrap(),
        )); // 7 days

    let router = axum::Router::new()
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(session_layer);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .unwrap();
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to the public job board.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Jobs {});
    rsx! {}
}
