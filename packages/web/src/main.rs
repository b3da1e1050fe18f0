use dioxus::prelude::*;

use ui::{AuthProvider, NotificationProvider};
use views::{
    AddLocation, Admin, Community, Feed, Home, LocationDetails, Profile, Shell,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/feed")]
        Feed {},
        #[route("/location/:id")]
        LocationDetails { id: String },
        #[route("/add?:lat&:lng")]
        AddLocation { lat: Option<f64>, lng: Option<f64> },
        #[route("/community")]
        Community {},
        #[route("/profile")]
        Profile {},
        #[route("/admin")]
        Admin {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .expect("failed to start tokio runtime")
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

    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let pool = api::db::get_pool()
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!("../api/migrations")
        .run(pool)
        .await
        .expect("Failed to run migrations");

    // Sessions live in the same Postgres instance as the app data.
    let session_store = PostgresStore::new(pool.clone());
    session_store
        .migrate()
        .await
        .expect("Failed to migrate session store");

    // secure(false) so local http works; front with TLS in production.
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(
            // 7 days of inactivity
            Duration::from_secs(60 * 60 * 24 * 7).try_into().unwrap(),
        ));

    let router = axum::Router::new()
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(session_layer);

    // Address from `dx serve`, falling back to localhost.
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind listener");
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .expect("Server crashed");
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            NotificationProvider {
                Router::<Route> {}
            }
        }
    }
}
