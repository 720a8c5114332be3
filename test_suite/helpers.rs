//! This module sets up the application server for integration tests
//!
//! Each test case loads `app_settings.toml` at the workspace root,
//! binds the HTTP server to a random port and runs it on a separate thread.
use std::{path::Path, thread::JoinHandle};

use once_cell::sync::Lazy;
use tokio::{net::TcpListener, sync::oneshot};

use app::{bind_address, get_subscriber, init_subscriber, load_app_settings, routes::create_router};
use infra::AppState;
use settings::AppSettings;

/// Tracing is initialized only once per test binary
static TRACING: Lazy<()> = Lazy::new(|| {
    let app_settings = load_app_settings_for_testing();
    let subscriber = get_subscriber(
        String::from("test"),
        app_settings.log.level,
        std::io::stdout,
    );
    init_subscriber(subscriber).unwrap();
});

pub fn init_tracing() {
    Lazy::force(&TRACING);
}

pub fn load_app_settings_for_testing() -> AppSettings {
    let dir = std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set");
    let path = Path::new(&dir).join("..").join("app_settings.toml");
    load_app_settings(path.as_os_str().to_str().unwrap()).unwrap()
}

pub struct TestApp {
    pub app_settings: AppSettings,
    pub listener: std::net::TcpListener,
}

pub async fn configure_test_app(mut app_settings: AppSettings) -> TestApp {
    // Specify a random port for the HTTP server to bind
    app_settings.http.port = 0;
    let (listener, port) = bind_address(&app_settings.http).await.unwrap();
    app_settings.http.port = port;

    // The listener is moved to the runtime of the server thread
    let listener = listener.into_std().unwrap();

    TestApp {
        app_settings,
        listener,
    }
}

/// Spawns the application server in a separate thread
///
/// Returns a tuple containing the thread handle and a sender to signal for graceful shutdown.
pub fn spawn_app(
    app_state: AppState,
    listener: std::net::TcpListener,
) -> (JoinHandle<()>, oneshot::Sender<()>) {
    let (close_tx, close_rx) = oneshot::channel();

    let handle = std::thread::spawn(|| run_server(app_state, listener, close_rx));
    (handle, close_tx)
}

/// Runs the application server with graceful shutdown support
fn run_server(app_state: AppState, listener: std::net::TcpListener, close_rx: oneshot::Receiver<()>) {
    let router = create_router(app_state);
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    rt.block_on(async move {
        let listener = TcpListener::from_std(listener).unwrap();
        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                _ = close_rx.await;
            })
            .await
            .unwrap();
    });
}

pub struct ResponseParts {
    /// ステータスコード
    pub status_code: reqwest::StatusCode,
    /// ボディ
    pub body: String,
}

pub async fn split_response(response: reqwest::Response) -> ResponseParts {
    let status_code = response.status();
    let body = response.text().await.unwrap();
    ResponseParts { status_code, body }
}
