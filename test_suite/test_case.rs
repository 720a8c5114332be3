use std::{thread::JoinHandle, time::Duration};

use tokio::sync::oneshot;

use infra::AppState;
use settings::AppSettings;

use crate::helpers::{TestApp, configure_test_app, init_tracing, spawn_app};

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnableTracing {
    Yes,
    No,
}

/// Test case for integration tests
///
/// ```ignore
/// #[tokio::test]
/// async fn integration_test_case_skeleton() {
///     let app_settings = load_app_settings_for_testing();
///     let test_case = TestCase::begin(app_settings, EnableTracing::No).await;
///
///     // Implement integration test logic here
///
///     test_case.end().await;
/// }
/// ```
pub struct TestCase {
    pub app_state: AppState,
    app_handle: JoinHandle<()>,
    shutdown_signal: oneshot::Sender<()>,
    pub http_client: reqwest::Client,
}

impl TestCase {
    pub async fn begin(app_settings: AppSettings, tracing: EnableTracing) -> Self {
        if tracing == EnableTracing::Yes {
            init_tracing();
        }
        let TestApp {
            app_settings,
            listener,
        } = configure_test_app(app_settings).await;
        let app_state = AppState::new(app_settings);
        let (app_handle, shutdown_signal) = spawn_app(app_state.clone(), listener);
        let http_client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap();
        Self {
            app_state,
            app_handle,
            shutdown_signal,
            http_client,
        }
    }

    pub async fn end(self) {
        self.shutdown_signal.send(()).unwrap();
        self.app_handle.join().unwrap();
    }

    pub fn origin(&self) -> String {
        self.app_state.app_settings.http.origin()
    }

    pub async fn item_type_list(&self, codes: Option<&str>) -> reqwest::Response {
        let uri = match codes {
            Some(codes) => format!("{}/item-types?codes={}", self.origin(), codes),
            None => format!("{}/item-types", self.origin()),
        };
        self.http_client.get(&uri).send().await.unwrap()
    }

    pub async fn item_type_by_code(&self, code: &str) -> reqwest::Response {
        let uri = format!("{}/item-types/{}", self.origin(), code);
        self.http_client.get(&uri).send().await.unwrap()
    }
}
