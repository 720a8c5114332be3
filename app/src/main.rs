use anyhow::Context as _;

use app::{bind_address, get_subscriber, init_subscriber, load_app_settings, routes::create_router};
use infra::AppState;

/// アプリケーションエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // アプリケーション設定を読み込み
    let app_settings = load_app_settings("app_settings.toml")?;

    // トレーシングを初期化
    let subscriber = get_subscriber(
        String::from("lease-admin"),
        app_settings.log.level,
        std::io::stdout,
    );
    init_subscriber(subscriber)?;
    tracing::info!(settings = ?app_settings, "App settings loaded");

    // ルーターを作成
    let (listener, port) = bind_address(&app_settings.http).await?;
    let app_state = AppState::new(app_settings);
    let router = create_router(app_state);

    // HTTPサーバーを起動
    tracing::info!(port, "HTTP server is running");
    axum::serve(listener, router)
        .await
        .context("Failed to start the HTTP server")?;

    Ok(())
}
