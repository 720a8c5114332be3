pub mod http;
pub mod repositories;

use std::sync::Arc;

use domain::convert::ConverterRegistry;
use settings::AppSettings;

#[derive(Clone)]
pub struct AppState {
    pub app_settings: AppSettings,
    /// リクエストの文字列を型付きの値に変換する変換器
    pub converters: Arc<ConverterRegistry>,
}

impl AppState {
    /// ドメインのすべての変換器を登録したアプリケーション状態を作成する。
    pub fn new(app_settings: AppSettings) -> Self {
        Self {
            app_settings,
            converters: Arc::new(ConverterRegistry::with_domain_enums()),
        }
    }
}
