use enum_display::EnumDisplay;
use serde::Deserialize;

/// アプリケーション設定
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    /// HTTPサーバー設定
    pub http: HttpSettings,
    /// ログ設定
    pub log: LogSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, EnumDisplay)]
#[serde(rename_all = "lowercase")]
#[enum_display(case = "Lower")]
pub enum HttpProtocol {
    /// HTTPプロトコル
    Http,
    /// HTTPSプロトコル
    Https,
}

/// HTTPサーバー設定
#[derive(Debug, Clone, Deserialize)]
pub struct HttpSettings {
    /// プロトコル
    pub protocol: HttpProtocol,
    /// ホスト名
    pub host: String,
    /// ポート番号
    pub port: u16,
}

/// ログ設定
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LogSettings {
    /// ログレベル
    pub level: log::Level,
}

impl HttpSettings {
    /// バインドするアドレス（ホスト名とポート番号）を返す。
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// オリジン（プロトコル、ホスト名及びポート番号）を返す。
    pub fn origin(&self) -> String {
        format!("{}://{}:{}", self.protocol, self.host, self.port)
    }
}
