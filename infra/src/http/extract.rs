//! リクエストに含まれるコードの束縛
//!
//! パスやクエリのコードは文字列のまま受け取り、[`AppState`]に登録された変換器で
//! 型付きの値に変換する。変換できない場合は`400 Bad Request`で応答する。
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use domain::convert::{CodedEnum, ConverterRegistry};

use crate::{
    AppState,
    http::{ApiError, ApiResult, bad_request},
};

/// パスに含まれるコードを変換した値
#[derive(Debug, Clone, Copy)]
pub struct CodedPath<T: 'static>(pub &'static T);

impl<T> FromRequestParts<AppState> for CodedPath<T>
where
    T: CodedEnum,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Path(code) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| bad_request(e.body_text().into()))?;
        convert_code(&state.converters, &code).map(Self)
    }
}

/// 文字列のコードを変換する。
pub fn convert_code<T>(converters: &ConverterRegistry, code: &str) -> ApiResult<&'static T>
where
    T: CodedEnum,
{
    converters.convert::<T>(code).map_err(|e| {
        tracing::warn!(code, error = %e, "Rejected a code");
        ApiError::from(e)
    })
}

/// 文字列のコードをすべて変換する。
///
/// 変換できないコードが一つでもある場合は、最初のエラーを返す。
pub fn convert_codes<T>(converters: &ConverterRegistry, codes: &[String]) -> ApiResult<Vec<T>>
where
    T: CodedEnum,
{
    codes
        .iter()
        .map(|code| convert_code::<T>(converters, code).copied())
        .collect()
}
