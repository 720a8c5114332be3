use std::borrow::Cow;

pub mod convert;
pub mod models;
pub mod repositories;

use convert::ConvertError;

/// ドメインエラーの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainErrorKind {
    /// 検証エラー
    Validation,
    /// エンティティが存在しない
    NotFound,
    /// 予期しないエラー
    Unexpected,
}

/// ドメインエラー
#[derive(Debug, thiserror::Error)]
#[error("{}", .messages.join(", "))]
pub struct DomainError {
    /// エラーの種類
    pub kind: DomainErrorKind,
    /// エラーメッセージ
    pub messages: Vec<Cow<'static, str>>,
    /// 元になったエラー
    pub source: anyhow::Error,
}

/// ドメイン結果
pub type DomainResult<T> = Result<T, DomainError>;

/// メッセージからドメインエラーを作成する。
pub fn domain_error(kind: DomainErrorKind, message: impl Into<Cow<'static, str>>) -> DomainError {
    let message = message.into();
    DomainError {
        kind,
        messages: vec![message.clone()],
        source: anyhow::anyhow!(message),
    }
}

impl From<ConvertError> for DomainError {
    fn from(error: ConvertError) -> Self {
        let kind = match error {
            ConvertError::Format { .. } | ConvertError::InvalidArgument { .. } => {
                DomainErrorKind::Validation
            }
            ConvertError::NotRegistered { .. } => DomainErrorKind::Unexpected,
        };
        Self {
            kind,
            messages: vec![error.to_string().into()],
            source: error.into(),
        }
    }
}

fn starts_or_ends_with_whitespace(s: &str) -> bool {
    s.chars().next().is_some_and(|ch| ch.is_whitespace())
        || s.chars().last().is_some_and(|ch| ch.is_whitespace())
}
