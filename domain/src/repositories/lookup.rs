use crate::DomainResult;

/// ルックアップリポジトリ
///
/// コードで識別される、変更されないエンティティを提供する。
#[async_trait::async_trait]
pub trait LookupRepository {
    type Entity;
    type Code;

    /// 表示順に並んだすべてのエンティティを返す。
    async fn list(&self) -> DomainResult<Vec<Self::Entity>>;

    /// コードに一致するエンティティを返す。
    async fn by_code(&self, code: &Self::Code) -> DomainResult<Option<Self::Entity>>;
}
