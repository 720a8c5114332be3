use domain::{
    DomainResult,
    models::{ItemType, ItemTypeDetail},
    repositories::LookupRepository,
};

#[async_trait::async_trait]
pub trait LookupUseCase<R>
where
    R: LookupRepository + Sync,
    R::Code: Sync,
{
    fn repo(&self) -> &R;

    async fn list(&self) -> DomainResult<Vec<R::Entity>> {
        self.repo().list().await
    }

    async fn by_code(&self, code: &R::Code) -> DomainResult<Option<R::Entity>> {
        self.repo().by_code(code).await
    }
}

/// 物件項目の種類ユースケース
pub struct ItemTypeUseCase<R>
where
    R: LookupRepository<Entity = ItemTypeDetail, Code = ItemType>,
{
    pub repo: R,
}

impl<R> LookupUseCase<R> for ItemTypeUseCase<R>
where
    R: LookupRepository<Entity = ItemTypeDetail, Code = ItemType> + Send + Sync,
{
    fn repo(&self) -> &R {
        &self.repo
    }
}

impl<R> ItemTypeUseCase<R>
where
    R: LookupRepository<Entity = ItemTypeDetail, Code = ItemType> + Send + Sync,
{
    /// 指定されたコードの物件項目の種類を、表示順に返す。
    pub async fn list_by_codes(&self, codes: &[ItemType]) -> DomainResult<Vec<ItemTypeDetail>> {
        let details = self.repo.list().await?;
        Ok(details
            .into_iter()
            .filter(|detail| codes.contains(&detail.code))
            .collect())
    }
}
