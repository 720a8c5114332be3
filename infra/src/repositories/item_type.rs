use once_cell::sync::Lazy;

use domain::{
    DomainResult,
    convert::CodedEnum as _,
    models::{
        ItemType, ItemTypeDetail, ItemTypeName,
        primitives::{Description, DisplayOrder},
    },
    repositories::LookupRepository,
};

/// 物件項目の種類の説明
fn description(item_type: ItemType) -> &'static str {
    match item_type {
        ItemType::Room => "Rooms leased to tenants",
        ItemType::Facility => "Facilities shared by the residents of an apartment",
        ItemType::Appliance => "Appliances furnished in a room",
    }
}

/// 物件項目の種類の詳細
///
/// 列挙型の定義順を表示順とする。
static ITEM_TYPE_DETAILS: Lazy<Vec<ItemTypeDetail>> = Lazy::new(|| {
    ItemType::variants()
        .iter()
        .zip(1..)
        .map(|(&code, display_order)| ItemTypeDetail {
            code,
            name: ItemTypeName(code.name().to_string()),
            description: Some(Description(description(code).to_string())),
            display_order: DisplayOrder(display_order),
        })
        .collect()
});

/// 物件項目の種類リポジトリ
///
/// 物件項目の種類は列挙型で閉じているため、プロセス内の表から返す。
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticItemTypeRepository;

#[async_trait::async_trait]
impl LookupRepository for StaticItemTypeRepository {
    type Entity = ItemTypeDetail;
    type Code = ItemType;

    async fn list(&self) -> DomainResult<Vec<Self::Entity>> {
        Ok(ITEM_TYPE_DETAILS.clone())
    }

    async fn by_code(&self, code: &Self::Code) -> DomainResult<Option<Self::Entity>> {
        Ok(ITEM_TYPE_DETAILS
            .iter()
            .find(|detail| detail.code == *code)
            .cloned())
    }
}
