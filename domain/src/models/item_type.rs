use std::str::FromStr;

use enum_display::EnumDisplay;
use garde::Validate as _;
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::convert::{CodedEnum, ConvertError, resolve};
use crate::models::primitives::{Description, DisplayOrder};
use crate::impl_string_primitive;

/// 物件項目の種類
///
/// JSONでは整数のコードで表現する。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr, EnumDisplay,
)]
#[enum_display(case = "Lower")]
#[repr(i32)]
pub enum ItemType {
    /// 部屋
    Room = 1,
    /// 設備
    Facility = 2,
    /// 家電
    Appliance = 3,
}

static ITEM_TYPES: [ItemType; 3] = [ItemType::Room, ItemType::Facility, ItemType::Appliance];

impl CodedEnum for ItemType {
    fn variants() -> &'static [Self] {
        &ITEM_TYPES
    }

    fn code(&self) -> i32 {
        *self as i32
    }

    fn name(&self) -> &'static str {
        match self {
            ItemType::Room => "Room",
            ItemType::Facility => "Facility",
            ItemType::Appliance => "Appliance",
        }
    }
}

impl ItemType {
    /// 文字列のコードに一致する物件項目の種類を返す。
    pub fn resolve(code: &str) -> Result<&'static ItemType, ConvertError> {
        resolve(code)
    }
}

impl FromStr for ItemType {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s).copied()
    }
}

/// 物件項目の種類名
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, garde::Validate)]
pub struct ItemTypeName(#[garde(length(chars, min = 1, max = 50))] pub String);
impl_string_primitive!(ItemTypeName);

/// 物件項目の種類の詳細
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemTypeDetail {
    /// 物件項目の種類コード
    pub code: ItemType,
    /// 物件項目の種類名
    pub name: ItemTypeName,
    /// 物件項目の種類の説明
    pub description: Option<Description>,
    /// 物件項目の種類の表示順
    pub display_order: DisplayOrder,
}
