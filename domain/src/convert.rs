//! 文字列のコードから、コード付き列挙型への変換
//!
//! リクエストのパスやクエリに含まれるコードは文字列で渡されるため、
//! 整数として解釈した後に、列挙型の定義順に一致するバリアントを探す。
//!
//! 変換器は[`ConverterRegistry`]に明示的に登録して、起動時に一度だけ構築する。
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::num::ParseIntError;

/// 整数のコードを持つ、閉じた列挙型
pub trait CodedEnum: Copy + Send + Sync + 'static {
    /// 定義順に並んだすべてのバリアント
    ///
    /// バリアントはプロセス全体で共有される定数で、`static`に配置されていなければならない。
    fn variants() -> &'static [Self];

    /// コード
    fn code(&self) -> i32;

    /// 名前
    fn name(&self) -> &'static str;
}

/// 変換エラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// 整数として解釈できない
    #[error("code:{code} is not a valid integer")]
    Format {
        code: String,
        #[source]
        source: ParseIntError,
    },

    /// 一致するバリアントが存在しない
    #[error("code:{code} is invalid")]
    InvalidArgument { code: String },

    /// 変換先の型に対する変換器が登録されていない
    #[error("no converter is registered for {target}")]
    NotRegistered { target: &'static str },
}

/// 十進数字の`0`の符号位置
///
/// 各符号位置から連続する10文字が`0`から`9`を表す。
/// 全角数字など、ASCII以外の十進数字もコードとして受け付ける。
const DECIMAL_DIGIT_ZEROS: &[u32] = &[
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x11066, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC,
    0x1D7F6,
];

/// 十進数字をASCII数字に置き換える。十進数字でない場合は`None`を返す。
fn ascii_digit(ch: char) -> Option<char> {
    let code_point = ch as u32;
    DECIMAL_DIGIT_ZEROS
        .iter()
        .find_map(|zero| code_point.checked_sub(*zero).filter(|digit| *digit < 10))
        .and_then(|digit| char::from_digit(digit, 10))
}

/// 文字列のコードを整数として解釈する。
///
/// 符号は`+`または`-`のみで、前後の空白は許さない。
fn parse_code(code: &str) -> Result<i32, ParseIntError> {
    code.chars()
        .map(|ch| ascii_digit(ch).unwrap_or(ch))
        .collect::<String>()
        .parse::<i32>()
}

/// 整数のコードに一致するバリアントを返す。
///
/// 定義順で最初にコードが一致したバリアントへの参照を返す。
pub fn from_code<T: CodedEnum>(value: i32) -> Option<&'static T> {
    T::variants().iter().find(|variant| variant.code() == value)
}

/// 文字列のコードに一致するバリアントを返す。
///
/// # 引数
///
/// * `code`: 整数を表す文字列
///
/// # 戻り値
///
/// 定義順で最初にコードが一致したバリアントへの参照
pub fn resolve<T: CodedEnum>(code: &str) -> Result<&'static T, ConvertError> {
    let value = parse_code(code).map_err(|source| ConvertError::Format {
        code: code.to_string(),
        source,
    })?;
    from_code(value).ok_or_else(|| ConvertError::InvalidArgument {
        code: code.to_string(),
    })
}

type Converter = fn(&str) -> Result<&'static (dyn Any + Send + Sync), ConvertError>;

fn erased_resolve<T: CodedEnum>(code: &str) -> Result<&'static (dyn Any + Send + Sync), ConvertError> {
    resolve::<T>(code).map(|variant| variant as &'static (dyn Any + Send + Sync))
}

/// 変換元と変換先の型の組
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ConverterKey {
    source: TypeId,
    target: TypeId,
}

impl ConverterKey {
    fn text_to<T: 'static>() -> Self {
        Self {
            source: TypeId::of::<str>(),
            target: TypeId::of::<T>(),
        }
    }
}

/// 変換器レジストリ
///
/// 文字列から変換先の型への変換器を、型の組をキーに保持する。
/// 構築後は読み取り専用で、スレッド間で共有できる。
#[derive(Default)]
pub struct ConverterRegistry {
    converters: HashMap<ConverterKey, Converter>,
}

impl std::fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConverterRegistry")
            .field("converters", &self.converters.len())
            .finish()
    }
}

impl ConverterRegistry {
    /// 空のレジストリを作成する。
    pub fn new() -> Self {
        Self::default()
    }

    /// ドメインのすべてのコード付き列挙型を登録したレジストリを作成する。
    pub fn with_domain_enums() -> Self {
        Self::new().with_coded_enum::<crate::models::ItemType>()
    }

    /// コード付き列挙型の変換器を登録したレジストリを返す。
    pub fn with_coded_enum<T: CodedEnum>(mut self) -> Self {
        self.register_coded_enum::<T>();
        self
    }

    /// コード付き列挙型の変換器を登録する。
    ///
    /// 既に登録されている場合は置き換える。
    pub fn register_coded_enum<T: CodedEnum>(&mut self) -> &mut Self {
        self.converters
            .insert(ConverterKey::text_to::<T>(), erased_resolve::<T>);
        self
    }

    /// 変換先の型の変換器が登録されているか確認する。
    pub fn contains<T: 'static>(&self) -> bool {
        self.converters.contains_key(&ConverterKey::text_to::<T>())
    }

    /// 登録された変換器で、文字列を変換先の型に変換する。
    pub fn convert<T: 'static>(&self, code: &str) -> Result<&'static T, ConvertError> {
        let not_registered = || ConvertError::NotRegistered {
            target: std::any::type_name::<T>(),
        };
        let converter = self
            .converters
            .get(&ConverterKey::text_to::<T>())
            .ok_or_else(not_registered)?;
        converter(code)?.downcast_ref::<T>().ok_or_else(not_registered)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::models::ItemType;

    #[rstest::rstest]
    #[case("1", ItemType::Room)]
    #[case("2", ItemType::Facility)]
    #[case("3", ItemType::Appliance)]
    #[case("+2", ItemType::Facility)]
    #[case("003", ItemType::Appliance)]
    #[case("１", ItemType::Room)]
    #[case("２", ItemType::Facility)]
    #[case("+３", ItemType::Appliance)]
    #[case("\u{0661}", ItemType::Room)]
    #[case("\u{0968}", ItemType::Facility)]
    fn resolve_returns_matching_variant(#[case] code: &str, #[case] expected: ItemType) {
        assert_eq!(*resolve::<ItemType>(code).unwrap(), expected);
    }

    #[rstest::rstest]
    #[case("99")]
    #[case("0")]
    #[case("-1")]
    #[case("2147483647")]
    #[case("９９")]
    #[case("1０")]
    #[case("-１")]
    fn resolve_fails_with_invalid_argument_for_unknown_code(#[case] code: &str) {
        let error = resolve::<ItemType>(code).unwrap_err();
        assert!(
            matches!(&error, ConvertError::InvalidArgument { code: c } if c == code),
            "unexpected error: {:?}",
            error
        );
        assert!(error.to_string().contains(code));
    }

    #[rstest::rstest]
    #[case("abc")]
    #[case("")]
    #[case(" 1")]
    #[case("1 ")]
    #[case("1.0")]
    #[case("0x1")]
    #[case("2147483648")]
    #[case("２１４７４８３６４８")]
    #[case("１.０")]
    #[case("一")]
    fn resolve_fails_with_format_error_for_malformed_code(#[case] code: &str) {
        let error = resolve::<ItemType>(code).unwrap_err();
        assert!(
            matches!(&error, ConvertError::Format { code: c, .. } if c == code),
            "unexpected error: {:?}",
            error
        );
    }

    #[test]
    fn format_error_names_out_of_range_literal() {
        let error = resolve::<ItemType>("2147483648").unwrap_err();
        assert_eq!(error.to_string(), "code:2147483648 is not a valid integer");
    }

    #[rstest::rstest]
    #[case(1, Some(ItemType::Room))]
    #[case(3, Some(ItemType::Appliance))]
    #[case(0, None)]
    #[case(99, None)]
    fn from_code_returns_matching_variant(#[case] value: i32, #[case] expected: Option<ItemType>) {
        assert_eq!(from_code::<ItemType>(value).copied(), expected);
    }

    #[test]
    fn resolve_returns_shared_variant() {
        let room = resolve::<ItemType>("1").unwrap();
        assert!(std::ptr::eq(room, &ItemType::variants()[0]));
        let again = resolve::<ItemType>("1").unwrap();
        assert!(std::ptr::eq(room, again));
    }

    #[test]
    fn resolve_is_idempotent() {
        for code in ["1", "2", "3", "99", "abc", ""] {
            assert_eq!(resolve::<ItemType>(code), resolve::<ItemType>(code));
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Duplicated {
        First,
        Second,
        Third,
    }

    static DUPLICATED: [Duplicated; 3] =
        [Duplicated::First, Duplicated::Second, Duplicated::Third];

    impl CodedEnum for Duplicated {
        fn variants() -> &'static [Self] {
            &DUPLICATED
        }

        fn code(&self) -> i32 {
            match self {
                Duplicated::First => 1,
                Duplicated::Second => 2,
                Duplicated::Third => 2,
            }
        }

        fn name(&self) -> &'static str {
            "duplicated"
        }
    }

    #[test]
    fn resolve_returns_first_match_in_definition_order() {
        assert_eq!(*resolve::<Duplicated>("2").unwrap(), Duplicated::Second);
    }

    #[test]
    fn resolve_from_many_threads() {
        let handles = (0..8)
            .map(|i| {
                std::thread::spawn(move || {
                    let code = (i % 3 + 1).to_string();
                    (0..1_000)
                        .map(|_| resolve::<ItemType>(&code).unwrap().code())
                        .all(|c| c.to_string() == code)
                })
            })
            .collect::<Vec<_>>();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }

    #[test]
    fn registry_converts_registered_enum() {
        let registry = ConverterRegistry::with_domain_enums();
        assert!(registry.contains::<ItemType>());
        for code in ["1", "2", "3", "99", "abc", ""] {
            assert_eq!(registry.convert::<ItemType>(code), resolve::<ItemType>(code));
        }
    }

    #[test]
    fn registry_fails_for_unregistered_target() {
        let registry = ConverterRegistry::new();
        assert!(!registry.contains::<ItemType>());
        let error = registry.convert::<ItemType>("1").unwrap_err();
        assert!(matches!(error, ConvertError::NotRegistered { target } if target.ends_with("ItemType")));
    }

    #[test]
    fn registry_keeps_targets_apart() {
        let mut registry = ConverterRegistry::new();
        registry
            .register_coded_enum::<ItemType>()
            .register_coded_enum::<Duplicated>();
        assert_eq!(*registry.convert::<Duplicated>("1").unwrap(), Duplicated::First);
        assert_eq!(*registry.convert::<ItemType>("1").unwrap(), ItemType::Room);
        assert!(registry.convert::<u8>("1").is_err());
    }

    #[test]
    fn registry_is_shareable_between_threads() {
        let registry = Arc::new(ConverterRegistry::with_domain_enums());
        let handles = ["1", "2", "3"]
            .into_iter()
            .map(|code| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || *registry.convert::<ItemType>(code).unwrap())
            })
            .collect::<Vec<_>>();
        let resolved = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(
            resolved,
            vec![ItemType::Room, ItemType::Facility, ItemType::Appliance]
        );
    }
}
