use serde::{Deserialize, Deserializer};

/// カンマ区切りの文字列を、空白を除去した要素のベクタにデシリアライズする。
///
/// 値が存在しない場合と、空文字列の場合は`None`を返す。
/// 要素の解釈は呼び出し側で行うため、要素は文字列のまま返す。
///
/// ```text
/// ?codes=1,3   => Some(["1", "3"])
/// ?codes=      => None
/// ```
pub fn deserialize_option_split_comma<'de, D>(
    deserializer: D,
) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.and_then(|s| {
        let s = s.trim();
        if s.is_empty() {
            None
        } else {
            Some(s.split(',').map(|e| e.trim().to_string()).collect())
        }
    }))
}
