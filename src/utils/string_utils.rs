//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

use serde::Deserialize;

/// 앞뒤 공백을 제거하고, 비어 있으면 `None`을 반환합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// 유니코드 문자와 공백만으로 이루어졌는지 확인합니다.
///
/// "São Paulo", "Zürich" 같은 이름은 허용되지만 숫자나 기호는 허용되지 않습니다.
pub fn is_letters_only(value: &str) -> bool {
    value.chars().all(|c| c.is_alphabetic() || c == ' ')
}

/// 사용자 입력을 MongoDB `$regex`에서 리터럴로 매칭되도록 이스케이프합니다.
pub fn escape_regex(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(
            c,
            '\\' | '.' | '+' | '*' | '?' | '(' | ')' | '|' | '[' | ']' | '{' | '}' | '^' | '$' | '#'
                | '-' | '/'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// serde 필드에서 빈 문자열을 `None`으로 취급하는 역직렬화 함수
///
/// ```rust,ignore
/// #[serde(default, deserialize_with = "deserialize_optional_string")]
/// pub description: Option<String>,
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}
