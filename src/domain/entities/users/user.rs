//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! MongoDB `users` 컬렉션의 문서 구조와 1:1로 대응합니다.

use chrono::{NaiveDate, NaiveTime};
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// `password`에는 bcrypt 해시만 저장되며, 외부로 나가는 모든 응답은
/// [`crate::domain::dto::users::response::UserResponse`]를 거쳐 이 필드를 제외합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub first_name: String,
    pub last_name: String,
    /// 생년월일 (UTC 자정 기준)
    pub birth_date: DateTime,
    pub city: String,
    pub country: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 해시된 비밀번호
    pub password: String,
}

impl User {
    pub fn new(
        first_name: String,
        last_name: String,
        birth_date: NaiveDate,
        city: String,
        country: String,
        email: String,
        password_hash: String,
    ) -> Self {
        Self {
            id: None,
            first_name,
            last_name,
            birth_date: to_bson_date(birth_date),
            city,
            country,
            email,
            password: password_hash,
        }
    }

    /// ObjectId를 16진수 문자열로 반환합니다. 저장 전이면 빈 문자열입니다.
    pub fn id_string(&self) -> String {
        self.id.map(|id| id.to_hex()).unwrap_or_default()
    }

    /// 생년월일을 `DD/MM/YYYY` 형식으로 반환합니다.
    pub fn birth_date_display(&self) -> String {
        chrono::DateTime::from_timestamp_millis(self.birth_date.timestamp_millis())
            .map(|dt| dt.format("%d/%m/%Y").to_string())
            .unwrap_or_default()
    }
}

/// 달력 날짜를 UTC 자정의 BSON DateTime으로 변환합니다.
pub fn to_bson_date(date: NaiveDate) -> DateTime {
    DateTime::from_millis(date.and_time(NaiveTime::default()).and_utc().timestamp_millis())
}
