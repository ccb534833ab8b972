//! Event Entity Implementation
//!
//! 요일로 태그된 사용자 일정 엔티티입니다. 모든 이벤트는 정확히 한 명의 소유자를 가집니다.

use std::fmt;
use std::str::FromStr;

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 이벤트에 지정할 수 있는 요일
///
/// 직렬화 시 항상 소문자 영문 이름(`"monday"`)을 사용합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Sunday,
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Sunday => "sunday",
            DayOfWeek::Monday => "monday",
            DayOfWeek::Tuesday => "tuesday",
            DayOfWeek::Wednesday => "wednesday",
            DayOfWeek::Thursday => "thursday",
            DayOfWeek::Friday => "friday",
            DayOfWeek::Saturday => "saturday",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 정확히 소문자 이름만 허용합니다. `"Monday"`는 유효하지 않습니다.
impl FromStr for DayOfWeek {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DayOfWeek::ALL
            .into_iter()
            .find(|day| day.as_str() == s)
            .ok_or(())
    }
}

/// 이벤트 엔티티
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub description: String,
    pub day_of_week: DayOfWeek,
    /// 소유자 ID
    pub user_id: ObjectId,
}

impl Event {
    pub fn new(description: String, day_of_week: DayOfWeek, user_id: ObjectId) -> Self {
        Self {
            id: None,
            description,
            day_of_week,
            user_id,
        }
    }

    pub fn is_owned_by(&self, user_id: &ObjectId) -> bool {
        &self.user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_of_week_parses_only_lowercase_names() {
        assert_eq!("monday".parse::<DayOfWeek>(), Ok(DayOfWeek::Monday));
        assert_eq!("saturday".parse::<DayOfWeek>(), Ok(DayOfWeek::Saturday));
        assert!("Monday".parse::<DayOfWeek>().is_err());
        assert!("funday".parse::<DayOfWeek>().is_err());
        assert!("".parse::<DayOfWeek>().is_err());
    }

    #[test]
    fn test_day_of_week_serializes_lowercase() {
        let json = serde_json::to_string(&DayOfWeek::Wednesday).unwrap();
        assert_eq!(json, "\"wednesday\"");
    }

    #[test]
    fn test_ownership() {
        let owner = ObjectId::new();
        let event = Event::new("Gym".to_string(), DayOfWeek::Monday, owner);

        assert!(event.is_owned_by(&owner));
        assert!(!event.is_owned_by(&ObjectId::new()));
    }
}
