use serde::{Deserialize, Serialize};

/// Профиль пользователя из `initDataUnsafe.user` хост-приложения.
///
/// Мост отдаёт больше полей, чем нужно витрине; лишние игнорируются.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelegramUser {
    #[serde(default)]
    pub id: Option<i64>,
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_full_bridge_payload() {
        let json = r#"{
            "id": 123456789,
            "first_name": "Иван",
            "last_name": "Иванов",
            "username": "ivanov",
            "language_code": "ru",
            "is_premium": true
        }"#;
        let user: TelegramUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.first_name, "Иван");
        assert_eq!(user.id, Some(123456789));
        assert_eq!(user.username.as_deref(), Some("ivanov"));
    }

    #[test]
    fn first_name_alone_is_enough() {
        let user: TelegramUser = serde_json::from_str(r#"{"first_name": "Иван"}"#).unwrap();
        assert_eq!(user.first_name, "Иван");
        assert_eq!(user.id, None);
        assert_eq!(user.last_name, None);
    }
}
