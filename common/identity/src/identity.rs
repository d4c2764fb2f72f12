use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Decoded user profile shared by the session store, route guard, and view
/// selection. Serialized with the backend's camelCase user field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_phone: Option<String>,
}

impl Identity {
    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format_is_camel_case() {
        let identity = Identity {
            id: "42".to_string(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Brown".to_string(),
            role: Role::Teacher,
            phone: None,
            family_phone: Some("555-0100".to_string()),
        };

        let value = serde_json::to_value(&identity).unwrap();
        assert_eq!(value["firstName"], "Alice");
        assert_eq!(value["familyPhone"], "555-0100");
        assert_eq!(value["role"], "teacher");
        assert!(value.get("phone").is_none());
    }
}
