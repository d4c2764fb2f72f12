use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_TEACHER: &str = "teacher";
pub const ROLE_STUDENT: &str = "student";

/// Dashboard role carried by every identity.
///
/// Parsing is the single case-normalization point for role strings arriving
/// from tokens, profile payloads, and configuration; rendering is always
/// lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Teacher,
    Student,
}

impl Role {
    /// Role granted when a token carries no usable realm role.
    pub const FALLBACK: Role = Role::Student;

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => ROLE_ADMIN,
            Role::Teacher => ROLE_TEACHER,
            Role::Student => ROLE_STUDENT,
        }
    }
}

#[derive(Debug, Clone, Error)]
#[error("unknown role '{0}'")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            ROLE_ADMIN => Ok(Role::Admin),
            ROLE_TEACHER => Ok(Role::Teacher),
            ROLE_STUDENT => Ok(Role::Student),
            _ => Err(UnknownRole(value.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalises_case() {
        assert_eq!("Admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("TEACHER".parse::<Role>().unwrap(), Role::Teacher);
        assert_eq!(" student ".parse::<Role>().unwrap(), Role::Student);
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "principal".parse::<Role>().expect_err("should reject");
        assert_eq!(err.0, "principal");
    }

    #[test]
    fn renders_lowercase() {
        assert_eq!(Role::Admin.to_string(), "admin");
        assert_eq!(
            serde_json::to_string(&Role::Teacher).unwrap(),
            "\"teacher\""
        );
    }

    #[test]
    fn deserialize_accepts_mixed_case() {
        let role: Role = serde_json::from_str("\"Student\"").unwrap();
        assert_eq!(role, Role::Student);
    }
}
