use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub(crate) type UserId = i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub(crate) enum Role {
    #[display("STAFF")]
    Staff,
    #[display("CUSTOMER")]
    Customer,
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "STAFF" => Ok(Self::Staff),
            "CUSTOMER" => Ok(Self::Customer),
            s => Err(format!("Invalid Role: {s}")),
        }
    }
}

/// Client-held proof of authentication plus identity.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Session {
    pub token: String,
    pub username: Option<String>,
    pub role: Option<Role>,
    pub user_id: Option<UserId>,
}

impl Session {
    pub fn is_staff(&self) -> bool {
        self.role == Some(Role::Staff)
    }
}
