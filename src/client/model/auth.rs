use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use crate::client::model::session::{Role, UserId};

#[derive(Debug, Serialize)]
pub(crate) struct AuthenticationRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AuthenticationResponse {
    pub jwt: String,
    pub username: String,
    #[serde(deserialize_with = "role_or_customer")]
    pub role: Role,
    pub user_id: UserId,
}

/// Any role the client does not know gets the customer pages.
fn role_or_customer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Role, D::Error> {
    let raw = String::deserialize(deserializer)?;
    Ok(raw.parse().unwrap_or_else(|e| {
        warn!("{}, treating the user as {}", e, Role::Customer);
        Role::Customer
    }))
}

#[derive(Debug, Serialize)]
pub(crate) struct RegistrationRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_role_reads_as_customer() {
        let auth: AuthenticationResponse =
            serde_json::from_str(r#"{"jwt":"j","username":"mo","role":"MANAGER","userId":3}"#).unwrap();
        assert_eq!(auth.role, Role::Customer);

        let auth: AuthenticationResponse =
            serde_json::from_str(r#"{"jwt":"j","username":"ravi","role":"staff","userId":2}"#).unwrap();
        assert_eq!(auth.role, Role::Staff);
    }
}
