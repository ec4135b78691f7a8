use serde::{Deserialize, Serialize};

/// Role attached to a signed-in account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Client,
    Admin,
    Other(String),
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        match s.as_str() {
            "client" => Role::Client,
            "admin" => Role::Admin,
            _ => Role::Other(s),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Client => "client".into(),
            Role::Admin => "admin".into(),
            Role::Other(s) => s,
        }
    }
}

/// Roles allowed into the customer account pages (orders, wishlist).
pub const ACCOUNT_ROLES: &[Role] = &[Role::Client, Role::Admin];

/// Roles allowed into the admin area.
pub const ADMIN_ROLES: &[Role] = &[Role::Admin];

/// The signed-in user, as returned by the login endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub username: String,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub access_token: Option<String>,
}

impl AuthSession {
    pub fn has_any_role(&self, allowed: &[Role]) -> bool {
        self.roles.iter().any(|role| allowed.contains(role))
    }
}

/// What the route guard should do for the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    /// Nobody is signed in: send them to the login page.
    LoginRequired,
    /// Signed in, but without any of the required roles.
    Forbidden,
}

pub fn check_access(session: Option<&AuthSession>, allowed: &[Role]) -> Access {
    match session {
        None => Access::LoginRequired,
        Some(s) if s.has_any_role(allowed) => Access::Granted,
        Some(_) => Access::Forbidden,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Generic `{ "message": "..." }` reply used by several endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(roles: &[&str]) -> AuthSession {
        AuthSession {
            username: "ana".into(),
            roles: roles.iter().map(|r| Role::from(r.to_string())).collect(),
            access_token: None,
        }
    }

    #[test]
    fn anonymous_users_must_log_in() {
        assert_eq!(check_access(None, ACCOUNT_ROLES), Access::LoginRequired);
        assert_eq!(check_access(None, ADMIN_ROLES), Access::LoginRequired);
    }

    #[test]
    fn clients_reach_account_pages_but_not_admin() {
        let client = session(&["client"]);
        assert_eq!(check_access(Some(&client), ACCOUNT_ROLES), Access::Granted);
        assert_eq!(check_access(Some(&client), ADMIN_ROLES), Access::Forbidden);
    }

    #[test]
    fn admins_reach_everything() {
        let admin = session(&["admin"]);
        assert_eq!(check_access(Some(&admin), ACCOUNT_ROLES), Access::Granted);
        assert_eq!(check_access(Some(&admin), ADMIN_ROLES), Access::Granted);
    }

    #[test]
    fn unknown_roles_are_forbidden() {
        let guest = session(&["guest"]);
        assert_eq!(check_access(Some(&guest), ACCOUNT_ROLES), Access::Forbidden);
        let nobody = session(&[]);
        assert_eq!(check_access(Some(&nobody), ACCOUNT_ROLES), Access::Forbidden);
    }

    #[test]
    fn decodes_login_response() {
        let json = r#"{"username":"ana","roles":["client"],"accessToken":"t0k"}"#;
        let s: AuthSession = serde_json::from_str(json).unwrap();
        assert_eq!(s.roles, vec![Role::Client]);
        assert_eq!(s.access_token.as_deref(), Some("t0k"));
    }
}
