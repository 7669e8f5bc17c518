use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    #[serde(alias = "access_token")]
    pub token: String,
    #[serde(default)]
    pub user: Option<UserInfo>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UserInfo {
    pub email: String,
}

/// Sesión autenticada (única, sin roles)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Session {
    pub token: String,
    pub email: String,
    /// true: se persiste en localStorage; false: solo sessionStorage
    #[serde(default)]
    pub remember_me: bool,
}
