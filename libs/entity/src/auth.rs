use serde::{Deserialize, Serialize};

use crate::user::User;

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// The first administrator registers with the same fields as everyone else.
pub type InitAdminRequest = RegisterRequest;
