use crate::schema::users;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

#[derive(Queryable, Debug)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
}

#[derive(Insertable)]
#[table_name = "users"]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}

/// Outbound user body; never carries the password hash.
#[derive(Serialize)]
pub struct UserOut {
    pub id: i32,
    pub username: String,
}

#[derive(Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Serialize)]
pub struct AccessTokenOut {
    pub access_token: String,
}
