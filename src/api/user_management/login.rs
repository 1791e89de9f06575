use crate::api::user_management::models::{Credentials, TokenPair, User};
use crate::auth::password;
use crate::auth::tokens::TokenIssuer;
use crate::db::DbConn;
use crate::error::{ErrorCode, ErrorResponse};
use crate::schema;
use diesel::prelude::*;
use rocket::serde::json::Json;
use rocket::State;

#[post("/login", data = "<credentials>")]
pub(crate) async fn login(
    credentials: Json<Credentials>,
    conn: DbConn,
    issuer: &State<TokenIssuer>,
) -> Result<Json<TokenPair>, ErrorResponse> {
    let credentials = credentials.into_inner();
    let lookup = credentials.username.clone();

    let user = conn
        .run(move |c| {
            use schema::users::dsl::*;

            users
                .filter(username.eq(lookup))
                .first::<User>(c)
                .optional()
        })
        .await
        .map_err(|err| ErrorResponse::storage("log in", err))?;

    // Unknown username and wrong password collapse into the same error so
    // the endpoint can't be used to enumerate usernames.
    let user = match user {
        Some(user) if password::verify_password(&credentials.password, &user.password_hash) => {
            user
        }
        _ => {
            return Err(ErrorResponse::new(
                ErrorCode::InvalidCredentials,
                "Invalid credentials.",
            ))
        }
    };

    let access_token = issuer
        .issue_access(user.id, true)
        .map_err(|err| ErrorResponse::storage("log in", err))?;
    let refresh_token = issuer
        .issue_refresh(user.id)
        .map_err(|err| ErrorResponse::storage("log in", err))?;

    Ok(Json(TokenPair {
        access_token,
        refresh_token,
    }))
}
