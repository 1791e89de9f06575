use crate::api::user_management::models::{Credentials, NewUser};
use crate::api::Message;
use crate::auth::password;
use crate::db::DbConn;
use crate::error::{ErrorCode, ErrorResponse};
use crate::schema;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;

#[post("/register", data = "<credentials>")]
pub(crate) async fn register(
    credentials: Json<Credentials>,
    conn: DbConn,
) -> Result<status::Custom<Json<Message>>, ErrorResponse> {
    let credentials = credentials.into_inner();

    if credentials.username.trim().is_empty() || credentials.password.is_empty() {
        return Err(ErrorResponse::new(
            ErrorCode::ValidationError,
            "Username and password must not be empty.",
        ));
    }

    let password_hash = password::hash_password(&credentials.password)
        .map_err(|err| ErrorResponse::storage("create the user", err))?;

    let new_user = NewUser {
        username: credentials.username,
        password_hash,
    };

    conn.run(move |c| {
        use schema::users::dsl::*;

        diesel::insert_into(users).values(&new_user).execute(c)
    })
    .await
    .map_err(|err| match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => ErrorResponse::new(
            ErrorCode::DuplicateEntity,
            "A user with that username already exists.",
        ),
        err => ErrorResponse::storage("create the user", err),
    })?;

    Ok(status::Custom(
        Status::Created,
        Json(Message::new("User created successfully.")),
    ))
}
