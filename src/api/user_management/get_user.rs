use crate::api::user_management::models::{User, UserOut};
use crate::auth::guards::AccessToken;
use crate::db::DbConn;
use crate::error::{ErrorCode, ErrorResponse};
use crate::schema;
use diesel::prelude::*;
use diesel::result::Error as DieselError;
use rocket::serde::json::Json;

#[get("/user/<user_id>")]
pub(crate) async fn get_user(
    _token: AccessToken,
    user_id: i32,
    conn: DbConn,
) -> Result<Json<UserOut>, ErrorResponse> {
    let user = conn
        .run(move |c| {
            use schema::users::dsl::*;

            users.filter(id.eq(user_id)).first::<User>(c)
        })
        .await
        .map_err(|err| match err {
            DieselError::NotFound => ErrorResponse::new(ErrorCode::NotFound, "User not found."),
            err => ErrorResponse::storage("load the user", err),
        })?;

    Ok(Json(UserOut {
        id: user.id,
        username: user.username,
    }))
}
