use crate::api::Message;
use crate::auth::guards::FreshAccessToken;
use crate::db::DbConn;
use crate::error::{ErrorCode, ErrorResponse};
use crate::schema;
use diesel::prelude::*;
use rocket::serde::json::Json;

#[delete("/user/<user_id>")]
pub(crate) async fn delete_user(
    _token: FreshAccessToken,
    user_id: i32,
    conn: DbConn,
) -> Result<Json<Message>, ErrorResponse> {
    let deleted = conn
        .run(move |c| {
            use schema::users::dsl::*;

            diesel::delete(users.filter(id.eq(user_id))).execute(c)
        })
        .await
        .map_err(|err| ErrorResponse::storage("delete the user", err))?;

    if deleted == 0 {
        return Err(ErrorResponse::new(ErrorCode::NotFound, "User not found."));
    }

    Ok(Json(Message::new("User deleted.")))
}
