use crate::api::Message;
use crate::auth::guards::FreshAccessToken;
use crate::db::DbConn;
use crate::error::{ErrorCode, ErrorResponse};
use crate::schema;
use diesel::prelude::*;
use rocket::serde::json::Json;

// Deleting a store that still owns items or tags trips the foreign key
// constraints and surfaces as a storage failure.
#[delete("/store/<store_id>")]
pub(crate) async fn delete_store(
    _token: FreshAccessToken,
    store_id: i32,
    conn: DbConn,
) -> Result<Json<Message>, ErrorResponse> {
    let deleted = conn
        .run(move |c| {
            use schema::stores::dsl::*;

            diesel::delete(stores.filter(id.eq(store_id))).execute(c)
        })
        .await
        .map_err(|err| ErrorResponse::storage("delete the store", err))?;

    if deleted == 0 {
        return Err(ErrorResponse::new(ErrorCode::NotFound, "Store not found."));
    }

    Ok(Json(Message::new("Store deleted successfully.")))
}
