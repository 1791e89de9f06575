use crate::api::item_management::models::{Item, ItemOut};
use crate::auth::guards::AccessToken;
use crate::db::DbConn;
use crate::error::{ErrorCode, ErrorResponse};
use crate::schema;
use diesel::prelude::*;
use diesel::result::Error as DieselError;
use rocket::serde::json::Json;

#[get("/item/<item_id>")]
pub(crate) async fn get_item(
    _token: AccessToken,
    item_id: i32,
    conn: DbConn,
) -> Result<Json<ItemOut>, ErrorResponse> {
    let item = conn
        .run(move |c| {
            use schema::items::dsl::*;

            items.filter(id.eq(item_id)).first::<Item>(c)
        })
        .await
        .map_err(|err| match err {
            DieselError::NotFound => ErrorResponse::new(ErrorCode::NotFound, "Item not found."),
            err => ErrorResponse::storage("load the item", err),
        })?;

    Ok(Json(ItemOut::from(item)))
}
