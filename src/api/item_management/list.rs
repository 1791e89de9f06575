use crate::api::item_management::models::{Item, ItemOut};
use crate::auth::guards::AccessToken;
use crate::db::DbConn;
use crate::error::ErrorResponse;
use crate::schema;
use diesel::prelude::*;
use rocket::serde::json::Json;

#[get("/item")]
pub(crate) async fn get_items(
    _token: AccessToken,
    conn: DbConn,
) -> Result<Json<Vec<ItemOut>>, ErrorResponse> {
    let item_list = conn
        .run(|c| {
            use schema::items::dsl::*;

            items.order(id.asc()).load::<Item>(c)
        })
        .await
        .map_err(|err| ErrorResponse::storage("load the items", err))?;

    Ok(Json(item_list.into_iter().map(ItemOut::from).collect()))
}
