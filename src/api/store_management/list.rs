use crate::api::store_management::models::{Store, StoreOut};
use crate::auth::guards::AccessToken;
use crate::db::DbConn;
use crate::error::ErrorResponse;
use crate::schema;
use diesel::prelude::*;
use rocket::serde::json::Json;

#[get("/store")]
pub(crate) async fn get_stores(
    _token: AccessToken,
    conn: DbConn,
) -> Result<Json<Vec<StoreOut>>, ErrorResponse> {
    let store_list = conn
        .run(|c| {
            use schema::stores::dsl::*;

            stores.order(id.asc()).load::<Store>(c)
        })
        .await
        .map_err(|err| ErrorResponse::storage("load the stores", err))?;

    Ok(Json(store_list.into_iter().map(StoreOut::from).collect()))
}
