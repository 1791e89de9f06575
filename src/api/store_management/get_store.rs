use crate::api::store_management::models::{Store, StoreOut};
use crate::auth::guards::AccessToken;
use crate::db::DbConn;
use crate::error::{ErrorCode, ErrorResponse};
use crate::schema;
use diesel::prelude::*;
use diesel::result::Error as DieselError;
use rocket::serde::json::Json;

#[get("/store/<store_id>")]
pub(crate) async fn get_store(
    _token: AccessToken,
    store_id: i32,
    conn: DbConn,
) -> Result<Json<StoreOut>, ErrorResponse> {
    let store = conn
        .run(move |c| {
            use schema::stores::dsl::*;

            stores.filter(id.eq(store_id)).first::<Store>(c)
        })
        .await
        .map_err(|err| match err {
            DieselError::NotFound => ErrorResponse::new(ErrorCode::NotFound, "Store not found."),
            err => ErrorResponse::storage("load the store", err),
        })?;

    Ok(Json(StoreOut::from(store)))
}
