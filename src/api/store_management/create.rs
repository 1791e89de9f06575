use crate::api::store_management::models::{NewStore, Store, StoreIn, StoreOut};
use crate::auth::guards::FreshAccessToken;
use crate::db::DbConn;
use crate::error::{ErrorCode, ErrorResponse};
use crate::schema;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;

#[post("/store", data = "<store_data>")]
pub(crate) async fn create_store(
    _token: FreshAccessToken,
    store_data: Json<StoreIn>,
    conn: DbConn,
) -> Result<status::Custom<Json<StoreOut>>, ErrorResponse> {
    let new_store = NewStore {
        name: store_data.into_inner().name,
    };

    // The unique constraint on the name is the authoritative duplicate
    // check; no pre-query needed.
    let store = conn
        .run(move |c| {
            use schema::stores::dsl::*;

            diesel::insert_into(stores)
                .values(&new_store)
                .get_result::<Store>(c)
        })
        .await
        .map_err(|err| match err {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                ErrorResponse::new(
                    ErrorCode::DuplicateEntity,
                    "A store with that name already exists.",
                )
            }
            err => ErrorResponse::storage("create the store", err),
        })?;

    Ok(status::Custom(Status::Created, Json(StoreOut::from(store))))
}
