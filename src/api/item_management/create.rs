use crate::api::item_management::models::{Item, ItemIn, ItemOut, NewItem};
use crate::auth::guards::FreshAccessToken;
use crate::db::DbConn;
use crate::error::{ErrorCode, ErrorResponse};
use crate::schema;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;

#[post("/item", data = "<item_data>")]
pub(crate) async fn create_item(
    _token: FreshAccessToken,
    item_data: Json<ItemIn>,
    conn: DbConn,
) -> Result<status::Custom<Json<ItemOut>>, ErrorResponse> {
    let item_data = item_data.into_inner();

    let new_item = NewItem {
        name: item_data.name,
        price: item_data.price,
        store_id: item_data.store_id,
    };

    let item = conn
        .run(move |c| {
            use schema::items::dsl::*;

            diesel::insert_into(items)
                .values(&new_item)
                .get_result::<Item>(c)
        })
        .await
        .map_err(|err| match err {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                ErrorResponse::new(
                    ErrorCode::DuplicateEntity,
                    "An item with that name already exists.",
                )
            }
            // The store foreign key is the authoritative existence check.
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                ErrorResponse::new(ErrorCode::NotFound, "Store not found.")
            }
            err => ErrorResponse::storage("create the item", err),
        })?;

    Ok(status::Custom(Status::Created, Json(ItemOut::from(item))))
}
