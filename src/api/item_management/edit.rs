use crate::api::item_management::models::{Item, ItemOut, ItemUpdate};
use crate::auth::guards::FreshAccessToken;
use crate::db::DbConn;
use crate::error::{ErrorCode, ErrorResponse};
use crate::schema;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use rocket::serde::json::Json;

#[put("/item/<item_id>", data = "<item_data>")]
pub(crate) async fn edit_item(
    _token: FreshAccessToken,
    item_id: i32,
    item_data: Json<ItemUpdate>,
    conn: DbConn,
) -> Result<Json<ItemOut>, ErrorResponse> {
    let update = item_data.into_inner();

    let item = conn
        .run(move |c| {
            use schema::items::dsl::*;

            diesel::update(items.filter(id.eq(item_id)))
                .set((name.eq(update.name), price.eq(update.price)))
                .get_result::<Item>(c)
        })
        .await
        .map_err(|err| match err {
            DieselError::NotFound => ErrorResponse::new(ErrorCode::NotFound, "Item not found."),
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                ErrorResponse::new(
                    ErrorCode::DuplicateEntity,
                    "An item with that name already exists.",
                )
            }
            err => ErrorResponse::storage("update the item", err),
        })?;

    Ok(Json(ItemOut::from(item)))
}
