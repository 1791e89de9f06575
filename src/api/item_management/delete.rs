use crate::api::Message;
use crate::auth::guards::FreshAccessToken;
use crate::db::DbConn;
use crate::error::{ErrorCode, ErrorResponse};
use crate::schema;
use diesel::prelude::*;
use rocket::serde::json::Json;

enum DeleteItemError {
    NotFound,
    Db(diesel::result::Error),
}

impl From<diesel::result::Error> for DeleteItemError {
    fn from(err: diesel::result::Error) -> DeleteItemError {
        DeleteItemError::Db(err)
    }
}

// Removing an item also removes its tag links, in the same transaction.
#[delete("/item/<iid>")]
pub(crate) async fn delete_item(
    _token: FreshAccessToken,
    iid: i32,
    conn: DbConn,
) -> Result<Json<Message>, ErrorResponse> {
    conn.run(move |c| {
        c.build_transaction()
            .read_write()
            .run::<_, DeleteItemError, _>(|| {
                {
                    use schema::items::dsl::*;
                    items
                        .filter(id.eq(iid))
                        .select(id)
                        .first::<i32>(c)
                        .optional()?
                        .ok_or(DeleteItemError::NotFound)?;
                }
                {
                    use schema::tags_items::dsl::*;
                    diesel::delete(tags_items.filter(item_id.eq(iid))).execute(c)?;
                }
                {
                    use schema::items::dsl::*;
                    diesel::delete(items.filter(id.eq(iid))).execute(c)?;
                }

                Ok(())
            })
    })
    .await
    .map_err(|err| match err {
        DeleteItemError::NotFound => ErrorResponse::new(ErrorCode::NotFound, "Item not found."),
        DeleteItemError::Db(err) => ErrorResponse::storage("delete the item", err),
    })?;

    Ok(Json(Message::new("Item deleted successfully.")))
}
