use crate::api::item_management::models::{Item, ItemOut};
use crate::api::tag_management::models::{Tag, TagOut, UnlinkOut};
use crate::auth::guards::FreshAccessToken;
use crate::db::DbConn;
use crate::error::{ErrorCode, ErrorResponse};
use crate::schema;
use diesel::prelude::*;
use rocket::serde::json::Json;

enum UnlinkError {
    ItemMissing,
    TagMissing,
    Db(diesel::result::Error),
}

impl From<diesel::result::Error> for UnlinkError {
    fn from(err: diesel::result::Error) -> UnlinkError {
        UnlinkError::Db(err)
    }
}

#[delete("/item/<iid>/tag/<tid>")]
pub(crate) async fn unlink_tag(
    _token: FreshAccessToken,
    iid: i32,
    tid: i32,
    conn: DbConn,
) -> Result<Json<UnlinkOut>, ErrorResponse> {
    let (item, tag) = conn
        .run(move |c| {
            c.build_transaction()
                .read_write()
                .run::<(Item, Tag), UnlinkError, _>(|| {
                    let item = {
                        use schema::items::dsl::*;
                        items
                            .filter(id.eq(iid))
                            .first::<Item>(c)
                            .optional()?
                            .ok_or(UnlinkError::ItemMissing)?
                    };
                    let tag = {
                        use schema::tags::dsl::*;
                        tags.filter(id.eq(tid))
                            .first::<Tag>(c)
                            .optional()?
                            .ok_or(UnlinkError::TagMissing)?
                    };

                    // Removing a link that doesn't exist is a no-op.
                    {
                        use schema::tags_items::dsl::*;
                        diesel::delete(
                            tags_items.filter(tag_id.eq(tid).and(item_id.eq(iid))),
                        )
                        .execute(c)?;
                    }

                    Ok((item, tag))
                })
        })
        .await
        .map_err(|err| match err {
            UnlinkError::ItemMissing => ErrorResponse::new(ErrorCode::NotFound, "Item not found."),
            UnlinkError::TagMissing => ErrorResponse::new(ErrorCode::NotFound, "Tag not found."),
            UnlinkError::Db(err) => ErrorResponse::storage("unlink the tag", err),
        })?;

    Ok(Json(UnlinkOut {
        message: "Item removed from tag.".to_string(),
        item: ItemOut::from(item),
        tag: TagOut::from(tag),
    }))
}
