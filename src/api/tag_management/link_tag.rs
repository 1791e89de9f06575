use crate::api::item_management::models::Item;
use crate::api::tag_management::models::{NewTagItem, Tag, TagOut};
use crate::auth::guards::FreshAccessToken;
use crate::db::DbConn;
use crate::error::{ErrorCode, ErrorResponse};
use crate::schema;
use diesel::prelude::*;
use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;

enum LinkError {
    ItemMissing,
    TagMissing,
    CrossStore,
    Db(diesel::result::Error),
}

impl From<diesel::result::Error> for LinkError {
    fn from(err: diesel::result::Error) -> LinkError {
        LinkError::Db(err)
    }
}

#[post("/item/<iid>/tag/<tid>")]
pub(crate) async fn link_tag(
    _token: FreshAccessToken,
    iid: i32,
    tid: i32,
    conn: DbConn,
) -> Result<status::Custom<Json<TagOut>>, ErrorResponse> {
    let tag = conn
        .run(move |c| {
            c.build_transaction()
                .read_write()
                .run::<Tag, LinkError, _>(|| {
                    let item = {
                        use schema::items::dsl::*;
                        items
                            .filter(id.eq(iid))
                            .first::<Item>(c)
                            .optional()?
                            .ok_or(LinkError::ItemMissing)?
                    };
                    let tag = {
                        use schema::tags::dsl::*;
                        tags.filter(id.eq(tid))
                            .first::<Tag>(c)
                            .optional()?
                            .ok_or(LinkError::TagMissing)?
                    };

                    if item.store_id != tag.store_id {
                        return Err(LinkError::CrossStore);
                    }

                    let link = NewTagItem {
                        tag_id: tid,
                        item_id: iid,
                    };

                    // Relinking an existing pair is a no-op.
                    use schema::tags_items::dsl::*;
                    diesel::insert_into(tags_items)
                        .values(&link)
                        .on_conflict_do_nothing()
                        .execute(c)?;

                    Ok(tag)
                })
        })
        .await
        .map_err(|err| match err {
            LinkError::ItemMissing => ErrorResponse::new(ErrorCode::NotFound, "Item not found."),
            LinkError::TagMissing => ErrorResponse::new(ErrorCode::NotFound, "Tag not found."),
            LinkError::CrossStore => ErrorResponse::new(
                ErrorCode::CrossStoreLink,
                "Ensure item and tag belong to the same store before linking.",
            ),
            LinkError::Db(err) => ErrorResponse::storage("link the tag", err),
        })?;

    Ok(status::Custom(Status::Created, Json(TagOut::from(tag))))
}
