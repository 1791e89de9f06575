use crate::api::tag_management::models::{Tag, TagOut};
use crate::auth::guards::AccessToken;
use crate::db::DbConn;
use crate::error::{ErrorCode, ErrorResponse};
use crate::schema;
use diesel::prelude::*;
use rocket::serde::json::Json;

enum StoreTagsError {
    StoreMissing,
    Db(diesel::result::Error),
}

impl From<diesel::result::Error> for StoreTagsError {
    fn from(err: diesel::result::Error) -> StoreTagsError {
        StoreTagsError::Db(err)
    }
}

#[get("/store/<sid>/tag")]
pub(crate) async fn get_store_tags(
    _token: AccessToken,
    sid: i32,
    conn: DbConn,
) -> Result<Json<Vec<TagOut>>, ErrorResponse> {
    let tag_list = conn
        .run(move |c| {
            {
                use schema::stores::dsl::*;
                stores
                    .filter(id.eq(sid))
                    .select(id)
                    .first::<i32>(c)
                    .optional()?
                    .ok_or(StoreTagsError::StoreMissing)?;
            }

            use schema::tags::dsl::*;
            tags.filter(store_id.eq(sid))
                .order(id.asc())
                .load::<Tag>(c)
                .map_err(StoreTagsError::Db)
        })
        .await
        .map_err(|err| match err {
            StoreTagsError::StoreMissing => {
                ErrorResponse::new(ErrorCode::NotFound, "Store not found.")
            }
            StoreTagsError::Db(err) => ErrorResponse::storage("load the tags", err),
        })?;

    Ok(Json(tag_list.into_iter().map(TagOut::from).collect()))
}
