use crate::api::tag_management::models::{Tag, TagOut};
use crate::auth::guards::AccessToken;
use crate::db::DbConn;
use crate::error::{ErrorCode, ErrorResponse};
use crate::schema;
use diesel::prelude::*;
use diesel::result::Error as DieselError;
use rocket::serde::json::Json;

#[get("/tag/<tag_id>")]
pub(crate) async fn get_tag(
    _token: AccessToken,
    tag_id: i32,
    conn: DbConn,
) -> Result<Json<TagOut>, ErrorResponse> {
    let tag = conn
        .run(move |c| {
            use schema::tags::dsl::*;

            tags.filter(id.eq(tag_id)).first::<Tag>(c)
        })
        .await
        .map_err(|err| match err {
            DieselError::NotFound => ErrorResponse::new(ErrorCode::NotFound, "Tag not found."),
            err => ErrorResponse::storage("load the tag", err),
        })?;

    Ok(Json(TagOut::from(tag)))
}
