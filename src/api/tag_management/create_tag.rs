use crate::api::tag_management::models::{NewTag, Tag, TagIn, TagOut};
use crate::auth::guards::FreshAccessToken;
use crate::db::DbConn;
use crate::error::{ErrorCode, ErrorResponse};
use crate::schema;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;

enum CreateTagError {
    Duplicate,
    StoreMissing,
    Db(DieselError),
}

#[post("/store/<sid>/tag", data = "<tag_data>")]
pub(crate) async fn create_tag(
    _token: FreshAccessToken,
    sid: i32,
    tag_data: Json<TagIn>,
    conn: DbConn,
) -> Result<status::Custom<Json<TagOut>>, ErrorResponse> {
    let tag_name = tag_data.into_inner().name;

    let tag = conn
        .run(move |c| {
            // Advisory fast path; the unique constraint below is the
            // authoritative check under concurrent inserts.
            {
                use schema::tags::dsl::*;
                let existing = tags
                    .filter(store_id.eq(sid).and(name.eq(&tag_name)))
                    .select(id)
                    .first::<i32>(c)
                    .optional()
                    .map_err(CreateTagError::Db)?;
                if existing.is_some() {
                    return Err(CreateTagError::Duplicate);
                }
            }

            let new_tag = NewTag {
                name: tag_name,
                store_id: sid,
            };

            use schema::tags::dsl::*;
            diesel::insert_into(tags)
                .values(&new_tag)
                .get_result::<Tag>(c)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        CreateTagError::Duplicate
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                        CreateTagError::StoreMissing
                    }
                    err => CreateTagError::Db(err),
                })
        })
        .await
        .map_err(|err| match err {
            CreateTagError::Duplicate => ErrorResponse::new(
                ErrorCode::DuplicateEntity,
                "A tag with that name already exists in that store.",
            ),
            CreateTagError::StoreMissing => {
                ErrorResponse::new(ErrorCode::NotFound, "Store not found.")
            }
            CreateTagError::Db(err) => ErrorResponse::storage("create the tag", err),
        })?;

    Ok(status::Custom(Status::Created, Json(TagOut::from(tag))))
}
