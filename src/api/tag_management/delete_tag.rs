use crate::api::Message;
use crate::auth::guards::FreshAccessToken;
use crate::db::DbConn;
use crate::error::{ErrorCode, ErrorResponse};
use crate::schema;
use diesel::prelude::*;
use rocket::serde::json::Json;

enum DeleteTagError {
    NotFound,
    InUse,
    Db(diesel::result::Error),
}

impl From<diesel::result::Error> for DeleteTagError {
    fn from(err: diesel::result::Error) -> DeleteTagError {
        DeleteTagError::Db(err)
    }
}

// The zero-dependents check and the delete run in one transaction so a
// concurrent link insertion can't slip in between them.
#[delete("/tag/<tid>")]
pub(crate) async fn delete_tag(
    _token: FreshAccessToken,
    tid: i32,
    conn: DbConn,
) -> Result<Json<Message>, ErrorResponse> {
    conn.run(move |c| {
        c.build_transaction()
            .read_write()
            .run::<_, DeleteTagError, _>(|| {
                {
                    use schema::tags::dsl::*;
                    tags.filter(id.eq(tid))
                        .select(id)
                        .first::<i32>(c)
                        .optional()?
                        .ok_or(DeleteTagError::NotFound)?;
                }

                let linked: i64 = {
                    use schema::tags_items::dsl::*;
                    tags_items.filter(tag_id.eq(tid)).count().get_result(c)?
                };
                if linked > 0 {
                    return Err(DeleteTagError::InUse);
                }

                {
                    use schema::tags::dsl::*;
                    diesel::delete(tags.filter(id.eq(tid))).execute(c)?;
                }

                Ok(())
            })
    })
    .await
    .map_err(|err| match err {
        DeleteTagError::NotFound => ErrorResponse::new(ErrorCode::NotFound, "Tag not found."),
        DeleteTagError::InUse => ErrorResponse::new(
            ErrorCode::TagInUse,
            "Could not delete tag. Make sure tag is not associated with any items, then try again.",
        ),
        DeleteTagError::Db(err) => ErrorResponse::storage("delete the tag", err),
    })?;

    Ok(Json(Message::new("Tag deleted.")))
}
