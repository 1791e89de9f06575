use crate::schema::revoked_token;
use diesel::prelude::*;
use diesel::PgConnection;

#[derive(Insertable)]
#[table_name = "revoked_token"]
struct NewRevokedToken<'a> {
    jti: &'a str,
}

pub(crate) fn is_revoked(c: &PgConnection, token_jti: &str) -> QueryResult<bool> {
    use crate::schema::revoked_token::dsl::*;

    revoked_token
        .filter(jti.eq(token_jti))
        .select(id)
        .first::<i32>(c)
        .optional()
        .map(|found| found.is_some())
}

/// Revoking an already-revoked jti is a no-op; the unique index keeps a
/// single row per jti.
pub(crate) fn revoke(c: &PgConnection, token_jti: &str) -> QueryResult<()> {
    use crate::schema::revoked_token::dsl::*;

    diesel::insert_into(revoked_token)
        .values(&NewRevokedToken { jti: token_jti })
        .on_conflict_do_nothing()
        .execute(c)
        .map(|_| ())
}
