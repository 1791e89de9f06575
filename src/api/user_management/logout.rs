use crate::api::Message;
use crate::auth::guards::AccessToken;
use crate::auth::ledger;
use crate::db::DbConn;
use crate::error::ErrorResponse;
use rocket::serde::json::Json;

#[post("/logout")]
pub(crate) async fn logout(
    token: AccessToken,
    conn: DbConn,
) -> Result<Json<Message>, ErrorResponse> {
    let jti = token.0.jti;

    conn.run(move |c| ledger::revoke(c, &jti))
        .await
        .map_err(|err| ErrorResponse::storage("revoke the token", err))?;

    Ok(Json(Message::new("Token revoked successfully.")))
}
