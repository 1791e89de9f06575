use crate::api::user_management::models::AccessTokenOut;
use crate::auth::guards::RefreshToken;
use crate::auth::tokens::TokenIssuer;
use crate::error::ErrorResponse;
use rocket::serde::json::Json;
use rocket::State;

#[post("/refresh")]
pub(crate) async fn refresh(
    token: RefreshToken,
    issuer: &State<TokenIssuer>,
) -> Result<Json<AccessTokenOut>, ErrorResponse> {
    // Freshness is only granted by a password login, never by a refresh.
    let access_token = issuer
        .issue_access(token.0.sub, false)
        .map_err(|err| ErrorResponse::storage("refresh the token", err))?;

    Ok(Json(AccessTokenOut { access_token }))
}
