use crate::auth::ledger;
use crate::auth::tokens::{Claims, TokenError, TokenIssuer, TokenKind};
use crate::db::DbConn;
use crate::error::{ApiError, ErrorCode};
use rocket::outcome::try_outcome;
use rocket::request::{self, FromRequest, Outcome};
use rocket::{Request, State};

/// Valid, non-revoked access token.
pub(crate) struct AccessToken(pub Claims);

/// Access token issued directly by a password login. Required for
/// destructive and mutating operations.
pub(crate) struct FreshAccessToken(pub Claims);

/// Refresh-class token; only the refresh endpoint accepts one.
pub(crate) struct RefreshToken(pub Claims);

pub(crate) fn parse_bearer(header: Option<&str>) -> Option<&str> {
    header?.strip_prefix("Bearer ")
}

fn deny<T>(req: &Request<'_>, code: ErrorCode, message: &str) -> request::Outcome<T, ApiError> {
    let err = ApiError::new(code, message);
    // The 401 catcher reads the request-local error to build the body.
    req.local_cache(|| err.clone());
    Outcome::Failure((code.status(), err))
}

async fn validate<'r>(
    req: &'r Request<'_>,
    kind: TokenKind,
) -> request::Outcome<Claims, ApiError> {
    let token = match parse_bearer(req.headers().get_one("Authorization")) {
        Some(token) => token,
        None => {
            return deny(
                req,
                ErrorCode::MissingToken,
                "Request does not contain an access token.",
            )
        }
    };

    let issuer = match req.guard::<&State<TokenIssuer>>().await {
        Outcome::Success(issuer) => issuer,
        _ => {
            return deny(
                req,
                ErrorCode::StorageFailure,
                "Token issuer is not configured.",
            )
        }
    };

    let claims = match issuer.decode(token) {
        Ok(claims) => claims,
        Err(TokenError::Expired) => {
            return deny(req, ErrorCode::TokenExpired, "The token has expired.")
        }
        Err(_) => {
            return deny(
                req,
                ErrorCode::InvalidToken,
                "Signature verification failed.",
            )
        }
    };

    if claims.kind != kind {
        let message = match kind {
            TokenKind::Access => "Only access tokens are allowed.",
            TokenKind::Refresh => "Only refresh tokens are allowed.",
        };
        return deny(req, ErrorCode::InvalidToken, message);
    }

    let conn = match req.guard::<DbConn>().await {
        Outcome::Success(conn) => conn,
        _ => {
            return deny(
                req,
                ErrorCode::StorageFailure,
                "Couldn't get database connection.",
            )
        }
    };

    let token_jti = claims.jti.clone();
    let revoked = match conn.run(move |c| ledger::is_revoked(c, &token_jti)).await {
        Ok(revoked) => revoked,
        Err(_) => {
            return deny(
                req,
                ErrorCode::StorageFailure,
                "Couldn't check token revocation.",
            )
        }
    };

    if revoked {
        return deny(req, ErrorCode::TokenRevoked, "The token has been revoked.");
    }

    Outcome::Success(claims)
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AccessToken {
    type Error = ApiError;

    async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let claims = try_outcome!(validate(req, TokenKind::Access).await);

        Outcome::Success(AccessToken(claims))
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for FreshAccessToken {
    type Error = ApiError;

    async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let claims = try_outcome!(validate(req, TokenKind::Access).await);

        if !claims.fresh {
            return deny(req, ErrorCode::FreshTokenRequired, "Token is not fresh.");
        }

        Outcome::Success(FreshAccessToken(claims))
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for RefreshToken {
    type Error = ApiError;

    async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let claims = try_outcome!(validate(req, TokenKind::Refresh).await);

        Outcome::Success(RefreshToken(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bearer_strips_scheme() {
        assert_eq!(parse_bearer(Some("Bearer abc.def.ghi")), Some("abc.def.ghi"));
    }

    #[test]
    fn parse_bearer_rejects_other_schemes() {
        assert_eq!(parse_bearer(Some("Basic dXNlcjpwdw==")), None);
        assert_eq!(parse_bearer(Some("abc.def.ghi")), None);
        assert_eq!(parse_bearer(None), None);
    }
}
