use rocket::response::{Responder, Response};
use rocket::{
    http::{ContentType, Status},
    response,
    serde::json::Json,
    Request,
};
use serde::Serialize;

/// Machine-readable error codes returned in the `error` field of every
/// failure body.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    ValidationError,
    DuplicateEntity,
    NotFound,
    InvalidCredentials,
    MissingToken,
    InvalidToken,
    TokenExpired,
    TokenRevoked,
    FreshTokenRequired,
    CrossStoreLink,
    TagInUse,
    StorageFailure,
}

impl ErrorCode {
    pub(crate) fn status(self) -> Status {
        match self {
            ErrorCode::ValidationError | ErrorCode::CrossStoreLink | ErrorCode::TagInUse => {
                Status::BadRequest
            }
            ErrorCode::DuplicateEntity => Status::Conflict,
            ErrorCode::NotFound => Status::NotFound,
            ErrorCode::InvalidCredentials
            | ErrorCode::MissingToken
            | ErrorCode::InvalidToken
            | ErrorCode::TokenExpired
            | ErrorCode::TokenRevoked
            | ErrorCode::FreshTokenRequired => Status::Unauthorized,
            ErrorCode::StorageFailure => Status::InternalServerError,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct ApiError {
    pub message: String,
    pub error: ErrorCode,
}

impl ApiError {
    pub(crate) fn new(error: ErrorCode, message: impl Into<String>) -> ApiError {
        ApiError {
            message: message.into(),
            error,
        }
    }
}

#[derive(Debug)]
pub(crate) struct ErrorResponse {
    json: Json<ApiError>,
    status: Status,
}

impl ErrorResponse {
    pub(crate) fn new(error: ErrorCode, message: impl Into<String>) -> ErrorResponse {
        ErrorResponse {
            status: error.status(),
            json: Json(ApiError::new(error, message)),
        }
    }

    /// Storage-layer failure. The detail is logged, never sent to the caller.
    pub(crate) fn storage(context: &str, err: impl std::fmt::Display) -> ErrorResponse {
        log::error!("storage failure while trying to {}: {}", context, err);
        ErrorResponse::new(
            ErrorCode::StorageFailure,
            format!("An error occurred while trying to {}.", context),
        )
    }
}

impl<'r> Responder<'r, 'r> for ErrorResponse {
    fn respond_to(self, req: &'r Request) -> response::Result<'r> {
        Response::build_from(self.json.respond_to(req)?)
            .status(self.status)
            .header(ContentType::JSON)
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_serialize_snake_case() {
        let body = serde_json::to_string(&ApiError::new(
            ErrorCode::FreshTokenRequired,
            "Token is not fresh.",
        ))
        .unwrap();

        assert_eq!(
            body,
            r#"{"message":"Token is not fresh.","error":"fresh_token_required"}"#
        );
    }

    #[test]
    fn auth_failures_map_to_unauthorized() {
        for code in [
            ErrorCode::InvalidCredentials,
            ErrorCode::MissingToken,
            ErrorCode::InvalidToken,
            ErrorCode::TokenExpired,
            ErrorCode::TokenRevoked,
            ErrorCode::FreshTokenRequired,
        ] {
            assert_eq!(code.status(), Status::Unauthorized);
        }
    }

    #[test]
    fn integrity_failures_map_to_bad_request() {
        assert_eq!(ErrorCode::CrossStoreLink.status(), Status::BadRequest);
        assert_eq!(ErrorCode::TagInUse.status(), Status::BadRequest);
        assert_eq!(ErrorCode::DuplicateEntity.status(), Status::Conflict);
    }
}
