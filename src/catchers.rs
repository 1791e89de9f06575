use crate::error::{ApiError, ErrorCode};
use rocket::serde::json::Json;
use rocket::Request;

#[catch(400)]
pub(crate) fn bad_request(_req: &Request) -> Json<ApiError> {
    Json(ApiError::new(
        ErrorCode::ValidationError,
        "The request was malformed.",
    ))
}

// Request guards stash their error in the request-local cache before
// failing; default to the missing-token body when nothing was cached.
#[catch(401)]
pub(crate) fn unauthorized(req: &Request) -> Json<ApiError> {
    Json(
        req.local_cache(|| {
            ApiError::new(
                ErrorCode::MissingToken,
                "Request does not contain an access token.",
            )
        })
        .clone(),
    )
}

#[catch(404)]
pub(crate) fn not_found(_req: &Request) -> Json<ApiError> {
    Json(ApiError::new(
        ErrorCode::NotFound,
        "The requested resource was not found.",
    ))
}

#[catch(422)]
pub(crate) fn unprocessable_entity(_req: &Request) -> Json<ApiError> {
    Json(ApiError::new(
        ErrorCode::ValidationError,
        "The request body could not be parsed.",
    ))
}

#[catch(500)]
pub(crate) fn internal_error(req: &Request) -> Json<ApiError> {
    Json(
        req.local_cache(|| ApiError::new(ErrorCode::StorageFailure, "An internal error occurred."))
            .clone(),
    )
}
