use std::fmt::{Debug, Display};

use http::StatusCode;

use crate::http::lambda_proxy::LambdaProxyHttpResponse;

// messages
pub const RECORD_UPDATED_MESSAGE: &str = "Record updated successfully";
pub const NO_DATA_ERROR_MESSAGE: &str = "No data found in the request body";
pub const SERVER_ERROR_MESSAGE: &str = "Internal server error";
pub const DB_UPDATE_FAILED_ERROR_MESSAGE: &str = "DB update Failed.";

// Only the fixed message reaches the caller, the cause is logged.
fn error_response(
    message: &str,
    status_code: StatusCode,
    cause: impl Debug + Display,
) -> LambdaProxyHttpResponse {
    tracing::error!(error = ?cause, "{}", cause);
    LambdaProxyHttpResponse::with_message(status_code, message)
}

pub fn record_updated_response() -> LambdaProxyHttpResponse {
    LambdaProxyHttpResponse::with_message(StatusCode::OK, RECORD_UPDATED_MESSAGE)
}

pub fn no_data_error_response(cause: impl Debug + Display) -> LambdaProxyHttpResponse {
    error_response(NO_DATA_ERROR_MESSAGE, StatusCode::BAD_REQUEST, cause)
}

pub fn db_update_failed_response(cause: impl Debug + Display) -> LambdaProxyHttpResponse {
    error_response(
        DB_UPDATE_FAILED_ERROR_MESSAGE,
        StatusCode::INTERNAL_SERVER_ERROR,
        cause,
    )
}

pub fn unknown_error_response(cause: impl Debug + Display) -> LambdaProxyHttpResponse {
    error_response(
        SERVER_ERROR_MESSAGE,
        StatusCode::INTERNAL_SERVER_ERROR,
        cause,
    )
}
