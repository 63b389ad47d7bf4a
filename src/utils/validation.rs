use actix_web::error::JsonPayloadError;
use actix_web::HttpRequest;
use log::warn;
use validator::Validate;

use crate::errors::AppError;

/// Any failed field check is reported with the same fixed message.
pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate().map_err(|err| {
        warn!("rejected payload: {}", err);
        AppError::missing_fields()
    })
}

/// `JsonConfig` error handler: unparseable bodies get the same 400 as
/// missing fields.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    warn!("rejected body: {}", err);
    AppError::missing_fields().into()
}
