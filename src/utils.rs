use actix_web::http::StatusCode;

/// Return a 400 with the user-representation of the validation error as body.
/// The error root cause is preserved for logging purposes.
pub fn e400<T>(e: T) -> actix_web::Error
where
    T: std::fmt::Debug + std::fmt::Display + 'static,
{
    actix_web::error::InternalError::new(e, StatusCode::BAD_REQUEST).into()
}
