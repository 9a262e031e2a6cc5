//! Request extractors answering with the unified error envelope

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use shared::{AppError, ErrorCode};

/// `Json<T>` whose rejection is an [`AppError`]
///
/// Missing fields map to `RequiredField`, malformed JSON to `InvalidFormat`,
/// and type mismatches (bad date, negative amount) to `ValidationFailed`.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(rejection_to_error(rejection)),
        }
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    let text = rejection.body_text();
    match rejection {
        JsonRejection::JsonDataError(_) => match missing_field(&text) {
            Some(field) => AppError::required_field(field),
            None => AppError::validation(text),
        },
        JsonRejection::JsonSyntaxError(_) => AppError::with_message(ErrorCode::InvalidFormat, text),
        _ => AppError::invalid_request(text),
    }
}

/// Extract `x` from serde's "missing field `x`" message
fn missing_field(text: &str) -> Option<&str> {
    let rest = text.split_once("missing field `")?.1;
    rest.split_once('`').map(|(field, _)| field)
}
