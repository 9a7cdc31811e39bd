use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
};
use emekdep_core::AppError;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

/// Maps a JSON extraction failure to a `400` with a short message.
fn rejection_error(rejection: JsonRejection) -> AppError {
    let detail = rejection.body_text();

    let message = match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            "Missing 'Content-Type: application/json' header".to_string()
        }
        JsonRejection::JsonDataError(_) => match missing_field(&detail) {
            Some(field) => format!("{field} is required"),
            None if detail.contains("invalid type") => "Invalid field type in request".to_string(),
            None => "Invalid request body".to_string(),
        },
        JsonRejection::JsonSyntaxError(_) => "Malformed JSON in request body".to_string(),
        _ => "Invalid request body".to_string(),
    };

    AppError::new(StatusCode::BAD_REQUEST, anyhow!(message))
}

fn missing_field(detail: &str) -> Option<&str> {
    detail
        .split("missing field `")
        .nth(1)
        .and_then(|rest| rest.split('`').next())
}

fn format_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| match &error.message {
                Some(message) => message.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect();
    messages.sort();
    messages.join(", ")
}

/// JSON body whose extraction failures answer with the `AppError` JSON shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_error)?;
        Ok(JsonBody(value))
    }
}

/// [`JsonBody`] that must also pass `validator` rules, `422` otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let JsonBody(value) = JsonBody::<T>::from_request(req, state).await?;

        value.validate().map_err(|errors| {
            AppError::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                anyhow!(format_errors(&errors)),
            )
        })?;

        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_name() {
        let detail = "Failed to deserialize the JSON body into the target type: missing field `role` at line 1 column 2";
        assert_eq!(missing_field(detail), Some("role"));
        assert_eq!(missing_field("invalid type: string \"x\", expected i64"), None);
    }
}
