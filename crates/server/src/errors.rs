use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::validation::{FieldError, ValidationError};
use serde::Serialize;
use service::errors::ServiceError;
use tracing::error;

/// JSON error body returned by every handler.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &str, message: Option<String>) -> Self {
        Self {
            status,
            body: ErrorBody { error: title.to_string(), message, fields: Vec::new() },
        }
    }

    pub fn validation(err: ValidationError) -> Self {
        let mut e = Self::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Validation Error",
            Some(err.to_string()),
        );
        e.body.fields = err.fields;
        e
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(v) => Self::validation(v),
            ServiceError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, "Not Found", Some(e.to_string())),
            ServiceError::Db(_) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                Some(e.to_string()),
            ),
        }
    }
}

impl From<ValidationError> for JsonApiError {
    fn from(e: ValidationError) -> Self {
        Self::validation(e)
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, error = ?self.body.message, "request failed");
        }
        (self.status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::validation::FieldError;

    #[test]
    fn maps_service_errors_to_status() {
        let cases = [
            (ServiceError::NotFound(9), StatusCode::NOT_FOUND),
            (ServiceError::Db("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (
                ServiceError::Validation(ValidationError::single(FieldError::missing("name"))),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(JsonApiError::from(err).status, status);
        }
    }

    #[test]
    fn validation_body_lists_fields() {
        let err = JsonApiError::validation(ValidationError {
            fields: vec![FieldError::missing("location"), FieldError::missing("employee_number")],
        });
        let v = serde_json::to_value(&err.body).unwrap();
        assert_eq!(v["error"], "Validation Error");
        assert_eq!(v["fields"][0]["field"], "location");
        assert_eq!(v["fields"][1]["kind"], "missing");
    }

    #[test]
    fn not_found_body_omits_fields() {
        let err = JsonApiError::from(ServiceError::NotFound(999));
        let v = serde_json::to_value(&err.body).unwrap();
        assert_eq!(v["message"], "company 999 not found");
        assert!(v.get("fields").is_none());
    }
}
