use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use log::error;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not Found: {0}")]
    NotFound(String),
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Database Error: {0}")]
    DatabaseError(sqlx::Error),
    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Classifies store faults: constraint violations become caller errors,
/// everything else stays a database fault.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.code().as_deref() {
                Some(UNIQUE_VIOLATION) => {
                    let constraint = db_err.constraint().unwrap_or("unknown");
                    return AppError::Conflict(format!("duplicate value violates {}", constraint));
                }
                Some(FOREIGN_KEY_VIOLATION) => {
                    return AppError::BadRequest("department does not exist".to_string());
                }
                _ => {}
            }
        }
        AppError::DatabaseError(err)
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound(msg) => HttpResponse::NotFound().json(ErrorResponse { error: msg.clone() }),
            AppError::BadRequest(msg) => HttpResponse::BadRequest().json(ErrorResponse { error: msg.clone() }),
            AppError::Conflict(msg) => HttpResponse::Conflict().json(ErrorResponse { error: msg.clone() }),
            AppError::DatabaseError(err) => {
                error!("Database error: {:?}", err);
                HttpResponse::InternalServerError().json(ErrorResponse { error: "Database error".to_string() })
            }
            AppError::InternalServerError(msg) => {
                error!("Internal error: {}", msg);
                HttpResponse::InternalServerError().json(ErrorResponse { error: "Internal server error".to_string() })
            }
        }
    }
}
