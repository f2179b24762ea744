//! Actix-Web JSON handlers.
//!
//! Every endpoint answers with the `{success, data, message, errors,
//! pagination}` envelope. Validation failures answer 422 with the
//! field-keyed error list; repository failures are logged and answered with
//! a generic localized message.

use actix_web::HttpResponse;

use crate::dto::api::ApiResponse;
use crate::services::ServiceError;

pub mod catalogo;
pub mod cliente;
pub mod equipo;
pub mod orden;

pub(crate) fn error_response(context: &str, err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => {
            HttpResponse::NotFound().json(ApiResponse::failure("Recurso no encontrado"))
        }
        ServiceError::Validation(errors) => {
            HttpResponse::UnprocessableEntity().json(ApiResponse::invalid(errors))
        }
        ServiceError::Vocabulary(err) => {
            HttpResponse::BadRequest().json(ApiResponse::failure(err.to_string()))
        }
        err => {
            log::error!("{context}: {err}");
            HttpResponse::InternalServerError()
                .json(ApiResponse::failure("Error interno del servidor"))
        }
    }
}
