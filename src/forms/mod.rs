//! Request payload definitions and their validation rules.
//!
//! Forms are the single gate in front of the mappers: a payload that fails
//! `check()` never reaches a write model, and the mappers assume well-formed
//! input. Validation always returns a structured, field-keyed error list;
//! it never panics on malformed input.

use std::sync::LazyLock;

use chrono::{NaiveDate, Utc};
use regex::Regex;
use validator::{ValidationError, ValidationErrors};

pub mod catalogo;
pub mod cliente;
pub mod equipo;
pub mod orden;

/// Serial numbers: uppercase alphanumerics and hyphens.
pub(crate) static SERIE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9-]+$").unwrap());

/// Catalog codes: short uppercase alphanumerics.
pub(crate) static CODIGO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]{2,10}$").unwrap());

/// Phone numbers: digits plus common punctuation.
pub(crate) static TELEFONO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9+\-().\s]+$").unwrap());

fn vocab_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

/// Accepts an empty phone; otherwise requires the digit/punctuation pattern.
pub(crate) fn telefono_format(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || TELEFONO_RE.is_match(value) {
        Ok(())
    } else {
        Err(vocab_error("telefono", "formato de teléfono inválido"))
    }
}

pub(crate) fn estado_equipo_vocab(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<crate::domain::types::EquipmentStatus>()
        .map(|_| ())
        .map_err(|_| vocab_error("estado", "estado de equipo desconocido"))
}

pub(crate) fn sector_vocab(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<crate::domain::types::ClientSector>()
        .map(|_| ())
        .map_err(|_| vocab_error("sector", "sector desconocido"))
}

pub(crate) fn prioridad_vocab(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<crate::domain::types::OrderPriority>()
        .map(|_| ())
        .map_err(|_| vocab_error("prioridad", "prioridad desconocida"))
}

pub(crate) fn estado_orden_vocab(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<crate::domain::types::OrderStatus>()
        .map(|_| ())
        .map_err(|_| vocab_error("estado", "estado de orden desconocido"))
}

/// Cross-field ordering for the calibration window:
/// `fecha_instalacion <= ultima_calibracion < proxima_calibracion`, and the
/// next calibration must lie strictly in the future.
pub(crate) fn check_calibration_window(
    fecha_instalacion: Option<NaiveDate>,
    ultima_calibracion: Option<NaiveDate>,
    proxima_calibracion: Option<NaiveDate>,
    errors: &mut ValidationErrors,
) {
    if let (Some(instalacion), Some(ultima)) = (fecha_instalacion, ultima_calibracion) {
        if ultima < instalacion {
            errors.add(
                "ultima_calibracion".into(),
                vocab_error(
                    "calibracion_previa_a_instalacion",
                    "la última calibración no puede ser anterior a la instalación",
                ),
            );
        }
    }
    if let Some(proxima) = proxima_calibracion {
        if let Some(ultima) = ultima_calibracion {
            if proxima <= ultima {
                errors.add(
                    "proxima_calibracion".into(),
                    vocab_error(
                        "calibracion_fuera_de_orden",
                        "la próxima calibración debe ser posterior a la última",
                    ),
                );
            }
        }
        if proxima <= Utc::now().date_naive() {
            errors.add(
                "proxima_calibracion".into(),
                vocab_error(
                    "calibracion_no_futura",
                    "la próxima calibración debe estar en el futuro",
                ),
            );
        }
    }
}
