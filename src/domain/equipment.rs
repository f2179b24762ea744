use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::{ClienteId, EquipmentStatus, FabricanteId, ModalidadId};

/// Equipment unit as consumed by the view model.
///
/// Display fields (`cliente`, `modalidad`, `fabricante`) are denormalized at
/// read time from the related catalog rows; optional wire columns surface as
/// empty strings, never as absent values.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: i32,
    pub nombre: String,
    pub numero_serie: String,
    pub cliente_id: i32,
    pub cliente: String,
    pub modalidad_id: i32,
    pub modalidad: String,
    pub fabricante_id: i32,
    pub fabricante: String,
    pub contrato_id: Option<i32>,
    pub estado: EquipmentStatus,
    pub ubicacion: String,
    pub fecha_instalacion: Option<NaiveDate>,
    pub ultima_calibracion: Option<NaiveDate>,
    pub proxima_calibracion: Option<NaiveDate>,
    pub imagen_url: String,
    pub observaciones: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Write model for creating an equipment unit.
///
/// Related entities must arrive as resolved typed identifiers; there is no
/// fallback id for an unresolved relation.
#[derive(Clone, Debug)]
pub struct NewEquipment {
    pub nombre: String,
    pub numero_serie: String,
    pub cliente_id: ClienteId,
    pub modalidad_id: ModalidadId,
    pub fabricante_id: FabricanteId,
    pub contrato_id: Option<i32>,
    pub estado: EquipmentStatus,
    pub ubicacion: Option<String>,
    pub fecha_instalacion: Option<NaiveDate>,
    pub ultima_calibracion: Option<NaiveDate>,
    pub proxima_calibracion: Option<NaiveDate>,
    pub observaciones: Option<String>,
}

impl NewEquipment {
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        nombre: String,
        numero_serie: String,
        cliente_id: ClienteId,
        modalidad_id: ModalidadId,
        fabricante_id: FabricanteId,
        contrato_id: Option<i32>,
        estado: EquipmentStatus,
        ubicacion: Option<String>,
        fecha_instalacion: Option<NaiveDate>,
        ultima_calibracion: Option<NaiveDate>,
        proxima_calibracion: Option<NaiveDate>,
        observaciones: Option<String>,
    ) -> Self {
        Self {
            nombre: nombre.trim().to_string(),
            numero_serie: numero_serie.trim().to_string(),
            cliente_id,
            modalidad_id,
            fabricante_id,
            contrato_id,
            estado,
            ubicacion: ubicacion
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            fecha_instalacion,
            ultima_calibracion,
            proxima_calibracion,
            observaciones: observaciones
                .map(|s| ammonia::clean(&s).trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

/// Write model for updating an equipment unit.
#[derive(Clone, Debug)]
pub struct UpdateEquipment {
    pub nombre: String,
    pub numero_serie: String,
    pub estado: EquipmentStatus,
    pub ubicacion: Option<String>,
    pub fecha_instalacion: Option<NaiveDate>,
    pub ultima_calibracion: Option<NaiveDate>,
    pub proxima_calibracion: Option<NaiveDate>,
    pub observaciones: Option<String>,
    /// Optional note recorded with the history entry when the update changes
    /// the lifecycle status.
    pub nota: Option<String>,
}

impl UpdateEquipment {
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        nombre: String,
        numero_serie: String,
        estado: EquipmentStatus,
        ubicacion: Option<String>,
        fecha_instalacion: Option<NaiveDate>,
        ultima_calibracion: Option<NaiveDate>,
        proxima_calibracion: Option<NaiveDate>,
        observaciones: Option<String>,
        nota: Option<String>,
    ) -> Self {
        Self {
            nombre: nombre.trim().to_string(),
            numero_serie: numero_serie.trim().to_string(),
            estado,
            ubicacion: ubicacion
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            fecha_instalacion,
            ultima_calibracion,
            proxima_calibracion,
            observaciones: observaciones
                .map(|s| ammonia::clean(&s).trim().to_string())
                .filter(|s| !s.is_empty()),
            nota: nota
                .map(|s| ammonia::clean(&s).trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}
