//! Lifecycle history entries for equipment units and work orders.
//!
//! A history row is appended whenever an update changes the stored lifecycle
//! status. Both the previous and the new value are kept in the wire
//! vocabulary so the fold to the view vocabulary stays reconstructible.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{EstadoEquipo, EstadoOrden};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentHistoryEntry {
    pub id: i32,
    pub equipo_id: i32,
    pub estado_anterior: String,
    pub estado_nuevo: String,
    pub nota: String,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug)]
pub struct NewEquipmentHistoryEntry {
    pub estado_anterior: EstadoEquipo,
    pub estado_nuevo: EstadoEquipo,
    pub nota: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderHistoryEntry {
    pub id: i32,
    pub orden_id: i32,
    pub estado_anterior: String,
    pub estado_nuevo: String,
    pub nota: String,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug)]
pub struct NewOrderHistoryEntry {
    pub estado_anterior: EstadoOrden,
    pub estado_nuevo: EstadoOrden,
    pub nota: Option<String>,
}
