//! Diesel rows for the lifecycle history tables.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::history::{
    EquipmentHistoryEntry, NewEquipmentHistoryEntry, NewOrderHistoryEntry, OrderHistoryEntry,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::historial_equipos)]
#[diesel(primary_key(historial_id))]
pub struct HistorialEquipo {
    pub historial_id: i32,
    pub equipo_id: i32,
    pub estado_anterior: String,
    pub estado_nuevo: String,
    pub nota: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::historial_equipos)]
pub struct NewHistorialEquipo<'a> {
    pub equipo_id: i32,
    pub estado_anterior: &'static str,
    pub estado_nuevo: &'static str,
    pub nota: Option<&'a str>,
}

impl From<HistorialEquipo> for EquipmentHistoryEntry {
    fn from(row: HistorialEquipo) -> Self {
        Self {
            id: row.historial_id,
            equipo_id: row.equipo_id,
            estado_anterior: row.estado_anterior,
            estado_nuevo: row.estado_nuevo,
            nota: row.nota.unwrap_or_default(),
            created_at: row.created_at,
        }
    }
}

impl<'a> NewHistorialEquipo<'a> {
    pub fn from_domain(equipo_id: i32, entry: &'a NewEquipmentHistoryEntry) -> Self {
        Self {
            equipo_id,
            estado_anterior: entry.estado_anterior.as_str(),
            estado_nuevo: entry.estado_nuevo.as_str(),
            nota: entry.nota.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::historial_ordenes)]
#[diesel(primary_key(historial_id))]
pub struct HistorialOrden {
    pub historial_id: i32,
    pub orden_id: i32,
    pub estado_anterior: String,
    pub estado_nuevo: String,
    pub nota: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::historial_ordenes)]
pub struct NewHistorialOrden<'a> {
    pub orden_id: i32,
    pub estado_anterior: &'static str,
    pub estado_nuevo: &'static str,
    pub nota: Option<&'a str>,
}

impl From<HistorialOrden> for OrderHistoryEntry {
    fn from(row: HistorialOrden) -> Self {
        Self {
            id: row.historial_id,
            orden_id: row.orden_id,
            estado_anterior: row.estado_anterior,
            estado_nuevo: row.estado_nuevo,
            nota: row.nota.unwrap_or_default(),
            created_at: row.created_at,
        }
    }
}

impl<'a> NewHistorialOrden<'a> {
    pub fn from_domain(orden_id: i32, entry: &'a NewOrderHistoryEntry) -> Self {
        Self {
            orden_id,
            estado_anterior: entry.estado_anterior.as_str(),
            estado_nuevo: entry.estado_nuevo.as_str(),
            nota: entry.nota.as_deref(),
        }
    }
}
