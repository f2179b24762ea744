use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::{ClienteId, EquipoId, OrderPriority, OrderStatus, TecnicoId};

/// Work order as consumed by the view model.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrder {
    pub id: i32,
    pub equipo_id: i32,
    pub equipo: String,
    pub cliente_id: i32,
    pub cliente: String,
    pub tecnico_id: Option<i32>,
    /// Empty when no technician has been assigned yet.
    pub tecnico: String,
    pub prioridad: OrderPriority,
    pub estado: OrderStatus,
    pub descripcion: String,
    pub fecha_programada: Option<NaiveDate>,
    pub fecha_cierre: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Write model for opening a work order.
#[derive(Clone, Debug)]
pub struct NewWorkOrder {
    pub equipo_id: EquipoId,
    pub cliente_id: ClienteId,
    pub tecnico_id: Option<TecnicoId>,
    pub prioridad: OrderPriority,
    pub descripcion: String,
    pub fecha_programada: Option<NaiveDate>,
}

impl NewWorkOrder {
    #[must_use]
    pub fn new(
        equipo_id: EquipoId,
        cliente_id: ClienteId,
        tecnico_id: Option<TecnicoId>,
        prioridad: OrderPriority,
        descripcion: String,
        fecha_programada: Option<NaiveDate>,
    ) -> Self {
        Self {
            equipo_id,
            cliente_id,
            tecnico_id,
            prioridad,
            descripcion: ammonia::clean(&descripcion).trim().to_string(),
            fecha_programada,
        }
    }
}

/// Write model for updating a work order.
#[derive(Clone, Debug)]
pub struct UpdateWorkOrder {
    pub tecnico_id: Option<TecnicoId>,
    pub prioridad: OrderPriority,
    pub estado: OrderStatus,
    pub descripcion: String,
    pub fecha_programada: Option<NaiveDate>,
    /// Optional note recorded with the history entry when the update changes
    /// the lifecycle status.
    pub nota: Option<String>,
}

impl UpdateWorkOrder {
    #[must_use]
    pub fn new(
        tecnico_id: Option<TecnicoId>,
        prioridad: OrderPriority,
        estado: OrderStatus,
        descripcion: String,
        fecha_programada: Option<NaiveDate>,
        nota: Option<String>,
    ) -> Self {
        Self {
            tecnico_id,
            prioridad,
            estado,
            descripcion: ammonia::clean(&descripcion).trim().to_string(),
            fecha_programada,
            nota: nota
                .map(|s| ammonia::clean(&s).trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{EstadoOrden, PrioridadOrden};

    #[test]
    fn new_order_sanitizes_description() {
        let order = NewWorkOrder::new(
            EquipoId::new(7).unwrap(),
            ClienteId::new(3).unwrap(),
            None,
            OrderPriority::High,
            "  Fuga de helio <b>urgente</b><script>alert(1)</script>  ".into(),
            None,
        );
        assert_eq!(order.descripcion, "Fuga de helio <b>urgente</b>");
        assert_eq!(order.prioridad.canonical(), PrioridadOrden::Alta);
    }

    #[test]
    fn update_order_canonicalizes_status() {
        let update = UpdateWorkOrder::new(
            Some(TecnicoId::new(2).unwrap()),
            OrderPriority::Normal,
            OrderStatus::InProgress,
            "Revisión".into(),
            None,
            Some(" en sitio ".into()),
        );
        assert_eq!(update.estado.canonical(), EstadoOrden::EnProgreso);
        assert_eq!(update.nota, Some("en sitio".to_string()));
    }
}
