use chrono::NaiveDate;
use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::domain::order::{NewWorkOrder, UpdateWorkOrder};
use crate::domain::types::{
    ClienteId, EquipoId, OrderPriority, OrderStatus, TecnicoId, VocabularyError,
};
use crate::forms::{estado_orden_vocab, prioridad_vocab};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Payload for opening a work order.
pub struct AddOrdenForm {
    pub equipo_id: i32,
    pub cliente_id: i32,
    #[serde(default)]
    pub tecnico_id: Option<i32>,
    #[validate(custom(function = prioridad_vocab))]
    pub prioridad: String,
    #[validate(length(min = 1, max = 2000))]
    pub descripcion: String,
    #[serde(default)]
    pub fecha_programada: Option<NaiveDate>,
}

impl AddOrdenForm {
    /// Runs every declarative rule; the single validation gate for creates.
    pub fn check(&self) -> Result<(), ValidationErrors> {
        self.validate()
    }
}

impl TryFrom<&AddOrdenForm> for NewWorkOrder {
    type Error = VocabularyError;

    fn try_from(form: &AddOrdenForm) -> Result<Self, Self::Error> {
        let prioridad: OrderPriority = form.prioridad.parse()?;
        let tecnico_id = form.tecnico_id.map(TecnicoId::new).transpose()?;
        Ok(NewWorkOrder::new(
            EquipoId::new(form.equipo_id)?,
            ClienteId::new(form.cliente_id)?,
            tecnico_id,
            prioridad,
            form.descripcion.clone(),
            form.fecha_programada,
        ))
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Payload for updating a work order.
pub struct SaveOrdenForm {
    #[serde(default)]
    pub tecnico_id: Option<i32>,
    #[validate(custom(function = prioridad_vocab))]
    pub prioridad: String,
    #[validate(custom(function = estado_orden_vocab))]
    pub estado: String,
    #[validate(length(min = 1, max = 2000))]
    pub descripcion: String,
    #[serde(default)]
    pub fecha_programada: Option<NaiveDate>,
    /// Optional note for the history entry recorded on a status change.
    #[serde(default)]
    #[validate(length(max = 500))]
    pub nota: Option<String>,
}

impl SaveOrdenForm {
    /// Runs every declarative rule; the single validation gate for updates.
    pub fn check(&self) -> Result<(), ValidationErrors> {
        self.validate()
    }
}

impl TryFrom<&SaveOrdenForm> for UpdateWorkOrder {
    type Error = VocabularyError;

    fn try_from(form: &SaveOrdenForm) -> Result<Self, Self::Error> {
        let prioridad: OrderPriority = form.prioridad.parse()?;
        let estado: OrderStatus = form.estado.parse()?;
        let tecnico_id = form.tecnico_id.map(TecnicoId::new).transpose()?;
        Ok(UpdateWorkOrder::new(
            tecnico_id,
            prioridad,
            estado,
            form.descripcion.clone(),
            form.fecha_programada,
            form.nota.clone(),
        ))
    }
}
