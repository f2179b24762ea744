use chrono::NaiveDate;
use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::domain::equipment::{NewEquipment, UpdateEquipment};
use crate::domain::types::{
    ClienteId, EquipmentStatus, FabricanteId, ModalidadId, VocabularyError,
};
use crate::forms::{check_calibration_window, estado_equipo_vocab, SERIE_RE};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Payload for registering an equipment unit.
pub struct AddEquipoForm {
    #[validate(length(min = 1, max = 120))]
    pub nombre: String,
    #[validate(
        length(min = 1, max = 40),
        regex(path = *SERIE_RE, message = "número de serie inválido")
    )]
    pub numero_serie: String,
    pub cliente_id: i32,
    pub modalidad_id: i32,
    pub fabricante_id: i32,
    #[serde(default)]
    pub contrato_id: Option<i32>,
    #[validate(custom(function = estado_equipo_vocab))]
    pub estado: String,
    #[serde(default)]
    #[validate(length(max = 120))]
    pub ubicacion: Option<String>,
    #[serde(default)]
    pub fecha_instalacion: Option<NaiveDate>,
    #[serde(default)]
    pub ultima_calibracion: Option<NaiveDate>,
    #[serde(default)]
    pub proxima_calibracion: Option<NaiveDate>,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub observaciones: Option<String>,
}

impl AddEquipoForm {
    /// Declarative rules plus the calibration window ordering.
    pub fn check(&self) -> Result<(), ValidationErrors> {
        let mut errors = self.validate().err().unwrap_or_else(ValidationErrors::new);
        check_calibration_window(
            self.fecha_instalacion,
            self.ultima_calibracion,
            self.proxima_calibracion,
            &mut errors,
        );
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl TryFrom<&AddEquipoForm> for NewEquipment {
    type Error = VocabularyError;

    fn try_from(form: &AddEquipoForm) -> Result<Self, Self::Error> {
        let estado: EquipmentStatus = form.estado.parse()?;
        Ok(NewEquipment::new(
            form.nombre.clone(),
            form.numero_serie.clone(),
            ClienteId::new(form.cliente_id)?,
            ModalidadId::new(form.modalidad_id)?,
            FabricanteId::new(form.fabricante_id)?,
            form.contrato_id,
            estado,
            form.ubicacion.clone(),
            form.fecha_instalacion,
            form.ultima_calibracion,
            form.proxima_calibracion,
            form.observaciones.clone(),
        ))
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Payload for updating an existing equipment unit.
pub struct SaveEquipoForm {
    #[validate(length(min = 1, max = 120))]
    pub nombre: String,
    #[validate(
        length(min = 1, max = 40),
        regex(path = *SERIE_RE, message = "número de serie inválido")
    )]
    pub numero_serie: String,
    #[validate(custom(function = estado_equipo_vocab))]
    pub estado: String,
    #[serde(default)]
    #[validate(length(max = 120))]
    pub ubicacion: Option<String>,
    #[serde(default)]
    pub fecha_instalacion: Option<NaiveDate>,
    #[serde(default)]
    pub ultima_calibracion: Option<NaiveDate>,
    #[serde(default)]
    pub proxima_calibracion: Option<NaiveDate>,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub observaciones: Option<String>,
    /// Optional note for the history entry recorded on a status change.
    #[serde(default)]
    #[validate(length(max = 500))]
    pub nota: Option<String>,
}

impl SaveEquipoForm {
    /// Declarative rules plus the calibration window ordering.
    pub fn check(&self) -> Result<(), ValidationErrors> {
        let mut errors = self.validate().err().unwrap_or_else(ValidationErrors::new);
        check_calibration_window(
            self.fecha_instalacion,
            self.ultima_calibracion,
            self.proxima_calibracion,
            &mut errors,
        );
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl TryFrom<&SaveEquipoForm> for UpdateEquipment {
    type Error = VocabularyError;

    fn try_from(form: &SaveEquipoForm) -> Result<Self, Self::Error> {
        let estado: EquipmentStatus = form.estado.parse()?;
        Ok(UpdateEquipment::new(
            form.nombre.clone(),
            form.numero_serie.clone(),
            estado,
            form.ubicacion.clone(),
            form.fecha_instalacion,
            form.ultima_calibracion,
            form.proxima_calibracion,
            form.observaciones.clone(),
            form.nota.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn valid_form() -> AddEquipoForm {
        let today = Utc::now().date_naive();
        AddEquipoForm {
            nombre: "Resonador 3T".to_string(),
            numero_serie: "MR-2024-001".to_string(),
            cliente_id: 1,
            modalidad_id: 2,
            fabricante_id: 3,
            contrato_id: None,
            estado: "operational".to_string(),
            ubicacion: Some("Piso 2".to_string()),
            fecha_instalacion: Some(today - Duration::days(400)),
            ultima_calibracion: Some(today - Duration::days(30)),
            proxima_calibracion: Some(today + Duration::days(335)),
            observaciones: None,
        }
    }

    #[test]
    fn valid_payload_passes() {
        assert!(valid_form().check().is_ok());
    }

    #[test]
    fn lowercase_serial_fails() {
        let mut form = valid_form();
        form.numero_serie = "mr-2024-001".to_string();
        let errors = form.check().unwrap_err();
        assert!(errors.errors().contains_key("numero_serie"));
    }

    #[test]
    fn proxima_not_after_ultima_fails_keyed_to_proxima() {
        let mut form = valid_form();
        form.proxima_calibracion = form.ultima_calibracion;
        let errors = form.check().unwrap_err();
        assert!(errors.errors().contains_key("proxima_calibracion"));
    }

    #[test]
    fn proxima_in_the_past_fails() {
        let today = Utc::now().date_naive();
        let mut form = valid_form();
        form.ultima_calibracion = Some(today - Duration::days(800));
        form.proxima_calibracion = Some(today - Duration::days(400));
        let errors = form.check().unwrap_err();
        assert!(errors.errors().contains_key("proxima_calibracion"));
    }

    #[test]
    fn ultima_before_instalacion_fails() {
        let today = Utc::now().date_naive();
        let mut form = valid_form();
        form.ultima_calibracion = Some(today - Duration::days(500));
        let errors = form.check().unwrap_err();
        assert!(errors.errors().contains_key("ultima_calibracion"));
    }

    #[test]
    fn unknown_estado_fails() {
        let mut form = valid_form();
        form.estado = "broken".to_string();
        let errors = form.check().unwrap_err();
        assert!(errors.errors().contains_key("estado"));
    }

    #[test]
    fn non_positive_foreign_key_fails_mapping_loudly() {
        let mut form = valid_form();
        form.cliente_id = 0;
        // Passes field validation but cannot be mapped: no sentinel default.
        assert!(NewEquipment::try_from(&form).is_err());
    }

    #[test]
    fn form_maps_to_new_equipment() {
        let form = valid_form();
        form.check().unwrap();
        let equipment = NewEquipment::try_from(&form).unwrap();
        assert_eq!(equipment.estado, EquipmentStatus::Operational);
        assert_eq!(equipment.cliente_id.get(), 1);
    }
}
