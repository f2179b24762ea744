use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::equipment::{
    Equipment as DomainEquipment, NewEquipment as DomainNewEquipment,
    UpdateEquipment as DomainUpdateEquipment,
};
use crate::domain::types::{EstadoEquipo, VocabularyError};

#[derive(Debug, Clone, Identifiable, Queryable, QueryableByName)]
#[diesel(table_name = crate::schema::equipos)]
#[diesel(primary_key(equipo_id))]
/// Diesel row for [`crate::domain::equipment::Equipment`].
pub struct Equipo {
    pub equipo_id: i32,
    pub cliente_id: i32,
    pub modalidad_id: i32,
    pub fabricante_id: i32,
    pub contrato_id: Option<i32>,
    pub nombre: String,
    pub numero_serie: String,
    pub estado: String,
    pub ubicacion: Option<String>,
    pub fecha_instalacion: Option<NaiveDate>,
    pub ultima_calibracion: Option<NaiveDate>,
    pub proxima_calibracion: Option<NaiveDate>,
    pub imagen_url: Option<String>,
    pub imagen_key: Option<String>,
    pub observaciones: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Equipo {
    /// Parses the stored lifecycle status into the wire vocabulary.
    pub fn estado(&self) -> Result<EstadoEquipo, VocabularyError> {
        self.estado.parse()
    }

    /// Converts the row into the view model, denormalizing the display
    /// names loaded from the related rows.
    pub fn into_domain(
        self,
        cliente: String,
        modalidad: String,
        fabricante: String,
    ) -> Result<DomainEquipment, VocabularyError> {
        let estado: EstadoEquipo = self.estado.parse()?;
        Ok(DomainEquipment {
            id: self.equipo_id,
            nombre: self.nombre,
            numero_serie: self.numero_serie,
            cliente_id: self.cliente_id,
            cliente,
            modalidad_id: self.modalidad_id,
            modalidad,
            fabricante_id: self.fabricante_id,
            fabricante,
            contrato_id: self.contrato_id,
            estado: estado.into(),
            ubicacion: self.ubicacion.unwrap_or_default(),
            fecha_instalacion: self.fecha_instalacion,
            ultima_calibracion: self.ultima_calibracion,
            proxima_calibracion: self.proxima_calibracion,
            imagen_url: self.imagen_url.unwrap_or_default(),
            observaciones: self.observaciones.unwrap_or_default(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::equipos)]
/// Insertable form of [`Equipo`].
pub struct NewEquipo<'a> {
    pub cliente_id: i32,
    pub modalidad_id: i32,
    pub fabricante_id: i32,
    pub contrato_id: Option<i32>,
    pub nombre: &'a str,
    pub numero_serie: &'a str,
    pub estado: &'static str,
    pub ubicacion: Option<&'a str>,
    pub fecha_instalacion: Option<NaiveDate>,
    pub ultima_calibracion: Option<NaiveDate>,
    pub proxima_calibracion: Option<NaiveDate>,
    pub observaciones: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::equipos)]
/// Data used when updating an [`Equipo`] row.
pub struct UpdateEquipo<'a> {
    pub nombre: &'a str,
    pub numero_serie: &'a str,
    pub estado: &'static str,
    pub ubicacion: Option<Option<&'a str>>,
    pub fecha_instalacion: Option<Option<NaiveDate>>,
    pub ultima_calibracion: Option<Option<NaiveDate>>,
    pub proxima_calibracion: Option<Option<NaiveDate>>,
    pub observaciones: Option<Option<&'a str>>,
}

impl<'a> From<&'a DomainNewEquipment> for NewEquipo<'a> {
    fn from(equipment: &'a DomainNewEquipment) -> Self {
        Self {
            cliente_id: equipment.cliente_id.get(),
            modalidad_id: equipment.modalidad_id.get(),
            fabricante_id: equipment.fabricante_id.get(),
            contrato_id: equipment.contrato_id,
            nombre: &equipment.nombre,
            numero_serie: &equipment.numero_serie,
            estado: equipment.estado.canonical().as_str(),
            ubicacion: equipment.ubicacion.as_deref(),
            fecha_instalacion: equipment.fecha_instalacion,
            ultima_calibracion: equipment.ultima_calibracion,
            proxima_calibracion: equipment.proxima_calibracion,
            observaciones: equipment.observaciones.as_deref(),
        }
    }
}

impl<'a> From<&'a DomainUpdateEquipment> for UpdateEquipo<'a> {
    fn from(equipment: &'a DomainUpdateEquipment) -> Self {
        Self {
            nombre: &equipment.nombre,
            numero_serie: &equipment.numero_serie,
            estado: equipment.estado.canonical().as_str(),
            ubicacion: Some(equipment.ubicacion.as_deref()),
            fecha_instalacion: Some(equipment.fecha_instalacion),
            ultima_calibracion: Some(equipment.ultima_calibracion),
            proxima_calibracion: Some(equipment.proxima_calibracion),
            observaciones: Some(equipment.observaciones.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{ClienteId, EquipmentStatus, FabricanteId, ModalidadId};
    use chrono::Utc;

    fn sample_row(estado: &str) -> Equipo {
        let now = Utc::now().naive_utc();
        Equipo {
            equipo_id: 9,
            cliente_id: 1,
            modalidad_id: 2,
            fabricante_id: 3,
            contrato_id: None,
            nombre: "Tomógrafo".to_string(),
            numero_serie: "CT-77".to_string(),
            estado: estado.to_string(),
            ubicacion: None,
            fecha_instalacion: None,
            ultima_calibracion: None,
            proxima_calibracion: None,
            imagen_url: None,
            imagen_key: None,
            observaciones: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn row_into_domain_collapses_estado() {
        for (estado, status) in [
            ("Operativo", EquipmentStatus::Operational),
            ("En_Mantenimiento", EquipmentStatus::Maintenance),
            ("Fuera_de_Servicio", EquipmentStatus::OutOfService),
            ("Desinstalado", EquipmentStatus::OutOfService),
        ] {
            let equipment = sample_row(estado)
                .into_domain("Hospital Central".into(), "Tomografía".into(), "Siemens".into())
                .unwrap();
            assert_eq!(equipment.estado, status);
        }
    }

    #[test]
    fn row_into_domain_denormalizes_display_names() {
        let equipment = sample_row("Operativo")
            .into_domain("Hospital Central".into(), "Tomografía".into(), "Siemens".into())
            .unwrap();
        assert_eq!(equipment.cliente, "Hospital Central");
        assert_eq!(equipment.modalidad, "Tomografía");
        assert_eq!(equipment.fabricante, "Siemens");
        // Optional columns surface as empty strings, never as absent values.
        assert_eq!(equipment.ubicacion, "");
        assert_eq!(equipment.imagen_url, "");
    }

    #[test]
    fn row_with_unknown_estado_fails_loudly() {
        let result =
            sample_row("Prestado").into_domain("c".into(), "m".into(), "f".into());
        assert!(result.is_err());
    }

    #[test]
    fn new_equipment_writes_canonical_estado() {
        let domain = DomainNewEquipment::new(
            "Tomógrafo".into(),
            "CT-77".into(),
            ClienteId::new(1).unwrap(),
            ModalidadId::new(2).unwrap(),
            FabricanteId::new(3).unwrap(),
            None,
            EquipmentStatus::OutOfService,
            None,
            None,
            None,
            None,
            None,
        );
        let insertable: NewEquipo = (&domain).into();
        // The canonical inverse of out-of-service, never Desinstalado.
        assert_eq!(insertable.estado, "Fuera_de_Servicio");
        assert_eq!(insertable.cliente_id, 1);
    }
}
