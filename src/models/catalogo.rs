//! Diesel rows for the catalog tables.

use diesel::prelude::*;

use crate::domain::catalog::{
    Manufacturer as DomainManufacturer, Modality as DomainModality,
    NewManufacturer as DomainNewManufacturer, NewModality as DomainNewModality,
    NewTechnician as DomainNewTechnician, Technician as DomainTechnician,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::modalidades)]
#[diesel(primary_key(modalidad_id))]
pub struct Modalidad {
    pub modalidad_id: i32,
    pub codigo: String,
    pub descripcion: String,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::modalidades)]
pub struct NewModalidad<'a> {
    pub codigo: &'a str,
    pub descripcion: &'a str,
}

impl From<Modalidad> for DomainModality {
    fn from(row: Modalidad) -> Self {
        Self {
            id: row.modalidad_id,
            codigo: row.codigo,
            descripcion: row.descripcion,
        }
    }
}

impl<'a> From<&'a DomainNewModality> for NewModalidad<'a> {
    fn from(modality: &'a DomainNewModality) -> Self {
        Self {
            codigo: &modality.codigo,
            descripcion: &modality.descripcion,
        }
    }
}

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::fabricantes)]
#[diesel(primary_key(fabricante_id))]
pub struct Fabricante {
    pub fabricante_id: i32,
    pub nombre: String,
    pub pais: Option<String>,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::fabricantes)]
pub struct NewFabricante<'a> {
    pub nombre: &'a str,
    pub pais: Option<&'a str>,
}

impl From<Fabricante> for DomainManufacturer {
    fn from(row: Fabricante) -> Self {
        Self {
            id: row.fabricante_id,
            nombre: row.nombre,
            pais: row.pais.unwrap_or_default(),
        }
    }
}

impl<'a> From<&'a DomainNewManufacturer> for NewFabricante<'a> {
    fn from(manufacturer: &'a DomainNewManufacturer) -> Self {
        Self {
            nombre: &manufacturer.nombre,
            pais: manufacturer.pais.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::tecnicos)]
#[diesel(primary_key(tecnico_id))]
pub struct Tecnico {
    pub tecnico_id: i32,
    pub nombre: String,
    pub email: String,
    pub telefono: Option<String>,
    pub especialidad: Option<String>,
    pub activo: bool,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::tecnicos)]
pub struct NewTecnico<'a> {
    pub nombre: &'a str,
    pub email: &'a str,
    pub telefono: Option<&'a str>,
    pub especialidad: Option<&'a str>,
    pub activo: bool,
}

impl From<Tecnico> for DomainTechnician {
    fn from(row: Tecnico) -> Self {
        Self {
            id: row.tecnico_id,
            nombre: row.nombre,
            email: row.email,
            telefono: row.telefono.unwrap_or_default(),
            especialidad: row.especialidad.unwrap_or_default(),
            activo: row.activo,
        }
    }
}

impl<'a> From<&'a DomainNewTechnician> for NewTecnico<'a> {
    fn from(technician: &'a DomainNewTechnician) -> Self {
        Self {
            nombre: &technician.nombre,
            email: &technician.email,
            telefono: technician.telefono.as_deref(),
            especialidad: technician.especialidad.as_deref(),
            activo: technician.activo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modalidad_row_into_domain() {
        let row = Modalidad {
            modalidad_id: 1,
            codigo: "CT".to_string(),
            descripcion: "Tomografía Computarizada".to_string(),
        };
        let modality: DomainModality = row.into();
        assert_eq!(modality.id, 1);
        assert_eq!(modality.codigo, "CT");
    }

    #[test]
    fn tecnico_row_defaults_optional_columns() {
        let row = Tecnico {
            tecnico_id: 2,
            nombre: "Laura Peña".to_string(),
            email: "laura@servicio.com".to_string(),
            telefono: None,
            especialidad: None,
            activo: true,
        };
        let technician: DomainTechnician = row.into();
        assert_eq!(technician.telefono, "");
        assert_eq!(technician.especialidad, "");
    }
}
