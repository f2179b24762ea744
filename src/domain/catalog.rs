//! Catalog aggregates: imaging modalities, manufacturers and technicians.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Modality {
    pub id: i32,
    pub codigo: String,
    pub descripcion: String,
}

#[derive(Clone, Debug)]
pub struct NewModality {
    pub codigo: String,
    pub descripcion: String,
}

impl NewModality {
    #[must_use]
    pub fn new(codigo: String, descripcion: String) -> Self {
        Self {
            codigo: codigo.trim().to_uppercase(),
            descripcion: descripcion.trim().to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Manufacturer {
    pub id: i32,
    pub nombre: String,
    pub pais: String,
}

#[derive(Clone, Debug)]
pub struct NewManufacturer {
    pub nombre: String,
    pub pais: Option<String>,
}

impl NewManufacturer {
    #[must_use]
    pub fn new(nombre: String, pais: Option<String>) -> Self {
        Self {
            nombre: nombre.trim().to_string(),
            pais: pais.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Technician {
    pub id: i32,
    pub nombre: String,
    pub email: String,
    pub telefono: String,
    pub especialidad: String,
    pub activo: bool,
}

#[derive(Clone, Debug)]
pub struct NewTechnician {
    pub nombre: String,
    pub email: String,
    pub telefono: Option<String>,
    pub especialidad: Option<String>,
    pub activo: bool,
}

impl NewTechnician {
    #[must_use]
    pub fn new(
        nombre: String,
        email: String,
        telefono: Option<String>,
        especialidad: Option<String>,
        activo: bool,
    ) -> Self {
        Self {
            nombre: nombre.trim().to_string(),
            email: email.trim().to_lowercase(),
            telefono: telefono
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            especialidad: especialidad
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            activo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_modality_uppercases_code() {
        let modality = NewModality::new(" ct ".into(), " Tomografía Computarizada ".into());
        assert_eq!(modality.codigo, "CT");
        assert_eq!(modality.descripcion, "Tomografía Computarizada");
    }

    #[test]
    fn new_technician_normalizes_email() {
        let technician = NewTechnician::new(
            "Laura Peña".into(),
            " Laura.P@Servicio.COM ".into(),
            Some("".into()),
            None,
            true,
        );
        assert_eq!(technician.email, "laura.p@servicio.com");
        assert_eq!(technician.telefono, None);
    }
}
