//! Payloads for the catalog resources.

use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::domain::catalog::{NewManufacturer, NewModality, NewTechnician};
use crate::forms::{telefono_format, CODIGO_RE};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Payload for creating or updating an imaging modality.
pub struct ModalidadForm {
    #[validate(regex(path = *CODIGO_RE, message = "código inválido"))]
    pub codigo: String,
    #[validate(length(min = 1, max = 120))]
    pub descripcion: String,
}

impl ModalidadForm {
    /// Runs every declarative rule; the single validation gate.
    pub fn check(&self) -> Result<(), ValidationErrors> {
        self.validate()
    }
}

impl From<&ModalidadForm> for NewModality {
    fn from(form: &ModalidadForm) -> Self {
        NewModality::new(form.codigo.clone(), form.descripcion.clone())
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Payload for creating or updating a manufacturer.
pub struct FabricanteForm {
    #[validate(length(min = 1, max = 80))]
    pub nombre: String,
    #[serde(default)]
    #[validate(length(max = 56))]
    pub pais: Option<String>,
}

impl FabricanteForm {
    pub fn check(&self) -> Result<(), ValidationErrors> {
        self.validate()
    }
}

impl From<&FabricanteForm> for NewManufacturer {
    fn from(form: &FabricanteForm) -> Self {
        NewManufacturer::new(form.nombre.clone(), form.pais.clone())
    }
}

fn default_activo() -> bool {
    true
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Payload for creating or updating a technician.
pub struct TecnicoForm {
    #[validate(length(min = 1, max = 120))]
    pub nombre: String,
    #[validate(email(message = "correo electrónico inválido"))]
    pub email: String,
    #[serde(default)]
    #[validate(custom(function = telefono_format))]
    pub telefono: String,
    #[serde(default)]
    #[validate(length(max = 80))]
    pub especialidad: Option<String>,
    #[serde(default = "default_activo")]
    pub activo: bool,
}

impl TecnicoForm {
    pub fn check(&self) -> Result<(), ValidationErrors> {
        self.validate()
    }
}

impl From<&TecnicoForm> for NewTechnician {
    fn from(form: &TecnicoForm) -> Self {
        NewTechnician::new(
            form.nombre.clone(),
            form.email.clone(),
            Some(form.telefono.clone()),
            form.especialidad.clone(),
            form.activo,
        )
    }
}
