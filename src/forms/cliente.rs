use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::client::{ContactInfo, NewClient, UpdateClient};
use crate::domain::types::{ClientSector, VocabularyError};
use crate::forms::{sector_vocab, telefono_format};

fn email_format(value: &str) -> Result<(), ValidationError> {
    use validator::ValidateEmail;

    if value.is_empty() || value.validate_email() {
        Ok(())
    } else {
        let mut error = ValidationError::new("email");
        error.message = Some("correo electrónico inválido".into());
        Err(error)
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
/// Structured contact block submitted with a client payload.
pub struct ContactoForm {
    #[serde(default)]
    #[validate(custom(function = telefono_format))]
    pub telefono: String,
    #[serde(default)]
    #[validate(custom(function = email_format))]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 120))]
    pub responsable: String,
}

impl From<&ContactoForm> for ContactInfo {
    fn from(form: &ContactoForm) -> Self {
        Self {
            telefono: form.telefono.clone(),
            email: form.email.clone(),
            responsable: form.responsable.clone(),
        }
    }
}

fn default_activo() -> bool {
    true
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Payload for registering a client organization.
pub struct AddClienteForm {
    #[validate(length(min = 1, max = 120))]
    pub nombre: String,
    #[validate(custom(function = sector_vocab))]
    pub sector: String,
    #[serde(default)]
    #[validate(nested)]
    pub contacto: ContactoForm,
    #[serde(default)]
    #[validate(length(max = 200))]
    pub direccion: Option<String>,
    #[serde(default)]
    #[validate(length(max = 80))]
    pub ciudad: Option<String>,
    #[serde(default = "default_activo")]
    pub activo: bool,
}

impl AddClienteForm {
    /// Runs every declarative rule; the single validation gate for creates.
    pub fn check(&self) -> Result<(), ValidationErrors> {
        self.validate()
    }
}

impl TryFrom<&AddClienteForm> for NewClient {
    type Error = VocabularyError;

    fn try_from(form: &AddClienteForm) -> Result<Self, Self::Error> {
        let sector: ClientSector = form.sector.parse()?;
        Ok(NewClient::new(
            form.nombre.clone(),
            sector,
            (&form.contacto).into(),
            form.direccion.clone(),
            form.ciudad.clone(),
            form.activo,
        ))
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Payload for updating an existing client organization.
pub struct SaveClienteForm {
    #[validate(length(min = 1, max = 120))]
    pub nombre: String,
    #[validate(custom(function = sector_vocab))]
    pub sector: String,
    #[serde(default)]
    #[validate(nested)]
    pub contacto: ContactoForm,
    #[serde(default)]
    #[validate(length(max = 200))]
    pub direccion: Option<String>,
    #[serde(default)]
    #[validate(length(max = 80))]
    pub ciudad: Option<String>,
    #[serde(default = "default_activo")]
    pub activo: bool,
}

impl SaveClienteForm {
    /// Runs every declarative rule; the single validation gate for updates.
    pub fn check(&self) -> Result<(), ValidationErrors> {
        self.validate()
    }
}

impl TryFrom<&SaveClienteForm> for UpdateClient {
    type Error = VocabularyError;

    fn try_from(form: &SaveClienteForm) -> Result<Self, Self::Error> {
        let sector: ClientSector = form.sector.parse()?;
        Ok(UpdateClient::new(
            form.nombre.clone(),
            sector,
            (&form.contacto).into(),
            form.direccion.clone(),
            form.ciudad.clone(),
            form.activo,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationErrorsKind;

    fn valid_form() -> AddClienteForm {
        AddClienteForm {
            nombre: "Hospital Central".to_string(),
            sector: "public".to_string(),
            contacto: ContactoForm {
                telefono: "+57 (1) 555-0101".to_string(),
                email: "contacto@hospital.org".to_string(),
                responsable: "Dra. Ruiz".to_string(),
            },
            direccion: None,
            ciudad: Some("Bogotá".to_string()),
            activo: true,
        }
    }

    #[test]
    fn valid_payload_passes() {
        assert!(valid_form().check().is_ok());
    }

    #[test]
    fn bad_email_fails_keyed_under_contacto() {
        let mut form = valid_form();
        form.contacto.email = "not-an-email".to_string();
        let errors = form.check().unwrap_err();
        match errors.errors().get("contacto") {
            Some(ValidationErrorsKind::Struct(nested)) => {
                assert!(nested.errors().contains_key("email"));
            }
            other => panic!("expected nested contacto errors, got {other:?}"),
        }
    }

    #[test]
    fn bad_phone_fails() {
        let mut form = valid_form();
        form.contacto.telefono = "llámame".to_string();
        assert!(form.check().is_err());
    }

    #[test]
    fn empty_contact_parts_are_allowed() {
        let mut form = valid_form();
        form.contacto = ContactoForm::default();
        assert!(form.check().is_ok());
    }

    #[test]
    fn unknown_sector_fails() {
        let mut form = valid_form();
        form.sector = "mixto".to_string();
        let errors = form.check().unwrap_err();
        assert!(errors.errors().contains_key("sector"));
    }

    #[test]
    fn form_maps_to_new_client() {
        let form = valid_form();
        form.check().unwrap();
        let client = NewClient::try_from(&form).unwrap();
        assert_eq!(client.sector, ClientSector::Public);
        assert_eq!(client.contacto.email, "contacto@hospital.org");
    }
}
