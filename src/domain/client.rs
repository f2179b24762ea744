use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ClientSector, TipoCliente};

/// Structured contact information for a client organization.
///
/// The persistence layer historically stored `contacto` either as a JSON
/// object or as a bare legacy string; the view model always carries the
/// structured form with empty strings for absent parts.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ContactInfo {
    #[serde(default)]
    pub telefono: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub responsable: String,
}

impl ContactInfo {
    /// Normalizes the stored `contacto` column into the structured form.
    ///
    /// A JSON object is deserialized field by field; a bare legacy string is
    /// taken as the responsible person's name.
    pub fn from_wire(raw: Option<&str>) -> Self {
        let raw = match raw.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => raw,
            None => return Self::default(),
        };
        match serde_json::from_str::<ContactInfo>(raw) {
            Ok(parsed) => parsed,
            Err(_) => Self {
                responsable: raw.to_string(),
                ..Self::default()
            },
        }
    }

    /// Serializes the structured form back into the stored column value.
    /// Returns `None` when every part is empty.
    pub fn to_wire(&self) -> Option<String> {
        if self.telefono.is_empty() && self.email.is_empty() && self.responsable.is_empty() {
            return None;
        }
        serde_json::to_string(self).ok()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: i32,
    pub nombre: String,
    pub sector: ClientSector,
    pub contacto: ContactInfo,
    pub direccion: String,
    pub ciudad: String,
    pub activo: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug)]
pub struct NewClient {
    pub nombre: String,
    pub sector: ClientSector,
    pub contacto: ContactInfo,
    pub direccion: Option<String>,
    pub ciudad: Option<String>,
    pub activo: bool,
}

impl NewClient {
    #[must_use]
    pub fn new(
        nombre: String,
        sector: ClientSector,
        contacto: ContactInfo,
        direccion: Option<String>,
        ciudad: Option<String>,
        activo: bool,
    ) -> Self {
        Self {
            nombre: nombre.trim().to_string(),
            sector,
            contacto: normalize_contact(contacto),
            direccion: direccion
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            ciudad: ciudad.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
            activo,
        }
    }

    /// Wire organization type written on create: the canonical inverse of
    /// the submitted sector.
    pub fn tipo(&self) -> TipoCliente {
        self.sector.canonical()
    }
}

#[derive(Clone, Debug)]
pub struct UpdateClient {
    pub nombre: String,
    pub sector: ClientSector,
    pub contacto: ContactInfo,
    pub direccion: Option<String>,
    pub ciudad: Option<String>,
    pub activo: bool,
}

impl UpdateClient {
    #[must_use]
    pub fn new(
        nombre: String,
        sector: ClientSector,
        contacto: ContactInfo,
        direccion: Option<String>,
        ciudad: Option<String>,
        activo: bool,
    ) -> Self {
        Self {
            nombre: nombre.trim().to_string(),
            sector,
            contacto: normalize_contact(contacto),
            direccion: direccion
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            ciudad: ciudad.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
            activo,
        }
    }
}

fn normalize_contact(contacto: ContactInfo) -> ContactInfo {
    ContactInfo {
        telefono: contacto.telefono.trim().to_string(),
        email: contacto.email.trim().to_lowercase(),
        responsable: contacto.responsable.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_from_structured_wire_value() {
        let raw = r#"{"telefono":"555-0101","email":"jefe@hospital.org","responsable":"Dra. Ruiz"}"#;
        let contacto = ContactInfo::from_wire(Some(raw));
        assert_eq!(contacto.telefono, "555-0101");
        assert_eq!(contacto.email, "jefe@hospital.org");
        assert_eq!(contacto.responsable, "Dra. Ruiz");
    }

    #[test]
    fn contact_from_legacy_bare_string() {
        let contacto = ContactInfo::from_wire(Some("Ing. Rafael Mora"));
        assert_eq!(contacto.responsable, "Ing. Rafael Mora");
        assert_eq!(contacto.telefono, "");
        assert_eq!(contacto.email, "");
    }

    #[test]
    fn contact_from_missing_wire_value() {
        assert_eq!(ContactInfo::from_wire(None), ContactInfo::default());
        assert_eq!(ContactInfo::from_wire(Some("   ")), ContactInfo::default());
    }

    #[test]
    fn contact_partial_json_defaults_missing_fields() {
        let contacto = ContactInfo::from_wire(Some(r#"{"email":"x@y.org"}"#));
        assert_eq!(contacto.email, "x@y.org");
        assert_eq!(contacto.telefono, "");
    }

    #[test]
    fn empty_contact_writes_null_column() {
        assert_eq!(ContactInfo::default().to_wire(), None);
        let contacto = ContactInfo {
            telefono: "555".into(),
            ..ContactInfo::default()
        };
        assert!(contacto.to_wire().is_some());
    }

    #[test]
    fn new_client_normalizes_fields() {
        let client = NewClient::new(
            "  Hospital Central  ".into(),
            ClientSector::Public,
            ContactInfo {
                telefono: " 555-0101 ".into(),
                email: " Jefe@Hospital.ORG ".into(),
                responsable: "Dra. Ruiz".into(),
            },
            Some("  ".into()),
            Some(" Bogotá ".into()),
            true,
        );
        assert_eq!(client.nombre, "Hospital Central");
        assert_eq!(client.contacto.email, "jefe@hospital.org");
        assert_eq!(client.direccion, None);
        assert_eq!(client.ciudad, Some("Bogotá".to_string()));
        assert_eq!(client.tipo(), TipoCliente::Hospital);
    }
}
