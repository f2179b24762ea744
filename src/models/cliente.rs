use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::client::{
    Client as DomainClient, ContactInfo, NewClient as DomainNewClient,
    UpdateClient as DomainUpdateClient,
};
use crate::domain::types::{TipoCliente, VocabularyError};

#[derive(Debug, Clone, Identifiable, Queryable, QueryableByName)]
#[diesel(table_name = crate::schema::clientes)]
#[diesel(primary_key(cliente_id))]
/// Diesel row for [`crate::domain::client::Client`].
pub struct Cliente {
    pub cliente_id: i32,
    pub nombre: String,
    pub tipo: String,
    pub contacto: Option<String>,
    pub direccion: Option<String>,
    pub ciudad: Option<String>,
    pub activo: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::clientes)]
/// Insertable form of [`Cliente`].
pub struct NewCliente<'a> {
    pub nombre: &'a str,
    pub tipo: &'static str,
    pub contacto: Option<String>,
    pub direccion: Option<&'a str>,
    pub ciudad: Option<&'a str>,
    pub activo: bool,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::clientes)]
/// Data used when updating a [`Cliente`] row.
pub struct UpdateCliente<'a> {
    pub nombre: &'a str,
    pub tipo: &'static str,
    pub contacto: Option<Option<String>>,
    pub direccion: Option<Option<&'a str>>,
    pub ciudad: Option<Option<&'a str>>,
    pub activo: bool,
}

impl TryFrom<Cliente> for DomainClient {
    type Error = VocabularyError;

    fn try_from(row: Cliente) -> Result<Self, Self::Error> {
        let tipo: TipoCliente = row.tipo.parse()?;
        Ok(Self {
            id: row.cliente_id,
            nombre: row.nombre,
            sector: tipo.into(),
            contacto: ContactInfo::from_wire(row.contacto.as_deref()),
            direccion: row.direccion.unwrap_or_default(),
            ciudad: row.ciudad.unwrap_or_default(),
            activo: row.activo,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewClient> for NewCliente<'a> {
    fn from(client: &'a DomainNewClient) -> Self {
        Self {
            nombre: &client.nombre,
            tipo: client.sector.canonical().as_str(),
            contacto: client.contacto.to_wire(),
            direccion: client.direccion.as_deref(),
            ciudad: client.ciudad.as_deref(),
            activo: client.activo,
        }
    }
}

impl<'a> From<&'a DomainUpdateClient> for UpdateCliente<'a> {
    fn from(client: &'a DomainUpdateClient) -> Self {
        Self {
            nombre: &client.nombre,
            tipo: client.sector.canonical().as_str(),
            contacto: Some(client.contacto.to_wire()),
            direccion: Some(client.direccion.as_deref()),
            ciudad: Some(client.ciudad.as_deref()),
            activo: client.activo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::ClientSector;
    use chrono::Utc;

    fn sample_row(tipo: &str, contacto: Option<&str>) -> Cliente {
        let now = Utc::now().naive_utc();
        Cliente {
            cliente_id: 1,
            nombre: "Hospital Central".to_string(),
            tipo: tipo.to_string(),
            contacto: contacto.map(str::to_string),
            direccion: None,
            ciudad: Some("Quito".to_string()),
            activo: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn row_into_domain_collapses_tipo() {
        for (tipo, sector) in [
            ("Hospital", ClientSector::Public),
            ("Centro_Médico", ClientSector::Public),
            ("Clínica", ClientSector::Private),
            ("Laboratorio", ClientSector::Private),
        ] {
            let client = DomainClient::try_from(sample_row(tipo, None)).unwrap();
            assert_eq!(client.sector, sector);
        }
    }

    #[test]
    fn row_with_unknown_tipo_fails_loudly() {
        assert!(DomainClient::try_from(sample_row("Farmacia", None)).is_err());
    }

    #[test]
    fn row_into_domain_defaults_missing_columns() {
        let client = DomainClient::try_from(sample_row("Hospital", None)).unwrap();
        assert_eq!(client.direccion, "");
        assert_eq!(client.contacto, ContactInfo::default());
    }

    #[test]
    fn row_into_domain_parses_legacy_contact() {
        let client =
            DomainClient::try_from(sample_row("Clínica", Some("Dra. Milena Soto"))).unwrap();
        assert_eq!(client.contacto.responsable, "Dra. Milena Soto");
    }

    #[test]
    fn new_client_writes_canonical_tipo() {
        let domain = DomainNewClient::new(
            "Clínica Norte".into(),
            ClientSector::Private,
            ContactInfo::default(),
            None,
            None,
            true,
        );
        let insertable: NewCliente = (&domain).into();
        assert_eq!(insertable.tipo, "Clínica");
        assert_eq!(insertable.contacto, None);
    }

    #[test]
    fn update_client_writes_canonical_tipo() {
        let domain = DomainUpdateClient::new(
            "Hospital Norte".into(),
            ClientSector::Public,
            ContactInfo {
                telefono: "555-0101".into(),
                email: "a@b.org".into(),
                responsable: String::new(),
            },
            Some("Av. Siempre Viva 1".into()),
            None,
            false,
        );
        let changeset: UpdateCliente = (&domain).into();
        assert_eq!(changeset.tipo, "Hospital");
        assert!(changeset.contacto.clone().flatten().is_some());
        assert_eq!(changeset.ciudad, Some(None));
    }
}
