use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::domain::types::ClienteId;
use crate::forms::cliente::{AddClienteForm, SaveClienteForm};
use crate::repository::{ClienteListQuery, ClienteReader, ClienteWriter};
use crate::services::{ServiceError, ServiceResult};

/// Returns the filtered list of clients with the total count.
pub fn list_clientes<R>(repo: &R, query: ClienteListQuery) -> ServiceResult<(usize, Vec<Client>)>
where
    R: ClienteReader + ?Sized,
{
    repo.list_clientes(query).map_err(ServiceError::from)
}

/// Fetches a client by its identifier.
pub fn get_cliente<R>(repo: &R, id: i32) -> ServiceResult<Client>
where
    R: ClienteReader + ?Sized,
{
    let id = ClienteId::new(id)?;
    repo.get_cliente_by_id(id)?.ok_or(ServiceError::NotFound)
}

/// Validates and persists a new client.
pub fn create_cliente<R>(repo: &R, form: &AddClienteForm) -> ServiceResult<Client>
where
    R: ClienteWriter + ?Sized,
{
    form.check()?;
    let new_cliente = NewClient::try_from(form)?;
    repo.create_cliente(&new_cliente).map_err(ServiceError::from)
}

/// Validates and applies updates to an existing client.
pub fn update_cliente<R>(repo: &R, id: i32, form: &SaveClienteForm) -> ServiceResult<Client>
where
    R: ClienteWriter + ?Sized,
{
    form.check()?;
    let id = ClienteId::new(id)?;
    let updates = UpdateClient::try_from(form)?;
    repo.update_cliente(id, &updates).map_err(ServiceError::from)
}

/// Removes a client.
pub fn delete_cliente<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: ClienteWriter + ?Sized,
{
    let id = ClienteId::new(id)?;
    repo.delete_cliente(id).map_err(ServiceError::from)
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::forms::cliente::ContactoForm;
    use crate::repository::mock::MockRepository;

    fn invalid_form() -> AddClienteForm {
        AddClienteForm {
            nombre: "Hospital Central".to_string(),
            sector: "public".to_string(),
            contacto: ContactoForm {
                telefono: String::new(),
                email: "not-an-email".to_string(),
                responsable: String::new(),
            },
            direccion: None,
            ciudad: None,
            activo: true,
        }
    }

    #[test]
    fn invalid_payload_never_reaches_the_repository() {
        // No expectations are set: any repository call would panic.
        let repo = MockRepository::new();
        let result = create_cliente(&repo, &invalid_form());
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[test]
    fn non_positive_id_fails_before_the_repository() {
        let repo = MockRepository::new();
        let result = get_cliente(&repo, 0);
        assert!(matches!(result, Err(ServiceError::Vocabulary(_))));
    }
}
