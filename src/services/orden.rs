use crate::domain::history::OrderHistoryEntry;
use crate::domain::order::{NewWorkOrder, UpdateWorkOrder, WorkOrder};
use crate::domain::types::OrdenId;
use crate::forms::orden::{AddOrdenForm, SaveOrdenForm};
use crate::repository::{OrdenListQuery, OrdenReader, OrdenWriter};
use crate::services::{ServiceError, ServiceResult};

/// Returns the filtered list of work orders with the total count.
pub fn list_ordenes<R>(repo: &R, query: OrdenListQuery) -> ServiceResult<(usize, Vec<WorkOrder>)>
where
    R: OrdenReader + ?Sized,
{
    repo.list_ordenes(query).map_err(ServiceError::from)
}

/// Fetches a work order by its identifier.
pub fn get_orden<R>(repo: &R, id: i32) -> ServiceResult<WorkOrder>
where
    R: OrdenReader + ?Sized,
{
    let id = OrdenId::new(id)?;
    repo.get_orden_by_id(id)?.ok_or(ServiceError::NotFound)
}

/// Returns the lifecycle history of a work order, newest first.
pub fn list_historial_orden<R>(repo: &R, id: i32) -> ServiceResult<Vec<OrderHistoryEntry>>
where
    R: OrdenReader + ?Sized,
{
    let id = OrdenId::new(id)?;
    repo.list_historial_orden(id).map_err(ServiceError::from)
}

/// Validates and opens a new work order.
pub fn create_orden<R>(repo: &R, form: &AddOrdenForm) -> ServiceResult<WorkOrder>
where
    R: OrdenWriter + ?Sized,
{
    form.check()?;
    let new_orden = NewWorkOrder::try_from(form)?;
    repo.create_orden(&new_orden).map_err(ServiceError::from)
}

/// Validates and applies updates to an existing work order. A status change
/// is recorded in the order's history by the repository.
pub fn update_orden<R>(repo: &R, id: i32, form: &SaveOrdenForm) -> ServiceResult<WorkOrder>
where
    R: OrdenWriter + ?Sized,
{
    form.check()?;
    let id = OrdenId::new(id)?;
    let updates = UpdateWorkOrder::try_from(form)?;
    repo.update_orden(id, &updates).map_err(ServiceError::from)
}

/// Removes a work order together with its history.
pub fn delete_orden<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: OrdenWriter + ?Sized,
{
    let id = OrdenId::new(id)?;
    repo.delete_orden(id).map_err(ServiceError::from)
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::repository::mock::MockRepository;

    #[test]
    fn empty_description_never_reaches_the_repository() {
        let repo = MockRepository::new();
        let form = AddOrdenForm {
            equipo_id: 9,
            cliente_id: 1,
            tecnico_id: None,
            prioridad: "critical".to_string(),
            descripcion: String::new(),
            fecha_programada: None,
        };
        let result = create_orden(&repo, &form);
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }
}
