use crate::domain::equipment::{Equipment, NewEquipment, UpdateEquipment};
use crate::domain::history::EquipmentHistoryEntry;
use crate::domain::types::EquipoId;
use crate::forms::equipo::{AddEquipoForm, SaveEquipoForm};
use crate::repository::{EquipoListQuery, EquipoReader, EquipoWriter};
use crate::services::{ServiceError, ServiceResult};

/// Returns the filtered list of equipment units with the total count.
pub fn list_equipos<R>(repo: &R, query: EquipoListQuery) -> ServiceResult<(usize, Vec<Equipment>)>
where
    R: EquipoReader + ?Sized,
{
    repo.list_equipos(query).map_err(ServiceError::from)
}

/// Fetches an equipment unit by its identifier.
pub fn get_equipo<R>(repo: &R, id: i32) -> ServiceResult<Equipment>
where
    R: EquipoReader + ?Sized,
{
    let id = EquipoId::new(id)?;
    repo.get_equipo_by_id(id)?.ok_or(ServiceError::NotFound)
}

/// Returns the lifecycle history of an equipment unit, newest first.
pub fn list_historial_equipo<R>(repo: &R, id: i32) -> ServiceResult<Vec<EquipmentHistoryEntry>>
where
    R: EquipoReader + ?Sized,
{
    let id = EquipoId::new(id)?;
    repo.list_historial_equipo(id).map_err(ServiceError::from)
}

/// Validates and persists a new equipment unit.
pub fn create_equipo<R>(repo: &R, form: &AddEquipoForm) -> ServiceResult<Equipment>
where
    R: EquipoWriter + ?Sized,
{
    form.check()?;
    let new_equipo = NewEquipment::try_from(form)?;
    repo.create_equipo(&new_equipo).map_err(ServiceError::from)
}

/// Validates and applies updates to an existing equipment unit. A status
/// change is recorded in the unit's history by the repository.
pub fn update_equipo<R>(repo: &R, id: i32, form: &SaveEquipoForm) -> ServiceResult<Equipment>
where
    R: EquipoWriter + ?Sized,
{
    form.check()?;
    let id = EquipoId::new(id)?;
    let updates = UpdateEquipment::try_from(form)?;
    repo.update_equipo(id, &updates).map_err(ServiceError::from)
}

/// Removes an equipment unit together with its history.
pub fn delete_equipo<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: EquipoWriter + ?Sized,
{
    let id = EquipoId::new(id)?;
    repo.delete_equipo(id).map_err(ServiceError::from)
}

/// Stores an uploaded image and binds it to the equipment unit. The
/// previously stored object, if any, is removed after the new binding is
/// persisted.
#[cfg(feature = "server")]
pub fn attach_equipo_imagen<R, S>(
    repo: &R,
    store: &S,
    id: i32,
    filename: &str,
    bytes: &[u8],
) -> ServiceResult<Equipment>
where
    R: EquipoWriter + ?Sized,
    S: crate::storage::ObjectStore + ?Sized,
{
    use crate::storage::{EQUIPMENT_IMAGE_BUCKET, ObjectKey};

    let id = EquipoId::new(id)?;
    let previous = repo.clear_equipo_imagen(id)?;

    let object = store.put(EQUIPMENT_IMAGE_BUCKET, filename, bytes)?;
    let equipment =
        match repo.set_equipo_imagen(id, &object.public_url, &object.key.to_string()) {
            Ok(equipment) => equipment,
            Err(err) => {
                if let Err(cleanup) = store.delete(&object.key) {
                    log::warn!("Failed to remove orphaned object {}: {cleanup}", object.key);
                }
                return Err(err.into());
            }
        };

    if let Some(raw) = previous {
        match ObjectKey::parse(&raw) {
            Ok(key) => {
                if let Err(err) = store.delete(&key) {
                    log::warn!("Failed to remove replaced object {key}: {err}");
                }
            }
            Err(err) => log::warn!("Stored image key is malformed: {err}"),
        }
    }

    Ok(equipment)
}

/// Unbinds and removes the stored image of an equipment unit.
#[cfg(feature = "server")]
pub fn detach_equipo_imagen<R, S>(repo: &R, store: &S, id: i32) -> ServiceResult<()>
where
    R: EquipoWriter + ?Sized,
    S: crate::storage::ObjectStore + ?Sized,
{
    use crate::storage::ObjectKey;

    let id = EquipoId::new(id)?;
    if let Some(raw) = repo.clear_equipo_imagen(id)? {
        let key = ObjectKey::parse(&raw)?;
        store.delete(&key)?;
    }
    Ok(())
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::repository::mock::MockRepository;
    use chrono::{Duration, Utc};

    fn form_with_bad_calibration_window() -> AddEquipoForm {
        let today = Utc::now().date_naive();
        AddEquipoForm {
            nombre: "Resonador 3T".to_string(),
            numero_serie: "MR-2024-001".to_string(),
            cliente_id: 1,
            modalidad_id: 2,
            fabricante_id: 3,
            contrato_id: None,
            estado: "operational".to_string(),
            ubicacion: None,
            fecha_instalacion: None,
            ultima_calibracion: Some(today - Duration::days(10)),
            proxima_calibracion: Some(today - Duration::days(20)),
            observaciones: None,
        }
    }

    #[test]
    fn bad_calibration_window_never_reaches_the_repository() {
        let repo = MockRepository::new();
        let result = create_equipo(&repo, &form_with_bad_calibration_window());
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }
}
