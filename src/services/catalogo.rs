//! Services for the catalog resources.

use crate::domain::catalog::{
    Manufacturer, Modality, NewManufacturer, NewModality, NewTechnician, Technician,
};
use crate::domain::types::{FabricanteId, ModalidadId, TecnicoId};
use crate::forms::catalogo::{FabricanteForm, ModalidadForm, TecnicoForm};
use crate::repository::{CatalogoReader, CatalogoWriter};
use crate::services::{ServiceError, ServiceResult};

pub fn list_modalidades<R>(repo: &R) -> ServiceResult<Vec<Modality>>
where
    R: CatalogoReader + ?Sized,
{
    repo.list_modalidades().map_err(ServiceError::from)
}

pub fn get_modalidad<R>(repo: &R, id: i32) -> ServiceResult<Modality>
where
    R: CatalogoReader + ?Sized,
{
    let id = ModalidadId::new(id)?;
    repo.get_modalidad_by_id(id)?.ok_or(ServiceError::NotFound)
}

pub fn create_modalidad<R>(repo: &R, form: &ModalidadForm) -> ServiceResult<Modality>
where
    R: CatalogoWriter + ?Sized,
{
    form.check()?;
    let new_modalidad = NewModality::from(form);
    repo.create_modalidad(&new_modalidad)
        .map_err(ServiceError::from)
}

pub fn update_modalidad<R>(repo: &R, id: i32, form: &ModalidadForm) -> ServiceResult<Modality>
where
    R: CatalogoWriter + ?Sized,
{
    form.check()?;
    let id = ModalidadId::new(id)?;
    let updates = NewModality::from(form);
    repo.update_modalidad(id, &updates)
        .map_err(ServiceError::from)
}

pub fn delete_modalidad<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: CatalogoWriter + ?Sized,
{
    let id = ModalidadId::new(id)?;
    repo.delete_modalidad(id).map_err(ServiceError::from)
}

pub fn list_fabricantes<R>(repo: &R) -> ServiceResult<Vec<Manufacturer>>
where
    R: CatalogoReader + ?Sized,
{
    repo.list_fabricantes().map_err(ServiceError::from)
}

pub fn get_fabricante<R>(repo: &R, id: i32) -> ServiceResult<Manufacturer>
where
    R: CatalogoReader + ?Sized,
{
    let id = FabricanteId::new(id)?;
    repo.get_fabricante_by_id(id)?.ok_or(ServiceError::NotFound)
}

pub fn create_fabricante<R>(repo: &R, form: &FabricanteForm) -> ServiceResult<Manufacturer>
where
    R: CatalogoWriter + ?Sized,
{
    form.check()?;
    let new_fabricante = NewManufacturer::from(form);
    repo.create_fabricante(&new_fabricante)
        .map_err(ServiceError::from)
}

pub fn update_fabricante<R>(repo: &R, id: i32, form: &FabricanteForm) -> ServiceResult<Manufacturer>
where
    R: CatalogoWriter + ?Sized,
{
    form.check()?;
    let id = FabricanteId::new(id)?;
    let updates = NewManufacturer::from(form);
    repo.update_fabricante(id, &updates)
        .map_err(ServiceError::from)
}

pub fn delete_fabricante<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: CatalogoWriter + ?Sized,
{
    let id = FabricanteId::new(id)?;
    repo.delete_fabricante(id).map_err(ServiceError::from)
}

pub fn list_tecnicos<R>(repo: &R) -> ServiceResult<Vec<Technician>>
where
    R: CatalogoReader + ?Sized,
{
    repo.list_tecnicos().map_err(ServiceError::from)
}

pub fn get_tecnico<R>(repo: &R, id: i32) -> ServiceResult<Technician>
where
    R: CatalogoReader + ?Sized,
{
    let id = TecnicoId::new(id)?;
    repo.get_tecnico_by_id(id)?.ok_or(ServiceError::NotFound)
}

pub fn create_tecnico<R>(repo: &R, form: &TecnicoForm) -> ServiceResult<Technician>
where
    R: CatalogoWriter + ?Sized,
{
    form.check()?;
    let new_tecnico = NewTechnician::from(form);
    repo.create_tecnico(&new_tecnico).map_err(ServiceError::from)
}

pub fn update_tecnico<R>(repo: &R, id: i32, form: &TecnicoForm) -> ServiceResult<Technician>
where
    R: CatalogoWriter + ?Sized,
{
    form.check()?;
    let id = TecnicoId::new(id)?;
    let updates = NewTechnician::from(form);
    repo.update_tecnico(id, &updates).map_err(ServiceError::from)
}

pub fn delete_tecnico<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: CatalogoWriter + ?Sized,
{
    let id = TecnicoId::new(id)?;
    repo.delete_tecnico(id).map_err(ServiceError::from)
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::repository::mock::MockRepository;

    #[test]
    fn empty_codigo_never_reaches_the_repository() {
        // No expectations are set: any repository call would panic.
        let repo = MockRepository::new();
        let form = ModalidadForm {
            codigo: String::new(),
            descripcion: "Tomografía Computarizada".to_string(),
        };
        let result = create_modalidad(&repo, &form);
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[test]
    fn valid_modalidad_is_created() {
        let mut repo = MockRepository::new();
        repo.expect_create_modalidad().returning(|new_modalidad| {
            Ok(Modality {
                id: 1,
                codigo: new_modalidad.codigo.clone(),
                descripcion: new_modalidad.descripcion.clone(),
            })
        });
        let form = ModalidadForm {
            codigo: "CT".to_string(),
            descripcion: "Tomografía Computarizada".to_string(),
        };
        let created = create_modalidad(&repo, &form).unwrap();
        assert_eq!(created.codigo, "CT");
    }
}
