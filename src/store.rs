//! In-memory view-model cache.
//!
//! [`ViewStore`] mirrors the collections a client session works with: each
//! entity family keeps the last fetched list and every mutation first runs
//! through validation and the repository, then reconciles the held
//! collection with the mapped result. On any error the collection is left
//! untouched. Collections are individually locked so concurrent embedders
//! get per-entity-type sequencing.

use std::sync::{PoisonError, RwLock};

use crate::domain::catalog::{Manufacturer, Modality, Technician};
use crate::domain::client::Client;
use crate::domain::equipment::Equipment;
use crate::domain::order::WorkOrder;
use crate::forms::catalogo::{FabricanteForm, ModalidadForm, TecnicoForm};
use crate::forms::cliente::{AddClienteForm, SaveClienteForm};
use crate::forms::equipo::{AddEquipoForm, SaveEquipoForm};
use crate::forms::orden::{AddOrdenForm, SaveOrdenForm};
use crate::repository::{
    CatalogoReader, CatalogoWriter, ClienteListQuery, ClienteReader, ClienteWriter,
    EquipoListQuery, EquipoReader, EquipoWriter, OrdenListQuery, OrdenReader, OrdenWriter,
};
use crate::services::{self, ServiceResult};

/// Entities held in a [`Collection`] expose their integer identifier.
pub trait Keyed {
    fn key(&self) -> i32;
}

impl Keyed for Client {
    fn key(&self) -> i32 {
        self.id
    }
}

impl Keyed for Equipment {
    fn key(&self) -> i32 {
        self.id
    }
}

impl Keyed for WorkOrder {
    fn key(&self) -> i32 {
        self.id
    }
}

impl Keyed for Modality {
    fn key(&self) -> i32 {
        self.id
    }
}

impl Keyed for Manufacturer {
    fn key(&self) -> i32 {
        self.id
    }
}

impl Keyed for Technician {
    fn key(&self) -> i32 {
        self.id
    }
}

/// One lock-guarded entity collection.
#[derive(Debug, Default)]
pub struct Collection<T> {
    items: RwLock<Vec<T>>,
}

impl<T: Keyed + Clone> Collection<T> {
    fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }

    /// Returns a copy of the held items.
    pub fn snapshot(&self) -> Vec<T> {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn set(&self, items: Vec<T>) {
        *self.items.write().unwrap_or_else(PoisonError::into_inner) = items;
    }

    fn append(&self, item: T) {
        self.items
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(item);
    }

    fn replace(&self, item: T) {
        let mut items = self.items.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(held) = items.iter_mut().find(|held| held.key() == item.key()) {
            *held = item;
        }
    }

    fn remove(&self, key: i32) {
        self.items
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|held| held.key() != key);
    }
}

/// Per-session cache over the repository traits.
pub struct ViewStore<R> {
    repo: R,
    pub clientes: Collection<Client>,
    pub equipos: Collection<Equipment>,
    pub ordenes: Collection<WorkOrder>,
    pub modalidades: Collection<Modality>,
    pub fabricantes: Collection<Manufacturer>,
    pub tecnicos: Collection<Technician>,
}

impl<R> ViewStore<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            clientes: Collection::new(),
            equipos: Collection::new(),
            ordenes: Collection::new(),
            modalidades: Collection::new(),
            fabricantes: Collection::new(),
            tecnicos: Collection::new(),
        }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }
}

impl<R> ViewStore<R> {
    pub fn refresh_clientes(&self, query: ClienteListQuery) -> ServiceResult<Vec<Client>>
    where
        R: ClienteReader,
    {
        let (_, items) = services::cliente::list_clientes(&self.repo, query)?;
        self.clientes.set(items.clone());
        Ok(items)
    }

    pub fn create_cliente(&self, form: &AddClienteForm) -> ServiceResult<Client>
    where
        R: ClienteWriter,
    {
        let created = services::cliente::create_cliente(&self.repo, form)?;
        self.clientes.append(created.clone());
        Ok(created)
    }

    pub fn update_cliente(&self, id: i32, form: &SaveClienteForm) -> ServiceResult<Client>
    where
        R: ClienteWriter,
    {
        let updated = services::cliente::update_cliente(&self.repo, id, form)?;
        self.clientes.replace(updated.clone());
        Ok(updated)
    }

    pub fn delete_cliente(&self, id: i32) -> ServiceResult<()>
    where
        R: ClienteWriter,
    {
        services::cliente::delete_cliente(&self.repo, id)?;
        self.clientes.remove(id);
        Ok(())
    }

    pub fn refresh_equipos(&self, query: EquipoListQuery) -> ServiceResult<Vec<Equipment>>
    where
        R: EquipoReader,
    {
        let (_, items) = services::equipo::list_equipos(&self.repo, query)?;
        self.equipos.set(items.clone());
        Ok(items)
    }

    pub fn create_equipo(&self, form: &AddEquipoForm) -> ServiceResult<Equipment>
    where
        R: EquipoWriter,
    {
        let created = services::equipo::create_equipo(&self.repo, form)?;
        self.equipos.append(created.clone());
        Ok(created)
    }

    pub fn update_equipo(&self, id: i32, form: &SaveEquipoForm) -> ServiceResult<Equipment>
    where
        R: EquipoWriter,
    {
        let updated = services::equipo::update_equipo(&self.repo, id, form)?;
        self.equipos.replace(updated.clone());
        Ok(updated)
    }

    pub fn delete_equipo(&self, id: i32) -> ServiceResult<()>
    where
        R: EquipoWriter,
    {
        services::equipo::delete_equipo(&self.repo, id)?;
        self.equipos.remove(id);
        Ok(())
    }

    pub fn refresh_ordenes(&self, query: OrdenListQuery) -> ServiceResult<Vec<WorkOrder>>
    where
        R: OrdenReader,
    {
        let (_, items) = services::orden::list_ordenes(&self.repo, query)?;
        self.ordenes.set(items.clone());
        Ok(items)
    }

    pub fn create_orden(&self, form: &AddOrdenForm) -> ServiceResult<WorkOrder>
    where
        R: OrdenWriter,
    {
        let created = services::orden::create_orden(&self.repo, form)?;
        self.ordenes.append(created.clone());
        Ok(created)
    }

    pub fn update_orden(&self, id: i32, form: &SaveOrdenForm) -> ServiceResult<WorkOrder>
    where
        R: OrdenWriter,
    {
        let updated = services::orden::update_orden(&self.repo, id, form)?;
        self.ordenes.replace(updated.clone());
        Ok(updated)
    }

    pub fn delete_orden(&self, id: i32) -> ServiceResult<()>
    where
        R: OrdenWriter,
    {
        services::orden::delete_orden(&self.repo, id)?;
        self.ordenes.remove(id);
        Ok(())
    }

    pub fn refresh_modalidades(&self) -> ServiceResult<Vec<Modality>>
    where
        R: CatalogoReader,
    {
        let items = services::catalogo::list_modalidades(&self.repo)?;
        self.modalidades.set(items.clone());
        Ok(items)
    }

    pub fn create_modalidad(&self, form: &ModalidadForm) -> ServiceResult<Modality>
    where
        R: CatalogoWriter,
    {
        let created = services::catalogo::create_modalidad(&self.repo, form)?;
        self.modalidades.append(created.clone());
        Ok(created)
    }

    pub fn update_modalidad(&self, id: i32, form: &ModalidadForm) -> ServiceResult<Modality>
    where
        R: CatalogoWriter,
    {
        let updated = services::catalogo::update_modalidad(&self.repo, id, form)?;
        self.modalidades.replace(updated.clone());
        Ok(updated)
    }

    pub fn delete_modalidad(&self, id: i32) -> ServiceResult<()>
    where
        R: CatalogoWriter,
    {
        services::catalogo::delete_modalidad(&self.repo, id)?;
        self.modalidades.remove(id);
        Ok(())
    }

    pub fn refresh_fabricantes(&self) -> ServiceResult<Vec<Manufacturer>>
    where
        R: CatalogoReader,
    {
        let items = services::catalogo::list_fabricantes(&self.repo)?;
        self.fabricantes.set(items.clone());
        Ok(items)
    }

    pub fn create_fabricante(&self, form: &FabricanteForm) -> ServiceResult<Manufacturer>
    where
        R: CatalogoWriter,
    {
        let created = services::catalogo::create_fabricante(&self.repo, form)?;
        self.fabricantes.append(created.clone());
        Ok(created)
    }

    pub fn update_fabricante(&self, id: i32, form: &FabricanteForm) -> ServiceResult<Manufacturer>
    where
        R: CatalogoWriter,
    {
        let updated = services::catalogo::update_fabricante(&self.repo, id, form)?;
        self.fabricantes.replace(updated.clone());
        Ok(updated)
    }

    pub fn delete_fabricante(&self, id: i32) -> ServiceResult<()>
    where
        R: CatalogoWriter,
    {
        services::catalogo::delete_fabricante(&self.repo, id)?;
        self.fabricantes.remove(id);
        Ok(())
    }

    pub fn refresh_tecnicos(&self) -> ServiceResult<Vec<Technician>>
    where
        R: CatalogoReader,
    {
        let items = services::catalogo::list_tecnicos(&self.repo)?;
        self.tecnicos.set(items.clone());
        Ok(items)
    }

    pub fn create_tecnico(&self, form: &TecnicoForm) -> ServiceResult<Technician>
    where
        R: CatalogoWriter,
    {
        let created = services::catalogo::create_tecnico(&self.repo, form)?;
        self.tecnicos.append(created.clone());
        Ok(created)
    }

    pub fn update_tecnico(&self, id: i32, form: &TecnicoForm) -> ServiceResult<Technician>
    where
        R: CatalogoWriter,
    {
        let updated = services::catalogo::update_tecnico(&self.repo, id, form)?;
        self.tecnicos.replace(updated.clone());
        Ok(updated)
    }

    pub fn delete_tecnico(&self, id: i32) -> ServiceResult<()>
    where
        R: CatalogoWriter,
    {
        services::catalogo::delete_tecnico(&self.repo, id)?;
        self.tecnicos.remove(id);
        Ok(())
    }
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;
    use crate::services::ServiceError;

    fn modalidad_form(codigo: &str) -> ModalidadForm {
        ModalidadForm {
            codigo: codigo.to_string(),
            descripcion: "Tomografía Computarizada".to_string(),
        }
    }

    #[test]
    fn create_appends_on_success() {
        let mut repo = MockRepository::new();
        repo.expect_create_modalidad().returning(|new_modalidad| {
            Ok(Modality {
                id: 1,
                codigo: new_modalidad.codigo.clone(),
                descripcion: new_modalidad.descripcion.clone(),
            })
        });
        let store = ViewStore::new(repo);

        store.create_modalidad(&modalidad_form("CT")).unwrap();
        let held = store.modalidades.snapshot();
        assert_eq!(held.len(), 1);
        assert_eq!(held[0].codigo, "CT");
    }

    #[test]
    fn failed_create_leaves_collection_unchanged() {
        let mut repo = MockRepository::new();
        repo.expect_create_modalidad()
            .returning(|_| Err(RepositoryError::Database("disk full".to_string())));
        let store = ViewStore::new(repo);

        let result = store.create_modalidad(&modalidad_form("CT"));
        assert!(matches!(result, Err(ServiceError::Repository(_))));
        assert!(store.modalidades.is_empty());
    }

    #[test]
    fn invalid_create_is_rejected_before_any_call() {
        // No expectations are set: a repository call would panic.
        let store = ViewStore::new(MockRepository::new());
        let result = store.create_modalidad(&modalidad_form(""));
        assert!(matches!(result, Err(ServiceError::Validation(_))));
        assert!(store.modalidades.is_empty());
    }

    #[test]
    fn update_replaces_matching_element() {
        let mut repo = MockRepository::new();
        repo.expect_create_modalidad().returning(|new_modalidad| {
            Ok(Modality {
                id: 1,
                codigo: new_modalidad.codigo.clone(),
                descripcion: new_modalidad.descripcion.clone(),
            })
        });
        repo.expect_update_modalidad().returning(|id, updates| {
            Ok(Modality {
                id: id.get(),
                codigo: updates.codigo.clone(),
                descripcion: updates.descripcion.clone(),
            })
        });
        let store = ViewStore::new(repo);

        store.create_modalidad(&modalidad_form("CT")).unwrap();
        store.update_modalidad(1, &modalidad_form("MR")).unwrap();

        let held = store.modalidades.snapshot();
        assert_eq!(held.len(), 1);
        assert_eq!(held[0].codigo, "MR");
    }

    #[test]
    fn delete_removes_matching_element() {
        let mut repo = MockRepository::new();
        repo.expect_create_modalidad().returning(|new_modalidad| {
            Ok(Modality {
                id: 7,
                codigo: new_modalidad.codigo.clone(),
                descripcion: new_modalidad.descripcion.clone(),
            })
        });
        repo.expect_delete_modalidad().returning(|_| Ok(()));
        let store = ViewStore::new(repo);

        store.create_modalidad(&modalidad_form("CT")).unwrap();
        store.delete_modalidad(7).unwrap();
        assert!(store.modalidades.is_empty());
    }
}
