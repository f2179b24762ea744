use crate::{
    db::{DbConnection, DbPool},
    domain::{
        catalog::{
            Manufacturer, Modality, NewManufacturer, NewModality, NewTechnician, Technician,
        },
        client::{Client, NewClient, UpdateClient},
        equipment::{Equipment, NewEquipment, UpdateEquipment},
        history::{EquipmentHistoryEntry, OrderHistoryEntry},
        order::{NewWorkOrder, UpdateWorkOrder, WorkOrder},
        types::{
            ClienteId, EquipoId, EstadoEquipo, EstadoOrden, FabricanteId, ModalidadId, OrdenId,
            PrioridadOrden, TecnicoId,
        },
    },
    repository::errors::{RepositoryResult, RepositoryError},
};

pub mod catalogo;
pub mod cliente;
pub mod equipo;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod orden;

/// Diesel-backed implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> Result<DbConnection, RepositoryError> {
        Ok(self.pool.get()?)
    }
}

#[derive(Debug, Clone)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ClienteListQuery {
    pub activo: Option<bool>,
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl ClienteListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn activo(mut self, activo: bool) -> Self {
        self.activo = Some(activo);
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct EquipoListQuery {
    pub cliente_id: Option<ClienteId>,
    pub estado: Option<EstadoEquipo>,
    pub pagination: Option<Pagination>,
}

impl EquipoListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cliente(mut self, cliente_id: ClienteId) -> Self {
        self.cliente_id = Some(cliente_id);
        self
    }

    pub fn estado(mut self, estado: EstadoEquipo) -> Self {
        self.estado = Some(estado);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct OrdenListQuery {
    pub equipo_id: Option<EquipoId>,
    pub cliente_id: Option<ClienteId>,
    pub estado: Option<EstadoOrden>,
    pub prioridad: Option<PrioridadOrden>,
    pub pagination: Option<Pagination>,
}

impl OrdenListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn equipo(mut self, equipo_id: EquipoId) -> Self {
        self.equipo_id = Some(equipo_id);
        self
    }

    pub fn cliente(mut self, cliente_id: ClienteId) -> Self {
        self.cliente_id = Some(cliente_id);
        self
    }

    pub fn estado(mut self, estado: EstadoOrden) -> Self {
        self.estado = Some(estado);
        self
    }

    pub fn prioridad(mut self, prioridad: PrioridadOrden) -> Self {
        self.prioridad = Some(prioridad);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait ClienteReader {
    fn get_cliente_by_id(&self, id: ClienteId) -> RepositoryResult<Option<Client>>;
    fn list_clientes(&self, query: ClienteListQuery) -> RepositoryResult<(usize, Vec<Client>)>;
}

pub trait ClienteWriter {
    fn create_cliente(&self, new_cliente: &NewClient) -> RepositoryResult<Client>;
    fn update_cliente(&self, id: ClienteId, updates: &UpdateClient) -> RepositoryResult<Client>;
    fn delete_cliente(&self, id: ClienteId) -> RepositoryResult<()>;
}

pub trait EquipoReader {
    fn get_equipo_by_id(&self, id: EquipoId) -> RepositoryResult<Option<Equipment>>;
    fn list_equipos(&self, query: EquipoListQuery) -> RepositoryResult<(usize, Vec<Equipment>)>;
    fn list_historial_equipo(&self, id: EquipoId)
    -> RepositoryResult<Vec<EquipmentHistoryEntry>>;
}

pub trait EquipoWriter {
    fn create_equipo(&self, new_equipo: &NewEquipment) -> RepositoryResult<Equipment>;
    fn update_equipo(&self, id: EquipoId, updates: &UpdateEquipment)
    -> RepositoryResult<Equipment>;
    fn delete_equipo(&self, id: EquipoId) -> RepositoryResult<()>;
    /// Records the uploaded image location and its structured object key.
    fn set_equipo_imagen(
        &self,
        id: EquipoId,
        imagen_url: &str,
        imagen_key: &str,
    ) -> RepositoryResult<Equipment>;
    /// Clears the image columns, returning the previously stored object key.
    fn clear_equipo_imagen(&self, id: EquipoId) -> RepositoryResult<Option<String>>;
}

pub trait OrdenReader {
    fn get_orden_by_id(&self, id: OrdenId) -> RepositoryResult<Option<WorkOrder>>;
    fn list_ordenes(&self, query: OrdenListQuery) -> RepositoryResult<(usize, Vec<WorkOrder>)>;
    fn list_historial_orden(&self, id: OrdenId) -> RepositoryResult<Vec<OrderHistoryEntry>>;
}

pub trait OrdenWriter {
    fn create_orden(&self, new_orden: &NewWorkOrder) -> RepositoryResult<WorkOrder>;
    fn update_orden(&self, id: OrdenId, updates: &UpdateWorkOrder)
    -> RepositoryResult<WorkOrder>;
    fn delete_orden(&self, id: OrdenId) -> RepositoryResult<()>;
}

pub trait CatalogoReader {
    fn get_modalidad_by_id(&self, id: ModalidadId) -> RepositoryResult<Option<Modality>>;
    fn list_modalidades(&self) -> RepositoryResult<Vec<Modality>>;
    fn get_fabricante_by_id(&self, id: FabricanteId) -> RepositoryResult<Option<Manufacturer>>;
    fn list_fabricantes(&self) -> RepositoryResult<Vec<Manufacturer>>;
    fn get_tecnico_by_id(&self, id: TecnicoId) -> RepositoryResult<Option<Technician>>;
    fn list_tecnicos(&self) -> RepositoryResult<Vec<Technician>>;
}

pub trait CatalogoWriter {
    fn create_modalidad(&self, new_modalidad: &NewModality) -> RepositoryResult<Modality>;
    fn update_modalidad(
        &self,
        id: ModalidadId,
        updates: &NewModality,
    ) -> RepositoryResult<Modality>;
    fn delete_modalidad(&self, id: ModalidadId) -> RepositoryResult<()>;
    fn create_fabricante(&self, new_fabricante: &NewManufacturer)
    -> RepositoryResult<Manufacturer>;
    fn update_fabricante(
        &self,
        id: FabricanteId,
        updates: &NewManufacturer,
    ) -> RepositoryResult<Manufacturer>;
    fn delete_fabricante(&self, id: FabricanteId) -> RepositoryResult<()>;
    fn create_tecnico(&self, new_tecnico: &NewTechnician) -> RepositoryResult<Technician>;
    fn update_tecnico(
        &self,
        id: TecnicoId,
        updates: &NewTechnician,
    ) -> RepositoryResult<Technician>;
    fn delete_tecnico(&self, id: TecnicoId) -> RepositoryResult<()>;
}
