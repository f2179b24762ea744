//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::catalog::{
    Manufacturer, Modality, NewManufacturer, NewModality, NewTechnician, Technician,
};
use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::domain::equipment::{Equipment, NewEquipment, UpdateEquipment};
use crate::domain::history::{EquipmentHistoryEntry, OrderHistoryEntry};
use crate::domain::order::{NewWorkOrder, UpdateWorkOrder, WorkOrder};
use crate::domain::types::{
    ClienteId, EquipoId, FabricanteId, ModalidadId, OrdenId, TecnicoId,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    CatalogoReader, CatalogoWriter, ClienteListQuery, ClienteReader, ClienteWriter,
    EquipoListQuery, EquipoReader, EquipoWriter, OrdenListQuery, OrdenReader, OrdenWriter,
};

mock! {
    pub Repository {}

    impl ClienteReader for Repository {
        fn get_cliente_by_id(&self, id: ClienteId) -> RepositoryResult<Option<Client>>;
        fn list_clientes(&self, query: ClienteListQuery) -> RepositoryResult<(usize, Vec<Client>)>;
    }

    impl ClienteWriter for Repository {
        fn create_cliente(&self, new_cliente: &NewClient) -> RepositoryResult<Client>;
        fn update_cliente(&self, id: ClienteId, updates: &UpdateClient) -> RepositoryResult<Client>;
        fn delete_cliente(&self, id: ClienteId) -> RepositoryResult<()>;
    }

    impl EquipoReader for Repository {
        fn get_equipo_by_id(&self, id: EquipoId) -> RepositoryResult<Option<Equipment>>;
        fn list_equipos(&self, query: EquipoListQuery) -> RepositoryResult<(usize, Vec<Equipment>)>;
        fn list_historial_equipo(&self, id: EquipoId) -> RepositoryResult<Vec<EquipmentHistoryEntry>>;
    }

    impl EquipoWriter for Repository {
        fn create_equipo(&self, new_equipo: &NewEquipment) -> RepositoryResult<Equipment>;
        fn update_equipo(&self, id: EquipoId, updates: &UpdateEquipment) -> RepositoryResult<Equipment>;
        fn delete_equipo(&self, id: EquipoId) -> RepositoryResult<()>;
        fn set_equipo_imagen(
            &self,
            id: EquipoId,
            imagen_url: &str,
            imagen_key: &str,
        ) -> RepositoryResult<Equipment>;
        fn clear_equipo_imagen(&self, id: EquipoId) -> RepositoryResult<Option<String>>;
    }

    impl OrdenReader for Repository {
        fn get_orden_by_id(&self, id: OrdenId) -> RepositoryResult<Option<WorkOrder>>;
        fn list_ordenes(&self, query: OrdenListQuery) -> RepositoryResult<(usize, Vec<WorkOrder>)>;
        fn list_historial_orden(&self, id: OrdenId) -> RepositoryResult<Vec<OrderHistoryEntry>>;
    }

    impl OrdenWriter for Repository {
        fn create_orden(&self, new_orden: &NewWorkOrder) -> RepositoryResult<WorkOrder>;
        fn update_orden(&self, id: OrdenId, updates: &UpdateWorkOrder) -> RepositoryResult<WorkOrder>;
        fn delete_orden(&self, id: OrdenId) -> RepositoryResult<()>;
    }

    impl CatalogoReader for Repository {
        fn get_modalidad_by_id(&self, id: ModalidadId) -> RepositoryResult<Option<Modality>>;
        fn list_modalidades(&self) -> RepositoryResult<Vec<Modality>>;
        fn get_fabricante_by_id(&self, id: FabricanteId) -> RepositoryResult<Option<Manufacturer>>;
        fn list_fabricantes(&self) -> RepositoryResult<Vec<Manufacturer>>;
        fn get_tecnico_by_id(&self, id: TecnicoId) -> RepositoryResult<Option<Technician>>;
        fn list_tecnicos(&self) -> RepositoryResult<Vec<Technician>>;
    }

    impl CatalogoWriter for Repository {
        fn create_modalidad(&self, new_modalidad: &NewModality) -> RepositoryResult<Modality>;
        fn update_modalidad(&self, id: ModalidadId, updates: &NewModality) -> RepositoryResult<Modality>;
        fn delete_modalidad(&self, id: ModalidadId) -> RepositoryResult<()>;
        fn create_fabricante(&self, new_fabricante: &NewManufacturer) -> RepositoryResult<Manufacturer>;
        fn update_fabricante(&self, id: FabricanteId, updates: &NewManufacturer) -> RepositoryResult<Manufacturer>;
        fn delete_fabricante(&self, id: FabricanteId) -> RepositoryResult<()>;
        fn create_tecnico(&self, new_tecnico: &NewTechnician) -> RepositoryResult<Technician>;
        fn update_tecnico(&self, id: TecnicoId, updates: &NewTechnician) -> RepositoryResult<Technician>;
        fn delete_tecnico(&self, id: TecnicoId) -> RepositoryResult<()>;
    }
}
