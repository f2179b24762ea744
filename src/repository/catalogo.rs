use diesel::prelude::*;

use crate::{
    domain::catalog::{
        Manufacturer, Modality, NewManufacturer, NewModality, NewTechnician, Technician,
    },
    domain::types::{FabricanteId, ModalidadId, TecnicoId},
    models::catalogo::{
        Fabricante as DbFabricante, Modalidad as DbModalidad, NewFabricante as DbNewFabricante,
        NewModalidad as DbNewModalidad, NewTecnico as DbNewTecnico, Tecnico as DbTecnico,
    },
    repository::{CatalogoReader, CatalogoWriter, DieselRepository, errors::RepositoryResult},
};

impl CatalogoReader for DieselRepository {
    fn get_modalidad_by_id(&self, id: ModalidadId) -> RepositoryResult<Option<Modality>> {
        use crate::schema::modalidades;

        let mut conn = self.conn()?;
        let row = modalidades::table
            .find(id.get())
            .first::<DbModalidad>(&mut conn)
            .optional()?;

        Ok(row.map(Into::into))
    }

    fn list_modalidades(&self) -> RepositoryResult<Vec<Modality>> {
        use crate::schema::modalidades;

        let mut conn = self.conn()?;
        let items = modalidades::table
            .order(modalidades::codigo.asc())
            .load::<DbModalidad>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }

    fn get_fabricante_by_id(&self, id: FabricanteId) -> RepositoryResult<Option<Manufacturer>> {
        use crate::schema::fabricantes;

        let mut conn = self.conn()?;
        let row = fabricantes::table
            .find(id.get())
            .first::<DbFabricante>(&mut conn)
            .optional()?;

        Ok(row.map(Into::into))
    }

    fn list_fabricantes(&self) -> RepositoryResult<Vec<Manufacturer>> {
        use crate::schema::fabricantes;

        let mut conn = self.conn()?;
        let items = fabricantes::table
            .order(fabricantes::nombre.asc())
            .load::<DbFabricante>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }

    fn get_tecnico_by_id(&self, id: TecnicoId) -> RepositoryResult<Option<Technician>> {
        use crate::schema::tecnicos;

        let mut conn = self.conn()?;
        let row = tecnicos::table
            .find(id.get())
            .first::<DbTecnico>(&mut conn)
            .optional()?;

        Ok(row.map(Into::into))
    }

    fn list_tecnicos(&self) -> RepositoryResult<Vec<Technician>> {
        use crate::schema::tecnicos;

        let mut conn = self.conn()?;
        let items = tecnicos::table
            .order(tecnicos::nombre.asc())
            .load::<DbTecnico>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }
}

impl CatalogoWriter for DieselRepository {
    fn create_modalidad(&self, new_modalidad: &NewModality) -> RepositoryResult<Modality> {
        use crate::schema::modalidades;

        let mut conn = self.conn()?;
        let insertable: DbNewModalidad = new_modalidad.into();
        let row = diesel::insert_into(modalidades::table)
            .values(&insertable)
            .get_result::<DbModalidad>(&mut conn)?;

        Ok(row.into())
    }

    fn update_modalidad(
        &self,
        id: ModalidadId,
        updates: &NewModality,
    ) -> RepositoryResult<Modality> {
        use crate::schema::modalidades;

        let mut conn = self.conn()?;
        let changeset: DbNewModalidad = updates.into();
        let row = diesel::update(modalidades::table.find(id.get()))
            .set(&changeset)
            .get_result::<DbModalidad>(&mut conn)?;

        Ok(row.into())
    }

    fn delete_modalidad(&self, id: ModalidadId) -> RepositoryResult<()> {
        use crate::schema::modalidades;

        let mut conn = self.conn()?;
        diesel::delete(modalidades::table.find(id.get())).execute(&mut conn)?;
        Ok(())
    }

    fn create_fabricante(
        &self,
        new_fabricante: &NewManufacturer,
    ) -> RepositoryResult<Manufacturer> {
        use crate::schema::fabricantes;

        let mut conn = self.conn()?;
        let insertable: DbNewFabricante = new_fabricante.into();
        let row = diesel::insert_into(fabricantes::table)
            .values(&insertable)
            .get_result::<DbFabricante>(&mut conn)?;

        Ok(row.into())
    }

    fn update_fabricante(
        &self,
        id: FabricanteId,
        updates: &NewManufacturer,
    ) -> RepositoryResult<Manufacturer> {
        use crate::schema::fabricantes;

        let mut conn = self.conn()?;
        let changeset: DbNewFabricante = updates.into();
        let row = diesel::update(fabricantes::table.find(id.get()))
            .set(&changeset)
            .get_result::<DbFabricante>(&mut conn)?;

        Ok(row.into())
    }

    fn delete_fabricante(&self, id: FabricanteId) -> RepositoryResult<()> {
        use crate::schema::fabricantes;

        let mut conn = self.conn()?;
        diesel::delete(fabricantes::table.find(id.get())).execute(&mut conn)?;
        Ok(())
    }

    fn create_tecnico(&self, new_tecnico: &NewTechnician) -> RepositoryResult<Technician> {
        use crate::schema::tecnicos;

        let mut conn = self.conn()?;
        let insertable: DbNewTecnico = new_tecnico.into();
        let row = diesel::insert_into(tecnicos::table)
            .values(&insertable)
            .get_result::<DbTecnico>(&mut conn)?;

        Ok(row.into())
    }

    fn update_tecnico(
        &self,
        id: TecnicoId,
        updates: &NewTechnician,
    ) -> RepositoryResult<Technician> {
        use crate::schema::tecnicos;

        let mut conn = self.conn()?;
        let changeset: DbNewTecnico = updates.into();
        let row = diesel::update(tecnicos::table.find(id.get()))
            .set(&changeset)
            .get_result::<DbTecnico>(&mut conn)?;

        Ok(row.into())
    }

    fn delete_tecnico(&self, id: TecnicoId) -> RepositoryResult<()> {
        use crate::schema::tecnicos;

        let mut conn = self.conn()?;
        diesel::delete(tecnicos::table.find(id.get())).execute(&mut conn)?;
        Ok(())
    }
}
