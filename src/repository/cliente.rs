use diesel::prelude::*;

use crate::{
    domain::client::{Client, NewClient, UpdateClient},
    domain::types::ClienteId,
    models::cliente::{Cliente as DbCliente, NewCliente as DbNewCliente,
        UpdateCliente as DbUpdateCliente},
    repository::{ClienteListQuery, ClienteReader, ClienteWriter, DieselRepository,
        errors::RepositoryResult},
};

impl ClienteReader for DieselRepository {
    fn get_cliente_by_id(&self, id: ClienteId) -> RepositoryResult<Option<Client>> {
        use crate::schema::clientes;

        let mut conn = self.conn()?;
        let row = clientes::table
            .find(id.get())
            .first::<DbCliente>(&mut conn)
            .optional()?;

        row.map(Client::try_from).transpose().map_err(Into::into)
    }

    fn list_clientes(&self, query: ClienteListQuery) -> RepositoryResult<(usize, Vec<Client>)> {
        use crate::schema::clientes;

        let mut conn = self.conn()?;

        let build = |query: &ClienteListQuery| {
            let mut stmt = clientes::table.into_boxed();
            if let Some(activo) = query.activo {
                stmt = stmt.filter(clientes::activo.eq(activo));
            }
            if let Some(search) = &query.search {
                let pattern = format!("%{search}%");
                stmt = stmt.filter(
                    clientes::nombre
                        .like(pattern.clone())
                        .or(clientes::ciudad.like(pattern)),
                );
            }
            stmt
        };

        let total: i64 = build(&query).count().get_result(&mut conn)?;

        let mut stmt = build(&query).order(clientes::cliente_id.asc());
        if let Some(pagination) = &query.pagination {
            let page = pagination.page.max(1) as i64;
            let per_page = pagination.per_page as i64;
            stmt = stmt.limit(per_page).offset((page - 1) * per_page);
        }

        let items = stmt
            .load::<DbCliente>(&mut conn)?
            .into_iter()
            .map(Client::try_from)
            .collect::<Result<Vec<Client>, _>>()?;

        Ok((total as usize, items))
    }
}

impl ClienteWriter for DieselRepository {
    fn create_cliente(&self, new_cliente: &NewClient) -> RepositoryResult<Client> {
        use crate::schema::clientes;

        let mut conn = self.conn()?;
        let insertable: DbNewCliente = new_cliente.into();
        let row = diesel::insert_into(clientes::table)
            .values(&insertable)
            .get_result::<DbCliente>(&mut conn)?;

        Ok(Client::try_from(row)?)
    }

    fn update_cliente(&self, id: ClienteId, updates: &UpdateClient) -> RepositoryResult<Client> {
        use crate::schema::clientes;

        let mut conn = self.conn()?;
        let changeset: DbUpdateCliente = updates.into();
        let row = diesel::update(clientes::table.find(id.get()))
            .set((&changeset, clientes::updated_at.eq(diesel::dsl::now)))
            .get_result::<DbCliente>(&mut conn)?;

        Ok(Client::try_from(row)?)
    }

    fn delete_cliente(&self, id: ClienteId) -> RepositoryResult<()> {
        use crate::schema::clientes;

        let mut conn = self.conn()?;
        diesel::delete(clientes::table.find(id.get())).execute(&mut conn)?;
        Ok(())
    }
}
