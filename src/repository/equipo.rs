use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::{
    domain::equipment::{Equipment, NewEquipment, UpdateEquipment},
    domain::history::{EquipmentHistoryEntry, NewEquipmentHistoryEntry},
    domain::types::EquipoId,
    models::equipo::{Equipo as DbEquipo, NewEquipo as DbNewEquipo,
        UpdateEquipo as DbUpdateEquipo},
    models::historial::{HistorialEquipo as DbHistorialEquipo, NewHistorialEquipo},
    repository::{DieselRepository, EquipoListQuery, EquipoReader, EquipoWriter,
        errors::{RepositoryError, RepositoryResult}},
};

/// Loads one equipment row joined with its display names.
fn load_equipo(
    conn: &mut SqliteConnection,
    id: i32,
) -> Result<Option<(DbEquipo, String, String, String)>, diesel::result::Error> {
    use crate::schema::{clientes, equipos, fabricantes, modalidades};

    equipos::table
        .inner_join(clientes::table)
        .inner_join(modalidades::table)
        .inner_join(fabricantes::table)
        .filter(equipos::equipo_id.eq(id))
        .select((
            equipos::all_columns,
            clientes::nombre,
            modalidades::descripcion,
            fabricantes::nombre,
        ))
        .first::<(DbEquipo, String, String, String)>(conn)
        .optional()
}

impl EquipoReader for DieselRepository {
    fn get_equipo_by_id(&self, id: EquipoId) -> RepositoryResult<Option<Equipment>> {
        let mut conn = self.conn()?;
        let row = load_equipo(&mut conn, id.get())?;

        row.map(|(equipo, cliente, modalidad, fabricante)| {
            equipo.into_domain(cliente, modalidad, fabricante)
        })
        .transpose()
        .map_err(Into::into)
    }

    fn list_equipos(&self, query: EquipoListQuery) -> RepositoryResult<(usize, Vec<Equipment>)> {
        use crate::schema::{clientes, equipos, fabricantes, modalidades};

        let mut conn = self.conn()?;

        let build = |query: &EquipoListQuery| {
            let mut stmt = equipos::table.into_boxed();
            if let Some(cliente_id) = query.cliente_id {
                stmt = stmt.filter(equipos::cliente_id.eq(cliente_id.get()));
            }
            if let Some(estado) = query.estado {
                stmt = stmt.filter(equipos::estado.eq(estado.as_str()));
            }
            stmt
        };

        let total: i64 = build(&query).count().get_result(&mut conn)?;

        let mut stmt = equipos::table
            .inner_join(clientes::table)
            .inner_join(modalidades::table)
            .inner_join(fabricantes::table)
            .select((
                equipos::all_columns,
                clientes::nombre,
                modalidades::descripcion,
                fabricantes::nombre,
            ))
            .order(equipos::equipo_id.asc())
            .into_boxed();
        if let Some(cliente_id) = query.cliente_id {
            stmt = stmt.filter(equipos::cliente_id.eq(cliente_id.get()));
        }
        if let Some(estado) = query.estado {
            stmt = stmt.filter(equipos::estado.eq(estado.as_str()));
        }
        if let Some(pagination) = &query.pagination {
            let page = pagination.page.max(1) as i64;
            let per_page = pagination.per_page as i64;
            stmt = stmt.limit(per_page).offset((page - 1) * per_page);
        }

        let items = stmt
            .load::<(DbEquipo, String, String, String)>(&mut conn)?
            .into_iter()
            .map(|(equipo, cliente, modalidad, fabricante)| {
                equipo.into_domain(cliente, modalidad, fabricante)
            })
            .collect::<Result<Vec<Equipment>, _>>()?;

        Ok((total as usize, items))
    }

    fn list_historial_equipo(
        &self,
        id: EquipoId,
    ) -> RepositoryResult<Vec<EquipmentHistoryEntry>> {
        use crate::schema::historial_equipos;

        let mut conn = self.conn()?;
        let entries = historial_equipos::table
            .filter(historial_equipos::equipo_id.eq(id.get()))
            .order(historial_equipos::historial_id.desc())
            .load::<DbHistorialEquipo>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(entries)
    }
}

impl EquipoWriter for DieselRepository {
    fn create_equipo(&self, new_equipo: &NewEquipment) -> RepositoryResult<Equipment> {
        use crate::schema::equipos;

        let mut conn = self.conn()?;
        conn.transaction::<Equipment, RepositoryError, _>(|conn| {
            let insertable: DbNewEquipo = new_equipo.into();
            let row = diesel::insert_into(equipos::table)
                .values(&insertable)
                .get_result::<DbEquipo>(conn)?;

            let (equipo, cliente, modalidad, fabricante) = load_equipo(conn, row.equipo_id)?
                .ok_or(RepositoryError::NotFound)?;
            Ok(equipo.into_domain(cliente, modalidad, fabricante)?)
        })
    }

    fn update_equipo(
        &self,
        id: EquipoId,
        updates: &UpdateEquipment,
    ) -> RepositoryResult<Equipment> {
        use crate::schema::{equipos, historial_equipos};

        let mut conn = self.conn()?;
        conn.transaction::<Equipment, RepositoryError, _>(|conn| {
            let current = equipos::table
                .find(id.get())
                .first::<DbEquipo>(conn)?;
            let estado_anterior = current.estado()?;

            let changeset: DbUpdateEquipo = updates.into();
            diesel::update(equipos::table.find(id.get()))
                .set((&changeset, equipos::updated_at.eq(diesel::dsl::now)))
                .execute(conn)?;

            let estado_nuevo = updates.estado.canonical();
            if estado_anterior != estado_nuevo {
                let entry = NewEquipmentHistoryEntry {
                    estado_anterior,
                    estado_nuevo,
                    nota: updates.nota.clone(),
                };
                diesel::insert_into(historial_equipos::table)
                    .values(NewHistorialEquipo::from_domain(id.get(), &entry))
                    .execute(conn)?;
            }

            let (equipo, cliente, modalidad, fabricante) =
                load_equipo(conn, id.get())?.ok_or(RepositoryError::NotFound)?;
            Ok(equipo.into_domain(cliente, modalidad, fabricante)?)
        })
    }

    fn delete_equipo(&self, id: EquipoId) -> RepositoryResult<()> {
        use crate::schema::{equipos, historial_equipos};

        let mut conn = self.conn()?;
        conn.transaction::<(), RepositoryError, _>(|conn| {
            diesel::delete(
                historial_equipos::table.filter(historial_equipos::equipo_id.eq(id.get())),
            )
            .execute(conn)?;
            diesel::delete(equipos::table.find(id.get())).execute(conn)?;
            Ok(())
        })
    }

    fn set_equipo_imagen(
        &self,
        id: EquipoId,
        imagen_url: &str,
        imagen_key: &str,
    ) -> RepositoryResult<Equipment> {
        use crate::schema::equipos;

        let mut conn = self.conn()?;
        conn.transaction::<Equipment, RepositoryError, _>(|conn| {
            diesel::update(equipos::table.find(id.get()))
                .set((
                    equipos::imagen_url.eq(Some(imagen_url)),
                    equipos::imagen_key.eq(Some(imagen_key)),
                    equipos::updated_at.eq(diesel::dsl::now),
                ))
                .execute(conn)?;

            let (equipo, cliente, modalidad, fabricante) =
                load_equipo(conn, id.get())?.ok_or(RepositoryError::NotFound)?;
            Ok(equipo.into_domain(cliente, modalidad, fabricante)?)
        })
    }

    fn clear_equipo_imagen(&self, id: EquipoId) -> RepositoryResult<Option<String>> {
        use crate::schema::equipos;

        let mut conn = self.conn()?;
        conn.transaction::<Option<String>, RepositoryError, _>(|conn| {
            let current = equipos::table
                .find(id.get())
                .first::<DbEquipo>(conn)?;

            diesel::update(equipos::table.find(id.get()))
                .set((
                    equipos::imagen_url.eq(None::<String>),
                    equipos::imagen_key.eq(None::<String>),
                    equipos::updated_at.eq(diesel::dsl::now),
                ))
                .execute(conn)?;

            Ok(current.imagen_key)
        })
    }
}
