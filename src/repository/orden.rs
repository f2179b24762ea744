use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::{
    domain::history::{NewOrderHistoryEntry, OrderHistoryEntry},
    domain::order::{NewWorkOrder, UpdateWorkOrder, WorkOrder},
    domain::types::{OrdenId, OrderStatus},
    models::historial::{HistorialOrden as DbHistorialOrden, NewHistorialOrden},
    models::orden::{NewOrden as DbNewOrden, Orden as DbOrden, UpdateOrden as DbUpdateOrden},
    repository::{DieselRepository, OrdenListQuery, OrdenReader, OrdenWriter,
        errors::{RepositoryError, RepositoryResult}},
};

/// Loads one work order row joined with its display names.
fn load_orden(
    conn: &mut SqliteConnection,
    id: i32,
) -> Result<Option<(DbOrden, String, String, Option<String>)>, diesel::result::Error> {
    use crate::schema::{clientes, equipos, ordenes, tecnicos};

    ordenes::table
        .inner_join(equipos::table)
        .inner_join(clientes::table)
        .left_join(tecnicos::table)
        .filter(ordenes::orden_id.eq(id))
        .select((
            ordenes::all_columns,
            equipos::nombre,
            clientes::nombre,
            tecnicos::nombre.nullable(),
        ))
        .first::<(DbOrden, String, String, Option<String>)>(conn)
        .optional()
}

impl OrdenReader for DieselRepository {
    fn get_orden_by_id(&self, id: OrdenId) -> RepositoryResult<Option<WorkOrder>> {
        let mut conn = self.conn()?;
        let row = load_orden(&mut conn, id.get())?;

        row.map(|(orden, equipo, cliente, tecnico)| orden.into_domain(equipo, cliente, tecnico))
            .transpose()
            .map_err(Into::into)
    }

    fn list_ordenes(&self, query: OrdenListQuery) -> RepositoryResult<(usize, Vec<WorkOrder>)> {
        use crate::schema::{clientes, equipos, ordenes, tecnicos};

        let mut conn = self.conn()?;

        let build = |query: &OrdenListQuery| {
            let mut stmt = ordenes::table.into_boxed();
            if let Some(equipo_id) = query.equipo_id {
                stmt = stmt.filter(ordenes::equipo_id.eq(equipo_id.get()));
            }
            if let Some(cliente_id) = query.cliente_id {
                stmt = stmt.filter(ordenes::cliente_id.eq(cliente_id.get()));
            }
            if let Some(estado) = query.estado {
                stmt = stmt.filter(ordenes::estado.eq(estado.as_str()));
            }
            if let Some(prioridad) = query.prioridad {
                stmt = stmt.filter(ordenes::prioridad.eq(prioridad.as_str()));
            }
            stmt
        };

        let total: i64 = build(&query).count().get_result(&mut conn)?;

        let mut stmt = ordenes::table
            .inner_join(equipos::table)
            .inner_join(clientes::table)
            .left_join(tecnicos::table)
            .select((
                ordenes::all_columns,
                equipos::nombre,
                clientes::nombre,
                tecnicos::nombre.nullable(),
            ))
            .order(ordenes::orden_id.asc())
            .into_boxed();
        if let Some(equipo_id) = query.equipo_id {
            stmt = stmt.filter(ordenes::equipo_id.eq(equipo_id.get()));
        }
        if let Some(cliente_id) = query.cliente_id {
            stmt = stmt.filter(ordenes::cliente_id.eq(cliente_id.get()));
        }
        if let Some(estado) = query.estado {
            stmt = stmt.filter(ordenes::estado.eq(estado.as_str()));
        }
        if let Some(prioridad) = query.prioridad {
            stmt = stmt.filter(ordenes::prioridad.eq(prioridad.as_str()));
        }
        if let Some(pagination) = &query.pagination {
            let page = pagination.page.max(1) as i64;
            let per_page = pagination.per_page as i64;
            stmt = stmt.limit(per_page).offset((page - 1) * per_page);
        }

        let items = stmt
            .load::<(DbOrden, String, String, Option<String>)>(&mut conn)?
            .into_iter()
            .map(|(orden, equipo, cliente, tecnico)| orden.into_domain(equipo, cliente, tecnico))
            .collect::<Result<Vec<WorkOrder>, _>>()?;

        Ok((total as usize, items))
    }

    fn list_historial_orden(&self, id: OrdenId) -> RepositoryResult<Vec<OrderHistoryEntry>> {
        use crate::schema::historial_ordenes;

        let mut conn = self.conn()?;
        let entries = historial_ordenes::table
            .filter(historial_ordenes::orden_id.eq(id.get()))
            .order(historial_ordenes::historial_id.desc())
            .load::<DbHistorialOrden>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(entries)
    }
}

impl OrdenWriter for DieselRepository {
    fn create_orden(&self, new_orden: &NewWorkOrder) -> RepositoryResult<WorkOrder> {
        use crate::schema::ordenes;

        let mut conn = self.conn()?;
        conn.transaction::<WorkOrder, RepositoryError, _>(|conn| {
            let insertable: DbNewOrden = new_orden.into();
            let row = diesel::insert_into(ordenes::table)
                .values(&insertable)
                .get_result::<DbOrden>(conn)?;

            let (orden, equipo, cliente, tecnico) =
                load_orden(conn, row.orden_id)?.ok_or(RepositoryError::NotFound)?;
            Ok(orden.into_domain(equipo, cliente, tecnico)?)
        })
    }

    fn update_orden(&self, id: OrdenId, updates: &UpdateWorkOrder) -> RepositoryResult<WorkOrder> {
        use crate::schema::{historial_ordenes, ordenes};

        let mut conn = self.conn()?;
        conn.transaction::<WorkOrder, RepositoryError, _>(|conn| {
            let current = ordenes::table
                .find(id.get())
                .first::<DbOrden>(conn)?;
            let estado_anterior = current.estado()?;

            // Closing stamps the close timestamp once; reopening clears it.
            let fecha_cierre = match updates.estado {
                OrderStatus::Closed => current
                    .fecha_cierre
                    .or_else(|| Some(Utc::now().naive_utc())),
                _ => None,
            };

            let changeset: DbUpdateOrden = updates.into();
            diesel::update(ordenes::table.find(id.get()))
                .set((
                    &changeset,
                    ordenes::fecha_cierre.eq(fecha_cierre),
                    ordenes::updated_at.eq(diesel::dsl::now),
                ))
                .execute(conn)?;

            let estado_nuevo = updates.estado.canonical();
            if estado_anterior != estado_nuevo {
                let entry = NewOrderHistoryEntry {
                    estado_anterior,
                    estado_nuevo,
                    nota: updates.nota.clone(),
                };
                diesel::insert_into(historial_ordenes::table)
                    .values(NewHistorialOrden::from_domain(id.get(), &entry))
                    .execute(conn)?;
            }

            let (orden, equipo, cliente, tecnico) =
                load_orden(conn, id.get())?.ok_or(RepositoryError::NotFound)?;
            Ok(orden.into_domain(equipo, cliente, tecnico)?)
        })
    }

    fn delete_orden(&self, id: OrdenId) -> RepositoryResult<()> {
        use crate::schema::{historial_ordenes, ordenes};

        let mut conn = self.conn()?;
        conn.transaction::<(), RepositoryError, _>(|conn| {
            diesel::delete(
                historial_ordenes::table.filter(historial_ordenes::orden_id.eq(id.get())),
            )
            .execute(conn)?;
            diesel::delete(ordenes::table.find(id.get())).execute(conn)?;
            Ok(())
        })
    }
}
