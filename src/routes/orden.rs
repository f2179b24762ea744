use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use serde::Deserialize;

use crate::domain::types::{ClienteId, EquipoId, EstadoOrden, PrioridadOrden, VocabularyError};
use crate::dto::api::{ApiResponse, PageInfo, clamp_per_page};
use crate::forms::orden::{AddOrdenForm, SaveOrdenForm};
use crate::repository::{DieselRepository, OrdenListQuery};
use crate::routes::error_response;
use crate::services;

#[derive(Debug, Deserialize)]
struct OrdenesQueryParams {
    equipo_id: Option<i32>,
    cliente_id: Option<i32>,
    estado: Option<String>,
    prioridad: Option<String>,
    page: Option<usize>,
    per_page: Option<usize>,
}

fn build_query(params: &OrdenesQueryParams) -> Result<OrdenListQuery, VocabularyError> {
    let page = params.page.unwrap_or(1);
    let per_page = clamp_per_page(params.per_page);
    let mut query = OrdenListQuery::new().paginate(page, per_page);

    if let Some(equipo_id) = params.equipo_id {
        query = query.equipo(EquipoId::new(equipo_id)?);
    }
    if let Some(cliente_id) = params.cliente_id {
        query = query.cliente(ClienteId::new(cliente_id)?);
    }
    if let Some(estado) = params.estado.as_deref() {
        query = query.estado(estado.parse::<EstadoOrden>()?);
    }
    if let Some(prioridad) = params.prioridad.as_deref() {
        query = query.prioridad(prioridad.parse::<PrioridadOrden>()?);
    }

    Ok(query)
}

#[get("/v1/ordenes")]
pub async fn list_ordenes(
    params: web::Query<OrdenesQueryParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let page = params.page.unwrap_or(1);
    let per_page = clamp_per_page(params.per_page);
    let query = match build_query(&params) {
        Ok(query) => query,
        Err(err) => {
            return HttpResponse::BadRequest().json(ApiResponse::failure(err.to_string()));
        }
    };

    match services::orden::list_ordenes(repo.get_ref(), query) {
        Ok((total, ordenes)) => HttpResponse::Ok()
            .json(ApiResponse::paginated(ordenes, PageInfo::new(page, per_page, total))),
        Err(err) => error_response("Failed to list ordenes", err),
    }
}

/// Convenience listing filtered by the stored lifecycle status.
#[get("/v1/ordenes/estado/{estado}")]
pub async fn list_ordenes_por_estado(
    estado: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let estado: EstadoOrden = match estado.parse() {
        Ok(estado) => estado,
        Err(err) => {
            return HttpResponse::BadRequest()
                .json(ApiResponse::failure(format!("{err}")));
        }
    };

    match services::orden::list_ordenes(repo.get_ref(), OrdenListQuery::new().estado(estado)) {
        Ok((_, ordenes)) => HttpResponse::Ok().json(ApiResponse::ok(ordenes)),
        Err(err) => error_response("Failed to list ordenes by estado", err),
    }
}

#[get("/v1/ordenes/{orden_id}")]
pub async fn get_orden(
    orden_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::orden::get_orden(repo.get_ref(), orden_id.into_inner()) {
        Ok(orden) => HttpResponse::Ok().json(ApiResponse::ok(orden)),
        Err(err) => error_response("Failed to get orden", err),
    }
}

#[get("/v1/ordenes/{orden_id}/historial")]
pub async fn historial_orden(
    orden_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::orden::list_historial_orden(repo.get_ref(), orden_id.into_inner()) {
        Ok(historial) => HttpResponse::Ok().json(ApiResponse::ok(historial)),
        Err(err) => error_response("Failed to list historial de orden", err),
    }
}

#[post("/v1/ordenes")]
pub async fn create_orden(
    form: web::Json<AddOrdenForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::orden::create_orden(repo.get_ref(), &form) {
        Ok(orden) => HttpResponse::Created().json(ApiResponse::message(orden, "Orden creada")),
        Err(err) => error_response("Failed to create orden", err),
    }
}

#[put("/v1/ordenes/{orden_id}")]
pub async fn update_orden(
    orden_id: web::Path<i32>,
    form: web::Json<SaveOrdenForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::orden::update_orden(repo.get_ref(), orden_id.into_inner(), &form) {
        Ok(orden) => HttpResponse::Ok().json(ApiResponse::message(orden, "Orden actualizada")),
        Err(err) => error_response("Failed to update orden", err),
    }
}

#[delete("/v1/ordenes/{orden_id}")]
pub async fn delete_orden(
    orden_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::orden::delete_orden(repo.get_ref(), orden_id.into_inner()) {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::message((), "Orden eliminada")),
        Err(err) => error_response("Failed to delete orden", err),
    }
}
