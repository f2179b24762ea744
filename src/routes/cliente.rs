use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use serde::Deserialize;

use crate::dto::api::{ApiResponse, PageInfo, clamp_per_page};
use crate::forms::cliente::{AddClienteForm, SaveClienteForm};
use crate::repository::{ClienteListQuery, DieselRepository};
use crate::routes::error_response;
use crate::services;

#[derive(Debug, Deserialize)]
struct ClientesQueryParams {
    activo: Option<bool>,
    q: Option<String>,
    page: Option<usize>,
    per_page: Option<usize>,
}

#[get("/v1/clientes")]
pub async fn list_clientes(
    params: web::Query<ClientesQueryParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let page = params.page.unwrap_or(1);
    let per_page = clamp_per_page(params.per_page);

    let mut query = ClienteListQuery::new().paginate(page, per_page);
    if let Some(activo) = params.activo {
        query = query.activo(activo);
    }
    if let Some(q) = params.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
        query = query.search(q);
    }

    match services::cliente::list_clientes(repo.get_ref(), query) {
        Ok((total, clientes)) => HttpResponse::Ok()
            .json(ApiResponse::paginated(clientes, PageInfo::new(page, per_page, total))),
        Err(err) => error_response("Failed to list clientes", err),
    }
}

#[get("/v1/clientes/{cliente_id}")]
pub async fn get_cliente(
    cliente_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::cliente::get_cliente(repo.get_ref(), cliente_id.into_inner()) {
        Ok(cliente) => HttpResponse::Ok().json(ApiResponse::ok(cliente)),
        Err(err) => error_response("Failed to get cliente", err),
    }
}

#[post("/v1/clientes")]
pub async fn create_cliente(
    form: web::Json<AddClienteForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::cliente::create_cliente(repo.get_ref(), &form) {
        Ok(cliente) => {
            HttpResponse::Created().json(ApiResponse::message(cliente, "Cliente creado"))
        }
        Err(err) => error_response("Failed to create cliente", err),
    }
}

#[put("/v1/clientes/{cliente_id}")]
pub async fn update_cliente(
    cliente_id: web::Path<i32>,
    form: web::Json<SaveClienteForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::cliente::update_cliente(repo.get_ref(), cliente_id.into_inner(), &form) {
        Ok(cliente) => {
            HttpResponse::Ok().json(ApiResponse::message(cliente, "Cliente actualizado"))
        }
        Err(err) => error_response("Failed to update cliente", err),
    }
}

#[delete("/v1/clientes/{cliente_id}")]
pub async fn delete_cliente(
    cliente_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::cliente::delete_cliente(repo.get_ref(), cliente_id.into_inner()) {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::message((), "Cliente eliminado")),
        Err(err) => error_response("Failed to delete cliente", err),
    }
}
