//! Handlers for the catalog resources.

use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::api::ApiResponse;
use crate::forms::catalogo::{FabricanteForm, ModalidadForm, TecnicoForm};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services;

#[get("/v1/modalidades")]
pub async fn list_modalidades(repo: web::Data<DieselRepository>) -> impl Responder {
    match services::catalogo::list_modalidades(repo.get_ref()) {
        Ok(modalidades) => HttpResponse::Ok().json(ApiResponse::ok(modalidades)),
        Err(err) => error_response("Failed to list modalidades", err),
    }
}

#[get("/v1/modalidades/{modalidad_id}")]
pub async fn get_modalidad(
    modalidad_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::catalogo::get_modalidad(repo.get_ref(), modalidad_id.into_inner()) {
        Ok(modalidad) => HttpResponse::Ok().json(ApiResponse::ok(modalidad)),
        Err(err) => error_response("Failed to get modalidad", err),
    }
}

#[post("/v1/modalidades")]
pub async fn create_modalidad(
    form: web::Json<ModalidadForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::catalogo::create_modalidad(repo.get_ref(), &form) {
        Ok(modalidad) => {
            HttpResponse::Created().json(ApiResponse::message(modalidad, "Modalidad creada"))
        }
        Err(err) => error_response("Failed to create modalidad", err),
    }
}

#[put("/v1/modalidades/{modalidad_id}")]
pub async fn update_modalidad(
    modalidad_id: web::Path<i32>,
    form: web::Json<ModalidadForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::catalogo::update_modalidad(repo.get_ref(), modalidad_id.into_inner(), &form) {
        Ok(modalidad) => {
            HttpResponse::Ok().json(ApiResponse::message(modalidad, "Modalidad actualizada"))
        }
        Err(err) => error_response("Failed to update modalidad", err),
    }
}

#[delete("/v1/modalidades/{modalidad_id}")]
pub async fn delete_modalidad(
    modalidad_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::catalogo::delete_modalidad(repo.get_ref(), modalidad_id.into_inner()) {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::message((), "Modalidad eliminada")),
        Err(err) => error_response("Failed to delete modalidad", err),
    }
}

#[get("/v1/fabricantes")]
pub async fn list_fabricantes(repo: web::Data<DieselRepository>) -> impl Responder {
    match services::catalogo::list_fabricantes(repo.get_ref()) {
        Ok(fabricantes) => HttpResponse::Ok().json(ApiResponse::ok(fabricantes)),
        Err(err) => error_response("Failed to list fabricantes", err),
    }
}

#[get("/v1/fabricantes/{fabricante_id}")]
pub async fn get_fabricante(
    fabricante_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::catalogo::get_fabricante(repo.get_ref(), fabricante_id.into_inner()) {
        Ok(fabricante) => HttpResponse::Ok().json(ApiResponse::ok(fabricante)),
        Err(err) => error_response("Failed to get fabricante", err),
    }
}

#[post("/v1/fabricantes")]
pub async fn create_fabricante(
    form: web::Json<FabricanteForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::catalogo::create_fabricante(repo.get_ref(), &form) {
        Ok(fabricante) => {
            HttpResponse::Created().json(ApiResponse::message(fabricante, "Fabricante creado"))
        }
        Err(err) => error_response("Failed to create fabricante", err),
    }
}

#[put("/v1/fabricantes/{fabricante_id}")]
pub async fn update_fabricante(
    fabricante_id: web::Path<i32>,
    form: web::Json<FabricanteForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::catalogo::update_fabricante(repo.get_ref(), fabricante_id.into_inner(), &form)
    {
        Ok(fabricante) => {
            HttpResponse::Ok().json(ApiResponse::message(fabricante, "Fabricante actualizado"))
        }
        Err(err) => error_response("Failed to update fabricante", err),
    }
}

#[delete("/v1/fabricantes/{fabricante_id}")]
pub async fn delete_fabricante(
    fabricante_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::catalogo::delete_fabricante(repo.get_ref(), fabricante_id.into_inner()) {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::message((), "Fabricante eliminado")),
        Err(err) => error_response("Failed to delete fabricante", err),
    }
}

#[get("/v1/tecnicos")]
pub async fn list_tecnicos(repo: web::Data<DieselRepository>) -> impl Responder {
    match services::catalogo::list_tecnicos(repo.get_ref()) {
        Ok(tecnicos) => HttpResponse::Ok().json(ApiResponse::ok(tecnicos)),
        Err(err) => error_response("Failed to list tecnicos", err),
    }
}

#[get("/v1/tecnicos/{tecnico_id}")]
pub async fn get_tecnico(
    tecnico_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::catalogo::get_tecnico(repo.get_ref(), tecnico_id.into_inner()) {
        Ok(tecnico) => HttpResponse::Ok().json(ApiResponse::ok(tecnico)),
        Err(err) => error_response("Failed to get tecnico", err),
    }
}

#[post("/v1/tecnicos")]
pub async fn create_tecnico(
    form: web::Json<TecnicoForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::catalogo::create_tecnico(repo.get_ref(), &form) {
        Ok(tecnico) => {
            HttpResponse::Created().json(ApiResponse::message(tecnico, "Técnico creado"))
        }
        Err(err) => error_response("Failed to create tecnico", err),
    }
}

#[put("/v1/tecnicos/{tecnico_id}")]
pub async fn update_tecnico(
    tecnico_id: web::Path<i32>,
    form: web::Json<TecnicoForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::catalogo::update_tecnico(repo.get_ref(), tecnico_id.into_inner(), &form) {
        Ok(tecnico) => {
            HttpResponse::Ok().json(ApiResponse::message(tecnico, "Técnico actualizado"))
        }
        Err(err) => error_response("Failed to update tecnico", err),
    }
}

#[delete("/v1/tecnicos/{tecnico_id}")]
pub async fn delete_tecnico(
    tecnico_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::catalogo::delete_tecnico(repo.get_ref(), tecnico_id.into_inner()) {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::message((), "Técnico eliminado")),
        Err(err) => error_response("Failed to delete tecnico", err),
    }
}
