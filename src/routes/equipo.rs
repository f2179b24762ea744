use actix_multipart::form::{MultipartForm, tempfile::TempFile};
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use serde::Deserialize;

use crate::domain::types::{ClienteId, EstadoEquipo};
use crate::dto::api::{ApiResponse, PageInfo, clamp_per_page};
use crate::forms::equipo::{AddEquipoForm, SaveEquipoForm};
use crate::repository::{DieselRepository, EquipoListQuery};
use crate::routes::error_response;
use crate::services;
use crate::storage::FsObjectStore;

#[derive(Debug, Deserialize)]
struct EquiposQueryParams {
    cliente_id: Option<i32>,
    estado: Option<String>,
    page: Option<usize>,
    per_page: Option<usize>,
}

fn build_query(params: &EquiposQueryParams) -> Result<EquipoListQuery, HttpResponse> {
    let page = params.page.unwrap_or(1);
    let per_page = clamp_per_page(params.per_page);
    let mut query = EquipoListQuery::new().paginate(page, per_page);

    if let Some(cliente_id) = params.cliente_id {
        let cliente_id = ClienteId::new(cliente_id).map_err(|err| {
            HttpResponse::BadRequest().json(ApiResponse::failure(err.to_string()))
        })?;
        query = query.cliente(cliente_id);
    }
    if let Some(estado) = params.estado.as_deref() {
        let estado: EstadoEquipo = estado.parse().map_err(
            |err: crate::domain::types::VocabularyError| {
                HttpResponse::BadRequest().json(ApiResponse::failure(err.to_string()))
            },
        )?;
        query = query.estado(estado);
    }

    Ok(query)
}

#[get("/v1/equipos")]
pub async fn list_equipos(
    params: web::Query<EquiposQueryParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let page = params.page.unwrap_or(1);
    let per_page = clamp_per_page(params.per_page);
    let query = match build_query(&params) {
        Ok(query) => query,
        Err(response) => return response,
    };

    match services::equipo::list_equipos(repo.get_ref(), query) {
        Ok((total, equipos)) => HttpResponse::Ok()
            .json(ApiResponse::paginated(equipos, PageInfo::new(page, per_page, total))),
        Err(err) => error_response("Failed to list equipos", err),
    }
}

/// Convenience listing filtered by the stored lifecycle status.
#[get("/v1/equipos/estado/{estado}")]
pub async fn list_equipos_por_estado(
    estado: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let estado: EstadoEquipo = match estado.parse() {
        Ok(estado) => estado,
        Err(err) => {
            return HttpResponse::BadRequest()
                .json(ApiResponse::failure(format!("{err}")));
        }
    };

    match services::equipo::list_equipos(repo.get_ref(), EquipoListQuery::new().estado(estado)) {
        Ok((_, equipos)) => HttpResponse::Ok().json(ApiResponse::ok(equipos)),
        Err(err) => error_response("Failed to list equipos by estado", err),
    }
}

#[get("/v1/equipos/{equipo_id}")]
pub async fn get_equipo(
    equipo_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::equipo::get_equipo(repo.get_ref(), equipo_id.into_inner()) {
        Ok(equipo) => HttpResponse::Ok().json(ApiResponse::ok(equipo)),
        Err(err) => error_response("Failed to get equipo", err),
    }
}

#[get("/v1/equipos/{equipo_id}/historial")]
pub async fn historial_equipo(
    equipo_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::equipo::list_historial_equipo(repo.get_ref(), equipo_id.into_inner()) {
        Ok(historial) => HttpResponse::Ok().json(ApiResponse::ok(historial)),
        Err(err) => error_response("Failed to list historial de equipo", err),
    }
}

#[post("/v1/equipos")]
pub async fn create_equipo(
    form: web::Json<AddEquipoForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::equipo::create_equipo(repo.get_ref(), &form) {
        Ok(equipo) => HttpResponse::Created().json(ApiResponse::message(equipo, "Equipo creado")),
        Err(err) => error_response("Failed to create equipo", err),
    }
}

#[put("/v1/equipos/{equipo_id}")]
pub async fn update_equipo(
    equipo_id: web::Path<i32>,
    form: web::Json<SaveEquipoForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::equipo::update_equipo(repo.get_ref(), equipo_id.into_inner(), &form) {
        Ok(equipo) => HttpResponse::Ok().json(ApiResponse::message(equipo, "Equipo actualizado")),
        Err(err) => error_response("Failed to update equipo", err),
    }
}

#[delete("/v1/equipos/{equipo_id}")]
pub async fn delete_equipo(
    equipo_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::equipo::delete_equipo(repo.get_ref(), equipo_id.into_inner()) {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::message((), "Equipo eliminado")),
        Err(err) => error_response("Failed to delete equipo", err),
    }
}

#[derive(MultipartForm)]
pub struct UploadImagenForm {
    #[multipart(limit = "10MB")]
    pub imagen: TempFile,
}

#[post("/v1/equipos/{equipo_id}/imagen")]
pub async fn upload_equipo_imagen(
    equipo_id: web::Path<i32>,
    MultipartForm(form): MultipartForm<UploadImagenForm>,
    repo: web::Data<DieselRepository>,
    store: web::Data<FsObjectStore>,
) -> impl Responder {
    let filename = form.imagen.file_name.clone().unwrap_or_default();
    let bytes = match std::fs::read(form.imagen.file.path()) {
        Ok(bytes) => bytes,
        Err(err) => {
            log::error!("Failed to read uploaded file: {err}");
            return HttpResponse::InternalServerError()
                .json(ApiResponse::failure("Error interno del servidor"));
        }
    };

    match services::equipo::attach_equipo_imagen(
        repo.get_ref(),
        store.get_ref(),
        equipo_id.into_inner(),
        &filename,
        &bytes,
    ) {
        Ok(equipo) => HttpResponse::Ok().json(ApiResponse::message(equipo, "Imagen actualizada")),
        Err(err) => error_response("Failed to upload imagen", err),
    }
}

#[delete("/v1/equipos/{equipo_id}/imagen")]
pub async fn delete_equipo_imagen(
    equipo_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    store: web::Data<FsObjectStore>,
) -> impl Responder {
    match services::equipo::detach_equipo_imagen(
        repo.get_ref(),
        store.get_ref(),
        equipo_id.into_inner(),
    ) {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::message((), "Imagen eliminada")),
        Err(err) => error_response("Failed to delete imagen", err),
    }
}
