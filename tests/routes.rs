use actix_web::{App, http::StatusCode, test, web};
use serde_json::json;

use equitrack::repository::DieselRepository;
use equitrack::routes::{catalogo, cliente, equipo, orden};

mod common;

macro_rules! test_app {
    ($repo:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($repo))
                .service(
                    web::scope("/api")
                        .service(cliente::list_clientes)
                        .service(cliente::get_cliente)
                        .service(cliente::create_cliente)
                        .service(cliente::update_cliente)
                        .service(cliente::delete_cliente)
                        .service(equipo::list_equipos)
                        .service(equipo::list_equipos_por_estado)
                        .service(equipo::historial_equipo)
                        .service(equipo::get_equipo)
                        .service(equipo::create_equipo)
                        .service(equipo::update_equipo)
                        .service(equipo::delete_equipo)
                        .service(orden::list_ordenes)
                        .service(orden::list_ordenes_por_estado)
                        .service(orden::get_orden)
                        .service(orden::create_orden)
                        .service(orden::update_orden)
                        .service(orden::delete_orden)
                        .service(catalogo::list_modalidades)
                        .service(catalogo::get_modalidad)
                        .service(catalogo::create_modalidad)
                        .service(catalogo::update_modalidad)
                        .service(catalogo::delete_modalidad)
                        .service(catalogo::list_fabricantes)
                        .service(catalogo::create_fabricante)
                        .service(catalogo::list_tecnicos)
                        .service(catalogo::create_tecnico),
                ),
        )
        .await
    };
}

#[actix_web::test]
async fn modalidades_crud_via_api() {
    let test_db = common::TestDb::new("test_routes_modalidades.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    let app = test_app!(repo);

    let req = test::TestRequest::post()
        .uri("/api/v1/modalidades")
        .set_json(json!({"codigo": "CT", "descripcion": "Tomografía Computarizada"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["codigo"], "CT");
    assert_eq!(body["message"], "Modalidad creada");

    // Invalid payload: rejected with field-keyed errors, nothing persisted.
    let req = test::TestRequest::post()
        .uri("/api/v1/modalidades")
        .set_json(json!({"codigo": "", "descripcion": "Rayos X"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(body["errors"]["codigo"].is_array());

    let req = test::TestRequest::get().uri("/api/v1/modalidades").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn cliente_validation_is_keyed_to_nested_contact() {
    let test_db = common::TestDb::new("test_routes_cliente_contacto.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    let app = test_app!(repo);

    let req = test::TestRequest::post()
        .uri("/api/v1/clientes")
        .set_json(json!({
            "nombre": "Hospital Central",
            "sector": "public",
            "contacto": {"email": "not-an-email"}
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(body["errors"]["contacto"]["email"].is_array());
}

#[actix_web::test]
async fn equipos_lifecycle_via_api() {
    let test_db = common::TestDb::new("test_routes_equipos.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    let app = test_app!(repo);

    let req = test::TestRequest::post()
        .uri("/api/v1/clientes")
        .set_json(json!({
            "nombre": "Hospital Central",
            "sector": "public",
            "contacto": {"telefono": "555-0101", "email": "c@hospital.org"}
        }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let cliente_id = body["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/v1/modalidades")
        .set_json(json!({"codigo": "MR", "descripcion": "Resonancia Magnética"}))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let modalidad_id = body["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/v1/fabricantes")
        .set_json(json!({"nombre": "Philips", "pais": "Países Bajos"}))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let fabricante_id = body["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/v1/equipos")
        .set_json(json!({
            "nombre": "Resonador 3T",
            "numeroSerie": "MR-2024-001",
            "clienteId": cliente_id,
            "modalidadId": modalidad_id,
            "fabricanteId": fabricante_id,
            "estado": "operational"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let equipo_id = body["data"]["id"].as_i64().unwrap();
    // The view shape denormalizes display names and speaks camelCase.
    assert_eq!(body["data"]["fabricante"], "Philips");
    assert_eq!(body["data"]["modalidad"], "Resonancia Magnética");
    assert_eq!(body["data"]["numeroSerie"], "MR-2024-001");
    assert_eq!(body["data"]["imagenUrl"], "");

    // Filter by the stored lifecycle status.
    let req = test::TestRequest::get()
        .uri("/api/v1/equipos/estado/Operativo")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    // A status-changing update shows up in the history sub-resource.
    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/equipos/{equipo_id}"))
        .set_json(json!({
            "nombre": "Resonador 3T",
            "numeroSerie": "MR-2024-001",
            "estado": "out-of-service",
            "nota": "fuga de helio"
        }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["estado"], "out-of-service");

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/equipos/{equipo_id}/historial"))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let historial = body["data"].as_array().unwrap();
    assert_eq!(historial.len(), 1);
    assert_eq!(historial[0]["estadoAnterior"], "Operativo");
    assert_eq!(historial[0]["estadoNuevo"], "Fuera_de_Servicio");

    // Unknown status value on the convenience endpoint is a client error.
    let req = test::TestRequest::get()
        .uri("/api/v1/equipos/estado/Prestado")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn missing_resource_answers_not_found_envelope() {
    let test_db = common::TestDb::new("test_routes_not_found.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    let app = test_app!(repo);

    let req = test::TestRequest::get().uri("/api/v1/clientes/99").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Recurso no encontrado");
}

#[actix_web::test]
async fn list_envelope_carries_pagination() {
    let test_db = common::TestDb::new("test_routes_pagination.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    let app = test_app!(repo);

    let req = test::TestRequest::get().uri("/api/v1/clientes").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["pagination"]["perPage"], 1000);
    assert_eq!(body["pagination"]["total"], 0);
}
