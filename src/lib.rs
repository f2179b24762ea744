#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};

#[cfg(feature = "server")]
use crate::db::establish_connection_pool;
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::DieselRepository;
#[cfg(feature = "server")]
use crate::storage::FsObjectStore;

pub mod db;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
pub mod schema;
pub mod services;
#[cfg(feature = "server")]
pub mod storage;
pub mod store;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    use crate::routes::{catalogo, cliente, equipo, orden};

    // Establish the Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let repo = DieselRepository::new(pool);
    let object_store = FsObjectStore::new(&server_config.media_root, &server_config.media_base_url);

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/media", &server_config.media_root))
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
                    .service(equipo::upload_equipo_imagen)
                    .service(equipo::delete_equipo_imagen)
                    .service(equipo::get_equipo)
                    .service(equipo::create_equipo)
                    .service(equipo::update_equipo)
                    .service(equipo::delete_equipo)
                    .service(orden::list_ordenes)
                    .service(orden::list_ordenes_por_estado)
                    .service(orden::historial_orden)
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
                    .service(catalogo::get_fabricante)
                    .service(catalogo::create_fabricante)
                    .service(catalogo::update_fabricante)
                    .service(catalogo::delete_fabricante)
                    .service(catalogo::list_tecnicos)
                    .service(catalogo::get_tecnico)
                    .service(catalogo::create_tecnico)
                    .service(catalogo::update_tecnico)
                    .service(catalogo::delete_tecnico),
            )
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(object_store.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
