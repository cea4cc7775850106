use crate::configuration::Settings;
use crate::db::ReviewStore;
use crate::health::HealthChecker;
use crate::helpers::JsonResponse;
use crate::routes;
use crate::services::ReviewManager;
use actix_cors::Cors;
use actix_web::{dev::Server, error, web, App, HttpServer};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    store: Arc<dyn ReviewStore>,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let settings = web::Data::new(settings);
    let manager = web::Data::new(ReviewManager::new(store.clone()));
    let health_checker = web::Data::new(HealthChecker::new(store));

    // malformed bodies and path segments get the same envelope as validation errors
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let msg = match err {
            error::JsonPayloadError::Deserialize(err) => format!(
                "Invalid request body at line {}, column {}: {}",
                err.line(),
                err.column(),
                err
            ),
            err => format!("Invalid request body: {}", err),
        };
        JsonResponse::<()>::build().bad_request(msg)
    });
    let path_config = web::PathConfig::default().error_handler(|err, _req| {
        JsonResponse::<()>::build().bad_request(format!("Invalid path: {}", err))
    });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .service(web::scope("/health_check").service(routes::health_check))
            .service(
                web::scope("/reviews")
                    .service(routes::review::add_handler)
                    .service(routes::review::list_handler)
                    .service(routes::review::product_list_handler)
                    .service(routes::review::item_handler)
                    .service(routes::review::update_handler)
                    .service(routes::review::delete_handler),
            )
            .app_data(json_config.clone())
            .app_data(path_config.clone())
            .app_data(manager.clone())
            .app_data(health_checker.clone())
            .app_data(settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
