use crate::health::HealthChecker;
use actix_web::{get, web, HttpResponse, Responder};

#[get("")]
pub async fn health_check(checker: web::Data<HealthChecker>) -> impl Responder {
    let report = checker.check_all().await;
    if report.is_healthy() {
        HttpResponse::Ok().json(report)
    } else {
        HttpResponse::ServiceUnavailable().json(report)
    }
}
