use crate::helpers::JsonResponse;
use crate::services::ReviewManager;
use actix_web::{get, web, Responder, Result};

#[tracing::instrument(name = "Get all reviews.", skip(manager))]
#[get("")]
pub async fn list_handler(manager: web::Data<ReviewManager>) -> Result<impl Responder> {
    let reviews = manager.list().await?;

    Ok(JsonResponse::build().set_list(reviews).ok())
}

#[tracing::instrument(name = "Get reviews of a product.", skip(manager))]
#[get("/product/{product_id}")]
pub async fn product_list_handler(
    path: web::Path<(i64,)>,
    manager: web::Data<ReviewManager>,
) -> Result<impl Responder> {
    let (product_id,) = path.into_inner();
    let reviews = manager.list_by_product(product_id).await?;

    Ok(JsonResponse::build().set_list(reviews).ok())
}

#[tracing::instrument(name = "Get review.", skip(manager))]
#[get("/{id}")]
pub async fn item_handler(
    path: web::Path<(String,)>,
    manager: web::Data<ReviewManager>,
) -> Result<impl Responder> {
    let (id,) = path.into_inner();
    let review = manager.get(&id).await?;

    Ok(JsonResponse::build().set_item(review).ok())
}
