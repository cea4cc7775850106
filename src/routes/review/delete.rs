use crate::helpers::JsonResponse;
use crate::services::ReviewManager;
use actix_web::{delete, web, Responder, Result};

#[tracing::instrument(name = "Delete review.", skip(manager))]
#[delete("/{id}")]
pub async fn delete_handler(
    path: web::Path<(String,)>,
    manager: web::Data<ReviewManager>,
) -> Result<impl Responder> {
    let (id,) = path.into_inner();
    manager.delete(&id).await?;

    Ok(JsonResponse::<()>::build().set_message("Review deleted").ok())
}
