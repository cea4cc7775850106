use crate::forms;
use crate::helpers::JsonResponse;
use crate::services::ReviewManager;
use actix_web::{put, web, Responder, Result};

#[tracing::instrument(name = "Update review.", skip(manager))]
#[put("/{id}")]
pub async fn update_handler(
    path: web::Path<(String,)>,
    form: web::Json<forms::review::Edit>,
    manager: web::Data<ReviewManager>,
) -> Result<impl Responder> {
    let (id,) = path.into_inner();
    manager.update(&id, form.into_inner()).await?;

    Ok(JsonResponse::<()>::build().set_message("Review updated").ok())
}
