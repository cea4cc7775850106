use crate::forms;
use crate::helpers::JsonResponse;
use crate::services::ReviewManager;
use actix_web::{post, web, Responder, Result};

#[tracing::instrument(name = "Add review.", skip(manager))]
#[post("")]
pub async fn add_handler(
    form: web::Json<forms::review::Add>,
    manager: web::Data<ReviewManager>,
) -> Result<impl Responder> {
    let review = manager.create(form.into_inner()).await?;

    Ok(JsonResponse::build().set_item(review).ok())
}
