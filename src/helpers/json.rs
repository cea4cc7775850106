use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{web, Error, HttpResponse};
use serde_derive::Serialize;

/// Envelope shared by every endpoint: `success` plus `data` or `message`.
#[derive(Serialize, Debug)]
pub struct JsonResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Data<T>>,
}

#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum Data<T> {
    Item(T),
    List(Vec<T>),
}

#[derive(Debug)]
pub struct JsonResponseBuilder<T> {
    message: Option<String>,
    data: Option<Data<T>>,
}

impl<T> Default for JsonResponseBuilder<T> {
    fn default() -> Self {
        Self {
            message: None,
            data: None,
        }
    }
}

impl<T> JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    pub fn set_item(mut self, item: T) -> Self {
        self.data = Some(Data::Item(item));
        self
    }

    pub fn set_list(mut self, list: Vec<T>) -> Self {
        self.data = Some(Data::List(list));
        self
    }

    pub fn set_message<S: Into<String>>(mut self, message: S) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn ok(self) -> web::Json<JsonResponse<T>> {
        web::Json(JsonResponse {
            success: true,
            message: self.message,
            data: self.data,
        })
    }

    pub fn bad_request<S: Into<String>>(self, message: S) -> Error {
        self.error(StatusCode::BAD_REQUEST, message.into())
    }

    pub fn not_found<S: Into<String>>(self, message: S) -> Error {
        self.error(StatusCode::NOT_FOUND, message.into())
    }

    pub fn internal_server_error<S: Into<String>>(self, message: S) -> Error {
        let message = message.into();
        let message = if message.trim().is_empty() {
            String::from("Internal Server Error")
        } else {
            message
        };
        self.error(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn error(self, status: StatusCode, message: String) -> Error {
        let response = HttpResponse::build(status).json(JsonResponse::<T>::failure(&message));
        InternalError::from_response(message, response).into()
    }
}

impl<T> JsonResponse<T>
where
    T: serde::Serialize,
{
    pub fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder::default()
    }

    pub fn failure(message: &str) -> Self {
        let message = if message.trim().is_empty() {
            String::from("Error")
        } else {
            message.to_string()
        };

        JsonResponse {
            success: false,
            message: Some(message),
            data: None,
        }
    }
}
