use actix_web::{HttpResponse, Responder, post, web};
use chrono::Utc;
use serde_json::json;
use tracing::{error, info};

use crate::handlers::submit::process;
use crate::intake::normalize::{new_request_id, normalize};
use crate::intake::validate::validate;
use crate::models::registration::RegistrationInput;
use crate::state::AppState;

#[post("")]
async fn submit(state: web::Data<AppState>, body: web::Json<RegistrationInput>) -> impl Responder {
    let request_id = new_request_id();

    let errors = validate(&body);
    if !errors.is_empty() {
        return HttpResponse::BadRequest().json(json!({ "status": "error", "errors": errors }));
    }

    let record = normalize(&body, request_id.clone(), Utc::now());
    info!("[{}] accepted submission from {}", request_id, record.email);

    match process(&state.pdf, state.telegram.as_ref(), &record).await {
        Ok(()) => HttpResponse::Ok().json(json!({ "status": "ok", "request_id": record.request_id })),
        Err(e) => {
            error!("[{}] submission failed: {:#}", request_id, e);
            HttpResponse::InternalServerError().json(json!({
                "status": "error",
                "errors": ["Внутренняя ошибка сервера. Попробуйте позже."],
            }))
        }
    }
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(submit);
}
