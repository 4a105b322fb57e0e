use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;

#[get("")]
async fn status() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok", "service": "web" }))
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(status);
}
