use actix_web::{HttpResponse, Responder, get, web};

#[get("/")]
async fn page() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(include_str!("../../static/index.html"))
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(page);
}
