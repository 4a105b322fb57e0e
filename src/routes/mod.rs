pub mod health;
pub mod index;
pub mod submit;

use actix_web::web;

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.configure(index::init)
        .service(web::scope("/health").configure(health::init))
        .service(web::scope("/submit").configure(submit::init));
}
