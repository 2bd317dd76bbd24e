use crate::http;
use actix_web::{web, HttpResponse, Responder};

async fn index() -> impl Responder {
    HttpResponse::Ok().body("RuneHelp backend is running")
}

/// Mount every HTTP sub-module under `/api`.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index)).service(
        web::scope("/api")
            .configure(http::player::init_routes)
            .configure(http::health::init_routes),
    );
}
