//! Player report endpoint: current hiscores values + deltas vs history.

use actix_web::{get, web, HttpResponse, Responder};
use sqlx::PgPool;

use crate::hiscores::HiscoresClient;
use crate::stats::tracker::{self, ReportError};

#[get("/player/{username}")]
pub async fn player_report(
    path: web::Path<String>,
    db: web::Data<PgPool>,
    hiscores: web::Data<HiscoresClient>,
) -> impl Responder {
    let username = path.into_inner();

    match tracker::get_player_report(&db, &hiscores, &username).await {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(ReportError::InvalidUsername) => HttpResponse::BadRequest()
            .json(serde_json::json!({ "error": "Username must not be blank" })),
        Err(ReportError::NotFound) => {
            HttpResponse::NotFound().json(serde_json::json!({ "error": "Player not found" }))
        }
        // Upstream / persistence detail stays in the logs, not the body.
        Err(err) => {
            log::error!("player report for {username:?} failed: {err:?}");
            HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": "Server error" }))
        }
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(player_report);
}
