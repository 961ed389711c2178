// Route exports
pub mod delivery;

use actix_web::web;

pub use delivery::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(delivery::configure),
    );
}
