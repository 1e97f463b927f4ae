pub mod config;
pub mod error;
pub mod routes;

use actix_cors::Cors;
use actix_web::http::header;

pub use routes::configure;

pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST"])
        .allowed_header(header::CONTENT_TYPE)
        .max_age(3600)
}
