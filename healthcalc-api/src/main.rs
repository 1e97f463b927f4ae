use std::error::Error;

use actix_web::{middleware::Logger, App, HttpServer};
use healthcalc_api::config::Config;
use log::info;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn Error>> {
    log4rs::init_file("log4rs.yml", Default::default())?;

    let config = Config::from_env()?;

    info!("Listening on {}:{}", config.host, config.port);
    HttpServer::new(|| {
        App::new()
            .wrap(healthcalc_api::cors())
            .wrap(Logger::default())
            .configure(healthcalc_api::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
