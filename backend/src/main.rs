mod admin;
mod config;
mod db;
mod error;
mod services;
mod store;

use crate::admin::registry::AdminRegistry;
use crate::config::Config;
use crate::db::Database;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let database = Database::new(&config.database_path);
    database.migrate().map_err(io::Error::other)?;
    info!("Database ready at {}", database.path().display());

    // Assembled once; handlers only read it.
    let registry = web::Data::new(AdminRegistry::build());
    let settings = web::Data::new(config.clone());
    let database = web::Data::new(database);

    let (host, port) = config.bind_address();
    info!("Server running at http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::JsonConfig::default().limit(1024 * 1024)) // 1 MB
            .app_data(database.clone())
            .app_data(settings.clone())
            .app_data(registry.clone())
            .configure(services::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
