mod api;
mod config;
mod error;
mod models;
mod repository;

use actix_web::web::Data;
use actix_web::{get, middleware::Logger, web, App, HttpResponse, HttpServer, Responder, Result};
use anyhow::Context;
use env_logger::Env;
use serde::Serialize;

use crate::config::Config;
use crate::repository::database::MongoDbClient;

#[derive(Serialize)]
pub struct Response {
    pub message: String,
}

#[get("/health")]
async fn healthcheck() -> impl Responder {
    let response = Response {
        message: "Everything is working fine".to_string(),
    };
    HttpResponse::Ok().json(response)
}

async fn not_found() -> Result<HttpResponse> {
    let response = Response {
        message: "Resource not found".to_string(),
    };
    Ok(HttpResponse::NotFound().json(response))
}

async fn setup(config: &Config) -> anyhow::Result<Data<MongoDbClient>> {
    let todos_db = MongoDbClient::connect(config).await?;
    Ok(web::Data::new(todos_db))
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::new();
    let data = setup(&config).await?;

    log::info!("listening on 0.0.0.0:{}", config.port);
    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .configure(api::todos::config::<MongoDbClient>)
            .service(healthcheck)
            .default_service(web::route().to(not_found))
            .wrap(Logger::default())
    })
    .bind(("0.0.0.0", config.port))
    .with_context(|| format!("Failed to bind port {}", config.port))?
    .run()
    .await?;
    Ok(())
}
