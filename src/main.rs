use actix_web::{middleware::Logger, App, HttpServer};
use dotenv::dotenv;
use log::info;
use std::io;

use workforce_backend::config::{Settings, Storage};
use workforce_backend::{db, AppState};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let settings = Settings::from_env()?;

    let state = match &settings.storage {
        Storage::Postgres { database_url, max_connections } => {
            let pool = db::create_pool(database_url, *max_connections)
                .await
                .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
            db::ensure_schema(&pool)
                .await
                .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
            info!("Using postgres storage");
            AppState::postgres(pool)
        }
        Storage::Memory => {
            info!("Using in-memory storage");
            AppState::in_memory()
        }
    };

    info!("Starting server at {}", settings.bind_address);

    HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(Logger::default())
            .configure(move |cfg| state.configure(cfg))
    })
    .bind(&settings.bind_address)?
    .run()
    .await
}
