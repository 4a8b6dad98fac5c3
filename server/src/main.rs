use std::time::Duration;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use todo_server::config::Config;
use todo_server::error::StartupError;
use todo_server::{routes, store, AppState};

const CONNECTION_TIMEOUT: Duration = Duration::from_secs(60);

#[actix_web::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(err) = run().await {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = Config::from_env()?;
    log::info!("using {:?} storage", config.storage);

    let store = store::open(&config).await?;
    let state = web::Data::new(AppState::new(store));

    let (host, port) = config.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(routes)
    })
    .bind((host.as_str(), port))?
    .keep_alive(CONNECTION_TIMEOUT)
    .client_request_timeout(CONNECTION_TIMEOUT)
    .shutdown_timeout(config.shutdown_grace.as_secs());

    log::info!("listening on {}:{}", host, port);
    server.run().await?;

    log::info!("server gracefully stopped");
    Ok(())
}
