mod config;
mod handlers;

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use sheet_engine::{ReqwestFetcher, SheetCache, SheetService};
use sheet_logging::LogDestination;

use crate::config::ServerConfig;
use crate::handlers::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    sheet_logging::initialize(LogDestination::Terminal);

    let config = ServerConfig::from_env();
    log::info!(
        "starting sheet server on {} (origin policy: {:?})",
        config.bind_addr,
        config.allowed_origin
    );

    let bind_addr = config.bind_addr.clone();
    HttpServer::new(move || {
        let mut service = SheetService::new(Arc::new(ReqwestFetcher::default()));
        if let Some(dir) = &config.cache_dir {
            service = service.with_cache(SheetCache::new(dir.clone()));
        }

        App::new()
            .wrap(config.cors())
            .app_data(web::Data::new(AppState { service }))
            .configure(handlers::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await
}
