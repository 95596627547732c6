mod config;
mod services;

use std::io;
use std::thread;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use clap::Parser;
use env_logger::Env;
use log::{info, warn};

use crate::config::{ServerConfig, PAYLOAD_LIMIT};
use crate::services::api_proxy::{self, Upstream};
use crate::services::spa::serve_embedded;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = ServerConfig::parse();
    let url = config.url();

    let upstream = Upstream::new(&config.api_upstream, config.upstream_timeout())
        .map_err(|err| io::Error::other(format!("cannot build upstream client: {}", err)))?;

    if !config.no_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(err) = webbrowser::open(&url) {
                warn!("Could not open a browser at {}: {}", url, err);
            }
        });
    }

    info!("Server running at {}", url);
    info!("Forwarding /api to {}", upstream.base_url());

    let upstream = web::Data::new(upstream);
    HttpServer::new(move || {
        App::new()
            .app_data(web::PayloadConfig::new(PAYLOAD_LIMIT))
            .app_data(upstream.clone())
            .service(api_proxy::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
