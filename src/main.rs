use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::errors::ServerError;
use crate::router::handle;
use crate::state::AppState;
use astra::Server;
use log::{error, info};

mod api;
mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod state;
mod templates;


fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 1️⃣ Configuration from env / .env
    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Backend client + saved mirror
    let api = match ApiClient::new(&cfg) {
        Ok(api) => api,
        Err(e) => {
            error!("❌ Could not build backend client: {e}");
            std::process::exit(1);
        }
    };
    let app = AppState::new(Box::new(api));
    app.load_saved();

    // 3️⃣ Start the server
    info!(
        "Starting server at http://{} (backend {})",
        cfg.bind_addr, cfg.api_base
    );

    let server = Server::bind(&cfg.bind_addr).max_workers(cfg.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => {
            if matches!(err, ServerError::Upstream(_) | ServerError::InternalError) {
                error!("request failed: {err}");
            }
            templates::html_error_response(err)
        }
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
