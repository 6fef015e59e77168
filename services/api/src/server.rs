use crate::cli::ServeArgs;
use crate::infra::{AppState, FileStateStore, InMemoryStateStore};
use crate::routes::with_portal_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use dog_licensing::config::AppConfig;
use dog_licensing::error::AppError;
use dog_licensing::telemetry;
use dog_licensing::workflows::licensing::applications::{ApplicationLedger, FeeSchedule};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let fees = FeeSchedule::default();
    let app = match config.storage.state_file.clone() {
        Some(path) => {
            info!(path = %path.display(), "using file-backed application state");
            let store = Arc::new(FileStateStore::new(path));
            with_portal_routes(ApplicationLedger::new(store), fees)
        }
        None => {
            let store = Arc::new(InMemoryStateStore::default());
            with_portal_routes(ApplicationLedger::new(store), fees)
        }
    };
    let app = app.layer(Extension(app_state)).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "dog license portal ready");

    axum::serve(listener, app).await?;
    Ok(())
}
