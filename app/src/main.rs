use settings::Settings;

use crate::adapter::monitor::RealtimeMonitor;
use crate::snapshot::SnapshotRepository;

mod adapter;
mod calc;
mod core;
mod settings;
mod snapshot;

#[tokio::main(flavor = "multi_thread")]
pub async fn main() {
    let settings = Settings::new().expect("Error reading configuration");

    settings.monitoring.init().expect("Error initializing monitoring");

    let db_pool = settings.database.new_pool().await.expect("Error initializing database");

    let repository = SnapshotRepository::new(db_pool, settings.device.id.clone());

    let monitor = RealtimeMonitor::new(repository.clone(), &settings.monitor);

    let http_server_exec = {
        let repository = repository.clone();
        let http_server = settings.http_server.clone();

        async move {
            http_server
                .run_server(move || vec![adapter::api::new_routes(repository.clone())])
                .await
                .expect("HTTP server execution failed");
        }
    };

    tracing::info!("Starting main loop");

    tokio::select!(
        _ = http_server_exec => {},
        _ = monitor.run() => {},
    );
}
