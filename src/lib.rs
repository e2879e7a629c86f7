pub mod adapters;
pub mod app;
pub mod config;
pub mod notify;
pub mod ports;
pub mod state;
pub mod triggers;
pub mod types;

use std::net::SocketAddr;

pub async fn serve(addr: SocketAddr, config: config::AppConfig) {
    let store = adapters::FirestoreRestStore::new(&config);
    let push = adapters::FcmHttpSender::new(&config);
    let triggers = triggers::TriggerRouter::new(store, push);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind address");
    axum::serve(listener, app::app(triggers)).await.expect("server error");
}
