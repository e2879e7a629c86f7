use clap::Parser;
use std::net::SocketAddr;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let addr = SocketAddr::from(([127, 0, 0, 1], cli.port));

    println!("listening on http://{addr}");

    let config = courier::config::AppConfig {
        gcp_project: cli.gcp_project,
        fcm_server_key: cli.fcm_server_key,
        firestore_token: cli.firestore_token,
        firestore_host: cli.firestore_host,
        fcm_endpoint: cli.fcm_endpoint,
    };
    courier::serve(addr, config).await;
}

#[derive(Parser, Debug)]
#[command(
    name = "courier",
    version,
    about = "Document-event push notification dispatcher"
)]
struct Cli {
    /// GCP project whose document store and push credentials are used.
    #[arg(long)]
    gcp_project: String,
    #[arg(long, env = "FCM_SERVER_KEY")]
    fcm_server_key: String,
    /// OAuth bearer token for document store reads; omit against an emulator.
    #[arg(long, env = "FIRESTORE_TOKEN")]
    firestore_token: Option<String>,
    /// Override the document store host, e.g. a local emulator.
    #[arg(long)]
    firestore_host: Option<String>,
    /// Override the push delivery endpoint.
    #[arg(long)]
    fcm_endpoint: Option<String>,
    #[arg(long, default_value_t = 3000)]
    port: u16,
}
