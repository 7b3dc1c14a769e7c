use crate::{
    configuration::{Configuration, Mode},
    configuration_handler::ConfigurationHandler,
    http::create_app,
    local_bookings::LocalBookings,
    shell::Shell,
    types::BookingRules,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod backend;
mod configuration;
mod configuration_handler;
mod error;
mod http;
mod local_bookings;
mod shell;
#[cfg(test)]
mod testutils;
mod time_range;
mod types;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    println!("################");
    println!("# Room Booking #");
    println!("################");

    let configuration = ConfigurationHandler::parse_arguments();
    let rules = BookingRules::from_configuration(&configuration);
    info!(?rules, mode = ?configuration.mode(), "Configuration loaded");

    let backend = LocalBookings::new(rules.clone());

    match configuration.mode() {
        Mode::Console => {
            let result = tokio::task::spawn_blocking(move || {
                let stdin = std::io::stdin();
                let stdout = std::io::stdout();
                Shell::new(backend, rules.allowed_sections, stdin.lock(), stdout.lock()).run()
            })
            .await;

            match result {
                Ok(Ok(())) => {}
                Ok(Err(err)) => error!(?err, "Console session failed"),
                Err(err) => error!(?err, "Console task failed"),
            }
        }
        Mode::Http => {
            let address = format!("0.0.0.0:{}", configuration.port());
            println!("Accessible at:\n{address}");

            let listener = match tokio::net::TcpListener::bind(&address).await {
                Ok(listener) => listener,
                Err(err) => {
                    error!(?err, "Failed to bind {address}");
                    return;
                }
            };

            if let Err(err) = axum::serve(listener, create_app(backend)).await {
                error!(?err, "Server stopped");
            }
        }
    }
}
