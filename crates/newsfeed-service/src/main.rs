use newsfeed_service::{
    DefaultAppState,
    clock::SystemClock,
    config::Config,
    routes::create_router,
    shutdown::{GracefulShutdownLayer, ShutdownState},
    source::JsonFileSource,
};
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::filter::Directive;

#[tokio::main]
async fn main() {
    let default_directive: Directive = match "newsfeed_service=debug".parse() {
        Ok(directive) => directive,
        Err(err) => {
            eprintln!("invalid log directive: {err}");
            std::process::exit(1);
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_directive),
        )
        .init();

    let config = Config::from_env().unwrap_or_else(|err| {
        error!(error = %err, "Invalid configuration");
        std::process::exit(1);
    });

    info!(
        news_path = %config.news_path.display(),
        comments_path = %config.comments_path.display(),
        "Serving news from JSON files"
    );

    let source = JsonFileSource::new(&config.news_path, &config.comments_path);
    let app_state = DefaultAppState::new(source, SystemClock);
    let shutdown_state = ShutdownState::new();

    let app = create_router()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(GracefulShutdownLayer::new(shutdown_state.clone()))
                .layer(TimeoutLayer::new(config.request_timeout)),
        )
        .with_state(app_state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .unwrap_or_else(|err| {
            error!(bind_address = %config.bind_addr, error = %err, "Failed to bind to address");
            std::process::exit(1);
        });

    info!(bind_address = %config.bind_addr, "Server running");

    let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal(shutdown_state));

    if let Err(err) = server.await {
        error!(error = %err, "Server error");
        std::process::exit(1);
    }
}

async fn shutdown_signal(shutdown_state: ShutdownState) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!(error = %err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!(
        in_flight = shutdown_state.in_flight_count(),
        "Shutdown signal received, starting graceful shutdown"
    );
    shutdown_state.start_shutdown();

    shutdown_state.drained().await;
    info!("Graceful shutdown completed - all requests finished");
}
