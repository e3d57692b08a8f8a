use std::sync::{Arc, Mutex};

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cardtill_server::config::Config;
use cardtill_server::scanner::{Rc522Scanner, UidSource};
use cardtill_server::state::AppState;
use cardtill_server::{app, db};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cardtill_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    let db = db::connect(&config.database_url).await?;
    db::migrate(&db).await?;

    // The reader is optional: the ledger stays useful on a bench
    // machine, with /scan answering 503.
    let scanner = if config.reader_enabled {
        match Rc522Scanner::open(&config) {
            Ok(reader) => Some(Arc::new(Mutex::new(Box::new(reader) as Box<dyn UidSource>))),
            Err(err) => {
                warn!("starting without a reader: {err:#}");
                None
            }
        }
    } else {
        None
    };

    let state = Arc::new(AppState {
        db,
        config,
        scanner,
    });

    let listener = tokio::net::TcpListener::bind(&state.config.bind_address).await?;
    info!("cardtill server listening on {}", state.config.bind_address);

    axum::serve(listener, app(state)).await?;

    Ok(())
}
