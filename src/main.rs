use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

mod config;

use config::Config;

#[derive(Debug, Parser)]
#[command(
    name = "foodmap",
    version,
    about = "Restaurant discovery and visit tracking"
)]
struct Args {
    /// Path to the configuration file.
    #[arg(long, value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Set the port to listen on.
    #[arg(short, long, value_name = "PORT")]
    port: Option<u16>,

    /// URL to the database.
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let mut cfg = Config::try_load_from_file_or_default(args.config.as_deref())?;
    if let Some(db_url) = args.db_url {
        cfg.db.conn_sqlite = db_url;
    }
    if let Some(port) = args.port {
        cfg.webserver.port = Some(port);
    }

    log::info!("Opening database {}", cfg.db.conn_sqlite);
    let connections =
        fmap_db_sqlite::Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size.into())?;
    fmap_db_sqlite::run_embedded_database_migrations(connections.exclusive()?);

    let web_cfg = fmap_webserver::Cfg {
        port: cfg.webserver.port,
    };
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(fmap_webserver::run(connections, web_cfg));
    Ok(())
}
