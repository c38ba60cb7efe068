use anyhow::Result;
use std::{env, fs, io::ErrorKind, path::Path};

const DEFAULT_CONFIG_FILE_NAME: &str = "foodmap.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
}

pub struct WebServer {
    pub port: Option<u16>,
}

impl Config {
    pub fn try_load_from_file_or_default(file_path: Option<&Path>) -> Result<Self> {
        let file_path = file_path.unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration."
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::from(raw_config);
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        Ok(cfg)
    }
}

impl From<raw::Config> for Config {
    fn from(from: raw::Config) -> Self {
        let raw::Config { db, webserver } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();

        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::WebServer { port } = webserver.unwrap_or_default();

        let webserver = WebServer { port };

        Self { db, webserver }
    }
}

mod raw {
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct Config {
        pub db: Option<Db>,
        pub webserver: Option<WebServer>,
    }

    #[derive(Debug, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct Db {
        #[serde(default = "default_connection_sqlite")]
        pub connection_sqlite: String,
        #[serde(default = "default_connection_pool_size")]
        pub connection_pool_size: u8,
    }

    impl Default for Db {
        fn default() -> Self {
            Self {
                connection_sqlite: default_connection_sqlite(),
                connection_pool_size: default_connection_pool_size(),
            }
        }
    }

    fn default_connection_sqlite() -> String {
        "foodmap.sqlite".to_string()
    }

    const fn default_connection_pool_size() -> u8 {
        8
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct WebServer {
        pub port: Option<u16>,
    }
}
