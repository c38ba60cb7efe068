#[macro_use]
extern crate log;

use fmap_db_sqlite::Connections;

mod web;

pub use web::Cfg;

pub async fn run(connections: Connections, cfg: Cfg) {
    web::run(connections.into(), cfg).await;
}
