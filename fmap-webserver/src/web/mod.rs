use rocket::{config::Config as RocketCfg, Rocket, Route};

mod error;
mod frontend;
mod guards;
mod sqlite;

#[cfg(test)]
pub mod tests;

#[derive(Debug, Clone, Default)]
pub struct Cfg {
    /// Port override for the embedded Rocket instance.
    pub port: Option<u16>,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
) -> Rocket<rocket::Build> {
    let InstanceOptions { mounts, rocket_cfg } = options;

    info!("Initialization finished");

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r.manage(db);

    for (m, routes) in mounts {
        instance = instance.mount(m, routes);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/", frontend::routes())]
}

pub async fn run(db: sqlite::Connections, cfg: Cfg) {
    let rocket_cfg = cfg.port.map(|port| RocketCfg {
        port,
        ..RocketCfg::default()
    });
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg,
    };
    let instance = rocket_instance(options, db);
    if let Err(err) = instance.launch().await {
        log::error!("Unable to run web server: {err}");
    }
}
