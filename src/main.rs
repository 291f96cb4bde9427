mod app;
mod config;
mod error;
mod events;
mod hn;
mod logger;
mod state;
mod storage;
mod stories;
mod ui;

use anyhow::{anyhow, Result};
use app::App;
use clap::{App as ClapApp, Arg};
use config::Config;
use log::LevelFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = ClapApp::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Sets a custom configuration directory")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("query")
                .short("q")
                .long("query")
                .value_name("TERM")
                .help("Searches for the given term instead of the last one")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Sets the log level shown in the log panel")
                .possible_values(&["off", "error", "warn", "info", "debug", "trace"])
                .default_value("info")
                .takes_value(true),
        )
        .get_matches();

    let log_level: LevelFilter = matches
        .value_of("log-level")
        .unwrap_or("info")
        .parse()
        .map_err(|_| anyhow!("Invalid log level"))?;

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;

    App::start(
        config,
        matches.value_of("query").map(str::to_owned),
        log_level,
    )
    .await
}
