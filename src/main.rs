#![deny(clippy::implicit_return)]
#![allow(clippy::needless_return)]

mod application;
mod configuration;
mod domain;
mod infrastructure;

use std::env;
use std::process;

use anyhow::Error;
use domain::models::Credentials;
use domain::models::Event;
use domain::models::FormatOptions;
use domain::models::Schedule;
use domain::services::Poller;
use infrastructure::cloud::meater::MeaterCloud;
use owo_colors::OwoColorize;
use tokio::sync::mpsc;
use tokio::task;

use crate::application::cli;
use crate::application::widget;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::services::Translations;

fn handle_error(err: Error) {
    eprintln!(
        "{}",
        format!(
            "Grillboard has failed with the following app version and error.\n\nVersion: {}\nCommit: {}\nError: {}",
            env!("CARGO_PKG_VERSION"),
            env!("VERGEN_GIT_DESCRIBE"),
            err
        )
        .red()
    );

    let backtrace = err.backtrace();
    if backtrace.to_string() == "disabled backtrace" {
        let args = env::args().collect::<Vec<String>>().join(" ");
        eprintln!("\nRunning the following can help explain further what the issue is:");
        eprintln!("\nRUST_BACKTRACE=1 {args}");
    } else {
        eprintln!("\n{}", backtrace);
    }

    process::exit(1);
}

#[tokio::main]
async fn main() {
    let debug_log_dir = env::var("GRILLBOARD_LOG_DIR").unwrap_or_else(|_| {
        return dirs::cache_dir()
            .unwrap()
            .join("grillboard")
            .to_string_lossy()
            .to_string();
    });

    let file_appender = tracing_appender::rolling::never(debug_log_dir, "debug.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    if env::var("RUST_LOG")
        .unwrap_or_else(|_| return "".to_string())
        .contains("grillboard")
    {
        tracing_subscriber::fmt()
            .json()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(writer)
            .init();
    }

    let ready_res = cli::parse().await;
    if let Err(ready_err) = ready_res {
        handle_error(ready_err);
        return;
    }
    if !ready_res.unwrap() {
        process::exit(0);
    }

    let credentials = Credentials::from_config();
    if !credentials.is_configured() {
        if let Err(notice_err) = widget::write_credentials_notice().await {
            tracing::error!(error = ?notice_err, "could not write the credentials notice");
        }
        eprintln!(
            "{}",
            "Email and password for the MEATER Cloud are not configured. Set them in the config file, with --email and --password, or through GRILLBOARD_EMAIL and GRILLBOARD_PASSWORD."
                .red()
        );
        process::exit(1);
    }

    let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();

    let mut background_futures = task::JoinSet::new();
    background_futures.spawn(async move {
        let translations = Translations::load(&Config::get(ConfigKey::Language))?;
        let mut poller = Poller::new(
            MeaterCloud::default(),
            credentials,
            Schedule::from_config()?,
            FormatOptions::from_config(&translations.get("CALCULATING")),
            event_tx,
        );
        return poller.run().await;
    });

    let widget_future = widget::start(event_rx);

    let res = tokio::select!(
        res = background_futures.join_next() => res.unwrap().unwrap(),
        res = widget_future => res,
    );

    if res.is_err() {
        handle_error(res.unwrap_err());
    }

    process::exit(0);
}
