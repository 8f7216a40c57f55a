use anyhow::Result;
use dotenvy::dotenv;
use log::info;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

use remindme::{ChannelPublisher, Config, ReminderService};

/// Console front-end for the reminder core
///
/// Stands in for the real transport: stdin lines are commands from the
/// configured nick, replies are printed to stdout. All behavior lives in
/// the library.
#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting remindme bot console as {}...", config.nick);

    let (publisher, mut outbound) = ChannelPublisher::new(64);
    let service = ReminderService::new(config.policy(), Arc::new(publisher));

    // Drain replies to stdout
    tokio::spawn(async move {
        while let Some(msg) = outbound.recv().await {
            println!("{}", msg.response);
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        service.dispatch(&config.nick, &line).await;
    }

    info!(
        "Input closed; exiting with {} reminder(s) still pending",
        service.pending_reminders()
    );
    Ok(())
}
