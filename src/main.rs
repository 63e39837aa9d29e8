use clap::Parser;
use csv::{ReaderBuilder, Trim};
use daxie::{
    batch::{Converter, Request},
    config::{Cli, Settings},
};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() {
    // Logs go to stderr, stdout carries the output CSV.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let settings = Settings::from(Cli::parse());
    tracing::info!(input = %settings.input.display(), "Starting batch conversion");

    let (sender, receiver) = mpsc::channel(settings.channel_size);
    let mut converter = Converter::new(receiver, &settings);

    let handle = tokio::spawn(async move {
        converter.run().await;
        converter
    });

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_path(&settings.input)
        .expect("Failed to read CSV file");

    for record in reader.deserialize::<Request>() {
        match record {
            Ok(request) => {
                if let Err(err) = sender.send(request).await {
                    tracing::error!("Error sending request: {err}");
                }
            }
            Err(err) => tracing::warn!("Skipping malformed record: {err}"),
        }
    }

    drop(sender); // Close the sender to signal no more requests will be sent
    let converter = handle
        .await
        .expect("Failed to join the converter task");

    let mut writer = csv::Writer::from_writer(std::io::stdout());
    for conversion in converter.get_all_conversions().values() {
        if let Err(err) = writer.serialize(conversion) {
            tracing::error!("Error writing conversion: {err}");
        }
    }
    if let Err(err) = writer.flush() {
        tracing::error!("Error flushing output: {err}");
    }
}
