use anyhow::Result;
use clap::Parser;
use log::debug;

use chapter_transcribe::cli::Cli;
use chapter_transcribe::{OpenAiClient, ProviderConfig, transcribe_chapter_in};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = ProviderConfig::from_env();
    debug!("Using transcription endpoint at {}", config.base_url);
    let client = OpenAiClient::new(&config);

    transcribe_chapter_in(&client, &cli.audio_root, &cli.book, &cli.chapter).await?;

    Ok(())
}
