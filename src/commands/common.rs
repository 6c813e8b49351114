//! Resources shared by every command.

use std::path::PathBuf;

use crate::{
    core::OutputWriter,
    espn::client::{ClientConfig, EspnClient},
    Result, Season,
};

/// Context containing the client, output sink, and season a command runs with
pub struct CommandContext {
    pub client: EspnClient,
    pub writer: OutputWriter,
    pub season: Season,
}

impl CommandContext {
    /// Context talking to the real ESPN endpoints with default pacing.
    pub fn new(season: Season, output_dir: PathBuf) -> Result<Self> {
        Self::with_client_config(season, output_dir, ClientConfig::default())
    }

    pub fn with_client_config(
        season: Season,
        output_dir: PathBuf,
        config: ClientConfig,
    ) -> Result<Self> {
        Ok(Self {
            client: EspnClient::new(config)?,
            writer: OutputWriter::new(output_dir),
            season,
        })
    }
}
