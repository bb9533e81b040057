//! Command-line interface for packmerge

use std::path::PathBuf;

use clap::Parser;

use crate::config::{MergeConfig, DEFAULT_PACK_LIST};

/// Packmerge - content-aware resource pack merger
#[derive(Parser, Debug)]
#[command(name = "packmerge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the input packs and pack list
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Pack list file (one pack name per line), relative to the root
    #[arg(short, long, default_value = DEFAULT_PACK_LIST)]
    pub input: PathBuf,

    /// Output pack directory, relative to the root
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// pack_format version written to pack.mcmeta
    #[arg(long)]
    pub pack_format: Option<u32>,

    /// Plain-text description written to pack.mcmeta
    #[arg(long)]
    pub description: Option<String>,

    /// Skip the "press Enter to exit" pause
    #[arg(short, long)]
    pub yes: bool,

    /// Show per-file merge decisions
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve flags into the immutable run configuration
    pub fn into_config(self) -> MergeConfig {
        let mut config = MergeConfig::new(self.root.clone());
        config.pack_list = self.root.join(&self.input);
        if let Some(output) = self.output {
            config.output = self.root.join(output);
        }
        if let Some(pack_format) = self.pack_format {
            config.pack_format = pack_format;
        }
        if let Some(description) = self.description {
            config.description = description.into();
        }
        config
    }
}
