use std::path::PathBuf;

use anyhow::Context;
use blendcost_core::config::{CliOverrides, PricingConfig};
use blendcost_core::PricingInput;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "blendcost")]
#[command(version, about = "Blended motion graphics / CGI-VFX video pricing")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Price a video of the given duration and complexity
    Quote(QuoteArgs),
    /// Print the effective configuration as TOML
    Config(ConfigArgs),
}

/// Where configuration comes from, shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Explicit config file (replaces <root>/blendcost.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Project root searched for blendcost.toml
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Override the baseline minimum price per minute
    #[arg(long, value_name = "PRICE")]
    pub base_min: Option<f64>,

    /// Override the baseline mean price per minute
    #[arg(long, value_name = "PRICE")]
    pub base_mean: Option<f64>,

    /// Override the baseline maximum price per minute
    #[arg(long, value_name = "PRICE")]
    pub base_max: Option<f64>,

    /// Override the CGI/VFX share at full complexity
    #[arg(long, value_name = "SHARE")]
    pub cgfx_share: Option<f64>,

    /// Override the number of distribution samples
    #[arg(long, value_name = "N")]
    pub samples: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct QuoteArgs {
    /// Video duration in minutes (values below 1 are priced as 1)
    #[arg(short, long)]
    pub minutes: u32,

    /// Complexity factor between 0.0 and 1.0 (clamped)
    #[arg(short, long, allow_negative_numbers = true)]
    pub complexity: f64,

    /// Print the full result as JSON instead of a summary
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub config: ConfigArgs,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl ConfigArgs {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            base_min: self.base_min,
            base_mean: self.base_mean,
            base_max: self.base_max,
            base_cgfx_share: self.cgfx_share,
            sample_count: self.samples,
        }
    }

    /// Resolve the layered configuration for this invocation.
    pub fn resolve(&self) -> anyhow::Result<PricingConfig> {
        let overrides = self.overrides();
        let config = match &self.config {
            Some(path) => PricingConfig::load_from_file(path, Some(&overrides))
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => PricingConfig::load(&self.root, Some(&overrides))
                .with_context(|| format!("loading config under {}", self.root.display()))?,
        };
        Ok(config)
    }
}

impl QuoteArgs {
    pub fn input(&self) -> PricingInput {
        PricingInput::new(self.minutes, self.complexity)
    }
}
