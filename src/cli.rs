// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "starfield")]
#[command(about = "Animated particle background", long_about = None)]
pub struct Cli {
    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// JSON config file overriding the default field parameters
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the number of particles in the field
    #[arg(long)]
    pub particles: Option<usize>,
}
