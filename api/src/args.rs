use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "nutripick-api", about = "Supplement recommendation dashboard API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    /// National nutrition survey CSV. A missing or unreadable file is not
    /// fatal; statistics lookups then report insufficient data.
    #[arg(long, env = "NUTRIPICK_STATS_FILE", default_value = "data/supplements.csv")]
    pub stats_file: PathBuf,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "NUTRIPICK_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "NUTRIPICK_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long, env = "NUTRIPICK_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "NUTRIPICK_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}
