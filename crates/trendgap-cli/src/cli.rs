use std::net::SocketAddr;

use clap::{Parser, Subcommand};

/// Time-of-week trend gap analysis
#[derive(Parser, Debug)]
#[command(name = "trendgap", version)]
#[command(about = "Report the largest timestamp gaps per time-of-week bucket")]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a CSV file with a Timestamp column
    Analyze(AnalyzeArgs),
    /// Serve the upload form over HTTP
    Serve(ServeArgs),
}

#[derive(clap::Args, Debug)]
pub struct AnalyzeArgs {
    /// CSV file to analyze
    pub input: String,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Largest accepted request body in bytes
    #[arg(long, default_value_t = 10 * 1024 * 1024)]
    pub max_upload_bytes: usize,
}
