use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

const EXAMPLES: &str = "\
Examples:
  bulkfind -f values.txt -d /srv/shared
  bulkfind -f hosts.txt -d ./repos -i -o report.tsv

The report is a semicolon-delimited file with the header
Valor;Fichero;Ruta;Ocurrencias (Valor;Ruta with --simple).";

#[derive(Parser, Debug)]
#[command(
    name = "bulkfind",
    version,
    about = "Search a directory tree for many literal values at once",
    long_about = "bulkfind reads a list of literal values (one per line) and reports every file under a directory that contains them, with per-file occurrence counts.",
    after_help = EXAMPLES,
    arg_required_else_help = true
)]
pub struct Cli {
    /// File with the values to search for, one per line
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: PathBuf,

    /// Root directory to search
    #[arg(short = 'd', long = "directory", value_name = "DIR")]
    pub directory: PathBuf,

    /// Include values with no matches as "N/A" rows
    #[arg(short = 'i', long)]
    pub include_missing: bool,

    /// Report path (default: resultados.tsv in the working directory)
    #[arg(short, long, value_name = "PATH", conflicts_with = "timestamped")]
    pub output: Option<PathBuf>,

    /// Write the report to resultados/resultados_<timestamp>.tsv next to the executable
    #[arg(long)]
    pub timestamped: bool,

    /// Two-column report (Valor;Ruta)
    #[arg(long)]
    pub simple: bool,

    /// Worker threads (0 = one per CPU, 1 = sequential)
    #[arg(short = 'j', long, value_name = "N")]
    pub threads: Option<usize>,

    /// Follow symbolic links to directories
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Maximum directory depth below the root
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Config file (default: .bulkfind.yaml in the working directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Summary format
    #[arg(long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,

    /// CI mode: no animated status line
    #[arg(long)]
    pub ci: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
