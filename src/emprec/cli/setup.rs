use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "emprec", bin_name = "emprec", version)]
#[command(about = "Interactive employee record manager", long_about = None)]
pub struct Cli {
    /// JSON file holding the employee records [default: employees.json]
    #[arg(short = 'f', long, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Configuration file [default: ./emprec.json when present]
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// More log output on stderr (repeat for trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}
