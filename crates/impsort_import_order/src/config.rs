use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "impsort")]
#[command(about = "Check that import statements are alphabetically sorted")]
pub struct Config {
    /// Source files to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}
