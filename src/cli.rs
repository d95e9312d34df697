//! Command line arguments

use crate::config::Config;
use crate::entities::TaskFilter;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "todolist", version, about = "A terminal task list")]
pub struct Cli {
    /// Write a default configuration file and exit (defaults to the XDG config path)
    #[arg(long, value_name = "PATH")]
    pub generate_config: Option<Option<PathBuf>>,

    /// Filter shown at start-up: all, completed or incomplete
    #[arg(long, value_name = "FILTER")]
    pub filter: Option<TaskFilter>,
}

impl Cli {
    /// Apply command line overrides on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(filter) = self.filter {
            config.ui.default_filter = filter;
        }
    }
}
