use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod clean;
mod cli;
mod clock;
mod config;
mod error;
mod ext;
mod filter;
mod model;
mod pipeline;
mod processor;
mod render;
mod report;
mod session;
mod sources;
mod table;
mod util;

use crate::cli::{Cli, normalize};

fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
  // stderr keeps stdout machine-readable
  let _ = fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  if cli.gen_man {
    let page = util::render_man_page::<Cli>()?;
    print!("{}", page);
    return Ok(());
  }

  init_tracing();

  // Phase 1: normalize CLI
  let cfg = normalize(cli)?;

  // Phase 2: load, filter, print, export
  crate::processor::run(&cfg)
}
