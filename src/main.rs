use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use tracing::debug;

use upcase_file::cli::Cli;
use upcase_file::{logging, Session};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let session = match cli.directory {
        Some(dir) => Session::with_base_dir(dir),
        None => Session::new(),
    };

    let stdout = io::stdout();
    let mut console = stdout.lock();
    let outcome = match cli.file {
        Some(name) => session.process(&name, &mut console),
        None => session.run(&mut io::stdin().lock(), &mut console),
    }
    .context("failed to write to stdout")?;
    console.flush().context("failed to flush stdout")?;

    debug!(?outcome, "run finished");
    Ok(())
}
