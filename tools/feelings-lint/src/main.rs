use anyhow::Context;
use clap::Parser;
use feelings_lint::config::LinterConfig;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

/// Tone-of-voice checker for the site sources.
#[derive(Parser)]
#[command(name = "feelings-lint", version)]
struct Cli {
    /// Project directory holding app/, components/, lib/ and public/images/.
    /// Defaults to the current directory.
    #[arg(long)]
    root_dir: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => process::exit(code),
        Err(err) => {
            log::error!("unexpected failure: {err:#}");
            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    let config = match cli.root_dir {
        Some(dir) => LinterConfig::from_root(&dir),
        None => LinterConfig::from_cwd().context("cannot determine the current directory")?,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    feelings_lint::reporter::print_header(&mut out)?;
    let report = feelings_lint::run_scan(&config).context("cannot start the runtime")?;
    feelings_lint::reporter::print_report(&report, &mut out)?;
    out.flush()?;

    Ok(report.exit_code())
}
