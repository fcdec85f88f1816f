use std::io;
use std::process::ExitCode;

use anyhow::Result;
use crossterm::tty::IsTty;

use folderstat::config::load_config_from_env_or_default;
use folderstat::{App, logging, read_root_path};

fn main() -> ExitCode {
    if let Err(e) = logging::init() {
        eprintln!("⚠️ Logger init failed: {e}");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config = load_config_from_env_or_default();

    let stdout = io::stdout();
    let color = stdout.is_tty();
    let mut out = stdout.lock();

    let root = read_root_path(&mut io::stdin().lock(), &mut out)?;

    App::new(config).with_color(color).run(&root, &mut out)?;

    Ok(())
}
