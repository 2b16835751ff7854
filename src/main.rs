//! TaskDeck CLI entry point

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use taskdeck::App;

#[derive(Parser)]
#[command(version, about = "Interactive command-line task tracker")]
struct Cli {
    /// Directory holding the task data files
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    /// Print the stored tasks as JSON and exit without entering the menu
    #[arg(long)]
    export: bool,
}

fn main() -> Result<()> {
    // Initialize logger; default to warn so prompts stay clean
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    log::info!("TaskDeck v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Data directory: {}", cli.data_dir.display());

    let mut app = App::startup(&cli.data_dir)?;

    if cli.export {
        println!("{}", serde_json::to_string_pretty(&app.store)?);
        return Ok(());
    }

    taskdeck::ui::run(&mut app)?;
    app.shutdown()?;

    Ok(())
}
