//! CLI Adapter.

mod logging;
mod preset;

use clap::{Parser, Subcommand};

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "kool")]
#[command(version)]
#[command(about = "Bootstrap project configuration from bundled presets", long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by KOOL_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize kool preset in the current working directory. If no preset argument is
    /// specified you will be prompted to pick among the existing options.
    Preset {
        /// Preset to apply (skips interactive selection)
        preset: Option<String>,
        /// Force replace local existing files with the preset files
        #[arg(long = "override")]
        override_existing: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Preset { preset, override_existing } => {
            preset::run_preset(preset.as_deref(), override_existing)
        }
    };

    if let Err(e) = result {
        let code = exit_code(&e);
        report(&e);
        std::process::exit(code);
    }
}

/// Process exit code for a failed command.
pub fn exit_code(error: &AppError) -> i32 {
    match error {
        AppError::PromptInterrupted => 0,
        AppError::ConflictExists(_) => 2,
        _ => 1,
    }
}

fn report(error: &AppError) {
    match error {
        AppError::ConflictExists(files) => {
            for file in files {
                println!("⚠️  Preset file {} already exists.", file);
            }
            println!(
                "⚠️  Some preset files already exist. In case you wanna override them, use --override."
            );
        }
        AppError::PromptInterrupted => println!("⚠️  Operation Cancelled"),
        other => eprintln!("Error: {}", other),
    }
}
