mod args;
#[cfg(feature = "tui")]
mod panel;
#[cfg(feature = "tui")]
mod tui;

use args::Args;
use env_logger::Env;
use ledlife_lib::{Config, Never, RenderSink, TextRenderer};
use std::{
    error::Error,
    fs::File,
    io::{self, BufWriter},
    process,
};

/// Prints every generation to stdout, and to the transcript if any.
fn run_without_tui(config: Config, transcript: Option<File>) -> Result<(), Box<dyn Error>> {
    let mut simulation = config.simulation()?;
    let mut sinks: Vec<Box<dyn RenderSink>> = vec![Box::new(TextRenderer::new(io::stdout()))];
    if let Some(file) = transcript {
        sinks.push(Box::new(TextRenderer::new(BufWriter::new(file))));
    }
    simulation.run(&mut sinks, &mut Never, &mut Never)?;
    Ok(())
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let transcript = args.transcript.as_ref().map(File::create).transpose()?;

    #[cfg(feature = "tui")]
    {
        if !args.no_tui {
            return tui::run_with_tui(args.config, transcript);
        }
    }

    run_without_tui(args.config, transcript)
}

fn main() {
    let args = Args::parse().unwrap_or_else(|e| e.exit());

    // Logs would scribble over the TUI unless asked for.
    #[cfg(feature = "tui")]
    let default_filter = if args.no_tui { "info" } else { "off" };
    #[cfg(not(feature = "tui"))]
    let default_filter = "info";
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    if let Err(e) = run(args) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
