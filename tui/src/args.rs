//! Parsing command-line arguments.

use clap::{
    crate_authors, crate_description, crate_name, crate_version,
    error::{ErrorKind, Result as ClapResult},
    value_parser, Arg, ArgAction, ArgMatches, Command, Error,
};
use ledlife_lib::{Config, Placement};
use std::{ffi::OsStr, fs, path::Path, path::PathBuf};

/// A struct to store the parse results.
pub(crate) struct Args {
    pub(crate) config: Config,
    pub(crate) transcript: Option<PathBuf>,
    #[cfg(feature = "tui")]
    pub(crate) no_tui: bool,
}

fn command() -> Command {
    let app = Command::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .long_about(
            "Conway's Game of Life on a fixed-size grid\n\
             \n\
             The grid is seeded with named patterns, evolved until it becomes \n\
             stable, oscillates with period 2, or reaches the maximal number of \n\
             generations, and then seeded again, forever.\n\
             \n\
             Seed patterns:\n\
             * `random` sets every cell by a coin flip;\n\
             * `carousel` picks one of random, frogger, clapper, nova, blinkers, \
             bullseye and glider;\n\
             * `frogger`, `clapper`, `blinkers`, `nova`, `bullseye`, `glider` \
             and `void` are 8x8 patterns, placed in a random orientation.\n\
             Unknown names are ignored.\n",
        )
        .arg(
            Arg::new("X")
                .help("Width of the grid [default: 16]")
                .index(1)
                .value_parser(value_parser!(i64).range(1..)),
        )
        .arg(
            Arg::new("Y")
                .help("Height of the grid [default: 8]")
                .index(2)
                .value_parser(value_parser!(i64).range(1..)),
        )
        .arg(
            Arg::new("CONFIG")
                .help("Reads the configuration from a file")
                .long_help(
                    "Reads the configuration from a file\n\
                     TOML, JSON (.json) and YAML (.yaml, .yml) files are supported. \
                     Options given on the command line override the file.\n",
                )
                .short('c')
                .long("config")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("SEED")
                .help("Seed pattern; may be given more than once [default: random]")
                .long_help(
                    "Seed pattern\n\
                     May be given more than once. Patterns are applied in order, \
                     later ones overwriting earlier ones where they overlap.\n",
                )
                .short('s')
                .long("seed")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("PLACEMENT")
                .help("Where 8x8 patterns are placed [default: centered]")
                .short('p')
                .long("placement")
                .value_parser(["origin", "centered"]),
        )
        .arg(
            Arg::new("DELAY")
                .help("Seconds between generations [default: 0.1]")
                .short('d')
                .long("delay")
                .value_parser(value_parser!(f64)),
        )
        .arg(
            Arg::new("MAX")
                .help("Maximal number of generations in one run [default: 50]")
                .short('m')
                .long("max")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("PAUSE")
                .help("Seconds between runs [default: 1]")
                .long("pause")
                .value_parser(value_parser!(f64)),
        )
        .arg(
            Arg::new("THRESHOLD")
                .help("Repeats of a 2-cycle before a run counts as oscillating [default: 10]")
                .short('t')
                .long("threshold")
                .value_parser(value_parser!(u32).range(1..)),
        )
        .arg(
            Arg::new("RUNS")
                .help("Stops after this many runs")
                .long_help(
                    "Stops after this many runs\n\
                     Without this option, it runs until it is quit.\n",
                )
                .short('r')
                .long("runs")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("ROTATE")
                .help("Transposes every 8x8 block of the LED panel")
                .long("rotate")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("BRIGHTNESS")
                .help("Brightness of the LED panel, from 0 to 15 [default: 0]")
                .short('b')
                .long("brightness")
                .value_parser(value_parser!(u8).range(0..=15)),
        )
        .arg(
            Arg::new("TRANSCRIPT")
                .help("Also writes every generation as text to a file")
                .long("transcript")
                .value_parser(value_parser!(PathBuf)),
        );

    #[cfg(feature = "tui")]
    let app = app.arg(
        Arg::new("NOTUI")
            .help("Prints the generations as text, without entering the TUI")
            .short('n')
            .long("no-tui")
            .action(ArgAction::SetTrue),
    );

    app
}

/// Reads a configuration file, choosing the format by the extension.
fn read_config(path: &Path) -> ClapResult<Config> {
    let text = fs::read_to_string(path).map_err(|e| {
        Error::raw(
            ErrorKind::Io,
            format!("Unable to read {}: {}\n", path.display(), e),
        )
    })?;
    let config = match path.extension().and_then(OsStr::to_str) {
        Some("json") => serde_json::from_str(&text).map_err(|e| e.to_string()),
        Some("yaml") | Some("yml") => serde_yaml::from_str(&text).map_err(|e| e.to_string()),
        _ => toml::from_str(&text).map_err(|e| e.to_string()),
    };
    config.map_err(|e| {
        Error::raw(
            ErrorKind::InvalidValue,
            format!("Invalid configuration in {}: {}\n", path.display(), e),
        )
    })
}

/// Overrides the configuration with the options given on the command line.
fn apply_matches(mut config: Config, matches: &ArgMatches) -> Config {
    if let Some(&width) = matches.get_one::<i64>("X") {
        config.width = width as isize;
    }
    if let Some(&height) = matches.get_one::<i64>("Y") {
        config.height = height as isize;
    }
    if let Some(seed) = matches.get_many::<String>("SEED") {
        config = config.set_seed(seed);
    }
    if let Some(placement) = matches.get_one::<String>("PLACEMENT") {
        if let Ok(placement) = placement.parse::<Placement>() {
            config = config.set_placement(placement);
        }
    }
    if let Some(&delay) = matches.get_one::<f64>("DELAY") {
        config = config.set_generation_delay(delay);
    }
    if let Some(&max) = matches.get_one::<u64>("MAX") {
        config = config.set_max_generations(max);
    }
    if let Some(&pause) = matches.get_one::<f64>("PAUSE") {
        config = config.set_timeline_pause(pause);
    }
    if let Some(&threshold) = matches.get_one::<u32>("THRESHOLD") {
        config = config.set_oscillation_threshold(threshold);
    }
    if let Some(&runs) = matches.get_one::<u64>("RUNS") {
        config = config.set_max_runs(runs);
    }
    if matches.get_flag("ROTATE") {
        config = config.set_rotate_blocks(true);
    }
    if let Some(&brightness) = matches.get_one::<u8>("BRIGHTNESS") {
        config = config.set_brightness(brightness);
    }
    config
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> ClapResult<Self> {
        let matches = command().try_get_matches()?;

        let config = match matches.get_one::<PathBuf>("CONFIG") {
            Some(path) => read_config(path)?,
            None => Config::default(),
        };
        let config = apply_matches(config, &matches);

        config
            .validate()
            .map_err(|e| Error::raw(ErrorKind::InvalidValue, format!("{}\n", e)))?;

        Ok(Args {
            config,
            transcript: matches.get_one::<PathBuf>("TRANSCRIPT").cloned(),
            #[cfg(feature = "tui")]
            no_tui: matches.get_flag("NOTUI"),
        })
    }
}
