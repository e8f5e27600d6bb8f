use crate::{Args, report::PuzzleReport};
use color_eyre::eyre::{Result, bail};
use log::info;
use std::{io::Write, path::PathBuf, time::Instant};
use tinsel_core::Puzzle;
use tinsel_external::{
    Config, InputSource, load_config, load_config_from, read_all_text, save_config,
    save_config_to,
};

pub struct App {
    /// Puzzles to solve, in the order they are reported.
    pub puzzles: Vec<Puzzle>,
    /// Where each puzzle's input is read from.
    pub source: InputSource,
    /// Print a JSON array instead of sentences.
    pub json: bool,
    /// Filter handed to the logger when `RUST_LOG` is unset.
    pub log_filter: String,
    /// The config with command-line overrides applied.
    pub config: Config,
    /// Explicit config file, `~/.tinsel/config.json` when `None`.
    pub config_path: Option<PathBuf>,
    /// Write `config` back to its file before solving.
    pub save_config: bool,
}

impl App {
    /// Construct a new instance of [`App`] from a config and command-line overrides.
    pub fn new(args: Args, config: Config) -> Result<Self> {
        let puzzles = if args.days.is_empty() {
            Puzzle::ALL.to_vec()
        } else {
            args.days
        };

        let source = match (args.input, args.input_dir) {
            (Some(_), Some(_)) => bail!("--input and --input-dir cannot be used together"),
            (Some(file), None) => {
                if puzzles.len() != 1 {
                    bail!("--input needs exactly one day, got {}", puzzles.len());
                }
                InputSource::File(file)
            }
            (None, Some(dir)) => InputSource::Directory(dir),
            (None, None) => InputSource::Directory(config.input_dir.clone()),
        };

        let log_filter = if args.verbose {
            "debug".to_string()
        } else {
            config.log_level.clone()
        };

        // a single input file is not a setting worth keeping
        let config = Config {
            input_dir: match &source {
                InputSource::Directory(dir) => dir.clone(),
                InputSource::File(_) => config.input_dir,
            },
            json: args.json || config.json,
            ..config
        };

        Ok(Self {
            puzzles,
            source,
            json: config.json,
            log_filter,
            config,
            config_path: args.config,
            save_config: args.save_config,
        })
    }

    /// Load the config named by the arguments (or the default one) and build the app.
    pub fn from_args(args: Args) -> Result<Self> {
        let config = match &args.config {
            Some(path) => load_config_from(path)?,
            None => load_config(),
        };
        Self::new(args, config)
    }

    /// Solve every selected puzzle.
    ///
    /// Missing inputs are not fatal: the puzzle is solved on empty input.
    pub fn solve_all(&self) -> Vec<PuzzleReport> {
        self.puzzles
            .iter()
            .map(|&puzzle| {
                let path = self.source.path_for(puzzle);
                let input = read_all_text(&path);

                let started = Instant::now();
                let answers = puzzle.solve(&input);
                info!("{} solved in {:?}", puzzle, started.elapsed());

                PuzzleReport::new(puzzle, answers)
            })
            .collect()
    }

    /// Solve and write the answers to `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.save_config {
            let path = match &self.config_path {
                Some(path) => {
                    save_config_to(&self.config, path)?;
                    path.clone()
                }
                None => save_config(&self.config)?,
            };
            info!("saved config to {}", path.display());
        }

        let reports = self.solve_all();

        if self.json {
            serde_json::to_writer_pretty(&mut *out, &reports)?;
            writeln!(out)?;
        } else {
            for (i, report) in reports.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                writeln!(out, "{}", report)?;
            }
        }

        Ok(())
    }
}

/// Initialise `env_logger`. `RUST_LOG` takes precedence over `filter`.
pub fn init_logging(filter: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format_timestamp(None)
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_defaults_solve_every_day_from_config_dir() {
        let app = App::new(Args::default(), Config::default()).unwrap();
        assert_eq!(app.puzzles, Puzzle::ALL.to_vec());
        assert_eq!(app.source, InputSource::Directory(PathBuf::from("inputs")));
        assert!(!app.json);
        assert_eq!(app.log_filter, "warn");
    }

    #[test]
    fn test_input_file_needs_single_day() {
        let args = Args {
            input: Some(PathBuf::from("grid.txt")),
            ..Default::default()
        };
        assert!(App::new(args, Config::default()).is_err());

        let args = Args {
            days: vec![Puzzle::PrintingDepartment],
            input: Some(PathBuf::from("grid.txt")),
            ..Default::default()
        };
        let app = App::new(args, Config::default()).unwrap();
        assert_eq!(app.source, InputSource::File(PathBuf::from("grid.txt")));
    }

    #[test]
    fn test_flags_override_config() {
        let config = Config {
            input_dir: PathBuf::from("from-config"),
            log_level: "error".to_string(),
            json: false,
        };
        let args = Args {
            input_dir: Some(PathBuf::from("from-args")),
            json: true,
            verbose: true,
            ..Default::default()
        };

        let app = App::new(args, config).unwrap();
        assert_eq!(app.source, InputSource::Directory(PathBuf::from("from-args")));
        assert!(app.json);
        assert_eq!(app.log_filter, "debug");
        assert_eq!(app.config.input_dir, PathBuf::from("from-args"));
        assert_eq!(app.config.log_level, "error");
        assert!(app.config.json);
    }

    #[test]
    fn test_input_file_keeps_configured_dir() {
        let args = Args {
            days: vec![Puzzle::Lobby],
            input: Some(PathBuf::from("batteries.txt")),
            ..Default::default()
        };
        let app = App::new(args, Config::default()).unwrap();
        assert_eq!(app.config, Config::default());
        assert!(!app.save_config);
    }
}
