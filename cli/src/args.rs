use clap::Parser;
use std::path::PathBuf;
use tinsel_core::Puzzle;

/// Solve the daily puzzles and print both answers for each.
#[derive(Parser, Debug, Clone, Default)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Days to solve (1-5). Solves every day when omitted.
    #[arg(value_parser = parse_puzzle)]
    pub days: Vec<Puzzle>,

    /// Input file to use. Only valid when solving a single day.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Directory holding `day<N>.txt` inputs. Overrides the config file.
    #[arg(short = 'd', long)]
    pub input_dir: Option<PathBuf>,

    /// Print answers as JSON.
    #[arg(long)]
    pub json: bool,

    /// Config file to use instead of `~/.tinsel/config.json`.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log solver progress. Ignored when `RUST_LOG` is set.
    #[arg(short, long)]
    pub verbose: bool,

    /// Write the input directory and output format back to the config file.
    #[arg(long)]
    pub save_config: bool,
}

fn parse_puzzle(s: &str) -> Result<Puzzle, String> {
    s.parse().map_err(|e: tinsel_core::PuzzleError| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_days_and_flags() {
        let args =
            Args::try_parse_from(["tinsel", "4", "day1", "--json", "-i", "grid.txt"]).unwrap();
        assert_eq!(args.days, vec![Puzzle::PrintingDepartment, Puzzle::SecretEntrance]);
        assert!(args.json);
        assert_eq!(args.input, Some(PathBuf::from("grid.txt")));
        assert!(!args.verbose);
        assert!(!args.save_config);
    }

    #[test]
    fn test_save_config_flag() {
        let args = Args::try_parse_from(["tinsel", "-d", "puzzles", "--save-config"]).unwrap();
        assert!(args.save_config);
        assert_eq!(args.input_dir, Some(PathBuf::from("puzzles")));
    }

    #[test]
    fn test_unknown_day_is_rejected() {
        assert!(Args::try_parse_from(["tinsel", "26"]).is_err());
    }
}
