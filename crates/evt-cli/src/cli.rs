use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "evtslim",
    about = "Slim simulation event files by dropping per-step fields",
    version,
)]
pub struct Cli {
    /// Event container to read
    pub input: PathBuf,

    /// Slimmed container to write (overwritten if it exists)
    pub output: PathBuf,

    /// Log pipeline detail to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn parse_input_and_output() {
        let cli = Cli::try_parse_from(["evtslim", "raw.evtc", "slim.evtc"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("raw.evtc"));
        assert_eq!(cli.output, PathBuf::from("slim.evtc"));
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["evtslim", "-v", "raw.evtc", "slim.evtc"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn missing_output_is_a_usage_error() {
        let err = Cli::try_parse_from(["evtslim", "raw.evtc"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn extra_positional_is_rejected() {
        let err = Cli::try_parse_from(["evtslim", "a", "b", "c"]).unwrap_err();
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn help_is_not_a_failure() {
        let err = Cli::try_parse_from(["evtslim", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn short_help_matches_long() {
        let err = Cli::try_parse_from(["evtslim", "-h"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert_eq!(err.exit_code(), 0);
    }
}
