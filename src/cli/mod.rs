pub mod convert;

use std::path::PathBuf;

use clap::Parser;

/// Quixel to World Creator 2 descriptor generator
#[derive(Parser, Debug)]
#[command(name = "q2wc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Base path to Quixel library
    #[arg(value_name = "BASEPATH")]
    pub basedir: PathBuf,

    /// Show debug messages
    #[arg(long, short)]
    pub debug: bool,

    /// Path to output logfile
    #[arg(long, short, value_name = "LOGPATH")]
    pub logfile: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_basedir_only() {
        let cli = Cli::try_parse_from(["q2wc", "/lib"]).unwrap();

        assert_eq!(cli.basedir, PathBuf::from("/lib"));
        assert!(!cli.debug);
        assert!(cli.logfile.is_none());
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from(["q2wc", "-d", "-l", "run.log", "/lib"]).unwrap();
        assert!(cli.debug);
        assert_eq!(cli.logfile, Some(PathBuf::from("run.log")));

        let cli = Cli::try_parse_from(["q2wc", "/lib", "--debug", "--logfile", "x.log"]).unwrap();
        assert!(cli.debug);
        assert_eq!(cli.logfile, Some(PathBuf::from("x.log")));
    }

    #[test]
    fn test_basedir_required() {
        assert!(Cli::try_parse_from(["q2wc"]).is_err());
    }

    #[test]
    fn test_version_flag() {
        let err = Cli::try_parse_from(["q2wc", "-V"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }
}
