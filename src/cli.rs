use crate::config::ConfigOverrides;
use crate::io::FormatterKind;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

pub mod setup;

#[derive(Parser, Debug)]
#[command(name = "tidyclass")]
#[command(about = "Sort TypeScript class members into a canonical order", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Sort a single file instead of every file under the working directory
    pub file: Option<PathBuf>,

    /// Formatter to run on sorted files
    #[arg(long, value_enum, conflicts_with_all = ["prettier", "biome"])]
    pub formatter: Option<FormatterKind>,

    /// Shorthand for --formatter prettier
    #[arg(long, conflicts_with = "biome")]
    pub prettier: bool,

    /// Shorthand for --formatter biome
    #[arg(long)]
    pub biome: bool,

    /// Report files that would change without writing them
    #[arg(long)]
    pub check: bool,

    /// Refuse files that declare overloaded methods
    #[arg(long = "reject-overloads")]
    pub reject_overloads: bool,

    /// Configuration file (defaults to the nearest .tidyclass.toml)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Output format for the run summary
    #[arg(short, long, value_enum, default_value = "terminal")]
    pub format: OutputFormat,

    /// Process files sequentially
    #[arg(long = "no-parallel")]
    pub no_parallel: bool,

    /// Number of worker threads (0 = all cores)
    #[arg(short = 'j', long = "jobs")]
    pub jobs: Option<usize>,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Disable coloured output
    #[arg(long)]
    pub plain: bool,

    /// Write a default .tidyclass.toml to the working directory and exit
    #[arg(long, conflicts_with_all = ["file", "check"])]
    pub init: bool,

    /// Overwrite an existing config file with --init
    #[arg(long, requires = "init")]
    pub force: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
}

impl Cli {
    /// The formatter chosen on the command line, if any.
    pub fn formatter_choice(&self) -> Option<FormatterKind> {
        if self.prettier {
            Some(FormatterKind::Prettier)
        } else if self.biome {
            Some(FormatterKind::Biome)
        } else {
            self.formatter
        }
    }

    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            formatter: self.formatter_choice(),
            overloads: self
                .reject_overloads
                .then_some(crate::sorting::OverloadPolicy::Reject),
            no_parallel: self.no_parallel,
            jobs: self.jobs,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorting::OverloadPolicy;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_single_file_with_shorthand_formatter() {
        let cli = Cli::try_parse_from(["tidyclass", "src/app.ts", "--biome", "--check"]).unwrap();

        assert_eq!(cli.file, Some(PathBuf::from("src/app.ts")));
        assert_eq!(cli.formatter_choice(), Some(FormatterKind::Biome));
        assert!(cli.check);
    }

    #[test]
    fn test_overrides_from_flags() {
        let cli = Cli::try_parse_from([
            "tidyclass",
            "--formatter",
            "prettier",
            "--reject-overloads",
            "--no-parallel",
            "-j",
            "3",
        ])
        .unwrap();
        let overrides = cli.overrides();

        assert_eq!(overrides.formatter, Some(FormatterKind::Prettier));
        assert_eq!(overrides.overloads, Some(OverloadPolicy::Reject));
        assert!(overrides.no_parallel);
        assert_eq!(overrides.jobs, Some(3));
    }

    #[test]
    fn test_conflicting_formatters_are_rejected() {
        assert!(Cli::try_parse_from(["tidyclass", "--prettier", "--biome"]).is_err());
        assert!(Cli::try_parse_from(["tidyclass", "--formatter", "none", "--biome"]).is_err());
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::try_parse_from(["tidyclass", "-vv", "--plain"]).unwrap();
        assert_eq!(cli.verbosity, 2);
        assert!(cli.plain);
        assert_eq!(cli.format, OutputFormat::Terminal);
    }
}
