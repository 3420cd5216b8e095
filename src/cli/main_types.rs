use clap::{Parser, Subcommand, ValueEnum};
use crate::storage::config::OutputFormat;
use crate::string::CaseStyle;

#[derive(Parser)]
#[command(name = "lodash-compat")]
#[command(about = "lodash array search and string case helpers from the command line")]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[arg(long, global = true, env = "LODASH_COMPAT_CONFIG_DIR")]
    pub config_dir: Option<String>,

    /// Output format, overriding the configured default
    #[arg(long, global = true, value_enum)]
    pub format: Option<FormatArg>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert text to another case style
    Case {
        #[arg(value_enum)]
        style: StyleArg,
        /// Text to convert; multiple arguments are joined with spaces
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        input: Vec<String>,
    },
    /// Split text into words
    Words {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        input: Vec<String>,
    },
    /// Find the insertion index of a value in a sorted JSON array
    SortedIndex {
        /// Sorted JSON array, or null
        #[arg(long)]
        array: String,
        /// JSON value to insert; bare text is taken as a string
        #[arg(long)]
        value: String,
        /// JSON iteratee shorthand; bare text is taken as a property path
        #[arg(long)]
        iteratee: Option<String>,
        /// Return the highest insertion index instead of the lowest
        #[arg(long)]
        last: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Set configuration value
    Set {
        /// Configuration key
        key: String,
        /// Configuration value
        value: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleArg {
    Kebab,
    Snake,
    Lower,
    Upper,
    Camel,
    Start,
}

impl From<StyleArg> for CaseStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Kebab => CaseStyle::Kebab,
            StyleArg::Snake => CaseStyle::Snake,
            StyleArg::Lower => CaseStyle::Lower,
            StyleArg::Upper => CaseStyle::Upper,
            StyleArg::Camel => CaseStyle::Camel,
            StyleArg::Start => CaseStyle::Start,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Plain,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Plain => OutputFormat::Plain,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_command() {
        let cli = Cli::try_parse_from(["lodash-compat", "case", "kebab", "Foo", "Bar"])
            .expect("valid arguments");
        match cli.command {
            Commands::Case { style, input } => {
                assert_eq!(style, StyleArg::Kebab);
                assert_eq!(input, ["Foo", "Bar"]);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from([
            "lodash-compat",
            "-vv",
            "--format",
            "json",
            "sorted-index",
            "--array",
            "[1,2]",
            "--value",
            "1",
            "--last",
        ])
        .expect("valid arguments");
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.format, Some(FormatArg::Json));
        assert!(matches!(cli.command, Commands::SortedIndex { last: true, .. }));
    }

    #[test]
    fn test_rejects_unknown_style() {
        assert!(Cli::try_parse_from(["lodash-compat", "case", "title", "x"]).is_err());
    }
}
