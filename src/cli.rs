//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// pgogen - PGO profile generator
///
/// Produce and merge CPU profiles for profile-guided optimization of a Go program.
#[derive(Parser, Debug)]
#[command(
    name = "pgogen",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "CPU profile generation for Go PGO builds",
    long_about = "pgogen benchmarks the configured packages of a Go module, collects their \
                  CPU profiles, merges them with 'go tool pprof' and leaves a single \
                  cpuprofile.pprof ready for 'go build -pgo'.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  pgogen run\n    \
                  pgogen run --benchtime 3s --keep-intermediate\n    \
                  pgogen clean\n    \
                  pgogen list\n\n\
                  \x1b[1m\x1b[32mConfiguration:\x1b[0m\n    \
                  Optional pgogen.yaml in the workspace overrides the go binary,\n    \
                  benchtime and package list."
)]
pub struct Cli {
    /// Go module directory (defaults to current directory)
    #[arg(long, short = 'w', global = true)]
    pub workspace: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Benchmark, collect and merge CPU profiles
    Run(RunArgs),

    /// Remove profile artifacts and test binaries
    Clean(CleanArgs),

    /// List configured packages and their profile filenames
    List(ListArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the run command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Full profile run:\n    pgogen run\n\n\
                  Shorter benchmarks:\n    pgogen run --benchtime 3s\n\n\
                  Keep per-package profiles for inspection:\n    pgogen run --keep-intermediate\n\n\
                  Skip the SVG rendering step:\n    pgogen run --skip-svg")]
pub struct RunArgs {
    /// Override the benchtime from pgogen.yaml (e.g. 3s, 100x)
    #[arg(long)]
    pub benchtime: Option<String>,

    /// Keep per-package profiles and the raw merge output
    #[arg(long)]
    pub keep_intermediate: bool,

    /// Do not render cpuprofile.svg
    #[arg(long)]
    pub skip_svg: bool,
}

/// Arguments for the clean command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Remove all profile artifacts:\n    pgogen clean\n\n\
                  Report each removed file:\n    pgogen clean -v")]
pub struct CleanArgs {}

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List configured packages:\n    pgogen list")]
pub struct ListArgs {}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    pgogen completions --shell bash > ~/.bash_completion.d/pgogen\n\n\
                  Generate zsh completions:\n    pgogen completions --shell zsh > ~/.zfunc/_pgogen\n\n\
                  Generate fish completions:\n    pgogen completions --shell fish > ~/.config/fish/completions/pgogen.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_run() {
        let cli = Cli::try_parse_from(["pgogen", "run"]).unwrap();
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.benchtime, None);
                assert!(!args.keep_intermediate);
                assert!(!args.skip_svg);
            }
            _ => panic!("Expected Run command"),
        }
    }

    #[test]
    fn test_cli_parsing_run_with_options() {
        let cli = Cli::try_parse_from([
            "pgogen",
            "run",
            "--benchtime",
            "3s",
            "--keep-intermediate",
            "--skip-svg",
        ])
        .unwrap();
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.benchtime, Some("3s".to_string()));
                assert!(args.keep_intermediate);
                assert!(args.skip_svg);
            }
            _ => panic!("Expected Run command"),
        }
    }

    #[test]
    fn test_cli_parsing_clean() {
        let cli = Cli::try_parse_from(["pgogen", "clean"]).unwrap();
        assert!(matches!(cli.command, Commands::Clean(_)));
    }

    #[test]
    fn test_cli_parsing_list() {
        let cli = Cli::try_parse_from(["pgogen", "list"]).unwrap();
        assert!(matches!(cli.command, Commands::List(_)));
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["pgogen", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_global_options() {
        let cli = Cli::try_parse_from(["pgogen", "-v", "-w", "/tmp/project", "clean"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.workspace, Some(PathBuf::from("/tmp/project")));
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["pgogen", "completions", "--shell", "bash"]).unwrap();
        match cli.command {
            Commands::Completions(args) => {
                assert_eq!(args.shell, "bash");
            }
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["pgogen", "profile"]).is_err());
    }
}
