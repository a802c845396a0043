//! CLI argument definitions for riic-fetch

use clap::{Args, Parser, Subcommand};
use riic::{Config, SkillLayout};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "riic-fetch")]
#[command(about = "Regenerate riic planner data files and icon cache", long_about = None)]
pub struct Cli {
    /// TOML config file; built-in defaults are used when omitted
    #[arg(short, long, global = true, env = "RIIC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Defaults to `fetch` with no overrides
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch game data, cache icons and write the JSON files
    #[command(visible_alias = "f")]
    Fetch(FetchArgs),

    /// Print the effective configuration as TOML
    Config,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Fetch(FetchArgs::default())
    }
}

#[derive(Args, Debug, Default)]
pub struct FetchArgs {
    /// How operator skills are written
    #[arg(short, long, value_enum)]
    pub layout: Option<LayoutArg>,

    /// Root of the image cache
    #[arg(long)]
    pub static_dir: Option<PathBuf>,

    /// Directory for the JSON files
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

impl FetchArgs {
    /// Apply command-line overrides on top of the loaded config
    pub fn apply(&self, config: &mut Config) {
        if let Some(layout) = self.layout {
            config.layout = layout.into();
        }
        if let Some(dir) = &self.static_dir {
            config.static_dir = dir.clone();
        }
        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LayoutArg {
    /// Skill text inlined per tier, `chars.json` only
    Inline,
    /// Skills referenced by id, with facilities, colors and terms
    Table,
}

impl From<LayoutArg> for SkillLayout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Inline => SkillLayout::Inline,
            LayoutArg::Table => SkillLayout::Table,
        }
    }
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
    fn test_no_arguments_means_default_fetch() {
        let cli = Cli::try_parse_from(["riic-fetch"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.command.is_none());

        let mut config = Config::default();
        match cli.command.unwrap_or_default() {
            Commands::Fetch(args) => args.apply(&mut config),
            Commands::Config => panic!("expected fetch"),
        }
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_fetch_overrides() {
        let cli = Cli::try_parse_from([
            "riic-fetch",
            "fetch",
            "--layout",
            "inline",
            "--static-dir",
            "public",
            "--config",
            "riic.toml",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("riic.toml")));

        let Some(Commands::Fetch(args)) = cli.command else {
            panic!("expected fetch");
        };
        let mut config = Config::default();
        args.apply(&mut config);

        assert_eq!(config.layout, SkillLayout::Inline);
        assert_eq!(config.static_dir, PathBuf::from("public"));
        assert_eq!(config.data_dir, Config::default().data_dir);
    }

    #[test]
    fn test_rejects_unknown_layout() {
        assert!(Cli::try_parse_from(["riic-fetch", "fetch", "--layout", "nested"]).is_err());
    }
}
