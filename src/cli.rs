use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// JSON configuration file (tile size, scale, prefab categories)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Plan tile placements from a .tmx map
    Tmx(TmxArgs),
    /// Lay out every numbered asset of one folder on a grid
    Showcase(ShowcaseArgs),
}

#[derive(Args, Debug)]
pub struct TmxArgs {
    /// Input .tmx map
    #[arg(required_unless_present = "scene", conflicts_with = "scene")]
    pub input: Option<PathBuf>,
    /// Scene name (eg. Level_3); reads `Map_03.tmx` from --maps-dir
    #[arg(long)]
    pub scene: Option<String>,
    /// Folder holding the Map_NN.tmx files
    #[arg(long, default_value = "Resources/Maps")]
    pub maps_dir: PathBuf,
    /// Root of the prefab category folders (Roads/, Grasses/, ...)
    #[arg(long)]
    pub prefabs: PathBuf,
    /// Output directory
    #[arg(long)]
    pub output: PathBuf,
}

#[derive(Args, Debug)]
pub struct ShowcaseArgs {
    /// Folder holding the numbered assets
    #[arg(long)]
    pub assets: PathBuf,
    /// File name prefix, the asset index is appended to it
    #[arg(long)]
    pub prefix: String,
    /// Output directory
    #[arg(long)]
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_tmx_with_input() {
        let cli = Cli::try_parse_from([
            "tmx-placer",
            "tmx",
            "maps/Map_01.tmx",
            "--prefabs",
            "Prefabs",
            "--output",
            "out",
        ])
        .expect("valid args");

        let Command::Tmx(args) = cli.command else {
            panic!("expected tmx command");
        };
        assert_eq!(args.input, Some(PathBuf::from("maps/Map_01.tmx")));
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn test_tmx_needs_input_or_scene() {
        assert!(
            Cli::try_parse_from(["tmx-placer", "tmx", "--prefabs", "p", "--output", "o"]).is_err()
        );
        assert!(
            Cli::try_parse_from([
                "tmx-placer",
                "tmx",
                "a.tmx",
                "--scene",
                "Level_1",
                "--prefabs",
                "p",
                "--output",
                "o"
            ])
            .is_err()
        );

        let cli = Cli::try_parse_from([
            "tmx-placer",
            "--log-level",
            "debug",
            "tmx",
            "--scene",
            "Level_1",
            "--prefabs",
            "p",
            "--output",
            "o",
        ])
        .expect("valid args");
        let Command::Tmx(args) = cli.command else {
            panic!("expected tmx command");
        };
        assert_eq!(args.scene.as_deref(), Some("Level_1"));
        assert_eq!(args.maps_dir, PathBuf::from("Resources/Maps"));
        assert_eq!(cli.log_level, "debug");
    }
}
