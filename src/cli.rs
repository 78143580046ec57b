// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::camera::BasisFormula;

#[derive(Parser, Debug, Clone)]
#[command(name = "campfire-scene")]
#[command(about = "Fly-camera campfire scene", long_about = None)]
pub struct Cli {
    /// Initial window width
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Initial window height
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Directory holding the scene textures
    #[arg(long, default_value = "images")]
    pub assets: PathBuf,

    /// Vertical field of view in degrees, clamped to [1, 45]
    #[arg(long)]
    pub fov: Option<f32>,

    /// How yaw and pitch become the front vector
    #[arg(long, value_enum, default_value_t = BasisFormula::AsAuthored)]
    pub basis: BasisFormula,

    /// Disable the HUD overlay
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["campfire-scene"]);
        assert_eq!((cli.width, cli.height), (800, 600));
        assert_eq!(cli.assets, PathBuf::from("images"));
        assert_eq!(cli.fov, None);
        assert_eq!(cli.basis, BasisFormula::AsAuthored);
        assert!(!cli.no_ui);
    }

    #[test]
    fn parses_overrides() {
        let cli = Cli::parse_from([
            "campfire-scene",
            "--width",
            "1024",
            "--fov",
            "30",
            "--basis",
            "spherical",
            "--no-ui",
        ]);
        assert_eq!(cli.width, 1024);
        assert_eq!(cli.fov, Some(30.0));
        assert_eq!(cli.basis, BasisFormula::Spherical);
        assert!(cli.no_ui);
    }
}
