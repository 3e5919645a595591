use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};

use carousel::{ArrowsPosition, ArrowsSize, CarouselConfig, ControlsColor, Size, TransitionDuration};

use crate::texture_loader::descriptors_from_directory;

#[derive(Debug, Parser)]
#[command(name = "carousel", version, about = "Image carousel: window viewer and markup renderer")]
pub struct Cli {
    /// Log navigation and timer activity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the carousel in a window
    View(SourceArgs),
    /// Print the carousel markup at its initial state
    Html {
        #[command(flatten)]
        source: SourceArgs,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn parse_transition(raw: &str) -> Result<TransitionDuration, String> {
    let ms: u16 = raw.parse().map_err(|e| format!("{e}"))?;
    TransitionDuration::try_from(ms).map_err(|e| e.to_string())
}

/// Where the images come from, plus overrides for every configuration field.
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// A JSON manifest, or a directory of images
    pub source: PathBuf,

    /// Frame height (CSS size, e.g. 400px or 100%); required for directories
    #[arg(long)]
    pub height: Option<String>,

    /// Frame width (CSS size)
    #[arg(long)]
    pub width: Option<String>,

    /// Index of the first image shown
    #[arg(long)]
    pub first: Option<usize>,

    #[arg(long)]
    pub no_autoplay: bool,

    /// Milliseconds each image stays current during autoplay
    #[arg(long)]
    pub duration: Option<u64>,

    /// Stop at the ends instead of wrapping around
    #[arg(long)]
    pub no_loop: bool,

    /// Crossfade milliseconds: 75, 100, 150, 200, 300, 500, 700 or 1000
    #[arg(long, value_parser = parse_transition)]
    pub transition: Option<TransitionDuration>,

    #[arg(long, value_enum)]
    pub controls_color: Option<ControlsColor>,

    #[arg(long, value_enum)]
    pub arrows_size: Option<ArrowsSize>,

    #[arg(long, value_enum)]
    pub arrows_position: Option<ArrowsPosition>,

    #[arg(long)]
    pub hide_dots: bool,

    #[arg(long)]
    pub hide_arrows: bool,

    /// Extra classes on the root element
    #[arg(long = "class")]
    pub class_name: Option<String>,

    /// Extra classes on every image
    #[arg(long = "images-class")]
    pub images_class_name: Option<String>,
}

impl SourceArgs {
    /// Build the configuration and the directory relative image sources resolve against.
    ///
    /// Sources listed from a directory already carry the directory prefix, so they resolve
    /// against an empty base. Manifest sources resolve against the manifest's directory.
    pub fn load(&self) -> Result<(CarouselConfig, PathBuf)> {
        let (mut config, base_dir) = if self.source.is_dir() {
            let Some(height) = &self.height else {
                bail!("--height is required when SOURCE is a directory");
            };
            let images = descriptors_from_directory(&self.source)?;
            (CarouselConfig::new(images, height.as_str()), PathBuf::new())
        } else {
            let config = CarouselConfig::from_manifest(&self.source)
                .with_context(|| format!("Failed to load manifest {}", self.source.display()))?;
            let base_dir = self.source.parent().map(Path::to_path_buf).unwrap_or_default();
            (config, base_dir)
        };
        self.apply(&mut config);
        Ok((config, base_dir))
    }

    fn apply(&self, config: &mut CarouselConfig) {
        if let Some(height) = &self.height {
            config.height = Size::new(height.as_str());
        }
        if let Some(width) = &self.width {
            config.width = Size::new(width.as_str());
        }
        if let Some(first) = self.first {
            config.first_image_index = first;
        }
        if self.no_autoplay {
            config.autoplay = false;
        }
        if let Some(duration) = self.duration {
            config.images_duration = duration;
        }
        if self.no_loop {
            config.loop_images = false;
        }
        if let Some(transition) = self.transition {
            config.transition_duration = transition;
        }
        if let Some(color) = self.controls_color {
            config.controls_color = color;
        }
        if let Some(size) = self.arrows_size {
            config.arrows_size = size;
        }
        if let Some(position) = self.arrows_position {
            config.arrows_position = position;
        }
        if self.hide_dots {
            config.show_dots = false;
        }
        if self.hide_arrows {
            config.show_arrows = false;
        }
        if let Some(class_name) = &self.class_name {
            config.class_name = class_name.clone();
        }
        if let Some(images_class_name) = &self.images_class_name {
            config.images_class_name = images_class_name.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use crate::texture_loader::resolve_source;

    fn source_args(args: &[&str]) -> SourceArgs {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::View(source) => source,
            Command::Html { source, .. } => source,
        }
    }

    #[test]
    fn test_overrides_manifest_values() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("show.json");
        fs::write(&manifest, r#"{"images":[{"src":"a.jpg"},{"src":"b.jpg"}],"height":"300px"}"#).unwrap();

        let args = source_args(&[
            "carousel",
            "html",
            manifest.to_str().unwrap(),
            "--width",
            "640px",
            "--first",
            "1",
            "--no-loop",
            "--transition",
            "150",
            "--controls-color",
            "transparent-dark",
            "--arrows-position",
            "bottom-center",
            "--hide-dots",
        ]);
        let (config, base_dir) = args.load().unwrap();

        assert_eq!(base_dir, dir.path());
        assert_eq!(config.height.as_css(), "300px");
        assert_eq!(config.width.as_css(), "640px");
        assert_eq!(config.first_image_index, 1);
        assert!(!config.loop_images);
        assert!(config.autoplay);
        assert_eq!(config.transition_duration, TransitionDuration::Ms150);
        assert_eq!(config.controls_color, ControlsColor::TransparentDark);
        assert_eq!(config.arrows_position, ArrowsPosition::BottomCenter);
        assert!(!config.show_dots);
        assert!(config.show_arrows);
    }

    #[test]
    fn test_rejects_unsupported_transition() {
        assert!(Cli::try_parse_from(["carousel", "view", "x.json", "--transition", "250"]).is_err());
    }

    #[test]
    fn test_directory_source_needs_height() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.png"), b"x").unwrap();

        let args = source_args(&["carousel", "view", dir.path().to_str().unwrap()]);
        assert!(args.load().is_err());

        let args = source_args(&["carousel", "view", dir.path().to_str().unwrap(), "--height", "100%"]);
        let (config, _) = args.load().unwrap();
        assert_eq!(config.images.len(), 1);
        assert_eq!(config.images[0].alt_text, "a");
    }

    #[test]
    fn test_relative_directory_sources_resolve_to_real_files() {
        let dir = tempfile::Builder::new().prefix("photos").tempdir_in(".").unwrap();
        let relative = Path::new(".").join(dir.path().file_name().unwrap());
        fs::write(relative.join("a.png"), b"x").unwrap();
        fs::write(relative.join("b.jpg"), b"x").unwrap();

        let args = source_args(&["carousel", "view", relative.to_str().unwrap(), "--height", "100%"]);
        let (config, base_dir) = args.load().unwrap();

        assert_eq!(config.images.len(), 2);
        for image in &config.images {
            let resolved = resolve_source(&base_dir, &image.source).unwrap();
            assert!(resolved.is_relative());
            assert!(resolved.exists(), "{} does not exist", resolved.display());
        }
    }
}
