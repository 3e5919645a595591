//! Per-mount carousel configuration.
//!
//! The manifest format mirrors the published component interface: camelCase keys,
//! kebab-case enum values, durations in milliseconds.

use std::fs;
use std::path::Path;
use std::time::Duration;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{CarouselError, Result};

/// How an image is aligned inside its frame when it is cropped or padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum FocalPosition {
    TopLeft,
    Top,
    TopRight,
    Left,
    #[default]
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl FocalPosition {
    pub const ALL: [FocalPosition; 9] = [
        FocalPosition::TopLeft,
        FocalPosition::Top,
        FocalPosition::TopRight,
        FocalPosition::Left,
        FocalPosition::Center,
        FocalPosition::Right,
        FocalPosition::BottomLeft,
        FocalPosition::Bottom,
        FocalPosition::BottomRight,
    ];

    /// Horizontal and vertical alignment factors in `0.0..=1.0`
    /// (0 = left/top, 0.5 = centered, 1 = right/bottom).
    pub fn alignment(self) -> (f32, f32) {
        match self {
            FocalPosition::TopLeft => (0.0, 0.0),
            FocalPosition::Top => (0.5, 0.0),
            FocalPosition::TopRight => (1.0, 0.0),
            FocalPosition::Left => (0.0, 0.5),
            FocalPosition::Center => (0.5, 0.5),
            FocalPosition::Right => (1.0, 0.5),
            FocalPosition::BottomLeft => (0.0, 1.0),
            FocalPosition::Bottom => (0.5, 1.0),
            FocalPosition::BottomRight => (1.0, 1.0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FocalPosition::TopLeft => "top-left",
            FocalPosition::Top => "top",
            FocalPosition::TopRight => "top-right",
            FocalPosition::Left => "left",
            FocalPosition::Center => "center",
            FocalPosition::Right => "right",
            FocalPosition::BottomLeft => "bottom-left",
            FocalPosition::Bottom => "bottom",
            FocalPosition::BottomRight => "bottom-right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum FitMode {
    #[default]
    Cover,
    Contain,
    Fill,
    ScaleDown,
    None,
}

impl FitMode {
    pub const ALL: [FitMode; 5] = [FitMode::Cover, FitMode::Contain, FitMode::Fill, FitMode::ScaleDown, FitMode::None];

    pub fn as_str(self) -> &'static str {
        match self {
            FitMode::Cover => "cover",
            FitMode::Contain => "contain",
            FitMode::Fill => "fill",
            FitMode::ScaleDown => "scale-down",
            FitMode::None => "none",
        }
    }
}

/// Crossfade length. Only a fixed set of durations is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum TransitionDuration {
    Ms75,
    Ms100,
    Ms150,
    Ms200,
    Ms300,
    #[default]
    Ms500,
    Ms700,
    Ms1000,
}

impl TransitionDuration {
    pub const ALL: [TransitionDuration; 8] = [
        TransitionDuration::Ms75,
        TransitionDuration::Ms100,
        TransitionDuration::Ms150,
        TransitionDuration::Ms200,
        TransitionDuration::Ms300,
        TransitionDuration::Ms500,
        TransitionDuration::Ms700,
        TransitionDuration::Ms1000,
    ];

    pub fn as_millis(self) -> u16 {
        match self {
            TransitionDuration::Ms75 => 75,
            TransitionDuration::Ms100 => 100,
            TransitionDuration::Ms150 => 150,
            TransitionDuration::Ms200 => 200,
            TransitionDuration::Ms300 => 300,
            TransitionDuration::Ms500 => 500,
            TransitionDuration::Ms700 => 700,
            TransitionDuration::Ms1000 => 1000,
        }
    }

    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.as_millis() as u64)
    }
}

impl TryFrom<u16> for TransitionDuration {
    type Error = CarouselError;

    fn try_from(ms: u16) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_millis() == ms)
            .ok_or(CarouselError::InvalidTransitionDuration(ms))
    }
}

impl From<TransitionDuration> for u16 {
    fn from(d: TransitionDuration) -> u16 {
        d.as_millis()
    }
}

/// Color theme shared by the caption, arrows and dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ControlsColor {
    Light,
    #[default]
    Dark,
    TransparentLight,
    TransparentDark,
}

impl ControlsColor {
    pub const ALL: [ControlsColor; 4] = [
        ControlsColor::Light,
        ControlsColor::Dark,
        ControlsColor::TransparentLight,
        ControlsColor::TransparentDark,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ArrowsSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl ArrowsSize {
    pub const ALL: [ArrowsSize; 4] = [ArrowsSize::Sm, ArrowsSize::Md, ArrowsSize::Lg, ArrowsSize::Xl];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ArrowsPosition {
    #[default]
    Middle,
    Bottom,
    BottomCenter,
}

impl ArrowsPosition {
    pub const ALL: [ArrowsPosition; 3] = [ArrowsPosition::Middle, ArrowsPosition::Bottom, ArrowsPosition::BottomCenter];
}

/// A CSS size string such as `"100%"`, `"480px"` or `"50vh"`.
///
/// The raw string is what the markup emits; [`Size::resolve`] turns it into
/// pixels for frontends that lay out the frame themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Size(String);

impl Size {
    pub fn new(css: impl Into<String>) -> Self {
        Size(css.into())
    }

    pub fn as_css(&self) -> &str {
        &self.0
    }

    /// Pixels for this size inside a container of `available` pixels.
    /// Units other than `px` and `%` fill the container.
    pub fn resolve(&self, available: f32) -> f32 {
        let raw = self.0.trim();
        if let Some(percent) = raw.strip_suffix('%') {
            if let Ok(p) = percent.trim().parse::<f32>() {
                return available * p / 100.0;
            }
        }
        let px = raw.strip_suffix("px").unwrap_or(raw);
        px.trim().parse::<f32>().unwrap_or(available)
    }
}

impl Default for Size {
    fn default() -> Self {
        Size::new(DEFAULT_WIDTH)
    }
}

impl From<&str> for Size {
    fn from(css: &str) -> Self {
        Size::new(css)
    }
}

/// One entry of the image sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDescriptor {
    #[serde(rename = "src")]
    pub source: String,
    #[serde(rename = "alt", default)]
    pub alt_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "className", default, skip_serializing_if = "Option::is_none")]
    pub style_override: Option<String>,
    #[serde(rename = "position", default)]
    pub focal_position: FocalPosition,
    #[serde(rename = "fit", default)]
    pub fit_mode: FitMode,
    #[serde(rename = "duration", default, skip_serializing_if = "Option::is_none")]
    pub duration_override: Option<u64>,
}

impl ImageDescriptor {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            alt_text: String::new(),
            description: None,
            style_override: None,
            focal_position: FocalPosition::default(),
            fit_mode: FitMode::default(),
            duration_override: None,
        }
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt_text = alt.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_duration(mut self, ms: u64) -> Self {
        self.duration_override = Some(ms);
        self
    }

    /// How long this image stays current during autoplay.
    /// An override of zero counts as unset and falls back to `global`.
    pub fn display_duration(&self, global: Duration) -> Duration {
        match self.duration_override {
            Some(ms) if ms > 0 => Duration::from_millis(ms),
            _ => global,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_images_duration() -> u64 {
    DEFAULT_IMAGES_DURATION_MS
}

/// Immutable settings for one mounted carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselConfig {
    pub images: Vec<ImageDescriptor>,
    pub height: Size,
    #[serde(default)]
    pub width: Size,
    #[serde(default)]
    pub class_name: String,
    #[serde(default)]
    pub images_class_name: String,
    #[serde(default)]
    pub first_image_index: usize,
    #[serde(default = "default_true")]
    pub autoplay: bool,
    #[serde(default = "default_images_duration")]
    pub images_duration: u64,
    #[serde(rename = "loop", default = "default_true")]
    pub loop_images: bool,
    #[serde(default)]
    pub transition_duration: TransitionDuration,
    #[serde(default)]
    pub controls_color: ControlsColor,
    #[serde(default)]
    pub arrows_size: ArrowsSize,
    #[serde(default)]
    pub arrows_position: ArrowsPosition,
    #[serde(default = "default_true")]
    pub show_dots: bool,
    #[serde(default = "default_true")]
    pub show_arrows: bool,
}

impl CarouselConfig {
    pub fn new(images: Vec<ImageDescriptor>, height: impl Into<Size>) -> Self {
        Self {
            images,
            height: height.into(),
            width: Size::default(),
            class_name: String::new(),
            images_class_name: String::new(),
            first_image_index: 0,
            autoplay: true,
            images_duration: DEFAULT_IMAGES_DURATION_MS,
            loop_images: true,
            transition_duration: TransitionDuration::default(),
            controls_color: ControlsColor::default(),
            arrows_size: ArrowsSize::default(),
            arrows_position: ArrowsPosition::default(),
            show_dots: true,
            show_arrows: true,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_manifest(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn images_duration(&self) -> Duration {
        Duration::from_millis(self.images_duration)
    }

    /// Checks the mount preconditions: a non-empty image list, a starting index
    /// inside it and a positive global duration.
    pub fn validate(&self) -> Result<()> {
        if self.images.is_empty() {
            return Err(CarouselError::EmptyImages);
        }
        if self.first_image_index >= self.images.len() {
            return Err(CarouselError::FirstIndexOutOfBounds {
                index: self.first_image_index,
                len: self.images.len(),
            });
        }
        if self.images_duration == 0 {
            return Err(CarouselError::ZeroDuration);
        }
        Ok(())
    }
}
