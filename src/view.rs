//! Render contract of a mounted carousel.
//!
//! All images are present at once; only the current one is opaque. Caption,
//! arrows and dots are included according to the configuration flags.

use crate::carousel::Carousel;
use crate::config::{FitMode, FocalPosition};
use crate::constants::CSS_SUFFIX;
use crate::state::Action;

const ROOT_CLASSES: &str = "relative-carousel w-full-carousel overflow-hidden-carousel";
const STACK_CLASSES: &str = "relative-carousel h-full-carousel w-full-carousel";
const LAYER_CLASSES: &str = "absolute-carousel h-full-carousel w-full-carousel transition-opacity-carousel";
const CAPTION_WRAPPER_CLASSES: &str =
    "absolute-carousel top-0-carousel flex-carousel w-full-carousel items-center-carousel justify-center-carousel";
const CAPTION_CLASSES: &str =
    "carousel-button flex-carousel w-full-carousel items-center-carousel justify-center-carousel py-2-carousel";
const ARROWS_CLASSES: &str = "absolute-carousel flex-carousel w-full-carousel";
const ARROW_CLASSES: &str = "carousel-button cursor-pointer-carousel flex-carousel items-center-carousel justify-center-carousel rounded-full-carousel transition-carousel";
const DOTS_CLASSES: &str = "-translate-x-1/2-carousel absolute-carousel bottom-3-carousel left-1/2-carousel flex-carousel transform-carousel items-center-carousel justify-center-carousel gap-1.5-carousel rounded-full-carousel px-3-carousel py-2-carousel";
const DOT_CLASSES: &str = "carousel-button h-2-carousel w-2-carousel cursor-pointer-carousel rounded-full-carousel transition-colors-carousel";

pub const ARROW_GLYPH: &str = "\u{25B6}";

#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub index: usize,
    pub source: String,
    pub alt: String,
    /// 1.0 for the current image, 0.0 for every other one.
    pub opacity: f32,
    pub focal_position: FocalPosition,
    pub fit_mode: FitMode,
    pub classes: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Caption {
    pub text: String,
    pub wrapper_classes: &'static str,
    pub classes: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub action: Action,
    pub classes: String,
    pub glyph_classes: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Arrows {
    pub container_classes: String,
    pub previous: Button,
    pub next: Button,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dot {
    pub index: usize,
    pub current: bool,
    pub action: Action,
    pub classes: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dots {
    pub container_classes: String,
    pub dots: Vec<Dot>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselView {
    pub root_classes: String,
    pub stack_classes: &'static str,
    pub height: String,
    pub width: String,
    pub layers: Vec<Layer>,
    pub caption: Option<Caption>,
    pub arrows: Option<Arrows>,
    pub dots: Option<Dots>,
}

/// Join class lists, skipping empty ones.
pub(crate) fn classes<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn build(carousel: &Carousel) -> CarouselView {
    let config = carousel.config();
    let style = carousel.style();
    let current = carousel.current_index();
    let duration = format!("duration-{}{}", config.transition_duration.as_millis(), CSS_SUFFIX);

    let layers = config
        .images
        .iter()
        .enumerate()
        .map(|(index, image)| {
            let opacity_class = if index == current { "opacity-100-carousel" } else { "opacity-0-carousel" };
            let position_class = format!("object-{}{}", image.focal_position.as_str(), CSS_SUFFIX);
            let fit_class = format!("object-{}{}", image.fit_mode.as_str(), CSS_SUFFIX);
            Layer {
                index,
                source: image.source.clone(),
                alt: image.alt_text.clone(),
                opacity: if index == current { 1.0 } else { 0.0 },
                focal_position: image.focal_position,
                fit_mode: image.fit_mode,
                classes: classes([
                    LAYER_CLASSES,
                    duration.as_str(),
                    opacity_class,
                    position_class.as_str(),
                    fit_class.as_str(),
                    config.images_class_name.as_str(),
                    image.style_override.as_deref().unwrap_or(""),
                ]),
            }
        })
        .collect();

    let caption = carousel
        .current_image()
        .description
        .as_ref()
        .filter(|text| !text.is_empty())
        .map(|text| Caption {
            text: text.clone(),
            wrapper_classes: CAPTION_WRAPPER_CLASSES,
            classes: classes([CAPTION_CLASSES, style.theme.caption]),
        });

    let arrows = config.show_arrows.then(|| {
        let button = classes([ARROW_CLASSES, style.size.button, style.theme.button]);
        Arrows {
            container_classes: classes([ARROWS_CLASSES, style.position.container]),
            previous: Button {
                action: Action::Previous,
                classes: button.clone(),
                glyph_classes: classes(["rotate-180-carousel pl-0.5-carousel", style.size.previous_glyph]),
            },
            next: Button {
                action: Action::Next,
                classes: button,
                glyph_classes: classes(["pl-0.5-carousel", style.size.next_glyph]),
            },
        }
    });

    let dots = config.show_dots.then(|| Dots {
        container_classes: classes([DOTS_CLASSES, style.theme.dots_container]),
        dots: (0..carousel.len())
            .map(|index| {
                let is_current = index == current;
                Dot {
                    index,
                    current: is_current,
                    action: Action::GoTo(index),
                    classes: classes([DOT_CLASSES, style.theme.dot, if is_current { style.theme.dot_current } else { "" }]),
                }
            })
            .collect(),
    });

    CarouselView {
        root_classes: classes([ROOT_CLASSES, config.class_name.as_str()]),
        stack_classes: STACK_CLASSES,
        height: config.height.as_css().to_string(),
        width: config.width.as_css().to_string(),
        layers,
        caption,
        arrows,
        dots,
    }
}
