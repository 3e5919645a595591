use raylib::prelude::*;
use raylib::ease;

use carousel::fit::{self, Rect};
use carousel::{FitMode, FocalPosition, ImageDescriptor};

use crate::viewer::controls::{fade, to_color};

const MISSING_IMAGE_FILL: Color = Color { r: 40, g: 40, b: 40, a: 255 };
const ALT_TEXT_SIZE: i32 = 20;

/// One image layer of the stack. Crossfades toward its target opacity.
pub struct Slide {
    image: Option<Texture2D>,
    alt: String,
    fit: FitMode,
    focal: FocalPosition,

    opacity: f32,
    target_opacity: f32,

    animation_timer: f32,
    animation_duration: f32,
    tween: Option<ease::Tween>,
}

impl Slide {
    /// `image` is `None` when the texture failed to load; the layer then shows its alt text.
    pub fn new(descriptor: &ImageDescriptor, image: Option<Texture2D>, opacity: f32) -> Self {
        Self {
            image,
            alt: descriptor.alt_text.clone(),
            fit: descriptor.fit_mode,
            focal: descriptor.focal_position,
            opacity,
            target_opacity: opacity,
            animation_timer: 0.0,
            animation_duration: 0.0,
            tween: None,
        }
    }

    /// Start fading from the current opacity toward `target` over `duration` seconds.
    pub fn fade_to(&mut self, target: f32, duration: f32) {
        if target == self.target_opacity {
            return;
        }
        self.target_opacity = target;
        self.animation_timer = 0.0;
        self.animation_duration = duration;
        self.tween = Some(ease::Tween::new(ease::linear_none, self.opacity, target, duration));
    }

    pub fn update(&mut self, dt: f32) {
        let Some(tween) = self.tween.as_mut() else {
            return;
        };
        self.opacity = tween.apply(dt);

        self.animation_timer += dt;
        if self.animation_timer >= self.animation_duration {
            self.opacity = self.target_opacity;
            self.tween = None;
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, frame: Rect) {
        if self.opacity <= 0.0 {
            return;
        }
        let alpha = self.opacity.clamp(0.0, 1.0);

        let Some(image) = &self.image else {
            d.draw_rectangle_rec(
                Rectangle::new(frame.x, frame.y, frame.width, frame.height),
                fade(MISSING_IMAGE_FILL, alpha),
            );
            if !self.alt.is_empty() {
                let text_width = d.measure_text(&self.alt, ALT_TEXT_SIZE);
                d.draw_text(
                    &self.alt,
                    (frame.x + (frame.width - text_width as f32) * 0.5) as i32,
                    (frame.y + (frame.height - ALT_TEXT_SIZE as f32) * 0.5) as i32,
                    ALT_TEXT_SIZE,
                    fade(Color::LIGHTGRAY, alpha),
                );
            }
            return;
        };

        let placement = fit::place(
            self.fit,
            self.focal,
            (image.width() as f32, image.height() as f32),
            (frame.width, frame.height),
        );
        if placement.dest.is_empty() {
            return;
        }

        let source = placement.source;
        let dest = placement.dest;
        d.draw_texture_pro(
            image,
            Rectangle::new(source.x, source.y, source.width, source.height),
            Rectangle::new(frame.x + dest.x, frame.y + dest.y, dest.width, dest.height),
            Vector2::new(0.0, 0.0),
            0.0,
            fade(to_color(carousel::style::WHITE), alpha),
        );
    }
}
