//! Window frontend: mounts a [`Carousel`] and drives it from the raylib frame loop.

pub mod controls;
pub mod slide;

use std::path::Path;
use std::time::Duration;

use raylib::prelude::*;
use tracing::{info, warn};

use carousel::fit::Rect;
use carousel::{Carousel, view};

use crate::texture_loader::{load_texture_with_exif_rotation, resolve_source};
use crate::viewer::controls::{ControlsLayout, draw_caption, draw_controls};
use crate::viewer::slide::Slide;

pub struct CarouselViewer {
    carousel: Carousel,
    slides: Vec<Slide>,
}

impl CarouselViewer {
    pub fn new(carousel: Carousel) -> Self {
        Self { carousel, slides: Vec::new() }
    }

    /// Load one texture per image. Failed images keep their slot so indices stay aligned.
    /// Returns the number of textures loaded.
    pub fn initialize(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, base_dir: &Path) -> usize {
        let current = self.carousel.current_index();
        let mut loaded = 0;
        for (i, descriptor) in self.carousel.images().iter().enumerate() {
            let texture = resolve_source(base_dir, &descriptor.source)
                .and_then(|path| load_texture_with_exif_rotation(rl, thread, &path));
            let texture = match texture {
                Ok(texture) => {
                    loaded += 1;
                    Some(texture)
                }
                Err(e) => {
                    warn!(index = i, source = %descriptor.source, "failed to load image: {e:#}");
                    None
                }
            };
            let opacity = if i == current { 1.0 } else { 0.0 };
            self.slides.push(Slide::new(descriptor, texture, opacity));
        }
        info!(loaded, total = self.slides.len(), "textures loaded");
        loaded
    }

    /// The frame rectangle inside a window of the given size, centered.
    fn frame(&self, screen_width: f32, screen_height: f32) -> Rect {
        let config = self.carousel.config();
        let width = config.width.resolve(screen_width).min(screen_width);
        let height = config.height.resolve(screen_height).min(screen_height);
        Rect::new((screen_width - width) * 0.5, (screen_height - height) * 0.5, width, height)
    }

    pub fn render_frame(&mut self, dt: f32, rl: &mut RaylibHandle, thread: &RaylibThread) {
        let frame = self.frame(rl.get_screen_width() as f32, rl.get_screen_height() as f32);
        let config = self.carousel.config();
        let layout = ControlsLayout::new(frame, self.carousel.style(), config.show_arrows, config.show_dots, self.carousel.len());

        // 1. Input
        let mouse = rl.get_mouse_position();
        let pressed = rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT);
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            if let Some(action) = layout.hit(mouse.x, mouse.y) {
                if let Err(e) = self.carousel.dispatch(action) {
                    warn!("ignored click: {e}");
                }
            }
        }

        // 2. Autoplay
        self.carousel.tick(Duration::from_secs_f32(dt.max(0.0)));

        // 3. Crossfade every layer toward its target opacity
        let view = view::build(&self.carousel);
        let transition = self.carousel.config().transition_duration.as_duration().as_secs_f32();
        for (slide, layer) in self.slides.iter_mut().zip(&view.layers) {
            slide.fade_to(layer.opacity, transition);
            slide.update(dt);
        }

        // 4. Draw
        let mut d = rl.begin_drawing(thread);
        d.clear_background(Color::BLACK);

        // Fading-out layers first, so the incoming image stays on top.
        let current = self.carousel.current_index();
        for (i, slide) in self.slides.iter().enumerate() {
            if i != current {
                slide.draw(&mut d, frame);
            }
        }
        if let Some(slide) = self.slides.get(current) {
            slide.draw(&mut d, frame);
        }

        let style = self.carousel.style();
        if let Some(caption) = &view.caption {
            draw_caption(&mut d, frame, &caption.text, style.palette());
        }
        draw_controls(&mut d, &layout, style, current, mouse, pressed);
    }

    pub fn unmount(self) {
        // Textures are released with the slides.
        drop(self.slides);
        self.carousel.unmount();
    }
}
