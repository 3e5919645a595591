//! `object-fit` / `object-position` geometry for drawing an image into its frame.

use crate::config::{FitMode, FocalPosition};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Which part of the image to sample and where it lands inside the frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// In image pixels.
    pub source: Rect,
    /// Relative to the frame's top-left corner.
    pub dest: Rect,
}

/// Size of the image once `fit` is applied, before alignment and clipping.
fn rendered_size(fit: FitMode, image: (f32, f32), frame: (f32, f32)) -> (f32, f32) {
    let (iw, ih) = image;
    let (fw, fh) = frame;
    let contain = (fw / iw).min(fh / ih);
    let scale = match fit {
        FitMode::Fill => return frame,
        FitMode::Contain => contain,
        FitMode::Cover => (fw / iw).max(fh / ih),
        FitMode::None => 1.0,
        FitMode::ScaleDown => contain.min(1.0),
    };
    (iw * scale, ih * scale)
}

pub fn place(fit: FitMode, focal: FocalPosition, image: (f32, f32), frame: (f32, f32)) -> Placement {
    let (iw, ih) = image;
    let (fw, fh) = frame;
    if iw <= 0.0 || ih <= 0.0 || fw <= 0.0 || fh <= 0.0 {
        return Placement {
            source: Rect::new(0.0, 0.0, 0.0, 0.0),
            dest: Rect::new(0.0, 0.0, 0.0, 0.0),
        };
    }

    let (rw, rh) = rendered_size(fit, image, frame);
    let (ax, ay) = focal.alignment();

    // Offset may be negative when the rendered image overflows the frame.
    let ox = (fw - rw) * ax;
    let oy = (fh - rh) * ay;

    let left = ox.max(0.0);
    let top = oy.max(0.0);
    let right = (ox + rw).min(fw);
    let bottom = (oy + rh).min(fh);

    let sx = iw / rw;
    let sy = ih / rh;

    Placement {
        source: Rect::new((left - ox) * sx, (top - oy) * sy, (right - left) * sx, (bottom - top) * sy),
        dest: Rect::new(left, top, right - left, bottom - top),
    }
}
