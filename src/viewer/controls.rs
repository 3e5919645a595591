use raylib::prelude::*;

use carousel::Action;
use carousel::fit::Rect;
use carousel::style::*;

const CAPTION_TEXT_SIZE: i32 = 16;
const SHADOW: Color = Color { r: 0, g: 0, b: 0, a: 90 };

pub fn to_color(c: Rgba) -> Color {
    Color { r: c.r, g: c.g, b: c.b, a: c.a }
}

/// Scale a color's alpha by `opacity`.
pub fn fade(c: Color, opacity: f32) -> Color {
    Color { a: (c.a as f32 * opacity.clamp(0.0, 1.0)).round() as u8, ..c }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

impl Circle {
    pub fn contains(&self, px: f32, py: f32) -> bool {
        let (dx, dy) = (px - self.x, py - self.y);
        dx * dx + dy * dy <= self.radius * self.radius
    }
}

/// Where the arrows and dots sit inside a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlsLayout {
    pub previous: Option<Circle>,
    pub next: Option<Circle>,
    pub dots_track: Option<Rect>,
    pub dots: Vec<Circle>,
}

impl ControlsLayout {
    pub fn new(frame: Rect, style: &StyleDescriptor, show_arrows: bool, show_dots: bool, count: usize) -> Self {
        let (previous, next) = if show_arrows {
            let (previous, next) = arrow_buttons(frame, style);
            (Some(previous), Some(next))
        } else {
            (None, None)
        };

        let (dots_track, dots) = if show_dots && count > 0 {
            let track = dots_track(frame, count);
            let dots = (0..count)
                .map(|i| Circle {
                    x: track.x + DOTS_PADDING_X + i as f32 * (DOT_SIZE + DOT_GAP) + DOT_SIZE * 0.5,
                    y: track.y + track.height * 0.5,
                    radius: DOT_SIZE * 0.5,
                })
                .collect();
            (Some(track), dots)
        } else {
            (None, Vec::new())
        };

        Self { previous, next, dots_track, dots }
    }

    /// The action under a click at (`x`, `y`). Dots get half the gap as extra slack.
    pub fn hit(&self, x: f32, y: f32) -> Option<Action> {
        if self.previous.is_some_and(|c| c.contains(x, y)) {
            return Some(Action::Previous);
        }
        if self.next.is_some_and(|c| c.contains(x, y)) {
            return Some(Action::Next);
        }
        self.dots
            .iter()
            .position(|dot| Circle { radius: dot.radius + DOT_GAP * 0.5, ..*dot }.contains(x, y))
            .map(Action::GoTo)
    }
}

fn arrow_buttons(frame: Rect, style: &StyleDescriptor) -> (Circle, Circle) {
    let radius = style.size.diameter * 0.5;
    let y = match style.position.bottom_offset {
        None => frame.y + frame.height * 0.5,
        Some(offset) => frame.y + frame.height - offset - radius,
    };
    let (previous_x, next_x) = match style.position.alignment {
        ArrowsAlignment::Spread => (frame.x + EDGE_INSET + radius, frame.x + frame.width - EDGE_INSET - radius),
        ArrowsAlignment::Centered => {
            let center = frame.x + frame.width * 0.5;
            (center - ARROWS_GAP * 0.5 - radius, center + ARROWS_GAP * 0.5 + radius)
        }
    };
    (
        Circle { x: previous_x, y, radius },
        Circle { x: next_x, y, radius },
    )
}

fn dots_track(frame: Rect, count: usize) -> Rect {
    let width = count as f32 * DOT_SIZE + (count - 1) as f32 * DOT_GAP + DOTS_PADDING_X * 2.0;
    let height = DOT_SIZE + DOTS_PADDING_Y * 2.0;
    Rect::new(
        frame.x + (frame.width - width) * 0.5,
        frame.y + frame.height - EDGE_INSET - height,
        width,
        height,
    )
}

/// Pointer state of the element under the mouse.
fn pick(colors: StateColors, hovered: bool, pressed: bool) -> Color {
    to_color(match (hovered, pressed) {
        (true, true) => colors.pressed,
        (true, false) => colors.hover,
        _ => colors.idle,
    })
}

pub fn draw_caption(d: &mut RaylibDrawHandle, frame: Rect, text: &str, palette: &Palette) {
    let height = CAPTION_TEXT_SIZE as f32 + CAPTION_PADDING_Y * 2.0;
    if let Some(background) = palette.caption_background {
        d.draw_rectangle_rec(Rectangle::new(frame.x, frame.y, frame.width, height), to_color(background));
    }
    let text_width = d.measure_text(text, CAPTION_TEXT_SIZE) as f32;
    let x = (frame.x + (frame.width - text_width) * 0.5) as i32;
    let y = (frame.y + CAPTION_PADDING_Y) as i32;
    if palette.drop_shadow {
        d.draw_text(text, x + 1, y + 1, CAPTION_TEXT_SIZE, SHADOW);
    }
    d.draw_text(text, x, y, CAPTION_TEXT_SIZE, to_color(palette.caption_text));
}

fn draw_arrow(d: &mut RaylibDrawHandle, button: Circle, glyph: f32, points_right: bool, color: Color) {
    let half = glyph * 0.5;
    // Counter-clockwise winding
    let (a, b, c) = if points_right {
        (
            Vector2::new(button.x - half * 0.8, button.y - half),
            Vector2::new(button.x - half * 0.8, button.y + half),
            Vector2::new(button.x + half, button.y),
        )
    } else {
        (
            Vector2::new(button.x - half, button.y),
            Vector2::new(button.x + half * 0.8, button.y + half),
            Vector2::new(button.x + half * 0.8, button.y - half),
        )
    };
    d.draw_triangle(a, b, c, color);
}

pub fn draw_controls(d: &mut RaylibDrawHandle, layout: &ControlsLayout, style: &StyleDescriptor, current: usize, mouse: Vector2, pressed: bool) {
    let palette = style.palette();

    for (button, points_right) in [(layout.previous, false), (layout.next, true)] {
        let Some(button) = button else { continue };
        let hovered = button.contains(mouse.x, mouse.y);
        if let Some(background) = palette.button_background {
            d.draw_circle_v(Vector2::new(button.x, button.y), button.radius, pick(background, hovered, pressed));
        }
        if palette.drop_shadow {
            let shadow = Circle { x: button.x + 1.0, y: button.y + 1.0, ..button };
            draw_arrow(d, shadow, style.size.glyph, points_right, SHADOW);
        }
        draw_arrow(d, button, style.size.glyph, points_right, pick(palette.button_text, hovered, pressed));
    }

    if let (Some(track), Some(background)) = (layout.dots_track, palette.dots_track) {
        d.draw_rectangle_rounded(
            Rectangle::new(track.x, track.y, track.width, track.height),
            1.0,
            8,
            to_color(background),
        );
    }
    for (i, dot) in layout.dots.iter().enumerate() {
        let center = Vector2::new(dot.x, dot.y);
        if palette.drop_shadow {
            d.draw_circle_v(Vector2::new(dot.x + 1.0, dot.y + 1.0), dot.radius, SHADOW);
        }
        let color = if i == current {
            to_color(palette.dot_current)
        } else {
            pick(palette.dot, dot.contains(mouse.x, mouse.y), pressed)
        };
        d.draw_circle_v(center, dot.radius, color);
    }
}
