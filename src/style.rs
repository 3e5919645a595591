//! Control styling as lookup tables.
//!
//! One table per option (theme, arrow size, arrow position). [`lookup`] composes
//! the three rows into a [`StyleDescriptor`] carrying both the utility classes
//! emitted in markup and the colors/metrics used by the window frontend.

use crate::config::{ArrowsPosition, ArrowsSize, ControlsColor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: (rgb >> 16) as u8,
            g: (rgb >> 8) as u8,
            b: rgb as u8,
            a: 255,
        }
    }

    /// Same color at 60% opacity (`/60`).
    pub const fn translucent(self) -> Self {
        Self { a: 153, ..self }
    }
}

pub const WHITE: Rgba = Rgba::hex(0xffffff);
pub const BLACK: Rgba = Rgba::hex(0x000000);
pub const GRAY_100: Rgba = Rgba::hex(0xf3f4f6);
pub const GRAY_200: Rgba = Rgba::hex(0xe5e7eb);
pub const GRAY_300: Rgba = Rgba::hex(0xd1d5db);
pub const GRAY_PRESSED: Rgba = Rgba::hex(0xc0c5cf);
pub const GRAY_600: Rgba = Rgba::hex(0x4b5563);
pub const GRAY_700: Rgba = Rgba::hex(0x374151);
pub const GRAY_800: Rgba = Rgba::hex(0x1f2937);
pub const GRAY_900: Rgba = Rgba::hex(0x111827);

/// Fill colors of one interactive element in its three pointer states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateColors {
    pub idle: Rgba,
    pub hover: Rgba,
    pub pressed: Rgba,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub caption_background: Option<Rgba>,
    pub caption_text: Rgba,
    /// `None` for the transparent themes: arrows are bare glyphs.
    pub button_background: Option<StateColors>,
    pub button_text: StateColors,
    pub dots_track: Option<Rgba>,
    pub dot: StateColors,
    pub dot_current: Rgba,
    pub drop_shadow: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeStyle {
    pub caption: &'static str,
    pub button: &'static str,
    pub dots_container: &'static str,
    pub dot: &'static str,
    pub dot_current: &'static str,
    pub palette: Palette,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeStyle {
    pub button: &'static str,
    pub previous_glyph: &'static str,
    pub next_glyph: &'static str,
    /// Button diameter in pixels.
    pub diameter: f32,
    /// Glyph font size in pixels.
    pub glyph: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowsAlignment {
    /// Previous on the left edge, next on the right edge.
    Spread,
    /// Both buttons side by side around the horizontal center.
    Centered,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionStyle {
    pub container: &'static str,
    pub alignment: ArrowsAlignment,
    /// Distance from the frame bottom to the button row, `None` for vertically centered.
    pub bottom_offset: Option<f32>,
}

/// Everything a frontend needs to draw the controls of one configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleDescriptor {
    pub theme: ThemeStyle,
    pub size: SizeStyle,
    pub position: PositionStyle,
}

impl StyleDescriptor {
    pub fn palette(&self) -> &Palette {
        &self.theme.palette
    }
}

pub const EDGE_INSET: f32 = 12.0; // px-3 / bottom-3
pub const ARROWS_GAP: f32 = 12.0; // gap-3
pub const DOT_SIZE: f32 = 8.0; // h-2 w-2
pub const DOT_GAP: f32 = 6.0; // gap-1.5
pub const DOTS_PADDING_X: f32 = 12.0; // px-3
pub const DOTS_PADDING_Y: f32 = 8.0; // py-2
pub const CAPTION_PADDING_Y: f32 = 8.0; // py-2
pub const ABOVE_DOTS_OFFSET: f32 = 48.0; // bottom-12

const THEME_LIGHT: ThemeStyle = ThemeStyle {
    caption: "bg-gray-300/60-carousel text-black-carousel",
    button: "bg-gray-300/60-carousel text-black-carousel hover:bg-gray-300-carousel active:bg-[#c0c5cf]-carousel",
    dots_container: "bg-gray-300/60-carousel",
    dot: "bg-gray-600/60-carousel hover:bg-gray-600-carousel active:bg-gray-700-carousel",
    dot_current: "bg-black-carousel",
    palette: Palette {
        caption_background: Some(GRAY_300.translucent()),
        caption_text: BLACK,
        button_background: Some(StateColors { idle: GRAY_300.translucent(), hover: GRAY_300, pressed: GRAY_PRESSED }),
        button_text: StateColors { idle: BLACK, hover: BLACK, pressed: BLACK },
        dots_track: Some(GRAY_300.translucent()),
        dot: StateColors { idle: GRAY_600.translucent(), hover: GRAY_600, pressed: GRAY_700 },
        dot_current: BLACK,
        drop_shadow: false,
    },
};

const THEME_DARK: ThemeStyle = ThemeStyle {
    caption: "bg-gray-600/60-carousel text-white-carousel",
    button: "bg-gray-600/60-carousel text-white-carousel hover:bg-gray-600-carousel active:bg-gray-700-carousel",
    dots_container: "bg-gray-600/60-carousel",
    dot: "bg-gray-300/60-carousel hover:bg-gray-300-carousel active:bg-[#c0c5cf]-carousel",
    dot_current: "bg-white-carousel",
    palette: Palette {
        caption_background: Some(GRAY_600.translucent()),
        caption_text: WHITE,
        button_background: Some(StateColors { idle: GRAY_600.translucent(), hover: GRAY_600, pressed: GRAY_700 }),
        button_text: StateColors { idle: WHITE, hover: WHITE, pressed: WHITE },
        dots_track: Some(GRAY_600.translucent()),
        dot: StateColors { idle: GRAY_300.translucent(), hover: GRAY_300, pressed: GRAY_PRESSED },
        dot_current: WHITE,
        drop_shadow: false,
    },
};

const THEME_TRANSPARENT_LIGHT: ThemeStyle = ThemeStyle {
    caption: "text-gray-100-carousel drop-shadow-sm-carousel",
    button: "text-gray-100-carousel hover:text-gray-200-carousel active:text-gray-300-carousel drop-shadow-sm-carousel hover:drop-shadow-md-carousel active:drop-shadow-none-carousel",
    dots_container: "",
    dot: "bg-gray-300/60-carousel drop-shadow-sm-carousel hover:bg-gray-300-carousel hover:drop-shadow-md-carousel active:bg-[#c0c5cf]-carousel active:drop-shadow-none-carousel",
    dot_current: "bg-white-carousel",
    palette: Palette {
        caption_background: None,
        caption_text: GRAY_100,
        button_background: None,
        button_text: StateColors { idle: GRAY_100, hover: GRAY_200, pressed: GRAY_300 },
        dots_track: None,
        dot: StateColors { idle: GRAY_300.translucent(), hover: GRAY_300, pressed: GRAY_PRESSED },
        dot_current: WHITE,
        drop_shadow: true,
    },
};

const THEME_TRANSPARENT_DARK: ThemeStyle = ThemeStyle {
    caption: "text-gray-900-carousel drop-shadow-sm-carousel",
    button: "text-gray-900-carousel hover:text-gray-800-carousel active:text-gray-700-carousel drop-shadow-sm-carousel hover:drop-shadow-md-carousel active:drop-shadow-none-carousel",
    dots_container: "",
    dot: "bg-gray-600/60-carousel drop-shadow-sm-carousel hover:bg-gray-600-carousel hover:drop-shadow-md-carousel active:bg-gray-700-carousel active:drop-shadow-none-carousel",
    dot_current: "bg-black-carousel",
    palette: Palette {
        caption_background: None,
        caption_text: GRAY_900,
        button_background: None,
        button_text: StateColors { idle: GRAY_900, hover: GRAY_800, pressed: GRAY_700 },
        dots_track: None,
        dot: StateColors { idle: GRAY_600.translucent(), hover: GRAY_600, pressed: GRAY_700 },
        dot_current: BLACK,
        drop_shadow: true,
    },
};

const SIZE_SM: SizeStyle = SizeStyle {
    button: "h-6-carousel w-6-carousel text-xs-carousel",
    previous_glyph: "-mt-[0.03rem]-carousel",
    next_glyph: "-mb-[0.03rem]-carousel",
    diameter: 24.0,
    glyph: 12.0,
};

const SIZE_MD: SizeStyle = SizeStyle {
    button: "h-8-carousel w-8-carousel text-base-carousel",
    previous_glyph: "-mt-[0.05rem]-carousel",
    next_glyph: "-mb-[0.05rem]-carousel",
    diameter: 32.0,
    glyph: 16.0,
};

const SIZE_LG: SizeStyle = SizeStyle {
    button: "h-12-carousel w-12-carousel text-xl-carousel",
    previous_glyph: "-mt-[0.05rem]-carousel",
    next_glyph: "-mb-[0.05rem]-carousel",
    diameter: 48.0,
    glyph: 20.0,
};

const SIZE_XL: SizeStyle = SizeStyle {
    button: "h-14-carousel w-14-carousel text-2xl-carousel",
    previous_glyph: "-mt-[0.05rem]-carousel",
    next_glyph: "-mb-[0.05rem]-carousel",
    diameter: 56.0,
    glyph: 24.0,
};

const POSITION_MIDDLE: PositionStyle = PositionStyle {
    container: "-translate-y-1/2-carousel top-1/2-carousel transform-carousel justify-between-carousel px-3-carousel",
    alignment: ArrowsAlignment::Spread,
    bottom_offset: None,
};

const POSITION_BOTTOM: PositionStyle = PositionStyle {
    container: "bottom-3-carousel justify-between-carousel px-3-carousel",
    alignment: ArrowsAlignment::Spread,
    bottom_offset: Some(EDGE_INSET),
};

const POSITION_BOTTOM_CENTER: PositionStyle = PositionStyle {
    container: "bottom-3-carousel items-center-carousel justify-center-carousel gap-3-carousel px-3-carousel",
    alignment: ArrowsAlignment::Centered,
    bottom_offset: Some(EDGE_INSET),
};

// Centered arrows move up to clear the dot row.
const POSITION_BOTTOM_CENTER_ABOVE_DOTS: PositionStyle = PositionStyle {
    container: "bottom-12-carousel items-center-carousel justify-center-carousel gap-3-carousel px-3-carousel",
    alignment: ArrowsAlignment::Centered,
    bottom_offset: Some(ABOVE_DOTS_OFFSET),
};

pub fn theme(color: ControlsColor) -> &'static ThemeStyle {
    match color {
        ControlsColor::Light => &THEME_LIGHT,
        ControlsColor::Dark => &THEME_DARK,
        ControlsColor::TransparentLight => &THEME_TRANSPARENT_LIGHT,
        ControlsColor::TransparentDark => &THEME_TRANSPARENT_DARK,
    }
}

pub fn size(size: ArrowsSize) -> &'static SizeStyle {
    match size {
        ArrowsSize::Sm => &SIZE_SM,
        ArrowsSize::Md => &SIZE_MD,
        ArrowsSize::Lg => &SIZE_LG,
        ArrowsSize::Xl => &SIZE_XL,
    }
}

pub fn position(position: ArrowsPosition, show_dots: bool) -> &'static PositionStyle {
    match (position, show_dots) {
        (ArrowsPosition::Middle, _) => &POSITION_MIDDLE,
        (ArrowsPosition::Bottom, _) => &POSITION_BOTTOM,
        (ArrowsPosition::BottomCenter, true) => &POSITION_BOTTOM_CENTER_ABOVE_DOTS,
        (ArrowsPosition::BottomCenter, false) => &POSITION_BOTTOM_CENTER,
    }
}

pub fn lookup(color: ControlsColor, arrows_size: ArrowsSize, arrows_position: ArrowsPosition, show_dots: bool) -> StyleDescriptor {
    StyleDescriptor {
        theme: *theme(color),
        size: *size(arrows_size),
        position: *position(arrows_position, show_dots),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn every_combination() -> impl Iterator<Item = (ControlsColor, ArrowsSize, ArrowsPosition, bool)> {
        ControlsColor::ALL.into_iter().flat_map(|c| {
            ArrowsSize::ALL.into_iter().flat_map(move |s| {
                ArrowsPosition::ALL
                    .into_iter()
                    .flat_map(move |p| [true, false].into_iter().map(move |d| (c, s, p, d)))
            })
        })
    }

    #[test]
    fn test_every_combination_is_styled() {
        let mut count = 0;
        for (c, s, p, d) in every_combination() {
            let style = lookup(c, s, p, d);
            count += 1;

            assert!(!style.theme.button.is_empty());
            assert!(!style.theme.dot.is_empty());
            assert!(!style.theme.dot_current.is_empty());
            assert!(style.size.button.contains("h-") && style.size.button.contains("w-"));
            assert!(style.position.container.ends_with("px-3-carousel"));
            assert!(style.size.diameter > style.size.glyph);

            // Every class token carries the scoping suffix.
            for classes in [
                style.theme.caption,
                style.theme.button,
                style.theme.dots_container,
                style.theme.dot,
                style.theme.dot_current,
                style.size.button,
                style.size.previous_glyph,
                style.size.next_glyph,
                style.position.container,
            ] {
                for token in classes.split_whitespace() {
                    assert!(token.ends_with("-carousel"), "{token} in {c:?}/{s:?}/{p:?}/{d}");
                }
            }
        }
        assert_eq!(count, 4 * 4 * 3 * 2);
    }

    #[test]
    fn test_transparent_themes_have_no_backgrounds() {
        for color in [ControlsColor::TransparentLight, ControlsColor::TransparentDark] {
            let palette = theme(color).palette;
            assert!(palette.button_background.is_none());
            assert!(palette.caption_background.is_none());
            assert!(palette.dots_track.is_none());
            assert!(palette.drop_shadow);
            assert_eq!(theme(color).dots_container, "");
        }
        for color in [ControlsColor::Light, ControlsColor::Dark] {
            assert!(theme(color).palette.button_background.is_some());
            assert!(!theme(color).palette.drop_shadow);
        }
    }

    #[test]
    fn test_current_dot_contrasts_theme() {
        assert_eq!(theme(ControlsColor::Dark).palette.dot_current, WHITE);
        assert_eq!(theme(ControlsColor::Light).palette.dot_current, BLACK);
        assert_eq!(theme(ControlsColor::TransparentDark).palette.dot_current, BLACK);
        assert_eq!(theme(ControlsColor::TransparentLight).palette.dot_current, WHITE);
    }

    #[test]
    fn test_bottom_center_clears_dots() {
        let with_dots = position(ArrowsPosition::BottomCenter, true);
        let without_dots = position(ArrowsPosition::BottomCenter, false);
        assert!(with_dots.container.starts_with("bottom-12-carousel"));
        assert!(without_dots.container.starts_with("bottom-3-carousel"));
        assert_eq!(with_dots.alignment, ArrowsAlignment::Centered);

        // Only bottom-center reacts to the dots.
        assert_eq!(position(ArrowsPosition::Middle, true), position(ArrowsPosition::Middle, false));
        assert_eq!(position(ArrowsPosition::Bottom, true), position(ArrowsPosition::Bottom, false));
    }

    #[test]
    fn test_small_arrows_use_tighter_glyph_offset() {
        assert_eq!(size(ArrowsSize::Sm).previous_glyph, "-mt-[0.03rem]-carousel");
        for s in [ArrowsSize::Md, ArrowsSize::Lg, ArrowsSize::Xl] {
            assert_eq!(size(s).next_glyph, "-mb-[0.05rem]-carousel");
        }
    }
}
