//! Image carousel component.
//!
//! [`Carousel`] owns the current index and the autoplay timer. [`view::build`]
//! derives the render contract from it, which [`html::render`] turns into markup
//! and the `carousel view` binary draws in a window.

pub mod carousel;
pub mod config;
pub mod constants;
pub mod error;
pub mod fit;
pub mod html;
pub mod state;
pub mod style;
pub mod timer;
pub mod view;

pub use carousel::Carousel;
pub use config::{ArrowsPosition, ArrowsSize, CarouselConfig, ControlsColor, FitMode, FocalPosition, ImageDescriptor, Size, TransitionDuration};
pub use error::CarouselError;
pub use state::Action;
