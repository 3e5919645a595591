use std::time::Duration;

use tracing::{debug, info};

use crate::config::{CarouselConfig, ImageDescriptor};
use crate::error::Result;
use crate::state::{Action, CarouselState};
use crate::style::{self, StyleDescriptor};
use crate::timer::AutoplayTimer;

/// A mounted carousel: configuration, the current index and the autoplay timer.
///
/// Every index change goes through [`Carousel::index_changed`], which cancels the
/// live timer before arming the next one.
#[derive(Debug)]
pub struct Carousel {
    config: CarouselConfig,
    state: CarouselState,
    timer: AutoplayTimer,
    autoplay: bool,
    style: StyleDescriptor,
}

impl Carousel {
    pub fn mount(config: CarouselConfig) -> Result<Self> {
        config.validate()?;
        let state = CarouselState::new(config.first_image_index, config.images.len(), config.loop_images)?;
        let style = style::lookup(config.controls_color, config.arrows_size, config.arrows_position, config.show_dots);

        let mut carousel = Self {
            autoplay: config.autoplay,
            config,
            state,
            timer: AutoplayTimer::new(),
            style,
        };
        info!(
            images = carousel.len(),
            first = carousel.current_index(),
            autoplay = carousel.autoplay,
            "carousel mounted"
        );
        carousel.arm_timer();
        Ok(carousel)
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn style(&self) -> &StyleDescriptor {
        &self.style
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn images(&self) -> &[ImageDescriptor] {
        &self.config.images
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    pub fn current_image(&self) -> &ImageDescriptor {
        &self.config.images[self.state.current_index()]
    }

    pub fn autoplay(&self) -> bool {
        self.autoplay
    }

    pub fn timer(&self) -> &AutoplayTimer {
        &self.timer
    }

    pub fn go_to_previous(&mut self) {
        if self.state.previous() {
            self.index_changed();
        }
    }

    pub fn go_to_next(&mut self) {
        if self.state.next() {
            self.index_changed();
        }
    }

    pub fn go_to_index(&mut self, index: usize) -> Result<()> {
        if self.state.go_to(index)? {
            self.index_changed();
        }
        Ok(())
    }

    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        debug!(?action, "dispatch");
        match action {
            Action::Previous => self.go_to_previous(),
            Action::Next => self.go_to_next(),
            Action::GoTo(index) => self.go_to_index(index)?,
        }
        Ok(())
    }

    /// Turning autoplay on arms a timer for the current image; turning it off
    /// tears the live timer down.
    pub fn set_autoplay(&mut self, enabled: bool) {
        if self.autoplay == enabled {
            return;
        }
        self.autoplay = enabled;
        if enabled {
            self.arm_timer();
        } else {
            self.timer.cancel();
            debug!("autoplay disabled, timer cancelled");
        }
    }

    /// Let `dt` pass on the autoplay timer. Each firing advances like the next
    /// arrow, and the following delay is taken from the image that became current.
    /// Returns the number of firings.
    pub fn tick(&mut self, dt: Duration) -> usize {
        let mut budget = dt;
        let mut fired = 0;
        while let Some(remaining) = self.timer.remaining() {
            if budget < remaining {
                self.timer.advance(budget);
                break;
            }
            budget -= remaining;
            self.timer.advance(remaining);
            fired += 1;
            self.go_to_next();
        }
        fired
    }

    pub fn unmount(mut self) {
        self.timer.cancel();
        info!(last = self.current_index(), "carousel unmounted");
    }

    /// How long the current image stays up before autoplay advances.
    pub fn current_delay(&self) -> Duration {
        self.current_image().display_duration(self.config.images_duration())
    }

    fn index_changed(&mut self) {
        debug!(index = self.current_index(), "current image changed");
        self.arm_timer();
    }

    fn arm_timer(&mut self) {
        if !self.autoplay {
            return;
        }
        let delay = self.current_delay();
        let generation = self.timer.rearm(delay);
        debug!(generation, delay_ms = delay.as_millis() as u64, "autoplay timer armed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(n: usize) -> Vec<ImageDescriptor> {
        (0..n).map(|i| ImageDescriptor::new(format!("{i}.jpg"))).collect()
    }

    fn config(n: usize) -> CarouselConfig {
        CarouselConfig::new(images(n), "300px")
    }

    #[test]
    fn test_mount_arms_timer_only_with_autoplay() {
        let carousel = Carousel::mount(config(3)).unwrap();
        assert_eq!(carousel.timer().live_count(), 1);
        assert_eq!(carousel.timer().delay(), Some(Duration::from_millis(5000)));

        let mut cfg = config(3);
        cfg.autoplay = false;
        let carousel = Carousel::mount(cfg).unwrap();
        assert_eq!(carousel.timer().live_count(), 0);
    }

    #[test]
    fn test_mount_rejects_bad_preconditions() {
        assert!(Carousel::mount(config(0)).is_err());

        let mut cfg = config(2);
        cfg.first_image_index = 5;
        assert!(Carousel::mount(cfg).is_err());
    }

    #[test]
    fn test_navigation_rearms_timer() {
        let mut carousel = Carousel::mount(config(3)).unwrap();
        let before = carousel.timer().generation();

        carousel.go_to_next();
        let after = carousel.timer().generation();
        assert_ne!(before, after);
        assert_eq!(carousel.timer().live_count(), 1);

        // Selecting the current image again is not a change.
        carousel.go_to_index(1).unwrap();
        assert_eq!(carousel.timer().generation(), after);
    }

    #[test]
    fn test_manual_navigation_restarts_delay() {
        let mut cfg = config(3);
        cfg.images_duration = 1000;
        let mut carousel = Carousel::mount(cfg).unwrap();

        carousel.tick(Duration::from_millis(900));
        carousel.go_to_index(2).unwrap();
        assert_eq!(carousel.tick(Duration::from_millis(900)), 0);
        assert_eq!(carousel.current_index(), 2);
        assert_eq!(carousel.tick(Duration::from_millis(100)), 1);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_tick_spanning_several_delays() {
        let mut cfg = config(3);
        cfg.images_duration = 1000;
        let mut carousel = Carousel::mount(cfg).unwrap();

        assert_eq!(carousel.tick(Duration::from_millis(2500)), 2);
        assert_eq!(carousel.current_index(), 2);
        assert_eq!(carousel.timer().remaining(), Some(Duration::from_millis(500)));
    }

    #[test]
    fn test_re_enabling_autoplay_arms_fresh_timer() {
        let mut carousel = Carousel::mount(config(2)).unwrap();
        carousel.set_autoplay(false);
        assert!(!carousel.timer().is_armed());
        assert_eq!(carousel.tick(Duration::from_secs(60)), 0);

        carousel.set_autoplay(true);
        assert_eq!(carousel.timer().remaining(), Some(Duration::from_millis(5000)));
    }

    #[test]
    fn test_dispatch_out_of_range_leaves_state() {
        let mut carousel = Carousel::mount(config(2)).unwrap();
        assert!(carousel.dispatch(Action::GoTo(7)).is_err());
        assert_eq!(carousel.current_index(), 0);
    }
}
