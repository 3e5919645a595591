use std::time::Duration;

use carousel::{Action, Carousel, CarouselConfig, ImageDescriptor};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn images(names: &[&str]) -> Vec<ImageDescriptor> {
    names.iter().map(|n| ImageDescriptor::new(format!("{n}.jpg")).with_alt(*n)).collect()
}

fn mount(names: &[&str], configure: impl FnOnce(&mut CarouselConfig)) -> Carousel {
    let mut config = CarouselConfig::new(images(names), "400px");
    configure(&mut config);
    Carousel::mount(config).unwrap()
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn next_arrow_wraps_to_first_image() {
    let mut carousel = mount(&["A", "B", "C"], |_| {});
    assert_eq!(carousel.current_image().alt_text, "A");

    carousel.dispatch(Action::Next).unwrap();
    carousel.dispatch(Action::Next).unwrap();
    assert_eq!(carousel.current_image().alt_text, "C");

    carousel.dispatch(Action::Next).unwrap();
    assert_eq!(carousel.current_image().alt_text, "A");
}

#[test]
fn next_arrow_clamps_without_loop() {
    let mut carousel = mount(&["A", "B"], |c| {
        c.loop_images = false;
        c.first_image_index = 1;
    });
    carousel.dispatch(Action::Next).unwrap();
    assert_eq!(carousel.current_image().alt_text, "B");
}

#[test]
fn previous_arrow_wraps_and_clamps() {
    let mut looping = mount(&["A", "B", "C"], |_| {});
    looping.go_to_previous();
    assert_eq!(looping.current_index(), 2);

    let mut clamped = mount(&["A", "B", "C"], |c| c.loop_images = false);
    clamped.go_to_previous();
    assert_eq!(clamped.current_index(), 0);
}

#[test]
fn autoplay_wraps_after_three_firings() {
    let mut carousel = mount(&["A", "B", "C"], |c| c.images_duration = 1000);

    let mut seen = vec![carousel.current_index()];
    for _ in 0..3 {
        assert_eq!(carousel.tick(ms(1000)), 1);
        seen.push(carousel.current_index());
    }
    assert_eq!(seen, [0, 1, 2, 0]);
}

#[test]
fn autoplay_stalls_at_last_image_without_loop() {
    let mut carousel = mount(&["A", "B", "C"], |c| {
        c.images_duration = 1000;
        c.loop_images = false;
    });

    let mut seen = vec![carousel.current_index()];
    for _ in 0..3 {
        carousel.tick(ms(1000));
        seen.push(carousel.current_index());
    }
    assert_eq!(seen, [0, 1, 2, 2]);
    // The interval keeps running while stalled.
    assert_eq!(carousel.timer().live_count(), 1);
}

#[test]
fn per_image_duration_takes_priority() {
    let mut config = CarouselConfig::new(images(&["A", "B"]), "400px");
    config.images[0].duration_override = Some(200);
    let mut carousel = Carousel::mount(config).unwrap();

    assert_eq!(carousel.tick(ms(199)), 0);
    assert_eq!(carousel.tick(ms(1)), 1);
    assert_eq!(carousel.current_index(), 1);

    // Image B has no override and uses the 5000ms default.
    assert_eq!(carousel.timer().delay(), Some(ms(5000)));
}

#[test]
fn zero_duration_override_uses_global_duration() {
    let mut config = CarouselConfig::new(images(&["A", "B"]), "400px");
    config.images[0].duration_override = Some(0);
    config.images_duration = 300;
    let mut carousel = Carousel::mount(config).unwrap();

    assert_eq!(carousel.tick(ms(299)), 0);
    assert_eq!(carousel.tick(ms(1)), 1);
}

#[test]
fn disabling_autoplay_stops_advances_but_dots_still_work() {
    let mut carousel = mount(&["A", "B", "C"], |c| c.images_duration = 100);
    carousel.set_autoplay(false);

    assert_eq!(carousel.tick(ms(10_000)), 0);
    assert_eq!(carousel.current_index(), 0);

    carousel.dispatch(Action::GoTo(2)).unwrap();
    assert_eq!(carousel.current_index(), 2);
    assert_eq!(carousel.timer().live_count(), 0);
}

#[test]
fn dot_click_while_autoplaying() {
    let mut carousel = mount(&["A", "B", "C", "D"], |c| c.images_duration = 1000);
    carousel.tick(ms(600));
    carousel.dispatch(Action::GoTo(3)).unwrap();
    assert_eq!(carousel.current_index(), 3);

    // A fresh full delay starts from the click.
    assert_eq!(carousel.timer().remaining(), Some(ms(1000)));
}

#[test]
fn random_walks_keep_index_in_bounds_with_one_live_timer() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..200 {
        let len = rng.random_range(1..8);
        let mut config = CarouselConfig::new((0..len).map(|i| ImageDescriptor::new(format!("{i}.jpg"))).collect(), "1px");
        config.loop_images = rng.random_bool(0.5);
        config.autoplay = rng.random_bool(0.7);
        config.images_duration = rng.random_range(1..500);
        config.first_image_index = rng.random_range(0..len);
        for image in &mut config.images {
            if rng.random_bool(0.3) {
                image.duration_override = Some(rng.random_range(0..300));
            }
        }
        let mut carousel = Carousel::mount(config).unwrap();

        for _ in 0..100 {
            match rng.random_range(0..5) {
                0 => carousel.go_to_previous(),
                1 => carousel.go_to_next(),
                2 => carousel.go_to_index(rng.random_range(0..len)).unwrap(),
                3 => {
                    carousel.tick(ms(rng.random_range(0..2000)));
                }
                _ => {
                    let enabled = !carousel.autoplay();
                    carousel.set_autoplay(enabled);
                }
            }
            assert!(carousel.current_index() < len);
            assert!(carousel.timer().live_count() <= 1);
            assert_eq!(carousel.timer().is_armed(), carousel.autoplay());
        }
        carousel.unmount();
    }
}
