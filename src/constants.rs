pub const DEFAULT_IMAGES_DURATION_MS: u64 = 5000; // Time each image stays current during autoplay
pub const DEFAULT_WIDTH: &str = "100%";            // Frame width when none is configured

pub const WINDOW_WIDTH: i32 = 960;                 // Initial viewer window width
pub const WINDOW_HEIGHT: i32 = 540;                // Initial viewer window height
pub const FPS: u32 = 60;                           // Frames per second

pub const CSS_SUFFIX: &str = "-carousel";          // Suffix scoping every emitted utility class
