// --- Widget defaults ---
pub const DEFAULT_INTERVAL_MS: u64 = 3000;    // Autoplay period when `interval` is absent (milliseconds)
pub const DEFAULT_WIDTH: &str = "100%";       // Container width when `width` is absent
pub const DEFAULT_HEIGHT: &str = "300px";     // Container height when `height` is absent

// --- View geometry (pixels) ---
pub const NAV_BUTTON_WIDTH: f32 = 36.0;
pub const NAV_BUTTON_HEIGHT: f32 = 40.0;
pub const INDICATOR_DOT_SIZE: f32 = 10.0;
pub const INDICATOR_DOT_MARGIN: f32 = 5.0;    // Horizontal margin on each side of a dot
pub const INDICATOR_BOTTOM_OFFSET: f32 = 10.0;

// --- Host window ---
pub const WINDOW_WIDTH: i32 = 1280;
pub const WINDOW_HEIGHT: i32 = 720;
pub const FPS: u32 = 60;
pub const TRANSITION_DURATION: f32 = 0.5;     // Slide strip transition (seconds)
pub const INTERVAL_STEP_MS: u64 = 500;        // Interval change per `+`/`-` key press
