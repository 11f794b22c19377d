pub const RENDER_WIDTH: i32 = 1920;           // Reference width, the window opens at half of it
pub const RENDER_HEIGHT: i32 = 1080;          // Reference height
pub const FPS: u32 = 60;                      // Default frames per second

pub const SLIDE_DURATION: f32 = 1.0;          // Length of the slide timeline (timeline units)
pub const SLIDE_TIME_SCALE: f32 = 0.8;        // Timeline units per second
pub const COUNTER_CUE: f32 = 0.32;            // Timeline position where the counter flips

pub const HEADING_SHIFT: f32 = 30.0;          // Heading travel in percent of its width
pub const HEADING_DIM: f32 = 0.3;             // Heading opacity at the far end of its travel
pub const WRAPPER_SHIFT: f32 = 100.0;         // Outer / inner wrapper travel in percent
pub const OVERLAY_SHIFT: f32 = 125.0;         // Overlay image travel in percent
pub const OVERLAY_STRETCH_X: f32 = 1.5;
pub const OVERLAY_STRETCH_Y: f32 = 1.3;
pub const IMAGE_ZOOM: f32 = 2.0;              // Incoming slide image starts zoomed in

pub const GESTURE_TOLERANCE: f32 = 10.0;      // Pointer travel (px) before a drag counts
pub const WHEEL_TOLERANCE: f32 = 0.1;         // Accumulated wheel notches before a scroll counts
pub const SCROLL_STEP: f32 = 60.0;            // Text page scroll per wheel notch / arrow key (px)

pub const MODAL_FADE_DURATION: f32 = 0.3;     // Detail viewer fade-in (seconds)
pub const NAVBAR_HEIGHT: f32 = 80.0;
pub const NAVBAR_SLOT: f32 = 140.0;           // Width of one page link
pub const NAVBAR_NARROW_WIDTH: f32 = 768.0;   // At or below this, links move into the drawer
pub const DRAWER_WIDTH: f32 = 240.0;
pub const DRAWER_ITEM_HEIGHT: f32 = 60.0;

pub const PAGE_COVER_DURATION: f32 = 0.5;     // Wipe overlay sweeping in (seconds)
pub const PAGE_FADE_OUT_START: f32 = 0.2;
pub const PAGE_REVEAL_DURATION: f32 = 0.5;    // Content rising back in
pub const PAGE_UNCOVER_START: f32 = 0.7;
pub const PAGE_TRANSITION_DURATION: f32 = 1.2;
pub const PAGE_CONTENT_DROP: f32 = 20.0;      // Content vertical travel (px)
