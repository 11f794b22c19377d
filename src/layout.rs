use raylib::prelude::*;
use crate::constants::*;

/// Scale that fits a `width` x `height` image inside `bounds` without cropping.
pub fn fit_contain(width: f32, height: f32, bounds: Vector2) -> f32 {
    if width <= 0.0 || height <= 0.0 {
        return 1.0;
    }
    (bounds.x / width).min(bounds.y / height)
}

/// Scale that fills `bounds` completely, cropping the overflow.
pub fn fit_cover(width: f32, height: f32, bounds: Vector2) -> f32 {
    if width <= 0.0 || height <= 0.0 {
        return 1.0;
    }
    (bounds.x / width).max(bounds.y / height)
}

pub fn contains(rect: Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x <= rect.x + rect.width
        && point.y >= rect.y
        && point.y <= rect.y + rect.height
}

pub fn center(rect: Rectangle) -> Vector2 {
    Vector2::new(rect.x + rect.width * 0.5, rect.y + rect.height * 0.5)
}

/// Rect of `size` centered on `center`.
pub fn centered(center: Vector2, size: Vector2) -> Rectangle {
    Rectangle::new(center.x - size.x * 0.5, center.y - size.y * 0.5, size.x, size.y)
}

/// Where the pieces of the gallery page sit for a given window size.
#[derive(Debug, Clone, Copy)]
pub struct GalleryLayout {
    pub screen: Rectangle,
    pub heading_origin: Vector2,
    pub heading_size: i32,
    pub image_box: Rectangle,
    pub overlay_box: Rectangle,
    pub counter_origin: Vector2,
    pub counter_size: i32,
}

impl GalleryLayout {
    pub fn new(width: f32, height: f32) -> Self {
        let scale = (height / RENDER_HEIGHT as f32).max(0.25);
        let image_box = Rectangle::new(width * 0.08, height * 0.55, width * 0.22, height * 0.30);
        let overlay_box = Rectangle::new(width * 0.55, height * 0.20, width * 0.35, height * 0.62);

        Self {
            screen: Rectangle::new(0.0, 0.0, width, height),
            heading_origin: Vector2::new(width * 0.08, height * 0.30),
            heading_size: (120.0 * scale) as i32,
            image_box,
            overlay_box,
            counter_origin: Vector2::new(overlay_box.x, overlay_box.y - 60.0 * scale),
            counter_size: (40.0 * scale) as i32,
        }
    }
}

/// The modal's content box and its close button.
#[derive(Debug, Clone, Copy)]
pub struct ModalLayout {
    pub content: Rectangle,
    pub image_box: Rectangle,
    pub text_origin: Vector2,
    pub close_button: Rectangle,
}

impl ModalLayout {
    pub fn new(width: f32, height: f32) -> Self {
        let narrow = width <= 768.0;
        let (w, h) = if narrow {
            (width * 0.8, height * 0.9)
        } else {
            ((width * 0.9).min(800.0), (height * 0.8).min(600.0))
        };
        let content = centered(Vector2::new(width * 0.5, height * 0.5), Vector2::new(w, h));

        // Side by side on wide windows, stacked on narrow ones.
        let (image_box, text_origin) = if narrow {
            (
                Rectangle::new(content.x, content.y, w, h * 0.5),
                Vector2::new(content.x + 20.0, content.y + h * 0.5 + 20.0),
            )
        } else {
            (
                Rectangle::new(content.x, content.y, w * 0.5, h),
                Vector2::new(content.x + w * 0.5 + 20.0, content.y + h * 0.5),
            )
        };

        Self {
            content,
            image_box,
            text_origin,
            close_button: Rectangle::new(content.x + w - 40.0, content.y + 10.0, 30.0, 30.0),
        }
    }
}
