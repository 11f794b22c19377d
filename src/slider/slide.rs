use raylib::core::text::measure_text;
use raylib::prelude::*;
use crate::layout::{fit_contain, fit_cover, GalleryLayout};
use crate::timeline::{OverlayPose, SlidePose};

const BACKGROUNDS: [Color; 5] = [
    Color::new(0x6d, 0x5a, 0x72, 0xff),
    Color::new(0x3d, 0x52, 0x6b, 0xff),
    Color::new(0x8a, 0x5a, 0x44, 0xff),
    Color::new(0x2f, 0x5d, 0x50, 0xff),
    Color::new(0x5c, 0x4b, 0x3a, 0xff),
];

fn faded(color: Color, opacity: f32) -> Color {
    Color::new(color.r, color.g, color.b, (color.a as f32 * opacity.clamp(0.0, 1.0)) as u8)
}

/// Centered part of a `tw` x `th` texture seen through a zoom of `zoom`.
fn zoomed_source(tw: f32, th: f32, zoom: f32) -> Rectangle {
    let zoom = zoom.max(1.0);
    let (w, h) = (tw / zoom, th / zoom);
    Rectangle::new((tw - w) * 0.5, (th - h) * 0.5, w, h)
}

/// Draws one full-window slide section.
///
/// The outer wrapper is a window-sized clip that slides in from one side while
/// the content inside it slides the opposite way, so the content appears to
/// stay put and get uncovered.
pub fn draw_section<D: RaylibDraw>(
    d: &mut D,
    index: usize,
    title: &str,
    texture: &Texture2D,
    pose: SlidePose,
    layout: &GalleryLayout,
) {
    let width = layout.screen.width;
    let height = layout.screen.height;
    let outer = pose.outer_x / 100.0 * width;
    let inner = pose.inner_x / 100.0 * width;

    let clip_x = outer.max(0.0);
    let clip_w = (outer + width).min(width) - clip_x;
    if clip_w <= 0.0 {
        return;
    }

    let mut s = d.begin_scissor_mode(clip_x as i32, 0, clip_w.ceil() as i32, height as i32);
    let shift = outer + inner;

    s.draw_rectangle(shift as i32, 0, width as i32, height as i32, BACKGROUNDS[index % BACKGROUNDS.len()]);

    let heading_width = measure_text(title, layout.heading_size) as f32;
    let heading_x = layout.heading_origin.x + shift + pose.heading_x / 100.0 * heading_width;
    s.draw_text(
        title,
        heading_x as i32,
        layout.heading_origin.y as i32,
        layout.heading_size,
        faded(Color::WHITE, pose.heading_opacity),
    );

    let (tw, th) = (texture.width() as f32, texture.height() as f32);
    let dest = image_hit_box(Vector2::new(tw, th), layout);
    s.draw_texture_pro(
        texture,
        zoomed_source(tw, th, pose.image_scale),
        Rectangle::new(dest.x + shift, dest.y, dest.width, dest.height),
        Vector2::new(0.0, 0.0),
        0.0,
        Color::WHITE,
    );
}

/// Draws one large overlay image inside the overlay box.
pub fn draw_overlay<D: RaylibDraw>(d: &mut D, texture: &Texture2D, pose: OverlayPose, layout: &GalleryLayout) {
    let bounds = layout.overlay_box;
    let mut s = d.begin_scissor_mode(
        bounds.x as i32,
        bounds.y as i32,
        bounds.width as i32,
        bounds.height as i32,
    );

    let (tw, th) = (texture.width() as f32, texture.height() as f32);
    let scale = fit_cover(tw, th, Vector2::new(bounds.width, bounds.height));
    let (w, h) = (tw * scale * pose.scale_x, th * scale * pose.scale_y);
    let center = Vector2::new(
        bounds.x + bounds.width * 0.5 + pose.x / 100.0 * bounds.width,
        bounds.y + bounds.height * 0.5,
    );

    s.draw_texture_pro(
        texture,
        Rectangle::new(0.0, 0.0, tw, th),
        Rectangle::new(center.x, center.y, w, h),
        Vector2::new(w * 0.5, h * 0.5),
        0.0,
        Color::WHITE,
    );
}

/// On-screen rect of the resting slide image, for click-to-select.
pub fn image_hit_box(texture_size: Vector2, layout: &GalleryLayout) -> Rectangle {
    let (tw, th) = (texture_size.x, texture_size.y);
    let bounds = layout.image_box;
    let scale = fit_contain(tw, th, Vector2::new(bounds.width, bounds.height));
    let (w, h) = (tw * scale, th * scale);
    Rectangle::new(
        bounds.x + (bounds.width - w) * 0.5,
        bounds.y + (bounds.height - h) * 0.5,
        w,
        h,
    )
}
