use log::{info, warn};
use raylib::prelude::*;
use crate::detail::{DetailContent, DetailViewer};
use crate::engine::Engine;
use crate::error::Result;
use crate::layout::{contains, GalleryLayout, ModalLayout};
use crate::manifest::Gallery;
use crate::navigator::Direction;
use crate::page::ContentFx;
use crate::scroll_lock::PageScroll;
use crate::slider::controller::SliderController;
use crate::slider::slide::{draw_overlay, draw_section, image_hit_box};
use crate::texture_loader::load_texture_with_exif_rotation;

pub struct SliderEngine {
    gallery: Gallery,
    textures: Vec<Texture2D>,
    controller: SliderController,
    detail: DetailViewer,
    size: Vector2,
}

impl SliderEngine {
    pub fn load(rl: &mut RaylibHandle, thread: &RaylibThread, gallery: Gallery, scroll: PageScroll) -> Result<Self> {
        let (gallery, textures) = load_textures(rl, thread, gallery)?;
        let size = Vector2::new(rl.get_screen_width() as f32, rl.get_screen_height() as f32);
        Ok(Self {
            controller: SliderController::new(&gallery.slides),
            gallery,
            textures,
            detail: DetailViewer::new(scroll),
            size,
        })
    }

    /// Swaps in a freshly loaded gallery. Navigation starts over on the first
    /// slide and an open detail viewer is closed.
    pub fn replace(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, gallery: Gallery) -> Result<()> {
        let (gallery, textures) = load_textures(rl, thread, gallery)?;
        self.detail.close();
        self.controller.sync(&gallery.slides);
        self.gallery = gallery;
        self.textures = textures;
        Ok(())
    }

    pub fn is_idle(&self) -> bool {
        self.controller.is_idle()
    }

    pub fn navigate(&mut self, direction: Direction) -> bool {
        self.controller.navigate(direction)
    }

    pub fn detail_open(&self) -> bool {
        self.detail.is_open()
    }

    pub fn close_detail(&mut self) -> bool {
        self.detail.close()
    }

    /// Routes a click to the open detail viewer, or tries a direct select.
    /// Returns whether the click was used.
    pub fn click(&mut self, point: Vector2) -> bool {
        if self.detail.is_open() {
            let layout = ModalLayout::new(self.size.x, self.size.y);
            return self.detail.click(point, &layout);
        }

        let index = self.controller.current_index();
        let texture_size = self
            .textures
            .get(index)
            .map(|t| Vector2::new(t.width() as f32, t.height() as f32));
        let layout = GalleryLayout::new(self.size.x, self.size.y);
        match direct_select(&self.controller, &self.gallery, texture_size, &layout, point) {
            Some(content) => {
                self.detail.open(content);
                true
            }
            None => false,
        }
    }

    /// Drawn separately so the modal ends up above the navbar.
    pub fn draw_detail(&self, d: &mut RaylibDrawHandle) {
        let layout = ModalLayout::new(self.size.x, self.size.y);
        let texture = self.detail.content().and_then(|c| self.textures.get(c.slide));
        let screen = Rectangle::new(0.0, 0.0, self.size.x, self.size.y);
        self.detail.draw(d, &layout, screen, texture);
    }
}

impl Engine for SliderEngine {
    fn update(&mut self, dt: f32, width: f32, height: f32) {
        self.size = Vector2::new(width, height);
        self.controller.update(dt);
        self.detail.update(dt);
    }

    fn draw(&self, d: &mut RaylibDrawHandle, width: f32, height: f32, fx: ContentFx) {
        d.clear_background(Color::BLACK);
        let mut layout = GalleryLayout::new(width, height);
        layout.heading_origin.y += fx.offset_y;
        layout.image_box.y += fx.offset_y;
        layout.overlay_box.y += fx.offset_y;

        for layer in self.controller.visible_layers() {
            if let (Some(slide), Some(texture)) = (self.gallery.slides.get(layer.slide), self.textures.get(layer.slide)) {
                draw_section(d, layer.slide, &slide.title, texture, self.controller.slide_pose(layer.slide), &layout);
            }
        }

        for layer in self.controller.overlay_layers() {
            if let Some(texture) = self.textures.get(layer.slide) {
                draw_overlay(d, texture, self.controller.overlay_pose(layer.slide), &layout);
            }
        }

        d.draw_text(
            &self.controller.counter_text(),
            layout.counter_origin.x as i32,
            (layout.counter_origin.y + fx.offset_y) as i32,
            layout.counter_size,
            Color::WHITE,
        );

        if fx.opacity < 1.0 {
            let veil = ((1.0 - fx.opacity.clamp(0.0, 1.0)) * 255.0) as u8;
            d.draw_rectangle(0, 0, width as i32, height as i32, Color::new(0, 0, 0, veil));
        }
    }
}

/// Direct select: a click on the current slide's image or on the overlay
/// image picks that slide for the detail viewer. Only reads the controller,
/// so it never starts a transition.
pub fn direct_select(
    controller: &SliderController,
    gallery: &Gallery,
    texture_size: Option<Vector2>,
    layout: &GalleryLayout,
    point: Vector2,
) -> Option<DetailContent> {
    let index = controller.current_index();
    let texture_size = texture_size?;
    if !contains(image_hit_box(texture_size, layout), point) && !contains(layout.overlay_box, point) {
        return None;
    }
    let slide = gallery.slides.get(index)?;
    Some(DetailContent {
        slide: index,
        description: gallery.describe(&slide.title),
    })
}

/// Loads a texture per slide. Slides whose image cannot be decoded are
/// dropped together with their title; no decodable image at all is an error.
fn load_textures(rl: &mut RaylibHandle, thread: &RaylibThread, gallery: Gallery) -> Result<(Gallery, Vec<Texture2D>)> {
    let mut textures = Vec::new();
    let mut loaded = Vec::new();
    for slide in gallery.slides.iter() {
        match load_texture_with_exif_rotation(rl, thread, &slide.image) {
            Ok(texture) => {
                textures.push(texture);
                loaded.push(true);
            }
            Err(e) => {
                warn!("skipping slide {:?}: {}", slide.title, e);
                loaded.push(false);
            }
        }
    }

    if textures.len() == gallery.slides.len() {
        info!("loaded {} slides", textures.len());
        return Ok((gallery, textures));
    }

    let slides = gallery.slides.retain(|i, _| loaded[i])?;
    info!("loaded {} of {} slides", slides.len(), gallery.slides.len());
    Ok((Gallery { slides, ..gallery }, textures))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use crate::layout::center;
    use crate::manifest::{default_about, default_contact};
    use crate::slide::SlideSet;

    fn gallery() -> Gallery {
        let paths = ["dawn.jpg", "dusk.jpg", "night.jpg"].map(PathBuf::from).to_vec();
        Gallery {
            slides: SlideSet::from_paths(paths).expect("non-empty set"),
            artist: Some("Okan".into()),
            about: default_about(),
            contact: default_contact(),
        }
    }

    fn moved_to_second(gallery: &Gallery) -> SliderController {
        let mut controller = SliderController::new(&gallery.slides);
        controller.navigate(Direction::Forward);
        controller.update(10.0);
        controller
    }

    fn square() -> Vector2 {
        Vector2::new(500.0, 500.0)
    }

    #[test]
    fn click_on_the_slide_image_selects_the_current_slide() {
        let gallery = gallery();
        let controller = moved_to_second(&gallery);
        let layout = GalleryLayout::new(1920.0, 1080.0);
        let point = center(image_hit_box(square(), &layout));

        let content = direct_select(&controller, &gallery, Some(square()), &layout, point)
            .expect("image hit opens the viewer");
        assert_eq!(content.slide, 1);
        assert_eq!(content.description, "DUSK - Art by Okan");
        assert_eq!(controller.current_index(), 1);
        assert!(controller.is_idle());
    }

    #[test]
    fn click_on_the_overlay_selects_the_current_slide() {
        let gallery = gallery();
        let controller = moved_to_second(&gallery);
        let layout = GalleryLayout::new(1920.0, 1080.0);
        let point = center(layout.overlay_box);

        let content = direct_select(&controller, &gallery, Some(square()), &layout, point)
            .expect("overlay hit opens the viewer");
        assert_eq!(content.slide, 1);
        assert_eq!(controller.current_index(), 1);
        assert!(controller.is_idle());
    }

    #[test]
    fn click_elsewhere_selects_nothing() {
        let gallery = gallery();
        let controller = SliderController::new(&gallery.slides);
        let layout = GalleryLayout::new(1920.0, 1080.0);
        let heading = Vector2::new(layout.heading_origin.x + 5.0, layout.heading_origin.y + 5.0);

        for point in [Vector2::new(5.0, 5.0), heading] {
            assert_eq!(direct_select(&controller, &gallery, Some(square()), &layout, point), None);
        }
        let on_image = center(image_hit_box(square(), &layout));
        assert_eq!(direct_select(&controller, &gallery, None, &layout, on_image), None);
        assert_eq!(controller.current_index(), 0);
        assert!(controller.is_idle());
    }
}
