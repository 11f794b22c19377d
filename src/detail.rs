use log::debug;
use raylib::prelude::*;
use crate::constants::*;
use crate::layout::{center, contains, fit_contain, ModalLayout};
use crate::scroll_lock::{PageScroll, ScrollLockGuard};

/// What the modal is showing.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailContent {
    pub slide: usize,
    pub description: String,
}

struct OpenDetail {
    content: DetailContent,
    fade: ease::Tween,
    opacity: f32,
    _scroll_lock: ScrollLockGuard,
}

/// Modal viewer for one slide. Keeps the page scroll locked for exactly as
/// long as it is open, on every way it can close.
pub struct DetailViewer {
    scroll: PageScroll,
    open: Option<OpenDetail>,
}

impl DetailViewer {
    pub fn new(scroll: PageScroll) -> Self {
        Self { scroll, open: None }
    }

    pub fn open(&mut self, content: DetailContent) {
        debug!("opening detail viewer for slide {}", content.slide);
        // Replace first so a re-open never stacks two locks.
        self.open = None;
        self.open = Some(OpenDetail {
            content,
            fade: ease::Tween::new(ease::linear_none, 0.0, 1.0, MODAL_FADE_DURATION),
            opacity: 0.0,
            _scroll_lock: self.scroll.lock(),
        });
    }

    pub fn close(&mut self) -> bool {
        self.open.take().is_some()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn content(&self) -> Option<&DetailContent> {
        self.open.as_ref().map(|o| &o.content)
    }

    pub fn opacity(&self) -> f32 {
        self.open.as_ref().map_or(0.0, |o| o.opacity)
    }

    pub fn update(&mut self, dt: f32) {
        if let Some(open) = self.open.as_mut() {
            open.opacity = open.fade.apply(dt).clamp(0.0, 1.0);
        }
    }

    /// Closes on the close button or anywhere outside the content box.
    /// Returns whether the click was consumed by the modal.
    pub fn click(&mut self, point: Vector2, layout: &ModalLayout) -> bool {
        if !self.is_open() {
            return false;
        }
        if contains(layout.close_button, point) || !contains(layout.content, point) {
            self.close();
        }
        true
    }

    pub fn draw(&self, d: &mut impl RaylibDraw, layout: &ModalLayout, screen: Rectangle, texture: Option<&Texture2D>) {
        let Some(open) = self.open.as_ref() else {
            return;
        };
        let alpha = |max: f32| (max * open.opacity) as u8;

        d.draw_rectangle_rec(screen, Color::new(0, 0, 0, alpha(128.0)));
        d.draw_rectangle_rounded(layout.content, 0.04, 8, Color::new(255, 255, 255, alpha(255.0)));

        if let Some(texture) = texture {
            let (tw, th) = (texture.width() as f32, texture.height() as f32);
            let bounds = Vector2::new(layout.image_box.width, layout.image_box.height);
            let scale = fit_contain(tw, th, bounds);
            let (w, h) = (tw * scale, th * scale);
            d.draw_texture_pro(
                texture,
                Rectangle::new(0.0, 0.0, tw, th),
                Rectangle::new(
                    layout.image_box.x + (bounds.x - w) * 0.5,
                    layout.image_box.y + (bounds.y - h) * 0.5,
                    w,
                    h,
                ),
                Vector2::new(0.0, 0.0),
                0.0,
                Color::new(255, 255, 255, alpha(255.0)),
            );
        }

        d.draw_text(
            &open.content.description,
            layout.text_origin.x as i32,
            layout.text_origin.y as i32,
            18,
            Color::new(0, 0, 0, alpha(255.0)),
        );
        let close = center(layout.close_button);
        d.draw_text(
            "X",
            (close.x - 7.0) as i32,
            (close.y - 12.0) as i32,
            24,
            Color::new(40, 40, 40, alpha(255.0)),
        );
    }
}
