use raylib::prelude::*;
use crate::page::ContentFx;

/// One page's worth of content: advanced every frame, drawn under the navbar.
pub trait Engine {
    fn update(&mut self, dt: f32, width: f32, height: f32);
    fn draw(&self, d: &mut RaylibDrawHandle, width: f32, height: f32, fx: ContentFx);
}
