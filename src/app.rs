use std::path::PathBuf;
use log::{error, info};
use raylib::prelude::*;
use crate::engine::Engine;
use crate::error::Result;
use crate::input::{FrameInput, InputAdapter, InputContext, Intent};
use crate::manifest;
use crate::page::{NavTarget, Navbar, Page, PageEvent, PageSwitcher};
use crate::scroll_lock::PageScroll;
use crate::slider::engine::SliderEngine;
use crate::text_page::TextPageEngine;

#[derive(Debug, Clone, Copy)]
struct ClickContext {
    detail_open: bool,
    on_navbar: bool,
    drawer_open: bool,
    page: Page,
    page_transitioning: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClickRoute {
    Detail,
    Navbar,
    CloseDrawer,
    Slider,
    Ignored,
}

/// Who gets a click: the open modal first, then the navbar, then the
/// gallery page once no wipe is running.
fn route_click(ctx: ClickContext) -> ClickRoute {
    if ctx.detail_open {
        ClickRoute::Detail
    } else if ctx.on_navbar {
        ClickRoute::Navbar
    } else if ctx.drawer_open {
        ClickRoute::CloseDrawer
    } else if ctx.page == Page::Gallery && !ctx.page_transitioning {
        ClickRoute::Slider
    } else {
        ClickRoute::Ignored
    }
}

/// The whole window: gallery, text pages, navbar and page wipe.
pub struct App {
    source: PathBuf,
    artist: Option<String>,
    scroll: PageScroll,
    input: InputAdapter,
    pages: PageSwitcher,
    navbar: Navbar,
    slider: SliderEngine,
    about: TextPageEngine,
    contact: TextPageEngine,
}

impl App {
    pub fn new(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        source: PathBuf,
        artist: Option<String>,
    ) -> Result<Self> {
        let mut gallery = manifest::load(&source)?;
        if artist.is_some() {
            gallery.artist = artist.clone();
        }
        let scroll = PageScroll::new();
        let about = TextPageEngine::new(gallery.about.clone(), scroll.clone());
        let contact = TextPageEngine::new(gallery.contact.clone(), scroll.clone());
        let navbar = Navbar::new(rl.get_screen_width() as f32, gallery.artist.as_deref());
        let slider = SliderEngine::load(rl, thread, gallery, scroll.clone())?;

        Ok(Self {
            source,
            artist,
            scroll,
            input: InputAdapter::new(),
            pages: PageSwitcher::new(Page::Gallery),
            navbar,
            slider,
            about,
            contact,
        })
    }

    fn reload(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) -> Result<()> {
        let mut gallery = manifest::load(&self.source)?;
        if self.artist.is_some() {
            gallery.artist = self.artist.clone();
        }
        self.about.set_text(gallery.about.clone());
        self.contact.set_text(gallery.contact.clone());
        self.navbar.set_artist(gallery.artist.as_deref());
        self.slider.replace(rl, thread, gallery)?;
        info!("reloaded {:?}", self.source);
        Ok(())
    }

    fn engine(&self, page: Page) -> &dyn Engine {
        match page {
            Page::Gallery => &self.slider,
            Page::About => &self.about,
            Page::Contact => &self.contact,
        }
    }

    fn engine_mut(&mut self, page: Page) -> &mut dyn Engine {
        match page {
            Page::Gallery => &mut self.slider,
            Page::About => &mut self.about,
            Page::Contact => &mut self.contact,
        }
    }

    /// Handles this frame's input and advances every animation by `dt`.
    pub fn update(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, dt: f32) {
        let width = rl.get_screen_width() as f32;
        let height = rl.get_screen_height() as f32;
        self.navbar.resize(width);

        let ctx = InputContext {
            page: self.pages.current(),
            idle: self.slider.is_idle(),
            scroll_locked: self.scroll.is_locked(),
        };
        let frame = FrameInput::capture(rl);
        for intent in self.input.interpret(&frame, ctx) {
            self.apply(intent, rl, thread, height);
        }

        for event in self.pages.update(dt) {
            if let PageEvent::Swapped(page) = event {
                self.scroll.set_offset(0.0);
                info!("showing {:?}", page);
            }
        }

        let page = self.pages.current();
        self.engine_mut(page).update(dt, width, height);
        if page != Page::Gallery {
            // The detail viewer's fade keeps running even when the gallery is hidden.
            self.slider.update(dt, width, height);
        }
    }

    fn apply(&mut self, intent: Intent, rl: &mut RaylibHandle, thread: &RaylibThread, height: f32) {
        match intent {
            Intent::Navigate(direction) => {
                if self.pages.current() == Page::Gallery && !self.slider.detail_open() {
                    self.slider.navigate(direction);
                }
            }
            Intent::Click(point) => {
                let ctx = ClickContext {
                    detail_open: self.slider.detail_open(),
                    on_navbar: self.navbar.hit(point).is_some(),
                    drawer_open: self.navbar.is_drawer_open(),
                    page: self.pages.current(),
                    page_transitioning: self.pages.is_transitioning(),
                };
                match route_click(ctx) {
                    ClickRoute::Detail | ClickRoute::Slider => {
                        self.slider.click(point);
                    }
                    ClickRoute::Navbar => {
                        if let Some(NavTarget::Page(page)) = self.navbar.click(point) {
                            self.pages.request(page);
                        }
                    }
                    ClickRoute::CloseDrawer => {
                        self.navbar.close_drawer();
                    }
                    ClickRoute::Ignored => {}
                }
            }
            Intent::Scroll(delta) => {
                let max = match self.pages.current() {
                    Page::About => self.about.max_scroll(height),
                    Page::Contact => self.contact.max_scroll(height),
                    Page::Gallery => 0.0,
                };
                self.scroll.scroll_by(delta, max);
            }
            Intent::Dismiss => {
                if !self.slider.close_detail() {
                    self.navbar.close_drawer();
                }
            }
            Intent::ShowPage(page) => {
                if !self.slider.detail_open() {
                    self.navbar.close_drawer();
                    self.pages.request(page);
                }
            }
            Intent::Reload => {
                if let Err(e) = self.reload(rl, thread) {
                    error!("reload failed, keeping the current gallery: {}", e);
                }
            }
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        let width = d.get_screen_width();
        let height = d.get_screen_height();
        let page = self.pages.current();

        self.engine(page).draw(d, width as f32, height as f32, self.pages.content_fx());
        self.navbar.draw(d, page);
        self.slider.draw_detail(d);
        self.pages.draw_wipe(d, width, height);
    }
}
