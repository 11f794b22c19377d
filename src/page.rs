//! Pages, the navbar, and the wipe that runs when switching between pages.

use log::info;
use raylib::prelude::*;
use crate::constants::*;
use crate::layout::contains;
use crate::timeline::Track;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Gallery,
    About,
    Contact,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Gallery, Page::About, Page::Contact];

    pub fn label(self) -> &'static str {
        match self {
            Page::Gallery => "Home",
            Page::About => "About",
            Page::Contact => "Contact",
        }
    }
}

/// How the page content is displaced and faded by a running wipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentFx {
    pub opacity: f32,
    pub offset_y: f32,
}

impl ContentFx {
    pub const NONE: ContentFx = ContentFx {
        opacity: 1.0,
        offset_y: 0.0,
    };
}

/// The wipe overlay's horizontal coverage, anchored on one side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WipeFx {
    pub coverage: f32,
    pub from_left: bool,
}

struct PageTransition {
    target: Page,
    clock: f32,
    swapped: bool,
    cover: Track,
    uncover: Track,
    fade_out: Track,
    drop: Track,
    fade_in: Track,
    rise: Track,
}

impl PageTransition {
    fn new(target: Page) -> Self {
        let fade_out_length = PAGE_COVER_DURATION - PAGE_FADE_OUT_START;
        Self {
            target,
            clock: 0.0,
            swapped: false,
            cover: Track::new(ease::cubic_in_out, 0.0, 1.0, 0.0, PAGE_COVER_DURATION),
            uncover: Track::new(ease::cubic_in_out, 1.0, 0.0, PAGE_UNCOVER_START, PAGE_COVER_DURATION),
            fade_out: Track::new(ease::quad_out, 1.0, 0.0, PAGE_FADE_OUT_START, fade_out_length),
            drop: Track::new(ease::quad_out, 0.0, PAGE_CONTENT_DROP, PAGE_FADE_OUT_START, fade_out_length),
            fade_in: Track::new(ease::quad_out, 0.0, 1.0, PAGE_COVER_DURATION, PAGE_REVEAL_DURATION),
            rise: Track::new(ease::quad_out, -PAGE_CONTENT_DROP, 0.0, PAGE_COVER_DURATION, PAGE_REVEAL_DURATION),
        }
    }

    fn advance(&mut self, dt: f32) {
        let before = self.clock;
        let after = (before + dt).min(PAGE_TRANSITION_DURATION);
        for track in [
            &mut self.cover,
            &mut self.uncover,
            &mut self.fade_out,
            &mut self.drop,
            &mut self.fade_in,
            &mut self.rise,
        ] {
            track.advance(before, after);
        }
        self.clock = after;
    }

    fn is_covered(&self) -> bool {
        self.clock >= PAGE_COVER_DURATION
    }

    fn is_finished(&self) -> bool {
        self.clock >= PAGE_TRANSITION_DURATION
    }

    fn content(&self) -> ContentFx {
        if self.is_covered() {
            ContentFx {
                opacity: self.fade_in.value(),
                offset_y: self.rise.value(),
            }
        } else {
            ContentFx {
                opacity: self.fade_out.value(),
                offset_y: self.drop.value(),
            }
        }
    }

    fn wipe(&self) -> WipeFx {
        if self.clock < PAGE_UNCOVER_START {
            WipeFx {
                coverage: self.cover.value(),
                from_left: true,
            }
        } else {
            WipeFx {
                coverage: self.uncover.value(),
                from_left: false,
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageEvent {
    /// The wipe covers the window; the shown page just changed.
    Swapped(Page),
    Finished,
}

/// Tracks the shown page and runs one wipe at a time.
pub struct PageSwitcher {
    current: Page,
    transition: Option<PageTransition>,
}

impl PageSwitcher {
    pub fn new(initial: Page) -> Self {
        Self {
            current: initial,
            transition: None,
        }
    }

    pub fn current(&self) -> Page {
        self.current
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Starts a wipe toward `page`. Ignored when already there or mid-wipe.
    pub fn request(&mut self, page: Page) -> bool {
        if page == self.current || self.transition.is_some() {
            return false;
        }
        info!("switching page {:?} -> {:?}", self.current, page);
        self.transition = Some(PageTransition::new(page));
        true
    }

    pub fn update(&mut self, dt: f32) -> Vec<PageEvent> {
        let mut events = Vec::new();
        let Some(transition) = self.transition.as_mut() else {
            return events;
        };

        transition.advance(dt);
        if transition.is_covered() && !transition.swapped {
            transition.swapped = true;
            self.current = transition.target;
            events.push(PageEvent::Swapped(self.current));
        }
        if transition.is_finished() {
            self.transition = None;
            events.push(PageEvent::Finished);
        }
        events
    }

    pub fn content_fx(&self) -> ContentFx {
        self.transition.as_ref().map_or(ContentFx::NONE, PageTransition::content)
    }

    pub fn wipe_fx(&self) -> Option<WipeFx> {
        self.transition.as_ref().map(PageTransition::wipe)
    }

    pub fn draw_wipe(&self, d: &mut impl RaylibDraw, width: i32, height: i32) {
        let Some(wipe) = self.wipe_fx() else {
            return;
        };
        let covered = (width as f32 * wipe.coverage) as i32;
        if covered <= 0 {
            return;
        }
        let x = if wipe.from_left { 0 } else { width - covered };
        d.draw_rectangle_gradient_h(
            x,
            0,
            covered,
            height,
            Color::new(0x66, 0x7e, 0xea, 0xff),
            Color::new(0x76, 0x4b, 0xa2, 0xff),
        );
    }
}

/// What a click on the navbar landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Page(Page),
    /// The hamburger button shown on narrow windows.
    Menu,
    /// The open drawer, between its links.
    Drawer,
}

/// Page links along the top of the window, with the artist credit on the
/// left. Narrow windows get a hamburger that toggles a drawer holding the
/// same links.
pub struct Navbar {
    width: f32,
    brand: Option<String>,
    drawer_open: bool,
    font_size: i32,
}

impl Navbar {
    pub fn new(width: f32, artist: Option<&str>) -> Self {
        let mut navbar = Self {
            width,
            brand: None,
            drawer_open: false,
            font_size: 24,
        };
        navbar.set_artist(artist);
        navbar
    }

    pub fn set_artist(&mut self, artist: Option<&str>) {
        self.brand = artist.map(|a| format!("Art by {a}."));
    }

    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    /// Follows window resizes. Widening past the narrow breakpoint closes the drawer.
    pub fn resize(&mut self, width: f32) {
        self.width = width;
        if !self.is_narrow() {
            self.drawer_open = false;
        }
    }

    pub fn is_narrow(&self) -> bool {
        self.width <= NAVBAR_NARROW_WIDTH
    }

    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    pub fn close_drawer(&mut self) -> bool {
        std::mem::replace(&mut self.drawer_open, false)
    }

    /// Link rects laid out in the bar on wide windows.
    fn bar_items(&self) -> Vec<(Page, Rectangle)> {
        let start = self.width - NAVBAR_SLOT * Page::ALL.len() as f32 - 20.0;
        Page::ALL
            .iter()
            .enumerate()
            .map(|(i, page)| (*page, Rectangle::new(start + NAVBAR_SLOT * i as f32, 0.0, NAVBAR_SLOT, NAVBAR_HEIGHT)))
            .collect()
    }

    fn menu_button(&self) -> Rectangle {
        Rectangle::new(self.width - 60.0, (NAVBAR_HEIGHT - 40.0) * 0.5, 40.0, 40.0)
    }

    fn drawer(&self) -> Rectangle {
        let width = DRAWER_WIDTH.min(self.width);
        let height = DRAWER_ITEM_HEIGHT * Page::ALL.len() as f32 + 20.0;
        Rectangle::new(self.width - width, NAVBAR_HEIGHT, width, height)
    }

    fn drawer_items(&self) -> Vec<(Page, Rectangle)> {
        let drawer = self.drawer();
        Page::ALL
            .iter()
            .enumerate()
            .map(|(i, page)| {
                let y = drawer.y + 10.0 + DRAWER_ITEM_HEIGHT * i as f32;
                (*page, Rectangle::new(drawer.x, y, drawer.width, DRAWER_ITEM_HEIGHT))
            })
            .collect()
    }

    fn items(&self) -> Vec<(Page, Rectangle)> {
        match (self.is_narrow(), self.drawer_open) {
            (false, _) => self.bar_items(),
            (true, true) => self.drawer_items(),
            (true, false) => Vec::new(),
        }
    }

    pub fn hit(&self, point: Vector2) -> Option<NavTarget> {
        if self.is_narrow() && contains(self.menu_button(), point) {
            return Some(NavTarget::Menu);
        }
        if let Some((page, _)) = self.items().iter().find(|(_, rect)| contains(*rect, point)) {
            return Some(NavTarget::Page(*page));
        }
        if self.is_narrow() && self.drawer_open && contains(self.drawer(), point) {
            return Some(NavTarget::Drawer);
        }
        None
    }

    /// Applies a click: the hamburger toggles the drawer and a drawer link
    /// closes it. Returns what was hit; `None` leaves the click to the page.
    pub fn click(&mut self, point: Vector2) -> Option<NavTarget> {
        let target = self.hit(point)?;
        match target {
            NavTarget::Menu => self.drawer_open = !self.drawer_open,
            NavTarget::Page(_) => self.drawer_open = false,
            NavTarget::Drawer => {}
        }
        Some(target)
    }

    pub fn draw(&self, d: &mut impl RaylibDraw, current: Page) {
        let link_color = |page: Page| {
            if page == current {
                Color::WHITE
            } else {
                Color::new(255, 255, 255, 170)
            }
        };

        if let Some(brand) = self.brand() {
            let size = if self.is_narrow() { 20 } else { 28 };
            let y = (NAVBAR_HEIGHT - size as f32) * 0.5;
            d.draw_text(brand, 20, y as i32, size, Color::WHITE);
        }

        if self.is_narrow() {
            let button = self.menu_button();
            for i in 0..3 {
                let y = button.y + 8.0 + 11.0 * i as f32;
                d.draw_rectangle((button.x + 6.0) as i32, y as i32, 28, 3, Color::WHITE);
            }
            if self.drawer_open {
                d.draw_rectangle_rec(self.drawer(), Color::new(20, 20, 20, 230));
            }
        }

        for (page, rect) in self.items() {
            let y = rect.y + (rect.height - self.font_size as f32) * 0.5;
            d.draw_text(page.label(), (rect.x + 20.0) as i32, y as i32, self.font_size, link_color(page));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_page_and_mid_wipe_requests_are_ignored() {
        let mut pages = PageSwitcher::new(Page::Gallery);
        assert!(!pages.request(Page::Gallery));
        assert!(pages.request(Page::About));
        assert!(!pages.request(Page::Contact));
        assert!(pages.is_transitioning());
    }

    #[test]
    fn page_swaps_while_covered_then_finishes() {
        let mut pages = PageSwitcher::new(Page::Gallery);
        pages.request(Page::Contact);

        assert!(pages.update(0.3).is_empty());
        assert_eq!(pages.current(), Page::Gallery);
        let wipe = pages.wipe_fx().expect("wipe running");
        assert!(wipe.from_left && wipe.coverage > 0.0 && wipe.coverage < 1.0);

        assert_eq!(pages.update(0.25), vec![PageEvent::Swapped(Page::Contact)]);
        assert_eq!(pages.current(), Page::Contact);

        assert_eq!(pages.update(1.0), vec![PageEvent::Finished]);
        assert!(!pages.is_transitioning());
        assert_eq!(pages.content_fx(), ContentFx::NONE);
        assert_eq!(pages.wipe_fx(), None);
    }

    #[test]
    fn content_fades_out_drops_then_rises_back() {
        let mut pages = PageSwitcher::new(Page::Gallery);
        pages.request(Page::About);

        pages.update(0.1);
        assert_eq!(pages.content_fx(), ContentFx::NONE);

        pages.update(0.35);
        let leaving = pages.content_fx();
        assert!(leaving.opacity < 1.0 && leaving.offset_y > 0.0);

        pages.update(0.1);
        let entering = pages.content_fx();
        assert!(entering.offset_y < 0.0 && entering.opacity < 0.5);

        pages.update(0.5);
        let settled = pages.content_fx();
        assert_eq!(settled.opacity, 1.0);
        assert_eq!(settled.offset_y, 0.0);
        let wipe = pages.wipe_fx().expect("still uncovering");
        assert!(!wipe.from_left);
    }

    #[test]
    fn navbar_hits_its_labels() {
        let navbar = Navbar::new(1280.0, None);
        let last = 1280.0 - 20.0 - 70.0;
        assert_eq!(navbar.hit(Vector2::new(last, 40.0)), Some(NavTarget::Page(Page::Contact)));
        assert_eq!(navbar.hit(Vector2::new(last, NAVBAR_HEIGHT + 5.0)), None);
        assert_eq!(navbar.hit(Vector2::new(10.0, 40.0)), None);
    }

    #[test]
    fn narrow_navbar_keeps_every_link_reachable_through_the_drawer() {
        let mut navbar = Navbar::new(300.0, None);
        assert!(navbar.is_narrow());
        // Nothing in the bar but the hamburger while the drawer is closed.
        assert_eq!(navbar.hit(Vector2::new(10.0, 40.0)), None);
        assert_eq!(navbar.hit(Vector2::new(150.0, 40.0)), None);

        let menu = Vector2::new(300.0 - 40.0, 40.0);
        assert_eq!(navbar.click(menu), Some(NavTarget::Menu));
        assert!(navbar.is_drawer_open());

        let x = 300.0 - DRAWER_WIDTH * 0.5;
        let row = |i: f32| Vector2::new(x, NAVBAR_HEIGHT + 10.0 + DRAWER_ITEM_HEIGHT * (i + 0.5));
        let found: Vec<_> = (0..3).map(|i| navbar.hit(row(i as f32))).collect();
        assert_eq!(
            found,
            Page::ALL.iter().map(|p| Some(NavTarget::Page(*p))).collect::<Vec<_>>()
        );
        for (_, rect) in navbar.drawer_items() {
            assert!(rect.x >= 0.0 && rect.x + rect.width <= 300.0);
        }

        assert_eq!(navbar.click(row(0.0)), Some(NavTarget::Page(Page::Gallery)));
        assert!(!navbar.is_drawer_open());
        assert_eq!(navbar.hit(row(0.0)), None);
    }

    #[test]
    fn hamburger_toggles_and_widening_closes_the_drawer() {
        let mut navbar = Navbar::new(500.0, None);
        let menu = Vector2::new(500.0 - 40.0, 40.0);
        navbar.click(menu);
        navbar.click(menu);
        assert!(!navbar.is_drawer_open());

        navbar.click(menu);
        let padding = Vector2::new(500.0 - 20.0, NAVBAR_HEIGHT + 3.0);
        assert_eq!(navbar.click(padding), Some(NavTarget::Drawer));
        assert!(navbar.is_drawer_open());

        navbar.resize(1280.0);
        assert!(!navbar.is_narrow());
        assert!(!navbar.is_drawer_open());
        assert_eq!(navbar.hit(menu), None);
    }

    #[test]
    fn brand_credits_the_artist() {
        let mut navbar = Navbar::new(1280.0, Some("Okanbi"));
        assert_eq!(navbar.brand(), Some("Art by Okanbi."));
        navbar.set_artist(None);
        assert_eq!(navbar.brand(), None);
    }
}
