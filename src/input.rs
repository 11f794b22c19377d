//! Input adapters.
//!
//! Raw input is captured once per frame into a [`FrameInput`] and turned into
//! [`Intent`]s here. Nothing in this module touches navigation state; it only
//! decides what the user asked for.

use raylib::prelude::*;
use crate::constants::*;
use crate::navigator::Direction;
use crate::page::Page;

const WATCHED_KEYS: [KeyboardKey; 12] = [
    KeyboardKey::KEY_UP,
    KeyboardKey::KEY_DOWN,
    KeyboardKey::KEY_LEFT,
    KeyboardKey::KEY_RIGHT,
    KeyboardKey::KEY_SPACE,
    KeyboardKey::KEY_ENTER,
    KeyboardKey::KEY_KP_ENTER,
    KeyboardKey::KEY_ESCAPE,
    KeyboardKey::KEY_ONE,
    KeyboardKey::KEY_TWO,
    KeyboardKey::KEY_THREE,
    KeyboardKey::KEY_R,
];

/// Everything the adapters need from one frame.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub keys: Vec<KeyboardKey>,
    /// Wheel notches, positive away from the user.
    pub wheel: f32,
    pub pointer: Vector2,
    pub pointer_pressed: bool,
    pub pointer_down: bool,
    pub pointer_released: bool,
}

impl FrameInput {
    pub fn capture(rl: &RaylibHandle) -> Self {
        Self {
            keys: WATCHED_KEYS.iter().copied().filter(|k| rl.is_key_pressed(*k)).collect(),
            wheel: rl.get_mouse_wheel_move(),
            pointer: rl.get_mouse_position(),
            pointer_pressed: rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT),
            pointer_down: rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT),
            pointer_released: rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    Navigate(Direction),
    /// A press and release that did not turn into a drag.
    Click(Vector2),
    Scroll(f32),
    Dismiss,
    ShowPage(Page),
    Reload,
}

/// What the adapters are allowed to emit this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputContext {
    pub page: Page,
    /// Slide navigator is idle.
    pub idle: bool,
    /// Background scrolling is frozen (detail viewer open).
    pub scroll_locked: bool,
}

#[derive(Debug, Clone, Copy)]
struct Drag {
    anchor: Vector2,
    origin: Vector2,
    moved: bool,
}

#[derive(Debug, Default)]
pub struct InputAdapter {
    drag: Option<Drag>,
    wheel: f32,
}

impl InputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interpret(&mut self, input: &FrameInput, ctx: InputContext) -> Vec<Intent> {
        let mut intents = Vec::new();
        self.keyboard(input, ctx, &mut intents);
        self.wheel(input, ctx, &mut intents);
        self.pointer(input, ctx, &mut intents);
        intents
    }

    fn keyboard(&mut self, input: &FrameInput, ctx: InputContext, intents: &mut Vec<Intent>) {
        for key in &input.keys {
            match key {
                KeyboardKey::KEY_ESCAPE => intents.push(Intent::Dismiss),
                KeyboardKey::KEY_ONE => intents.push(Intent::ShowPage(Page::Gallery)),
                KeyboardKey::KEY_TWO => intents.push(Intent::ShowPage(Page::About)),
                KeyboardKey::KEY_THREE => intents.push(Intent::ShowPage(Page::Contact)),
                KeyboardKey::KEY_R => intents.push(Intent::Reload),
                _ if ctx.scroll_locked => {}
                _ => {
                    if let Some(direction) = key_direction(*key) {
                        match ctx.page {
                            Page::Gallery if ctx.idle => intents.push(Intent::Navigate(direction)),
                            Page::Gallery => {}
                            _ => intents.push(Intent::Scroll(direction.sign() * SCROLL_STEP)),
                        }
                    }
                }
            }
        }
    }

    fn wheel(&mut self, input: &FrameInput, ctx: InputContext, intents: &mut Vec<Intent>) {
        if ctx.scroll_locked {
            self.wheel = 0.0;
            return;
        }
        if ctx.page != Page::Gallery {
            if input.wheel != 0.0 {
                intents.push(Intent::Scroll(-input.wheel * SCROLL_STEP));
            }
            return;
        }

        self.wheel += input.wheel;
        if self.wheel.abs() < WHEEL_TOLERANCE {
            return;
        }
        // Scrolling toward the user moves forward.
        let direction = if self.wheel < 0.0 { Direction::Forward } else { Direction::Backward };
        self.wheel = 0.0;
        if ctx.idle {
            intents.push(Intent::Navigate(direction));
        }
    }

    fn pointer(&mut self, input: &FrameInput, ctx: InputContext, intents: &mut Vec<Intent>) {
        if input.pointer_pressed {
            self.drag = Some(Drag {
                anchor: input.pointer,
                origin: input.pointer,
                moved: false,
            });
        }

        if let Some(drag) = self.drag.as_mut() {
            if input.pointer_down || input.pointer_released {
                let total = (input.pointer.x - drag.origin.x).abs().max((input.pointer.y - drag.origin.y).abs());
                if total >= GESTURE_TOLERANCE {
                    drag.moved = true;
                }

                let dy = input.pointer.y - drag.anchor.y;
                if dy.abs() >= GESTURE_TOLERANCE {
                    drag.anchor = input.pointer;
                    if ctx.page == Page::Gallery && ctx.idle && !ctx.scroll_locked {
                        // Dragging upward pulls the next slide in.
                        let direction = if dy < 0.0 { Direction::Forward } else { Direction::Backward };
                        intents.push(Intent::Navigate(direction));
                    }
                }
            }
        }

        if input.pointer_released {
            if let Some(drag) = self.drag.take() {
                if !drag.moved {
                    intents.push(Intent::Click(input.pointer));
                }
            }
        }
    }
}

fn key_direction(key: KeyboardKey) -> Option<Direction> {
    match key {
        KeyboardKey::KEY_UP | KeyboardKey::KEY_LEFT => Some(Direction::Backward),
        KeyboardKey::KEY_DOWN
        | KeyboardKey::KEY_RIGHT
        | KeyboardKey::KEY_SPACE
        | KeyboardKey::KEY_ENTER
        | KeyboardKey::KEY_KP_ENTER => Some(Direction::Forward),
        _ => None,
    }
}
