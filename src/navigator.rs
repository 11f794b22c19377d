//! Slide navigation state machine.
//!
//! [`SlideNavigator`] owns the current index and the animation lock. Input
//! adapters call [`SlideNavigator::go_to`]; an accepted call returns a
//! [`Transition`] that carries the lock guard, so the navigator stays in
//! [`SliderState::Transitioning`] for exactly as long as that transition (or
//! whatever timeline it is moved into) is alive.

use log::debug;
use crate::lock::{AnimationLock, LockGuard};
use crate::slide::SlideSet;
use crate::state::SliderState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }

    pub fn step(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Normalizes any index into `[0, len)`.
pub fn wrap(index: i64, len: usize) -> usize {
    debug_assert!(len > 0, "wrap needs a non-empty range");
    index.rem_euclid(len as i64) as usize
}

/// An accepted navigation request. Holds the animation lock until dropped.
#[derive(Debug)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
    guard: LockGuard,
}

impl Transition {
    /// Releases the animation lock. Used as the completion notification.
    pub fn complete(self) {
        drop(self.guard);
    }
}

#[derive(Debug)]
pub struct SlideNavigator {
    len: usize,
    set_id: u64,
    current_index: usize,
    lock: AnimationLock,
}

impl SlideNavigator {
    pub fn new(slides: &SlideSet) -> Self {
        Self {
            len: slides.len(),
            set_id: slides.id(),
            current_index: 0,
            lock: AnimationLock::new(),
        }
    }

    /// Resets to the first slide if `slides` is not the set this navigator
    /// was built for. A transition still running against the old set keeps
    /// its guard on the old lock and can no longer block this one.
    pub fn sync(&mut self, slides: &SlideSet) -> bool {
        if slides.id() == self.set_id {
            return false;
        }
        debug!("slide set changed ({} -> {}), resetting navigation", self.set_id, slides.id());
        *self = Self::new(slides);
        true
    }

    pub fn go_to(&mut self, requested: i64, direction: Direction) -> Option<Transition> {
        let guard = self.lock.try_acquire()?;
        let to = wrap(requested, self.len);
        let transition = Transition {
            from: self.current_index,
            to,
            direction,
            guard,
        };
        self.current_index = to;
        Some(transition)
    }

    pub fn step(&mut self, direction: Direction) -> Option<Transition> {
        self.go_to(self.current_index as i64 + direction.step(), direction)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_animating(&self) -> bool {
        self.lock.is_held()
    }

    pub fn state(&self) -> SliderState {
        if self.is_animating() {
            SliderState::Transitioning
        } else {
            SliderState::Idle
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.len
    }
}
