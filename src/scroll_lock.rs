use std::cell::Cell;
use std::rc::Rc;
use log::debug;

#[derive(Debug, Default)]
struct ScrollInner {
    offset: Cell<f32>,
    locks: Cell<u32>,
}

/// Vertical scroll position of the current page, shared between the page
/// that scrolls and whoever needs to freeze it.
#[derive(Debug, Clone, Default)]
pub struct PageScroll {
    inner: Rc<ScrollInner>,
}

impl PageScroll {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> f32 {
        self.inner.offset.get()
    }

    pub fn is_locked(&self) -> bool {
        self.inner.locks.get() > 0
    }

    /// Scrolls by `delta`, clamped to `[0, max]`. Ignored while locked.
    pub fn scroll_by(&self, delta: f32, max: f32) -> bool {
        if self.is_locked() {
            return false;
        }
        let next = (self.offset() + delta).clamp(0.0, max.max(0.0));
        self.inner.offset.set(next);
        true
    }

    /// Unconditional move, used for page switches and layout clamping.
    pub fn set_offset(&self, offset: f32) {
        self.inner.offset.set(offset.max(0.0));
    }

    /// Freezes scrolling until the returned guard is dropped, then puts the
    /// offset back exactly where it was.
    pub fn lock(&self) -> ScrollLockGuard {
        let saved_offset = self.offset();
        self.inner.locks.set(self.inner.locks.get() + 1);
        debug!("page scroll locked at {saved_offset}");
        ScrollLockGuard {
            inner: Rc::clone(&self.inner),
            saved_offset,
        }
    }
}

#[derive(Debug)]
pub struct ScrollLockGuard {
    inner: Rc<ScrollInner>,
    saved_offset: f32,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let locks = self.inner.locks.get().saturating_sub(1);
        self.inner.locks.set(locks);
        self.inner.offset.set(self.saved_offset);
        debug!("page scroll released, restored to {}", self.saved_offset);
    }
}
