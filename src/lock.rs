use std::cell::Cell;
use std::rc::Rc;

/// Single-threaded compare-and-set gate.
///
/// `try_acquire` hands out at most one live [`LockGuard`]; the lock is held
/// until that guard is dropped, whichever path drops it.
#[derive(Debug, Clone, Default)]
pub struct AnimationLock {
    held: Rc<Cell<bool>>,
}

#[derive(Debug)]
pub struct LockGuard {
    held: Rc<Cell<bool>>,
}

impl AnimationLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_acquire(&self) -> Option<LockGuard> {
        if self.held.replace(true) {
            return None;
        }
        Some(LockGuard {
            held: Rc::clone(&self.held),
        })
    }

    pub fn is_held(&self) -> bool {
        self.held.get()
    }
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        self.held.set(false);
    }
}
