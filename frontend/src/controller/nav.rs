use super::scroll_lock::{LockOwner, ScrollLock};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavVariant {
    Transparent,
    Inner,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavState {
    pub is_scrolled: bool,
}

impl NavState {
    pub fn evaluate(variant: NavVariant, scroll_y: f64, threshold: f64) -> Self {
        match variant {
            NavVariant::Transparent => Self {
                is_scrolled: scroll_y > threshold,
            },
            NavVariant::Inner => Self {
                is_scrolled: true,
            },
        }
    }

    pub fn tracks_scroll(variant: NavVariant) -> bool {
        variant == NavVariant::Transparent
    }

    pub fn class(&self) -> &'static str {
        if self.is_scrolled {
            "nav--scrolled"
        } else {
            "nav--transparent"
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub is_open: bool,
}

impl MenuState {
    pub fn open(&mut self, lock: &mut ScrollLock) {
        self.is_open = true;
        lock.acquire(LockOwner::Menu);
    }

    pub fn close(&mut self, lock: &mut ScrollLock) {
        if !self.is_open {
            return;
        }
        self.is_open = false;
        lock.release(LockOwner::Menu);
    }

    pub fn on_key(&mut self, key: &str, lock: &mut ScrollLock) {
        if key == "Escape" {
            self.close(lock);
        }
    }
}
