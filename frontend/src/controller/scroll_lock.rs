use std::collections::BTreeSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LockOwner {
    Menu,
    Preloader,
    LeadModal,
}

// Body stays locked while any owner holds it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollLock {
    holders: BTreeSet<LockOwner>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&mut self, owner: LockOwner) -> bool {
        let was_locked = self.is_locked();
        self.holders.insert(owner);
        !was_locked
    }

    pub fn release(&mut self, owner: LockOwner) -> bool {
        let removed = self.holders.remove(&owner);
        removed && !self.is_locked()
    }

    pub fn is_locked(&self) -> bool {
        !self.holders.is_empty()
    }

    #[cfg(test)]
    pub fn is_held_by(&self, owner: LockOwner) -> bool {
        self.holders.contains(&owner)
    }

    pub fn body_overflow(&self) -> &'static str {
        if self.is_locked() {
            "hidden"
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_without_acquire_is_noop() {
        let mut lock = ScrollLock::new();
        assert!(!lock.release(LockOwner::Menu));
        assert!(!lock.is_locked());
        assert_eq!(lock.body_overflow(), "");
    }

    #[test]
    fn test_other_owner_keeps_page_locked() {
        let mut lock = ScrollLock::new();
        assert!(lock.acquire(LockOwner::Preloader));
        assert!(!lock.acquire(LockOwner::Menu));

        assert!(!lock.release(LockOwner::Menu));
        assert!(lock.is_locked());
        assert!(lock.is_held_by(LockOwner::Preloader));

        assert!(lock.release(LockOwner::Preloader));
        assert_eq!(lock.body_overflow(), "");
    }

    #[test]
    fn test_double_acquire_needs_single_release() {
        let mut lock = ScrollLock::new();
        lock.acquire(LockOwner::LeadModal);
        lock.acquire(LockOwner::LeadModal);
        assert!(lock.release(LockOwner::LeadModal));
        assert!(!lock.is_locked());
    }
}
