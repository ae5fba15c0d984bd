use super::scroll_lock::{LockOwner, ScrollLock};
use crate::session::SessionStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeadModalState {
    Hidden,
    Open,
    Submitted,
    Dismissed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LeadModal {
    state: LeadModalState,
    open_delay_ms: u32,
    close_after_submit_ms: u32,
}

impl LeadModal {
    pub fn new(open_delay_ms: u32, close_after_submit_ms: u32) -> Self {
        Self {
            state: LeadModalState::Hidden,
            open_delay_ms,
            close_after_submit_ms,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> LeadModalState {
        self.state
    }

    pub fn open_delay(&self, session: &dyn SessionStore) -> Option<u32> {
        if session.lead_modal_shown() || self.state != LeadModalState::Hidden {
            None
        } else {
            Some(self.open_delay_ms)
        }
    }

    pub fn open(&mut self, lock: &mut ScrollLock) {
        if self.state == LeadModalState::Hidden {
            self.state = LeadModalState::Open;
            lock.acquire(LockOwner::LeadModal);
        }
    }

    pub fn submit(&mut self) -> Option<u32> {
        if self.state != LeadModalState::Open {
            return None;
        }
        self.state = LeadModalState::Submitted;
        Some(self.close_after_submit_ms)
    }

    pub fn close(&mut self, lock: &mut ScrollLock, session: &dyn SessionStore) {
        if !self.is_open() {
            return;
        }
        self.state = LeadModalState::Dismissed;
        lock.release(LockOwner::LeadModal);
        session.mark_lead_modal_shown();
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, LeadModalState::Open | LeadModalState::Submitted)
    }

    pub fn show_success(&self) -> bool {
        self.state == LeadModalState::Submitted
    }
}
