#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

pub const LEAD_MODAL_KEY: &str = "wamaw_cta_shown";

pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);

    fn lead_modal_shown(&self) -> bool {
        self.get(LEAD_MODAL_KEY).is_some()
    }

    fn mark_lead_modal_shown(&self) {
        self.set(LEAD_MODAL_KEY, "1");
    }
}

pub struct BrowserSession;

impl BrowserSession {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.session_storage().ok())
            .flatten()
    }
}

impl SessionStore for BrowserSession {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()
            .and_then(|storage| storage.get_item(key).ok())
            .flatten()
    }

    fn set(&self, key: &str, value: &str) {
        // Private browsing can refuse writes; the modal just shows again.
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

#[cfg(test)]
#[derive(Default)]
pub struct MemorySession {
    values: RefCell<HashMap<String, String>>,
}

#[cfg(test)]
impl SessionStore for MemorySession {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_modal_flag_round_trip() {
        let session = MemorySession::default();
        assert!(!session.lead_modal_shown());
        session.mark_lead_modal_shown();
        assert!(session.lead_modal_shown());
        assert_eq!(session.get(LEAD_MODAL_KEY).as_deref(), Some("1"));
    }
}
