use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::config::SiteConfig;
use crate::controller::scroll_lock::ScrollLock;
use crate::dom;
use crate::session::{BrowserSession, SessionStore};

#[derive(Clone)]
pub struct PageContext {
    pub config: Rc<SiteConfig>,
    pub session: Rc<dyn SessionStore>,
    scroll_lock: Rc<RefCell<ScrollLock>>,
}

impl PageContext {
    pub fn new(config: SiteConfig, session: Rc<dyn SessionStore>) -> Self {
        Self {
            config: Rc::new(config),
            session,
            scroll_lock: Rc::new(RefCell::new(ScrollLock::new())),
        }
    }

    pub fn with_lock<R>(&self, f: impl FnOnce(&mut ScrollLock) -> R) -> R {
        let mut lock = self.scroll_lock.borrow_mut();
        let result = f(&mut lock);
        dom::set_body_overflow(lock.body_overflow());
        result
    }
}

impl Default for PageContext {
    fn default() -> Self {
        Self::new(SiteConfig::default(), Rc::new(BrowserSession))
    }
}

impl PartialEq for PageContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.config, &other.config)
            && Rc::ptr_eq(&self.session, &other.session)
            && Rc::ptr_eq(&self.scroll_lock, &other.scroll_lock)
    }
}

#[hook]
pub fn use_page() -> PageContext {
    use_context::<PageContext>().unwrap_or_default()
}
