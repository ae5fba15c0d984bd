use std::collections::BTreeSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealAction {
    Reveal,
    Wait,
    Ignore,
}

#[derive(Clone, Debug)]
pub struct RevealTracker<K: Ord + Clone> {
    observed: BTreeSet<K>,
    visible: BTreeSet<K>,
}

impl<K: Ord + Clone> Default for RevealTracker<K> {
    fn default() -> Self {
        Self {
            observed: BTreeSet::new(),
            visible: BTreeSet::new(),
        }
    }
}

impl<K: Ord + Clone> RevealTracker<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, key: K) -> bool {
        if self.visible.contains(&key) {
            return false;
        }
        self.observed.insert(key)
    }

    pub fn on_intersection(&mut self, key: &K, is_intersecting: bool) -> RevealAction {
        if !self.observed.contains(key) {
            return RevealAction::Ignore;
        }
        if !is_intersecting {
            return RevealAction::Wait;
        }
        self.observed.remove(key);
        self.visible.insert(key.clone());
        RevealAction::Reveal
    }

    #[cfg(test)]
    pub fn is_visible(&self, key: &K) -> bool {
        self.visible.contains(key)
    }

    #[cfg(test)]
    pub fn pending(&self) -> usize {
        self.observed.len()
    }

    #[cfg(test)]
    pub fn is_done(&self) -> bool {
        self.observed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_element_reveals_once() {
        let mut tracker = RevealTracker::new();
        for key in 0..3 {
            assert!(tracker.observe(key));
        }

        assert_eq!(tracker.on_intersection(&1, true), RevealAction::Reveal);
        for _ in 0..5 {
            assert_eq!(tracker.on_intersection(&1, true), RevealAction::Ignore);
            assert_eq!(tracker.on_intersection(&1, false), RevealAction::Ignore);
        }
        assert!(tracker.is_visible(&1));
        assert_eq!(tracker.pending(), 2);
    }

    #[test]
    fn test_non_intersecting_reports_keep_waiting() {
        let mut tracker = RevealTracker::new();
        tracker.observe("hero");
        assert_eq!(tracker.on_intersection(&"hero", false), RevealAction::Wait);
        assert!(!tracker.is_visible(&"hero"));
        assert_eq!(tracker.on_intersection(&"hero", true), RevealAction::Reveal);
        assert!(tracker.is_done());
    }

    #[test]
    fn test_order_independent() {
        let mut tracker = RevealTracker::new();
        tracker.observe(10);
        tracker.observe(20);
        tracker.on_intersection(&20, true);
        tracker.on_intersection(&10, true);
        assert!(tracker.is_visible(&10) && tracker.is_visible(&20));
    }

    #[test]
    fn test_revealed_element_cannot_be_observed_again() {
        let mut tracker = RevealTracker::new();
        tracker.observe(7);
        tracker.on_intersection(&7, true);
        assert!(!tracker.observe(7));
        assert_eq!(tracker.pending(), 0);
    }

    #[test]
    fn test_unknown_element_is_ignored() {
        let mut tracker: RevealTracker<u32> = RevealTracker::new();
        assert_eq!(tracker.on_intersection(&3, true), RevealAction::Ignore);
    }
}
