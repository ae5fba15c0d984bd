#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaqState<Id> {
    open_item: Option<Id>,
}

impl<Id> Default for FaqState<Id> {
    fn default() -> Self {
        Self { open_item: None }
    }
}

impl<Id: PartialEq + Clone> FaqState<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, id: &Id) {
        if self.is_open(id) {
            self.open_item = None;
        } else {
            self.open_item = Some(id.clone());
        }
    }

    pub fn is_open(&self, id: &Id) -> bool {
        self.open_item.as_ref() == Some(id)
    }

    #[cfg(test)]
    pub fn open_item(&self) -> Option<&Id> {
        self.open_item.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_b_closes_a() {
        let mut faq = FaqState::new();
        faq.toggle(&"a");
        assert!(faq.is_open(&"a"));

        faq.toggle(&"b");
        assert!(!faq.is_open(&"a"));
        assert!(faq.is_open(&"b"));
        assert_eq!(faq.open_item(), Some(&"b"));
    }

    #[test]
    fn test_clicking_open_item_closes_it() {
        let mut faq = FaqState::new();
        faq.toggle(&2usize);
        faq.toggle(&2usize);
        assert_eq!(faq.open_item(), None);
        assert!(!faq.is_open(&2));
    }

    #[test]
    fn test_starts_closed() {
        let faq: FaqState<usize> = FaqState::new();
        assert!((0..5).all(|i| !faq.is_open(&i)));
    }
}
