#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    ConsentMissing,
    Accepted,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormSubmission {
    consent_flagged: bool,
    submitted: bool,
}

impl FormSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit(&mut self, consent: Option<bool>) -> SubmitOutcome {
        if consent == Some(false) {
            self.consent_flagged = true;
            return SubmitOutcome::ConsentMissing;
        }
        self.consent_flagged = false;
        self.submitted = true;
        SubmitOutcome::Accepted
    }

    pub fn consent_changed(&mut self, checked: bool) {
        if checked {
            self.consent_flagged = false;
        }
    }

    pub fn consent_flagged(&self) -> bool {
        self.consent_flagged
    }

    pub fn show_fields(&self) -> bool {
        !self.submitted
    }

    pub fn show_success(&self) -> bool {
        self.submitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchecked_consent_flags_and_blocks_success() {
        let mut form = FormSubmission::new();
        assert_eq!(form.submit(Some(false)), SubmitOutcome::ConsentMissing);
        assert!(form.consent_flagged());
        assert!(!form.show_success());
        assert!(form.show_fields());

        assert_eq!(form.submit(Some(false)), SubmitOutcome::ConsentMissing);
        assert!(form.consent_flagged());
    }

    #[test]
    fn test_checked_resubmit_reveals_success() {
        let mut form = FormSubmission::new();
        form.submit(Some(false));
        assert_eq!(form.submit(Some(true)), SubmitOutcome::Accepted);
        assert!(!form.consent_flagged());
        assert!(form.show_success());
        assert!(!form.show_fields());
    }

    #[test]
    fn test_form_without_checkbox_submits() {
        let mut form = FormSubmission::new();
        assert_eq!(form.submit(None), SubmitOutcome::Accepted);
        assert!(form.show_success());
    }

    #[test]
    fn test_ticking_box_clears_flag() {
        let mut form = FormSubmission::new();
        form.submit(Some(false));
        form.consent_changed(true);
        assert!(!form.consent_flagged());
        assert!(!form.show_success());
    }
}
