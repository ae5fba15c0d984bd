use log::debug;
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq)]
pub enum Interaction {
    Wheel { delta_y: f64 },
    TouchMove,
    Key(String),
}

impl Interaction {
    pub fn qualifies(&self) -> bool {
        match self {
            Interaction::Wheel { delta_y } => *delta_y > 0.0,
            Interaction::TouchMove => true,
            Interaction::Key(key) => matches!(key.as_str(), "ArrowDown" | " " | "Spacebar"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CtaForm {
    Editing,
    Submitting,
    Thanked,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FinalStep {
    FadingCta,
    SettlingScroll,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    GlobeShown,
    FadingOut,
    CtaShown(CtaForm),
    Finalizing(FinalStep),
    Revealed,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PreloaderEvent {
    GlobeReady,
    Interaction(Interaction),
    GlobeFaded,
    CtaSubmitted,
    CtaSkipped,
    SubmitAcknowledged,
    ThankYouElapsed,
    OverlayHidden,
    ScrollSettled,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    LockScroll,
    ReleaseScroll,
    StartGlobe,
    DetachInteractions,
    DestroyGlobe,
    RecheckScroll,
    Schedule { after_ms: u32, event: PreloaderEvent },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub globe_fade_ms: u32,
    pub submit_ack_ms: u32,
    pub thank_you_ms: u32,
    pub cta_fade_ms: u32,
    pub scroll_recheck_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            globe_fade_ms: 1000,
            submit_ack_ms: 1000,
            thank_you_ms: 800,
            cta_fade_ms: 500,
            scroll_recheck_ms: 800,
        }
    }
}

// Every event is checked against the current phase, so a timer that lost
// a race (skip after submit) falls through as a no-op.
#[derive(Clone, Debug, PartialEq)]
pub struct Sequencer {
    phase: Phase,
    has_cta: bool,
    timings: Timings,
}

impl Sequencer {
    pub fn new(has_cta: bool, timings: Timings) -> Self {
        Self {
            phase: Phase::Idle,
            has_cta,
            timings,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn start(&self) -> Vec<Effect> {
        vec![Effect::LockScroll]
    }

    pub fn handle(&mut self, event: PreloaderEvent) -> Vec<Effect> {
        let before = self.phase;
        let effects = self.transition(event);
        if before != self.phase {
            debug!("preloader: {:?} -> {:?}", before, self.phase);
        }
        effects
    }

    fn transition(&mut self, event: PreloaderEvent) -> Vec<Effect> {
        use PreloaderEvent as E;

        match (self.phase, event) {
            (Phase::Idle, E::GlobeReady) => {
                self.phase = Phase::GlobeShown;
                vec![Effect::StartGlobe]
            }
            (Phase::Idle | Phase::GlobeShown, E::Interaction(input)) if input.qualifies() => {
                self.phase = Phase::FadingOut;
                vec![
                    Effect::DetachInteractions,
                    Effect::Schedule {
                        after_ms: self.timings.globe_fade_ms,
                        event: E::GlobeFaded,
                    },
                ]
            }
            (Phase::FadingOut, E::GlobeFaded) => {
                let mut effects = vec![Effect::DestroyGlobe];
                if self.has_cta {
                    self.phase = Phase::CtaShown(CtaForm::Editing);
                } else {
                    effects.extend(self.finalize());
                }
                effects
            }
            (Phase::CtaShown(CtaForm::Editing), E::CtaSubmitted) => {
                self.phase = Phase::CtaShown(CtaForm::Submitting);
                vec![Effect::Schedule {
                    after_ms: self.timings.submit_ack_ms,
                    event: E::SubmitAcknowledged,
                }]
            }
            (Phase::CtaShown(CtaForm::Submitting), E::SubmitAcknowledged) => {
                self.phase = Phase::CtaShown(CtaForm::Thanked);
                vec![Effect::Schedule {
                    after_ms: self.timings.thank_you_ms,
                    event: E::ThankYouElapsed,
                }]
            }
            (Phase::CtaShown(CtaForm::Thanked), E::ThankYouElapsed)
            | (Phase::CtaShown(_), E::CtaSkipped) => self.finalize(),
            (Phase::Finalizing(FinalStep::FadingCta), E::OverlayHidden) => {
                self.phase = Phase::Finalizing(FinalStep::SettlingScroll);
                vec![
                    Effect::ReleaseScroll,
                    Effect::Schedule {
                        after_ms: self.timings.scroll_recheck_ms,
                        event: E::ScrollSettled,
                    },
                ]
            }
            (Phase::Finalizing(FinalStep::SettlingScroll), E::ScrollSettled) => {
                self.phase = Phase::Revealed;
                vec![Effect::RecheckScroll]
            }
            _ => Vec::new(),
        }
    }

    fn finalize(&mut self) -> Vec<Effect> {
        self.phase = Phase::Finalizing(FinalStep::FadingCta);
        vec![Effect::Schedule {
            after_ms: self.timings.cta_fade_ms,
            event: PreloaderEvent::OverlayHidden,
        }]
    }

    pub fn accepts_interaction(&self) -> bool {
        matches!(self.phase, Phase::Idle | Phase::GlobeShown)
    }

    pub fn globe_opacity(&self) -> f64 {
        if self.accepts_interaction() {
            1.0
        } else {
            0.0
        }
    }

    pub fn globe_hidden(&self) -> bool {
        !matches!(self.phase, Phase::Idle | Phase::GlobeShown | Phase::FadingOut)
    }

    pub fn cta_visible(&self) -> bool {
        self.has_cta && matches!(self.phase, Phase::CtaShown(_) | Phase::Finalizing(_))
    }

    pub fn cta_opacity(&self) -> f64 {
        match self.phase {
            Phase::CtaShown(_) => 1.0,
            _ => 0.0,
        }
    }

    pub fn overlay_hidden(&self) -> bool {
        matches!(
            self.phase,
            Phase::Finalizing(FinalStep::SettlingScroll) | Phase::Revealed
        )
    }

    pub fn cta_label(&self) -> &'static str {
        match self.phase {
            Phase::CtaShown(CtaForm::Submitting) => "Submitting…",
            Phase::CtaShown(CtaForm::Thanked) | Phase::Finalizing(_) | Phase::Revealed => {
                "Thank you!"
            }
            _ => "Get my free itinerary",
        }
    }

    pub fn cta_locked(&self) -> bool {
        !matches!(self.phase, Phase::CtaShown(CtaForm::Editing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeClock {
        now: u32,
        queue: Vec<(u32, PreloaderEvent)>,
        applied: Vec<(u32, Effect)>,
    }

    impl FakeClock {
        fn new() -> Self {
            Self {
                now: 0,
                queue: Vec::new(),
                applied: Vec::new(),
            }
        }

        fn apply(&mut self, effects: Vec<Effect>) {
            for effect in effects {
                if let Effect::Schedule { after_ms, event } = &effect {
                    self.queue.push((self.now + after_ms, event.clone()));
                }
                self.applied.push((self.now, effect));
            }
        }

        fn send(&mut self, seq: &mut Sequencer, event: PreloaderEvent) {
            let effects = seq.handle(event);
            self.apply(effects);
        }

        fn advance(&mut self, seq: &mut Sequencer, ms: u32) {
            let until = self.now + ms;
            loop {
                self.queue.sort_by_key(|(due, _)| *due);
                match self.queue.first() {
                    Some((due, _)) if *due <= until => {
                        let (due, event) = self.queue.remove(0);
                        self.now = due;
                        self.send(seq, event);
                    }
                    _ => break,
                }
            }
            self.now = until;
        }

        fn count(&self, wanted: &Effect) -> usize {
            self.applied.iter().filter(|(_, e)| e == wanted).count()
        }

        fn time_of(&self, wanted: &Effect) -> Option<u32> {
            self.applied.iter().find(|(_, e)| e == wanted).map(|(t, _)| *t)
        }
    }

    fn scroll_down() -> PreloaderEvent {
        PreloaderEvent::Interaction(Interaction::Wheel { delta_y: 120.0 })
    }

    fn started(has_cta: bool) -> (Sequencer, FakeClock) {
        let seq = Sequencer::new(has_cta, Timings::default());
        let mut clock = FakeClock::new();
        clock.apply(seq.start());
        (seq, clock)
    }

    #[test]
    fn test_starts_idle_with_scroll_locked() {
        let (seq, clock) = started(true);
        assert_eq!(seq.phase(), Phase::Idle);
        assert_eq!(clock.count(&Effect::LockScroll), 1);
        assert_eq!(seq.globe_opacity(), 1.0);
        assert!(!seq.overlay_hidden());
    }

    #[test]
    fn test_globe_ready_starts_rendering() {
        let (mut seq, mut clock) = started(true);
        clock.send(&mut seq, PreloaderEvent::GlobeReady);
        assert_eq!(seq.phase(), Phase::GlobeShown);
        assert_eq!(clock.count(&Effect::StartGlobe), 1);

        clock.send(&mut seq, PreloaderEvent::GlobeReady);
        assert_eq!(clock.count(&Effect::StartGlobe), 1);
    }

    #[test]
    fn test_ten_scroll_events_fade_once() {
        let (mut seq, mut clock) = started(true);
        clock.send(&mut seq, PreloaderEvent::GlobeReady);
        for _ in 0..10 {
            clock.send(&mut seq, scroll_down());
        }
        assert_eq!(seq.phase(), Phase::FadingOut);
        assert_eq!(clock.count(&Effect::DetachInteractions), 1);
        assert_eq!(clock.queue.len(), 1);
    }

    #[test]
    fn test_non_qualifying_input_keeps_idle() {
        let (mut seq, mut clock) = started(true);
        clock.send(
            &mut seq,
            PreloaderEvent::Interaction(Interaction::Wheel { delta_y: -40.0 }),
        );
        clock.send(
            &mut seq,
            PreloaderEvent::Interaction(Interaction::Key("ArrowUp".into())),
        );
        assert_eq!(seq.phase(), Phase::Idle);

        clock.send(
            &mut seq,
            PreloaderEvent::Interaction(Interaction::Key(" ".into())),
        );
        assert_eq!(seq.phase(), Phase::FadingOut);
    }

    #[test]
    fn test_no_interaction_stays_idle_forever() {
        let (mut seq, mut clock) = started(true);
        clock.send(&mut seq, PreloaderEvent::GlobeReady);
        clock.advance(&mut seq, 600_000);
        assert_eq!(seq.phase(), Phase::GlobeShown);
    }

    #[test]
    fn test_touch_before_globe_loads_still_fades() {
        let (mut seq, mut clock) = started(false);
        clock.send(&mut seq, PreloaderEvent::Interaction(Interaction::TouchMove));
        assert_eq!(seq.phase(), Phase::FadingOut);

        clock.send(&mut seq, PreloaderEvent::GlobeReady);
        assert_eq!(seq.phase(), Phase::FadingOut);
        assert_eq!(clock.count(&Effect::StartGlobe), 0);
    }

    #[test]
    fn test_without_cta_goes_straight_to_finalizing() {
        let (mut seq, mut clock) = started(false);
        clock.send(&mut seq, PreloaderEvent::GlobeReady);
        clock.send(&mut seq, scroll_down());

        clock.advance(&mut seq, 999);
        assert_eq!(seq.phase(), Phase::FadingOut);

        clock.advance(&mut seq, 1);
        assert_eq!(seq.phase(), Phase::Finalizing(FinalStep::FadingCta));
        assert_eq!(clock.time_of(&Effect::DestroyGlobe), Some(1000));
        assert!(!seq.cta_visible());

        clock.advance(&mut seq, 500);
        assert!(seq.overlay_hidden());
        assert_eq!(clock.time_of(&Effect::ReleaseScroll), Some(1500));

        clock.advance(&mut seq, 800);
        assert_eq!(seq.phase(), Phase::Revealed);
        assert_eq!(clock.time_of(&Effect::RecheckScroll), Some(2300));
    }

    #[test]
    fn test_submit_path_timing() {
        let (mut seq, mut clock) = started(true);
        clock.send(&mut seq, scroll_down());
        clock.advance(&mut seq, 1000);
        assert_eq!(seq.phase(), Phase::CtaShown(CtaForm::Editing));
        assert!(seq.cta_visible());
        assert!(seq.globe_hidden());

        clock.send(&mut seq, PreloaderEvent::CtaSubmitted);
        assert_eq!(seq.cta_label(), "Submitting…");
        assert!(seq.cta_locked());

        clock.advance(&mut seq, 1000);
        assert_eq!(seq.cta_label(), "Thank you!");
        assert_eq!(seq.phase(), Phase::CtaShown(CtaForm::Thanked));

        clock.advance(&mut seq, 800);
        assert_eq!(seq.phase(), Phase::Finalizing(FinalStep::FadingCta));
        assert_eq!(seq.cta_opacity(), 0.0);

        clock.advance(&mut seq, 500 + 800);
        assert_eq!(seq.phase(), Phase::Revealed);
        assert_eq!(clock.count(&Effect::ReleaseScroll), 1);
    }

    #[test]
    fn test_skip_races_submit_and_finalizes_once() {
        let (mut seq, mut clock) = started(true);
        clock.send(&mut seq, scroll_down());
        clock.advance(&mut seq, 1000);

        clock.send(&mut seq, PreloaderEvent::CtaSubmitted);
        clock.advance(&mut seq, 1000);
        clock.send(&mut seq, PreloaderEvent::CtaSkipped);
        clock.send(&mut seq, PreloaderEvent::CtaSkipped);

        clock.advance(&mut seq, 10_000);
        assert_eq!(seq.phase(), Phase::Revealed);
        assert_eq!(clock.count(&Effect::ReleaseScroll), 1);
        assert_eq!(clock.count(&Effect::RecheckScroll), 1);
    }

    #[test]
    fn test_skip_advances_immediately() {
        let (mut seq, mut clock) = started(true);
        clock.send(&mut seq, scroll_down());
        clock.advance(&mut seq, 1000);
        clock.send(&mut seq, PreloaderEvent::CtaSkipped);
        assert_eq!(seq.phase(), Phase::Finalizing(FinalStep::FadingCta));
        assert!(seq.cta_visible());
    }

    #[test]
    fn test_submit_ignored_outside_cta() {
        let (mut seq, mut clock) = started(true);
        clock.send(&mut seq, PreloaderEvent::CtaSubmitted);
        clock.send(&mut seq, PreloaderEvent::CtaSkipped);
        assert_eq!(seq.phase(), Phase::Idle);
        assert!(clock.queue.is_empty());
    }
}
