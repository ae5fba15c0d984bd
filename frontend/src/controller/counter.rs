#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    EaseOutCubic,
}

impl Easing {
    pub fn interpolate(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterSpec {
    pub target: u64,
    pub suffix: String,
}

impl CounterSpec {
    pub fn from_attr(target: &str, suffix: Option<&str>) -> Option<Self> {
        let target = parse_number(target.trim())?;
        Some(Self {
            target,
            suffix: suffix.unwrap_or_default().to_string(),
        })
    }

    // `120<sup>+</sup>`: the sup text becomes the suffix.
    pub fn from_text(text: &str, sup_text: Option<&str>) -> Option<Self> {
        let suffix = sup_text.unwrap_or_default();
        let without_sup = if suffix.is_empty() {
            text.to_string()
        } else {
            text.replacen(suffix, "", 1)
        };
        let digits: String = without_sup
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        let target = parse_number(&digits)?;
        Some(Self {
            target,
            suffix: suffix.to_string(),
        })
    }
}

fn parse_number(raw: &str) -> Option<u64> {
    let value: f64 = raw.parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some(value.round() as u64)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: u64,
    pub done: bool,
}

#[derive(Clone, Debug)]
pub struct CounterAnimation {
    spec: CounterSpec,
    duration_ms: f64,
    easing: Easing,
    started_at: Option<f64>,
    last_value: u64,
}

impl CounterAnimation {
    pub fn new(spec: CounterSpec, duration_ms: f64) -> Self {
        Self {
            spec,
            duration_ms: duration_ms.max(1.0),
            easing: Easing::EaseOutCubic,
            started_at: None,
            last_value: 0,
        }
    }

    pub fn spec(&self) -> &CounterSpec {
        &self.spec
    }

    pub fn frame(&mut self, now_ms: f64) -> CounterFrame {
        let start = *self.started_at.get_or_insert(now_ms);
        let progress = ((now_ms - start) / self.duration_ms).clamp(0.0, 1.0);

        let value = if progress >= 1.0 {
            self.spec.target
        } else {
            let eased = self.easing.interpolate(progress);
            ((eased * self.spec.target as f64).round() as u64).min(self.spec.target)
        };
        // Frame timestamps can jitter backwards by a fraction of a ms.
        let value = value.max(self.last_value);
        self.last_value = value;

        CounterFrame {
            value,
            done: progress >= 1.0,
        }
    }

    pub fn text(&self, value: u64) -> String {
        format!("{}{}", value, self.spec.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_cubic_endpoints() {
        let e = Easing::EaseOutCubic;
        assert_eq!(e.interpolate(0.0), 0.0);
        assert_eq!(e.interpolate(1.0), 1.0);
        assert!((e.interpolate(0.5) - 0.875).abs() < 1e-9);
        assert_eq!(e.interpolate(2.0), 1.0);
    }

    #[test]
    fn test_counter_is_monotonic_and_lands_on_target() {
        let spec = CounterSpec::from_attr("120", Some("+")).unwrap();
        let mut anim = CounterAnimation::new(spec, 1800.0);

        let mut previous = 0;
        let mut t = 1000.0;
        loop {
            let frame = anim.frame(t);
            assert!(frame.value >= previous);
            assert!(frame.value <= 120);
            if !frame.done {
                assert!(t - 1000.0 < 1800.0);
            }
            previous = frame.value;
            if frame.done {
                assert_eq!(anim.text(frame.value), "120+");
                break;
            }
            t += 16.7;
        }

        let late = anim.frame(t + 5000.0);
        assert_eq!(late.value, 120);
        assert!(late.done);
    }

    #[test]
    fn test_first_frame_starts_at_zero() {
        let spec = CounterSpec::from_attr("50", None).unwrap();
        let mut anim = CounterAnimation::new(spec, 1500.0);
        let frame = anim.frame(42.0);
        assert_eq!(frame.value, 0);
        assert!(!frame.done);
        assert_eq!(anim.text(frame.value), "0");
    }

    #[test]
    fn test_backwards_timestamp_never_decreases_value() {
        let spec = CounterSpec::from_attr("1000", None).unwrap();
        let mut anim = CounterAnimation::new(spec, 1000.0);
        anim.frame(0.0);
        let ahead = anim.frame(500.0);
        let behind = anim.frame(499.0);
        assert!(behind.value >= ahead.value);
    }

    #[test]
    fn test_non_numeric_target_is_skipped() {
        assert!(CounterSpec::from_attr("lots", Some("+")).is_none());
        assert!(CounterSpec::from_attr("", None).is_none());
        assert!(CounterSpec::from_text("Many", None).is_none());
    }

    #[test]
    fn test_from_text_uses_sup_as_suffix() {
        let spec = CounterSpec::from_text("35+", Some("+")).unwrap();
        assert_eq!(spec.target, 35);
        assert_eq!(spec.suffix, "+");

        let spec = CounterSpec::from_text("2,500", None).unwrap();
        assert_eq!(spec.target, 2500);
        assert_eq!(spec.suffix, "");

        let spec = CounterSpec::from_text("98%", Some("%")).unwrap();
        assert_eq!(spec.target, 98);
    }
}
