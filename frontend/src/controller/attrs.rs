use super::counter::CounterSpec;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementOptions {
    pub target: Option<String>,
    pub suffix: Option<String>,
    pub scroll_to: Option<String>,
    pub light: bool,
    pub inner: bool,
}

impl ElementOptions {
    pub fn from_lookup<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            target: get("data-target").or_else(|| get("data-count")),
            suffix: get("data-suffix"),
            scroll_to: get("data-scroll-to").filter(|v| v.starts_with('#') && v.len() > 1),
            light: flag(get("data-light")),
            inner: flag(get("data-inner")),
        }
    }

    pub fn counter(&self) -> Option<CounterSpec> {
        self.target
            .as_deref()
            .and_then(|t| CounterSpec::from_attr(t, self.suffix.as_deref()))
    }
}

// Boolean data attributes: present means on, unless spelled "false".
fn flag(value: Option<String>) -> bool {
    matches!(value, Some(v) if v != "false")
}
