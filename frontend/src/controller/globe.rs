use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub location: [f64; 2],
    pub size: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GlobeConfig {
    pub phi_step: f64,
    pub theta: f64,
    pub map_samples: u32,
    pub map_brightness: f64,
    pub base_color: [f64; 3],
    pub marker_color: [f64; 3],
    pub glow_color: [f64; 3],
    pub markers: Vec<Marker>,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            phi_step: 0.005,
            theta: 0.3,
            map_samples: 16_000,
            map_brightness: 6.0,
            base_color: [0.3, 0.3, 0.3],
            marker_color: [0.12, 0.56, 0.84],
            glow_color: [0.05, 0.21, 0.5],
            markers: vec![
                // Nairobi, Zanzibar, Kigali, Cape Town
                Marker { location: [-1.2921, 36.8219], size: 0.08 },
                Marker { location: [-6.1659, 39.2026], size: 0.06 },
                Marker { location: [-1.9441, 30.0619], size: 0.05 },
                Marker { location: [-33.9249, 18.4241], size: 0.06 },
            ],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobeOptions {
    pub device_pixel_ratio: f64,
    pub width: f64,
    pub height: f64,
    pub phi: f64,
    pub theta: f64,
    pub dark: f64,
    pub diffuse: f64,
    pub map_samples: u32,
    pub map_brightness: f64,
    pub base_color: [f64; 3],
    pub marker_color: [f64; 3],
    pub glow_color: [f64; 3],
    pub markers: Vec<Marker>,
}

impl GlobeOptions {
    pub fn for_canvas(config: &GlobeConfig, css_size: f64) -> Self {
        let device_pixel_ratio = 2.0;
        Self {
            device_pixel_ratio,
            width: css_size * device_pixel_ratio,
            height: css_size * device_pixel_ratio,
            phi: 0.0,
            theta: config.theta,
            dark: 1.0,
            diffuse: 1.2,
            map_samples: config.map_samples,
            map_brightness: config.map_brightness,
            base_color: config.base_color,
            marker_color: config.marker_color,
            glow_color: config.glow_color,
            markers: config.markers.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlobeSpin {
    phi: f64,
    step: f64,
}

impl GlobeSpin {
    pub fn new(step: f64) -> Self {
        Self { phi: 0.0, step }
    }

    pub fn next_frame(&mut self) -> f64 {
        let current = self.phi;
        self.phi += self.step;
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spin_advances_every_frame() {
        let mut spin = GlobeSpin::new(0.005);
        assert_eq!(spin.next_frame(), 0.0);
        assert!((spin.next_frame() - 0.005).abs() < 1e-12);
        for _ in 0..98 {
            spin.next_frame();
        }
        assert!((spin.next_frame() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_options_serialize_camel_case() {
        let options = GlobeOptions::for_canvas(&GlobeConfig::default(), 300.0);
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["width"], 600.0);
        assert_eq!(json["devicePixelRatio"], 2.0);
        assert_eq!(json["mapSamples"], 16_000);
        assert_eq!(json["markers"].as_array().unwrap().len(), 4);
        assert!(json.get("onRender").is_none());
    }
}
