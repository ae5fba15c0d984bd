use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Function, Reflect};
use web_sys::HtmlCanvasElement;

use crate::controller::globe::{GlobeConfig, GlobeOptions, GlobeSpin};

const FACTORY: &str = "createGlobe";
const FALLBACK_SIZE: f64 = 600.0;

#[wasm_bindgen]
extern "C" {
    pub type GlobeInstance;

    #[wasm_bindgen(method, catch)]
    fn destroy(this: &GlobeInstance) -> Result<(), JsValue>;
}

fn factory() -> Option<Function> {
    let window = web_sys::window()?;
    Reflect::get(&window, &JsValue::from_str(FACTORY))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

pub fn library_loaded() -> bool {
    factory().is_some()
}

pub struct Globe {
    instance: GlobeInstance,
    _on_render: Closure<dyn FnMut(JsValue)>,
}

impl Globe {
    pub fn create(canvas: &HtmlCanvasElement, config: &GlobeConfig) -> Option<Self> {
        let factory = factory()?;

        let size = match canvas.offset_width() {
            0 => FALLBACK_SIZE,
            w => w as f64,
        };
        let options = match serde_wasm_bindgen::to_value(&GlobeOptions::for_canvas(config, size)) {
            Ok(options) => options,
            Err(e) => {
                warn!("globe options not serializable: {}", e);
                return None;
            }
        };

        let mut spin = GlobeSpin::new(config.phi_step);
        let on_render = Closure::<dyn FnMut(JsValue)>::new(move |state: JsValue| {
            let phi = spin.next_frame();
            let _ = Reflect::set(&state, &JsValue::from_str("phi"), &JsValue::from_f64(phi));
        });
        let _ = Reflect::set(&options, &JsValue::from_str("onRender"), on_render.as_ref());

        match factory.call2(&JsValue::NULL, canvas, &options) {
            Ok(instance) => Some(Self {
                instance: instance.unchecked_into(),
                _on_render: on_render,
            }),
            Err(e) => {
                warn!("{} failed: {:?}", FACTORY, e);
                None
            }
        }
    }
}

impl Drop for Globe {
    fn drop(&mut self) {
        let _ = self.instance.destroy();
    }
}
