/// Dice Web - WASM entry points for the browser host
///
/// Finds the canvas, assembles the dice scene, and drives the render loop
/// from `requestAnimationFrame`.
use dice_core::{HostClock, RenderLoop, Scene, SceneConfig};
use log::{error, info};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

pub mod error;
pub mod gl;

pub use error::WebError;
pub use gl::WebGlRenderer;

/// Id of the canvas the stock page provides
pub const DEFAULT_CANVAS_ID: &str = "f";

struct AppState {
    render_loop: RenderLoop<HostClock>,
    renderer: WebGlRenderer,
}

impl AppState {
    fn frame(&mut self, timestamp_ms: f64) -> Result<(), WebError> {
        self.render_loop.clock_mut().observe(timestamp_ms);
        self.render_loop.frame(&mut self.renderer)?;
        Ok(())
    }
}

/// The dice scene bound to one canvas
#[wasm_bindgen]
pub struct WebApp {
    state: Rc<RefCell<AppState>>,
}

#[wasm_bindgen]
impl WebApp {
    /// Assemble the scene on the canvas with id `canvas_id`
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<WebApp, JsValue> {
        let canvas = find_canvas(canvas_id)?;
        let scene = Scene::assemble(&SceneConfig::default(), &mut rand::thread_rng())
            .map_err(WebError::from)?;
        let renderer = WebGlRenderer::new(canvas, &scene)?;

        info!("dice scene ready on #{canvas_id}");
        Ok(WebApp {
            state: Rc::new(RefCell::new(AppState {
                render_loop: RenderLoop::new(scene, HostClock::new()),
                renderer,
            })),
        })
    }

    /// Render a single frame at a host timestamp in milliseconds
    pub fn render(&mut self, timestamp_ms: f64) -> Result<(), JsValue> {
        self.state.borrow_mut().frame(timestamp_ms)?;
        Ok(())
    }

    /// Start the `requestAnimationFrame` loop; it runs for the page's lifetime
    pub fn start(&self) -> Result<(), JsValue> {
        let state = Rc::clone(&self.state);
        let callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let next = Rc::clone(&callback);

        *callback.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
            if let Err(e) = state.borrow_mut().frame(timestamp) {
                error!("frame failed: {e}");
            }
            if let Some(closure) = next.borrow().as_ref() {
                if let Err(e) = request_animation_frame(closure) {
                    error!("could not schedule the next frame: {e}");
                }
            }
        }));

        match callback.borrow().as_ref() {
            Some(closure) => {
                request_animation_frame(closure)?;
            }
            None => return Err(WebError::Resource("frame callback").into()),
        }
        Ok(())
    }
}

/// Page entry point: build the scene on the default canvas and start animating
#[wasm_bindgen]
pub fn init() -> Result<(), JsValue> {
    let app = WebApp::new(DEFAULT_CANVAS_ID)?;
    app.start()
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "wasm-logger")]
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));

    Ok(())
}

fn find_canvas(id: &str) -> Result<HtmlCanvasElement, WebError> {
    let document = web_sys::window()
        .ok_or(WebError::MissingWindow)?
        .document()
        .ok_or(WebError::MissingDocument)?;

    document
        .get_element_by_id(id)
        .ok_or_else(|| WebError::MissingCanvas(id.to_string()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| WebError::NotACanvas(id.to_string()))
}

fn request_animation_frame(callback: &Closure<dyn FnMut(f64)>) -> Result<i32, WebError> {
    let window = web_sys::window().ok_or(WebError::MissingWindow)?;
    Ok(window.request_animation_frame(callback.as_ref().unchecked_ref())?)
}
