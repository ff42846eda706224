#![cfg(target_arch = "wasm32")]
pub mod dom;
pub mod events;
pub mod frame;
pub mod input;
pub mod render;

use app_core::{PanTracker, SpringConfig, ToggleAnimator};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("app-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let pan_region: web::HtmlElement = document
        .get_element_by_id("pan-region")
        .ok_or_else(|| anyhow::anyhow!("missing #pan-region"))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);
    {
        let canvas_resize = canvas.clone();
        let resize_closure = Closure::wrap(Box::new(move || {
            dom::sync_canvas_backing_size(&canvas_resize);
        }) as Box<dyn FnMut()>);
        if let Some(window) = web::window() {
            window
                .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())
                .ok();
        }
        resize_closure.forget();
    }

    let pan = Rc::new(RefCell::new(PanTracker::new()));
    let animator = Rc::new(RefCell::new(ToggleAnimator::new(SpringConfig::default())));
    let gesture = Rc::new(RefCell::new(input::GestureState::default()));

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        pan_region: pan_region.clone(),
        pan: pan.clone(),
        animator: animator.clone(),
        gesture,
    });

    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        pan,
        animator,
        canvas,
        pan_region,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
