use crate::input;
use app_core::{ray_sphere, scene_camera, PanTracker, ToggleAnimator, PICK_SPHERE_RADIUS, TAP_SLOP_PX};
use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub pan_region: web::HtmlElement,
    pub pan: Rc<RefCell<PanTracker>>,
    pub animator: Rc<RefCell<ToggleAnimator>>,
    pub gesture: Rc<RefCell<input::GestureState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    // pointerdown: grant
    {
        let pan_m = w.pan.clone();
        let gesture_m = w.gesture.clone();
        let region = w.pan_region.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let mut g = gesture_m.borrow_mut();
            if g.pointer_id.is_some() {
                // first gesture wins
                return;
            }
            g.pointer_id = Some(ev.pointer_id());
            g.anchor = input::pointer_client_px(&ev);
            g.travel = 0.0;
            drop(g);
            pan_m.borrow_mut().begin();
            let _ = region.set_pointer_capture(ev.pointer_id());
            log::info!("[pan] begin drag");
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .pan_region
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointermove: cumulative delta since the grant
    {
        let pan_m = w.pan.clone();
        let gesture_m = w.gesture.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let mut g = gesture_m.borrow_mut();
            if g.pointer_id != Some(ev.pointer_id()) {
                return;
            }
            let delta = input::pointer_client_px(&ev) - g.anchor;
            g.travel = g.travel.max(delta.length());
            drop(g);
            pan_m.borrow_mut().update(delta);
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let _ = wnd
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // pointerup: tap toggles the box, anything longer flattens the drag
    {
        let pan_m = w.pan.clone();
        let gesture_m = w.gesture.clone();
        let animator_m = w.animator.clone();
        let canvas_pick = w.canvas.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let mut g = gesture_m.borrow_mut();
            if g.pointer_id != Some(ev.pointer_id()) {
                return;
            }
            let delta = input::pointer_client_px(&ev) - g.anchor;
            let travel = g.travel.max(delta.length());
            g.pointer_id = None;
            drop(g);

            if travel <= TAP_SLOP_PX {
                let pos = input::pointer_canvas_px(&ev, &canvas_pick);
                let width = canvas_pick.width() as f32;
                let height = canvas_pick.height() as f32;
                let cam = scene_camera(width / height.max(1.0));
                let (ro, rd) = cam.screen_to_world_ray(pos.x, pos.y, width, height);
                let mut animator = animator_m.borrow_mut();
                let v = animator.visual();
                let center = Vec3::new(0.0, v.lift, 0.0);
                if ray_sphere(ro, rd, center, PICK_SPHERE_RADIUS * v.scale).is_some() {
                    animator.toggle();
                    log::info!("[tap] box active={}", animator.active());
                }
            }

            let mut pan = pan_m.borrow_mut();
            pan.release();
            let t = pan.translation();
            log::info!("[pan] end drag at ({:.1}, {:.1})", t.x, t.y);
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let _ =
                wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }
}
