use glam::Vec2;
use web_sys as web;

/// Bookkeeping for the live pointer gesture on the pan region. Only the
/// pointer that granted the gesture is tracked; others are ignored until it
/// releases.
#[derive(Default, Clone, Copy)]
pub struct GestureState {
    pub pointer_id: Option<i32>,
    /// Client-pixel position at grant.
    pub anchor: Vec2,
    /// Max distance traveled from the anchor, for tap detection.
    pub travel: f32,
}

#[inline]
pub fn pointer_client_px(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width() as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height() as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}
