use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Apply the pan translation to the region's inline transform. The canvas
/// lives inside the region, so the scene moves with it.
pub fn set_pan_translation(region: &web::HtmlElement, x: f32, y: f32) {
    let _ = region.set_attribute(
        "style",
        &format!("transform: translate({x:.1}px, {y:.1}px)"),
    );
}
