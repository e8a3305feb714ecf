//! Browser host helpers (wasm only)

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

/// Failures while attaching to the page
#[derive(Debug, Error)]
pub enum HostError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no <canvas> with id `{0}`")]
    MissingCanvas(String),
    #[error("canvas has no 2d context")]
    NoContext,
}

impl From<HostError> for JsValue {
    fn from(e: HostError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

pub fn window() -> Result<Window, HostError> {
    web_sys::window().ok_or(HostError::NoWindow)
}

pub fn document() -> Result<Document, HostError> {
    window()?.document().ok_or(HostError::NoDocument)
}

/// Look up a canvas element by id together with its 2D context
pub fn canvas_2d(id: &str) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), HostError> {
    let canvas: HtmlCanvasElement = document()?
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into().ok())
        .ok_or_else(|| HostError::MissingCanvas(id.to_string()))?;

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into().ok())
        .ok_or(HostError::NoContext)?;

    Ok((canvas, ctx))
}

/// Pointer Y relative to the canvas top edge
pub fn pointer_y_in(canvas: &HtmlCanvasElement, client_y: i32) -> f32 {
    let rect = canvas.get_bounding_client_rect();
    (client_y as f64 - rect.top()) as f32
}
