//! DOM-backed text measurement.
//!
//! Renders each character into a hidden, absolutely positioned probe element
//! and reads back its layout width. The probe is attached on first use and
//! removed when the measurer is dropped. If it cannot be attached, every
//! measurement reports `None` and the layout falls back to its default width.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

use crate::glyph::{FontSpec, TextMeasurer};

struct Probe {
    body: HtmlElement,
    element: HtmlElement,
}

/// Measures glyph widths through the browser's layout engine.
#[derive(Default)]
pub struct DomMeasurer {
    probe: Option<Probe>,
    attach_failed: bool,
}

impl DomMeasurer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn attach(font: &FontSpec) -> Result<Probe, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;
        let element = document
            .create_element("div")?
            .dyn_into::<HtmlElement>()
            .map_err(JsValue::from)?;

        let style = element.style();
        style.set_property("position", "absolute")?;
        style.set_property("visibility", "hidden")?;
        style.set_property("white-space", "pre")?;
        style.set_property("line-height", "1")?;
        style.set_property("left", "0")?;
        style.set_property("top", "0")?;
        style.set_property("font-family", &font.family)?;
        style.set_property("font-size", &format!("{}px", font.size_px))?;
        style.set_property("font-weight", &font.weight.to_string())?;

        body.append_child(&element)?;
        Ok(Probe { body, element })
    }
}

impl TextMeasurer for DomMeasurer {
    fn measure(&mut self, ch: char, font: &FontSpec) -> Option<f64> {
        if self.probe.is_none() && !self.attach_failed {
            match Self::attach(font) {
                Ok(probe) => self.probe = Some(probe),
                Err(e) => {
                    log::warn!("text probe unavailable, using fallback widths: {e:?}");
                    self.attach_failed = true;
                }
            }
        }
        let probe = self.probe.as_ref()?;
        probe.element.set_text_content(Some(&ch.to_string()));
        Some(probe.element.get_bounding_client_rect().width())
    }
}

impl Drop for DomMeasurer {
    fn drop(&mut self) {
        if let Some(probe) = self.probe.take()
            && let Err(e) = probe.body.remove_child(&probe.element)
        {
            log::warn!("failed to remove text probe: {e:?}");
        }
    }
}
