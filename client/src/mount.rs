//! Page mounting for both widgets.
//!
//! The dock mounts into `#dock-slot` when the page provides one; otherwise it
//! becomes a fixed overlay inserted at the top of `<body>`. The chat widget
//! is always appended to the end of `<body>`.

pub const DOCK_SLOT_ID: &str = "dock-slot";
pub const DOCK_WRAP_CLASS: &str = "dock-wrap";
pub const DOCK_OVERLAY_STYLE: &str = "position:fixed;top:1rem;right:1rem;z-index:101;";

#[cfg(feature = "csr")]
mod browser {
    use leptos::prelude::*;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Document, HtmlElement};

    use super::{DOCK_OVERLAY_STYLE, DOCK_SLOT_ID, DOCK_WRAP_CLASS};
    use crate::components::chat_widget::ChatWidget;
    use crate::components::dock::Dock;
    use crate::util::location::current_page_name;

    pub fn mount_widgets() {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::warn!("no document available, widgets not mounted");
            return;
        };

        if let Err(err) = mount_dock(&document) {
            log::warn!("dock not mounted: {err:?}");
        }
        leptos::mount::mount_to_body(ChatWidget);
    }

    fn mount_dock(document: &Document) -> Result<(), JsValue> {
        let host = match document.get_element_by_id(DOCK_SLOT_ID) {
            Some(slot) => {
                slot.class_list().add_1(DOCK_WRAP_CLASS)?;
                slot.dyn_into::<HtmlElement>().map_err(JsValue::from)?
            }
            None => overlay_host(document)?,
        };

        let page = current_page_name();
        log::debug!("mounting dock for {page}");
        leptos::mount::mount_to(host, move || view! { <Dock current_page=page/> }).forget();
        Ok(())
    }

    /// Fixed top-right wrapper used when the page has no dock slot.
    fn overlay_host(document: &Document) -> Result<HtmlElement, JsValue> {
        let wrap = document
            .create_element("div")?
            .dyn_into::<HtmlElement>()
            .map_err(JsValue::from)?;
        wrap.set_class_name(DOCK_WRAP_CLASS);
        wrap.style().set_css_text(DOCK_OVERLAY_STYLE);

        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;
        body.insert_before(&wrap, body.first_child().as_ref())?;
        Ok(wrap)
    }
}

#[cfg(feature = "csr")]
pub use browser::mount_widgets;
