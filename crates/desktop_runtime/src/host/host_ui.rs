#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

#[cfg(target_arch = "wasm32")]
use crate::components::window_dom_id;
use crate::model::{Size, WindowId};

const FALLBACK_VIEWPORT: Size = Size::new(1024, 768);

pub(super) fn focus_window_chrome(window_id: WindowId) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let dom_id = window_dom_id(window_id);
        // Newly opened frames mount after this tick.
        let callback = Closure::once_into_js(move || {
            let element = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.get_element_by_id(&dom_id))
                .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok());
            if let Some(element) = element {
                let _ = element.focus();
            }
        });
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = window_id;
}

pub(super) fn viewport_size() -> Size {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let dimension = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
                value.ok().and_then(|value| value.as_f64()).map(|v| v as i32)
            };
            return Size::new(
                dimension(window.inner_width()).unwrap_or(FALLBACK_VIEWPORT.w),
                dimension(window.inner_height()).unwrap_or(FALLBACK_VIEWPORT.h),
            );
        }
    }

    FALLBACK_VIEWPORT
}
