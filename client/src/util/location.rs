//! Current page lookup.
//!
//! Requires a browser; native builds report the index page.

use crate::state::nav::{DEFAULT_PAGE, current_page};

/// Page file named by `window.location.pathname`.
pub fn current_page_name() -> String {
    #[cfg(feature = "csr")]
    {
        let pathname = web_sys::window().and_then(|w| match w.location().pathname() {
            Ok(path) => Some(path),
            Err(err) => {
                log::warn!("location pathname unavailable: {err:?}");
                None
            }
        });
        if let Some(pathname) = pathname {
            return current_page(&pathname).to_owned();
        }
    }
    current_page(DEFAULT_PAGE).to_owned()
}
