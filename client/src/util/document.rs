//! Document-level side effects.
//!
//! Applies the chosen UI language to the `<html lang>` attribute. Both
//! helpers no-op outside the browser.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use marina::Language;

/// Set `<html lang>` to the language code. Returns the code applied.
pub fn apply_language(language: Language) -> &'static str {
    let code = language.code();
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("lang", code);
        }
    }
    code
}

/// Scroll the window back to the top, e.g. between booking steps.
pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}
