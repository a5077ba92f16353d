//! Browser fullscreen toggle for the creator.
//!
//! Uses the Fullscreen API on the document element. Requires a browser
//! environment; server rendering and native tests see a no-op that reports
//! fullscreen as inactive.

#[cfg(test)]
#[path = "fullscreen_test.rs"]
mod fullscreen_test;

/// Whether the document currently has a fullscreen element.
pub fn is_active() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.document())
            .is_some_and(|doc| doc.fullscreen_element().is_some())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Enter fullscreen when inactive, leave it otherwise. Returns whether
/// fullscreen was requested.
pub fn toggle() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return false;
        };
        if is_active() {
            doc.exit_fullscreen();
            return false;
        }
        let Some(root) = doc.document_element() else {
            return false;
        };
        match root.request_fullscreen() {
            Ok(()) => true,
            Err(e) => {
                log::warn!("fullscreen request rejected: {e:?}");
                false
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
