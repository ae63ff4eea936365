//! Dark mode preference.
//!
//! Persisted in `localStorage`, falling back to the system
//! `prefers-color-scheme` query when nothing is stored. Applied as a
//! `.dark-mode` class on `<html>`. Requires a browser environment.

#[cfg(feature = "hydrate")]
const DARK_KEY: &str = "solution_desk_dark";

/// Read the stored preference (or the system default) and apply it.
/// Returns the effective setting.
pub fn init() -> bool {
    let enabled = read_preference();
    apply(enabled);
    enabled
}

/// Flip dark mode, persist the choice, and return the new setting.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(DARK_KEY, if next { "true" } else { "false" });
        }
    }
    next
}

fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        if let Some(stored) =
            window.local_storage().ok().flatten().and_then(|s| s.get_item(DARK_KEY).ok().flatten())
        {
            return stored == "true";
        }
        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let class_list = root.class_list();
            let _ = if enabled {
                class_list.add_1("dark-mode")
            } else {
                class_list.remove_1("dark-mode")
            };
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}
