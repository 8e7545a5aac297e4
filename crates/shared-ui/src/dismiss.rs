//! Dismissible regions: outside-click handling for dropdowns and
//! popovers.
//!
//! A region registers a document-level pointer listener only while it is
//! open; any pointer or touch event whose target lies outside the
//! region's rendered bounds fires the dismiss callback. Teardown is
//! idempotent, so repeated open/close cycles never leak listeners.
//! [`OpenRegions`] additionally enforces that at most one region is open
//! at a time.

use dioxus::prelude::*;

// ── Single-owner open state ─────────────────────────────────────────

/// Which region id becomes the owner after an open request.
fn next_owner_on_open(_current: Option<&'static str>, id: &'static str) -> Option<&'static str> {
    // Opening always displaces whichever region was open before.
    Some(id)
}

/// Which region id remains the owner after a close request.
fn next_owner_on_close(
    current: Option<&'static str>,
    id: &'static str,
) -> Option<&'static str> {
    if current == Some(id) {
        None
    } else {
        current
    }
}

/// Shared ownership of the single open dropdown/calendar region.
///
/// Provide once at the application root; every dismissible control
/// claims and releases its region through this context.
#[derive(Clone, Copy)]
pub struct OpenRegions {
    owner: Signal<Option<&'static str>>,
}

impl OpenRegions {
    pub fn new() -> Self {
        Self {
            owner: Signal::new(None),
        }
    }

    pub fn is_open(&self, id: &'static str) -> bool {
        *self.owner.read() == Some(id)
    }

    /// Open `id`, closing any previously open region.
    pub fn open(&mut self, id: &'static str) {
        let next = next_owner_on_open(*self.owner.peek(), id);
        self.owner.set(next);
    }

    /// Close `id` if it is the current owner; a stale close from a
    /// region that already lost ownership is a no-op.
    pub fn close(&mut self, id: &'static str) {
        let next = next_owner_on_close(*self.owner.peek(), id);
        if next != *self.owner.peek() {
            self.owner.set(next);
        }
    }

    pub fn toggle(&mut self, id: &'static str) {
        if self.is_open(id) {
            self.close(id);
        } else {
            self.open(id);
        }
    }
}

impl Default for OpenRegions {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide the [`OpenRegions`] context. Call once in the root component.
pub fn provide_open_regions() -> OpenRegions {
    use_context_provider(OpenRegions::new)
}

/// Access the [`OpenRegions`] context.
pub fn use_open_regions() -> OpenRegions {
    use_context::<OpenRegions>()
}

// ── Document-level listener lifecycle ───────────────────────────────

/// Script registering the outside-pointer listener for `region_id`.
///
/// The handler lives in a window-scoped registry keyed by region id, so
/// attach is a no-op when a handler is already registered and detach can
/// find it again from an independent eval.
fn attach_script(region_id: &str) -> String {
    format!(
        r#"
        (function() {{
            var registry = window.__dismissRegions = window.__dismissRegions || {{}};
            if (registry["{region_id}"]) {{ return; }}
            var handler = function(event) {{
                var el = document.getElementById("{region_id}");
                if (!el || !el.contains(event.target)) {{
                    dioxus.send(true);
                }}
            }};
            registry["{region_id}"] = handler;
            document.addEventListener("pointerdown", handler);
            document.addEventListener("touchstart", handler);
        }})();
        "#
    )
}

/// Script removing the listener for `region_id`. Safe to run when no
/// listener is registered.
fn detach_script(region_id: &str) -> String {
    format!(
        r#"
        (function() {{
            var registry = window.__dismissRegions || {{}};
            var handler = registry["{region_id}"];
            if (!handler) {{ return; }}
            document.removeEventListener("pointerdown", handler);
            document.removeEventListener("touchstart", handler);
            delete registry["{region_id}"];
        }})();
        "#
    )
}

/// Dismiss-on-outside-click for the element with id `region_id`.
///
/// While `open` is true a pointerdown/touchstart listener is attached to
/// the document; a pointer event outside the element invokes
/// `on_dismiss`. The listener is detached when `open` turns false and on
/// component drop, whichever comes first.
pub fn use_outside_dismiss(
    region_id: &'static str,
    open: ReadSignal<bool>,
    on_dismiss: EventHandler<()>,
) {
    use_effect(move || {
        if open() {
            let mut eval = document::eval(&attach_script(region_id));
            spawn(async move {
                if eval.recv::<bool>().await.is_ok() {
                    on_dismiss.call(());
                }
            });
        } else {
            document::eval(&detach_script(region_id));
        }
    });

    use_drop(move || {
        document::eval(&detach_script(region_id));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn open_displaces_previous_owner() {
        assert_eq!(next_owner_on_open(None, "download"), Some("download"));
        assert_eq!(
            next_owner_on_open(Some("download"), "calendar"),
            Some("calendar")
        );
    }

    #[test]
    fn close_only_releases_current_owner() {
        assert_eq!(next_owner_on_close(Some("download"), "download"), None);
        // A region that already lost ownership must not close its successor.
        assert_eq!(
            next_owner_on_close(Some("calendar"), "download"),
            Some("calendar")
        );
        assert_eq!(next_owner_on_close(None, "download"), None);
    }

    #[test]
    fn attach_script_targets_region_bounds() {
        let script = attach_script("download-menu");
        assert!(script.contains("getElementById(\"download-menu\")"));
        // Inside-the-region events must not dismiss
        assert!(script.contains("!el.contains(event.target)"));
        assert!(script.contains("pointerdown"));
        assert!(script.contains("touchstart"));
    }

    #[test]
    fn attach_script_guards_double_registration() {
        let script = attach_script("download-menu");
        assert!(script.contains("if (registry[\"download-menu\"]) { return; }"));
    }

    #[test]
    fn detach_script_is_idempotent() {
        let script = detach_script("download-menu");
        assert!(script.contains("if (!handler) { return; }"));
        assert!(script.contains("removeEventListener"));
        assert!(script.contains("delete registry[\"download-menu\"]"));
    }
}
