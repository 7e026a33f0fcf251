//! Page scroll lock for modal dialogs.
//!
//! While any dialog is open the body is pinned with `position: fixed` at the
//! negated scroll offset (plain `overflow: hidden` does not stop rubber-band
//! scrolling on iOS) and `<html>` gets `overflow: hidden`. Releasing the last
//! lock restores the captured body style verbatim and scrolls back to the
//! captured offset.
//!
//! DESIGN
//! ======
//! Locks are acquisitions on a LIFO stack owned by one page-wide host. Only
//! the outermost acquisition captures and applies the lock; nested ones are
//! bookkeeping. A release that is not on top of the stack is recorded and
//! takes effect once everything above it has been released, so the page is
//! restored exactly once per outermost acquisition.
//!
//! [`ScrollLockGuard`] is the scoped form: dropping it releases. The
//! [`use_scroll_lock`] hook drops it when the dialog closes and from
//! `on_cleanup` when the component is disposed.

#[cfg(test)]
#[path = "scroll_lock_test.rs"]
mod scroll_lock_test;

use std::cell::RefCell;

use leptos::prelude::*;

/// The body style properties the lock overrides.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BodyStyle {
    pub overflow: String,
    pub position: String,
    pub top: String,
    pub width: String,
}

impl BodyStyle {
    /// Style that pins the body in place at `scroll_y`.
    #[must_use]
    pub fn locked_at(scroll_y: f64) -> Self {
        Self {
            overflow: "hidden".to_owned(),
            position: "fixed".to_owned(),
            top: format!("-{scroll_y}px"),
            width: "100%".to_owned(),
        }
    }
}

/// State captured by the outermost acquisition.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollSnapshot {
    pub body: BodyStyle,
    pub scroll_y: f64,
}

/// The page surface a lock manipulates.
pub trait ScrollHost {
    /// Current computed body style.
    fn body_style(&self) -> BodyStyle;
    fn set_body_style(&mut self, style: &BodyStyle);
    /// Set or (with `None`) clear the `<html>` overflow override.
    fn set_root_overflow(&mut self, overflow: Option<&str>);
    fn scroll_y(&self) -> f64;
    fn scroll_to(&mut self, y: f64);
}

/// Identifies one acquisition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LockId(u64);

#[derive(Debug)]
struct LockEntry {
    id: LockId,
    released: bool,
    snapshot: Option<ScrollSnapshot>,
}

/// Stack of outstanding acquisitions over one host.
#[derive(Debug)]
pub struct ScrollLockStack<H> {
    host: H,
    entries: Vec<LockEntry>,
    next_id: u64,
}

impl<H: ScrollHost> ScrollLockStack<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            entries: Vec::new(),
            next_id: 0,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Whether the page is currently pinned.
    pub fn is_locked(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Number of acquisitions not yet released.
    pub fn outstanding(&self) -> usize {
        self.entries.iter().filter(|e| !e.released).count()
    }

    pub fn acquire(&mut self) -> LockId {
        let id = LockId(self.next_id);
        self.next_id += 1;

        let snapshot = if self.entries.is_empty() {
            let snapshot = ScrollSnapshot {
                body: self.host.body_style(),
                scroll_y: self.host.scroll_y(),
            };
            self.host.set_body_style(&BodyStyle::locked_at(snapshot.scroll_y));
            self.host.set_root_overflow(Some("hidden"));
            Some(snapshot)
        } else {
            None
        };

        self.entries.push(LockEntry {
            id,
            released: false,
            snapshot,
        });
        id
    }

    /// Release `id`. Returns `false` for unknown or already released ids.
    pub fn release(&mut self, id: LockId) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|e| e.id == id && !e.released) else {
            return false;
        };
        entry.released = true;

        while self.entries.last().is_some_and(|e| e.released) {
            if let Some(LockEntry {
                snapshot: Some(snapshot),
                ..
            }) = self.entries.pop()
            {
                self.restore(&snapshot);
            }
        }
        true
    }

    fn restore(&mut self, snapshot: &ScrollSnapshot) {
        self.host.set_body_style(&snapshot.body);
        self.host.set_root_overflow(None);
        self.host.scroll_to(snapshot.scroll_y);
    }
}

// =============================================================================
// PAGE HOST
// =============================================================================

/// The browser document. Outside `hydrate` builds it is inert.
#[derive(Debug, Default)]
pub struct PageHost;

#[cfg(feature = "hydrate")]
impl PageHost {
    fn body() -> Option<web_sys::HtmlElement> {
        web_sys::window()?.document()?.body()
    }

    fn root() -> Option<web_sys::HtmlElement> {
        use wasm_bindgen::JsCast;

        web_sys::window()?
            .document()?
            .document_element()?
            .dyn_into::<web_sys::HtmlElement>()
            .ok()
    }
}

#[cfg(feature = "hydrate")]
impl ScrollHost for PageHost {
    fn body_style(&self) -> BodyStyle {
        let (Some(window), Some(body)) = (web_sys::window(), Self::body()) else {
            return BodyStyle::default();
        };
        let Ok(Some(computed)) = window.get_computed_style(&body) else {
            return BodyStyle::default();
        };
        let read = |name: &str| computed.get_property_value(name).unwrap_or_default();
        BodyStyle {
            overflow: read("overflow"),
            position: read("position"),
            top: read("top"),
            width: read("width"),
        }
    }

    fn set_body_style(&mut self, style: &BodyStyle) {
        let Some(body) = Self::body() else {
            return;
        };
        let css = body.style();
        let _ = css.set_property("overflow", &style.overflow);
        let _ = css.set_property("position", &style.position);
        let _ = css.set_property("top", &style.top);
        let _ = css.set_property("width", &style.width);
    }

    fn set_root_overflow(&mut self, overflow: Option<&str>) {
        let Some(root) = Self::root() else {
            return;
        };
        let css = root.style();
        match overflow {
            Some(value) => {
                let _ = css.set_property("overflow", value);
            }
            None => {
                let _ = css.remove_property("overflow");
            }
        }
    }

    fn scroll_y(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }

    fn scroll_to(&mut self, y: f64) {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, y);
        }
    }
}

#[cfg(not(feature = "hydrate"))]
impl ScrollHost for PageHost {
    fn body_style(&self) -> BodyStyle {
        BodyStyle::default()
    }

    fn set_body_style(&mut self, _style: &BodyStyle) {}

    fn set_root_overflow(&mut self, _overflow: Option<&str>) {}

    fn scroll_y(&self) -> f64 {
        0.0
    }

    fn scroll_to(&mut self, _y: f64) {}
}

thread_local! {
    static PAGE_LOCKS: RefCell<ScrollLockStack<PageHost>> = RefCell::new(ScrollLockStack::new(PageHost));
}

/// Scoped page lock. Released on drop.
#[derive(Debug)]
#[must_use = "the page unlocks as soon as the guard is dropped"]
pub struct ScrollLockGuard {
    id: LockId,
}

impl ScrollLockGuard {
    pub fn acquire() -> Self {
        let id = PAGE_LOCKS.with(|locks| locks.borrow_mut().acquire());
        log::debug!("scroll lock acquired: {id:?}");
        Self { id }
    }

    pub fn id(&self) -> LockId {
        self.id
    }
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let id = self.id;
        let _ = PAGE_LOCKS.try_with(|locks| locks.borrow_mut().release(id));
        log::debug!("scroll lock released: {id:?}");
    }
}

/// Number of page locks currently held on this thread.
#[cfg(test)]
pub(crate) fn page_lock_count() -> usize {
    PAGE_LOCKS.with(|locks| locks.borrow().outstanding())
}

/// Hold a page lock for as long as `is_open` is true.
///
/// Disposing the owning component releases the lock during teardown, so the
/// page is unpinned before the next view renders.
pub fn use_scroll_lock(is_open: Signal<bool>) {
    let guard = StoredValue::new(None::<ScrollLockGuard>);

    Effect::new(move || {
        let open = is_open.get();
        guard.try_update_value(|held| {
            if !open {
                held.take();
            } else if held.is_none() {
                *held = Some(ScrollLockGuard::acquire());
            }
        });
    });

    on_cleanup(move || {
        guard.try_update_value(|held| {
            held.take();
        });
    });
}
