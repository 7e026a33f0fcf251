//! Confirmation dialog state and the `use_confirm` hook.
//!
//! DESIGN
//! ======
//! `show` returns a [`ConfirmReply`] future backed by a oneshot channel. The
//! controller holds at most one pending confirmation. Every reply settles
//! exactly once:
//! - confirm runs the caller's action, closes the dialog, then resolves `true`;
//! - cancel closes and resolves `false` without running the action;
//! - a new `show`, `hide`, or dropping the controller resolves the pending
//!   reply with `false` and drops its action uninvoked.

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::FutureExt;
use futures::channel::oneshot;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Visual treatment of a confirmation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfirmSeverity {
    Danger,
    #[default]
    Warning,
    Info,
}

impl ConfirmSeverity {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Modifier class for the confirm button.
    #[must_use]
    pub fn button_class(self) -> &'static str {
        match self {
            Self::Danger => "btn btn--danger",
            Self::Warning => "btn btn--warning",
            Self::Info => "btn btn--primary",
        }
    }
}

/// Optional overrides for a confirmation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfirmOptions {
    pub confirm_label: Option<String>,
    pub cancel_label: Option<String>,
    pub severity: ConfirmSeverity,
}

impl ConfirmOptions {
    #[must_use]
    pub fn confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn cancel_label(mut self, label: impl Into<String>) -> Self {
        self.cancel_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn severity(mut self, severity: ConfirmSeverity) -> Self {
        self.severity = severity;
        self
    }
}

/// What the confirm dialog renders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfirmView {
    pub is_open: bool,
    pub title: String,
    pub message: String,
    pub confirm_label: Option<String>,
    pub cancel_label: Option<String>,
    pub severity: ConfirmSeverity,
}

type ConfirmAction = Box<dyn FnOnce() + Send + Sync>;

/// The unresolved half of an outstanding confirmation.
pub struct PendingConfirm {
    action: ConfirmAction,
    reply: oneshot::Sender<bool>,
}

impl PendingConfirm {
    /// Run the caller's action; the reply is left for the caller to settle.
    pub fn run_action(self) -> Settlement {
        (self.action)();
        Settlement(self.reply)
    }

    /// Drop the action without running it.
    pub fn decline(self) -> Settlement {
        Settlement(self.reply)
    }
}

/// Sender side of a reply, consumed by [`Settlement::resolve`].
pub struct Settlement(oneshot::Sender<bool>);

impl Settlement {
    pub fn resolve(self, confirmed: bool) {
        log::debug!("confirmation settled: confirmed={confirmed}");
        if self.0.send(confirmed).is_err() {
            log::debug!("confirmation reply was dropped before it settled");
        }
    }
}

/// Future returned by `show`. Resolves to `true` only on confirm.
#[must_use = "a confirmation reply does nothing unless awaited"]
pub struct ConfirmReply {
    rx: oneshot::Receiver<bool>,
}

impl ConfirmReply {
    /// A reply that is already settled.
    pub fn settled(confirmed: bool) -> Self {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(confirmed);
        Self { rx }
    }
}

impl Future for ConfirmReply {
    type Output = bool;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<bool> {
        // A dropped sender means the controller went away while pending.
        self.rx.poll_unpin(cx).map(|result| result.unwrap_or(false))
    }
}

/// Single-slot confirmation controller.
#[derive(Default)]
pub struct ConfirmController {
    view: ConfirmView,
    pending: Option<PendingConfirm>,
}

impl fmt::Debug for ConfirmController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfirmController")
            .field("view", &self.view)
            .field("pending", &self.pending.is_some())
            .finish()
    }
}

impl ConfirmController {
    #[must_use]
    pub fn view(&self) -> &ConfirmView {
        &self.view
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.view.is_open
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Open the dialog. A confirmation that is still pending resolves `false`.
    pub fn show<F>(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        on_confirm: F,
        options: ConfirmOptions,
    ) -> ConfirmReply
    where
        F: FnOnce() + Send + Sync + 'static,
    {
        if let Some(superseded) = self.pending.take() {
            log::debug!("confirmation superseded by a newer request");
            superseded.decline().resolve(false);
        }

        let (tx, rx) = oneshot::channel();
        self.view = ConfirmView {
            is_open: true,
            title: title.into(),
            message: message.into(),
            confirm_label: options.confirm_label,
            cancel_label: options.cancel_label,
            severity: options.severity,
        };
        self.pending = Some(PendingConfirm {
            action: Box::new(on_confirm),
            reply: tx,
        });
        ConfirmReply { rx }
    }

    pub fn take_pending(&mut self) -> Option<PendingConfirm> {
        self.pending.take()
    }

    /// Clear `is_open`, keeping the rest of the view for exit animations.
    pub fn close(&mut self) {
        self.view.is_open = false;
    }

    /// User confirmed. Returns `false` when nothing was pending.
    pub fn confirm(&mut self) -> bool {
        let Some(pending) = self.take_pending() else {
            return false;
        };
        let settlement = pending.run_action();
        self.close();
        settlement.resolve(true);
        true
    }

    /// User cancelled. Returns `false` when nothing was pending.
    pub fn cancel(&mut self) -> bool {
        let Some(pending) = self.take_pending() else {
            return false;
        };
        self.close();
        pending.decline().resolve(false);
        true
    }

    /// Force-close; a pending reply resolves `false`.
    pub fn hide(&mut self) {
        self.close();
        if let Some(pending) = self.take_pending() {
            pending.decline().resolve(false);
        }
    }
}

/// Reactive handle returned by [`use_confirm`].
///
/// The caller's action runs outside the signal update so it may freely touch
/// other signals, including this one.
#[derive(Clone, Copy, Debug)]
pub struct ConfirmHandle {
    pub state: RwSignal<ConfirmController>,
}

impl ConfirmHandle {
    pub fn show<F>(
        self,
        title: impl Into<String>,
        message: impl Into<String>,
        on_confirm: F,
        options: ConfirmOptions,
    ) -> ConfirmReply
    where
        F: FnOnce() + Send + Sync + 'static,
    {
        let (title, message) = (title.into(), message.into());
        log::debug!("confirmation shown: severity={} title={title:?}", options.severity.as_str());
        self.state
            .try_update(move |c| c.show(title, message, on_confirm, options))
            .unwrap_or_else(|| ConfirmReply::settled(false))
    }

    pub fn confirm(self) {
        let Some(pending) = self.state.try_update(ConfirmController::take_pending).flatten() else {
            return;
        };
        let settlement = pending.run_action();
        self.state.update(ConfirmController::close);
        settlement.resolve(true);
    }

    pub fn cancel(self) {
        let Some(pending) = self.state.try_update(ConfirmController::take_pending).flatten() else {
            return;
        };
        self.state.update(ConfirmController::close);
        pending.decline().resolve(false);
    }

    pub fn hide(self) {
        self.state.update(ConfirmController::hide);
    }

    /// Reactive read of the rendered view.
    pub fn view(self) -> ConfirmView {
        self.state.with(|c| c.view().clone())
    }

    /// Reactive read of the visibility flag.
    pub fn is_open(self) -> bool {
        self.state.with(ConfirmController::is_open)
    }
}

/// Create confirmation state owned by the calling component.
pub fn use_confirm() -> ConfirmHandle {
    ConfirmHandle {
        state: RwSignal::new(ConfirmController::default()),
    }
}
