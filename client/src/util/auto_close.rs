//! Auto-dismiss timer wiring for dialogs.
//!
//! The effect follows the dialog's visibility through
//! [`DialogLifecycle::plan_timer`] and owns at most one timer handle.
//! Dropping a handle cancels its timer. The handle is dropped when the dialog
//! closes, when a new opening replaces it, and from `on_cleanup` when the
//! component is disposed.

#[cfg(test)]
#[path = "auto_close_test.rs"]
mod auto_close_test;

use leptos::prelude::*;

use crate::state::dialog::{AutoClose, DialogLifecycle, TimerCommand};

/// Callback a scheduled timer runs on expiry.
pub type TimerFire = Box<dyn FnOnce()>;

/// Run `on_close` once `auto.delay_ms` after each opening, unless the dialog
/// was closed first.
///
/// `schedule(delay_ms, fire)` starts a timer and returns its handle.
pub fn use_auto_close<S, H>(
    is_open: Signal<bool>,
    auto: AutoClose,
    lifecycle: StoredValue<DialogLifecycle>,
    on_close: Callback<()>,
    schedule: S,
) where
    S: Fn(u32, TimerFire) -> H + 'static,
    H: 'static,
{
    let timer = StoredValue::new_local(None::<H>);

    Effect::new(move || {
        let open = is_open.get();
        let Some(command) = lifecycle.try_update_value(|l| l.plan_timer(open, auto)) else {
            return;
        };
        match command {
            TimerCommand::Keep => {}
            TimerCommand::Cancel => {
                timer.try_update_value(|t| {
                    t.take();
                });
            }
            TimerCommand::Arm {
                generation,
                delay_ms,
            } => {
                log::debug!("auto-close armed: {delay_ms}ms");
                let handle = schedule(
                    delay_ms,
                    Box::new(move || {
                        if lifecycle.try_update_value(|l| l.expire(generation)).unwrap_or(false) {
                            on_close.run(());
                        }
                    }),
                );
                timer.try_update_value(|t| *t = Some(handle));
            }
        }
    });

    on_cleanup(move || {
        timer.try_update_value(|t| {
            t.take();
        });
    });
}
