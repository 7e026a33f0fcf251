//! Open/close bookkeeping for dialogs with an auto-dismiss timer.
//!
//! DESIGN
//! ======
//! Every `Closed -> Open` transition starts a new generation. A timer armed
//! for one generation can only close that same opening, and the close path
//! fires at most once per opening whether the user or the timer gets there
//! first.

#[cfg(test)]
#[path = "dialog_test.rs"]
mod dialog_test;

/// Default auto-dismiss delay in milliseconds.
pub const DEFAULT_AUTO_CLOSE_DELAY_MS: u32 = 3000;

/// Auto-dismiss configuration for a dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutoClose {
    pub enabled: bool,
    pub delay_ms: u32,
}

impl Default for AutoClose {
    fn default() -> Self {
        Self {
            enabled: false,
            delay_ms: DEFAULT_AUTO_CLOSE_DELAY_MS,
        }
    }
}

impl AutoClose {
    #[cfg(test)]
    pub(crate) fn after(delay_ms: u32) -> Self {
        Self { enabled: true, delay_ms }
    }

    /// Delay to arm on open, or `None` when auto-dismiss is off.
    #[must_use]
    pub fn delay(self) -> Option<u32> {
        self.enabled.then_some(self.delay_ms)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum DialogPhase {
    #[default]
    Closed,
    Open,
}

/// What to do with the auto-close timer after a visibility change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerCommand {
    /// Start a timer for this opening, replacing any earlier one.
    Arm { generation: u64, delay_ms: u32 },
    /// Leave the current timer, if any, running.
    Keep,
    /// Drop the current timer, if any.
    Cancel,
}

/// Phase plus the generation of the current (or last) opening.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DialogLifecycle {
    phase: DialogPhase,
    generation: u64,
}

impl DialogLifecycle {
    #[cfg(test)]
    pub(crate) fn phase(self) -> DialogPhase {
        self.phase
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self.phase == DialogPhase::Open
    }

    #[cfg(test)]
    pub(crate) fn generation(self) -> u64 {
        self.generation
    }

    /// Follow the host's visibility flag.
    ///
    /// Returns the new generation on a `Closed -> Open` transition.
    pub fn sync(&mut self, is_open: bool) -> Option<u64> {
        match (self.phase, is_open) {
            (DialogPhase::Closed, true) => {
                self.phase = DialogPhase::Open;
                self.generation += 1;
                Some(self.generation)
            }
            (DialogPhase::Open, false) => {
                self.phase = DialogPhase::Closed;
                None
            }
            _ => None,
        }
    }

    /// [`sync`](Self::sync) and decide the timer for the new visibility.
    pub fn plan_timer(&mut self, is_open: bool, auto: AutoClose) -> TimerCommand {
        let opened = self.sync(is_open);
        if !is_open {
            return TimerCommand::Cancel;
        }
        match (opened, auto.delay()) {
            (Some(generation), Some(delay_ms)) => TimerCommand::Arm { generation, delay_ms },
            (Some(_), None) => TimerCommand::Cancel,
            (None, _) => TimerCommand::Keep,
        }
    }

    /// Timer expiry for `generation`. Returns `true` when the close path should run.
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.is_open() && self.generation == generation {
            self.phase = DialogPhase::Closed;
            true
        } else {
            false
        }
    }

    /// Explicit close. Returns `true` when the dialog was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.phase = DialogPhase::Closed;
        was_open
    }
}
