//! Time-debounced digital input.
//!
//! Wraps one [`InputPin`] and turns noisy raw levels into confirmed edges.
//! Every raw transition restarts the stability timer, so a contact may
//! bounce for as long as it likes; the change is only confirmed once the
//! level has been stable for strictly longer than the debounce window.
//!
//! ```text
//!  raw     ──┐ ┌┐ ┌──────────────────────
//!            └─┘└─┘
//!  timer      ^  ^ ^ restart ──── > window ──▶ Edge::Active
//! ```
//!
//! Polarity: with `inverted` set, an electrical LOW reads as logical
//! active (`true`).  All levels handled here are logical.
//!
//! Pull resistors are not touched here: embedded-hal's [`InputPin`] has no
//! pull control, so the board adapter applies [`InputConfig::pull`] when it
//! creates the pin driver, before the input reaches [`DebouncedInput::new`].
//! `new` stays free of I/O; [`init`](DebouncedInput::init) does the first read.

use embedded_hal::digital::InputPin;

use crate::config::InputConfig;

/// A confirmed change of an input's logical level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Input became logically active (door closed, cab present, button pressed).
    Active,
    /// Input became logically inactive.
    Inactive,
}

impl Edge {
    pub const fn from_level(active: bool) -> Self {
        if active { Self::Active } else { Self::Inactive }
    }

    /// Logical level carried by this edge.
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

pub struct DebouncedInput<P> {
    pin: P,
    config: InputConfig,
    window_ms: u32,
    /// Latest raw logical level, before confirmation.
    tracked: bool,
    /// Level carried by the last emitted edge (or the init reading).
    emitted: bool,
    /// Time of the last raw transition while a confirmation is pending.
    pending_since: Option<u32>,
}

impl<P: InputPin> DebouncedInput<P> {
    /// Pure configuration; the pin is not read until [`init`](Self::init).
    pub fn new(pin: P, config: InputConfig, window_ms: u32) -> Self {
        Self {
            pin,
            config,
            window_ms,
            tracked: false,
            emitted: false,
            pending_since: None,
        }
    }

    /// Seed tracked and emitted state from the current level so the first
    /// [`poll`](Self::poll) never reports an edge for a level that was
    /// already present at boot.
    pub fn init(&mut self) -> Result<(), P::Error> {
        let level = self.read_raw()?;
        self.tracked = level;
        self.emitted = level;
        self.pending_since = None;
        Ok(())
    }

    /// Call once per control tick with the current monotonic time.
    /// Returns a confirmed edge, if any.
    pub fn poll(&mut self, now_ms: u32) -> Result<Option<Edge>, P::Error> {
        let level = self.read_raw()?;

        if level != self.tracked {
            self.tracked = level;
            self.pending_since = Some(now_ms);
        }

        let Some(since) = self.pending_since else {
            return Ok(None);
        };
        if now_ms.wrapping_sub(since) <= self.window_ms {
            return Ok(None);
        }

        self.pending_since = None;
        if self.tracked == self.emitted {
            // Bounced back to the previous level.
            return Ok(None);
        }
        self.emitted = self.tracked;
        Ok(Some(Edge::from_level(self.emitted)))
    }

    /// Immediate, undebounced logical level.
    pub fn read_raw(&mut self) -> Result<bool, P::Error> {
        let high = self.pin.is_high()?;
        Ok(high != self.config.inverted)
    }

    /// GPIO number this input is attached to.
    pub fn gpio(&self) -> i32 {
        self.config.gpio
    }

    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    /// Level carried by the last emitted edge.
    pub fn confirmed(&self) -> bool {
        self.emitted
    }

    /// True while a raw change is waiting out the debounce window.
    pub fn is_pending(&self) -> bool {
        self.pending_since.is_some()
    }
}
