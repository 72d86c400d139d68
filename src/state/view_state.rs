//! The envelope's view state: a handful of flags the renderer keys off.
//!
//! `ViewState` is pure data with no behaviour of its own; it is mutated
//! only by [`crate::state::EnvelopeAnimator`] applying scheduled steps or
//! the zoom toggle. The flags collectively encode a single discrete phase
//! at a time — see [`ViewState::phase`] — and the schedules are built so
//! that mutually exclusive flags are never simultaneously true.

/// Flags and offsets describing what the renderer should show.
///
/// Mount-time state is all-false/zero ([`ViewState::default`]); reset
/// returns to exactly that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    /// Flap is in, or transitioning to, the open position.
    pub opening: bool,
    /// Letter has begun or finished sliding out of the envelope.
    pub letter_out: bool,
    /// Letter layer is promoted above all other layers (fully out).
    pub letter_above: bool,
    /// Letter is enlarged (interactive focus state).
    pub zoomed: bool,
    /// Letter is sliding back in, kept above the flap but below the front.
    pub returning: bool,
    /// The one-shot "pull to centre" effect has engaged.
    pub pulled_down: bool,
    /// Vertical translation (rows) applied to the whole envelope while
    /// pulled toward the viewport centre. Positive moves down.
    pub envelope_offset: i16,
}

/// The discrete phase encoded by the flag combination.
///
/// Derived, never stored: the flags are the source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// At rest, flap closed, letter inside.
    Closed,
    /// Flap swinging open, letter still inside.
    Opening,
    /// Letter sliding out from behind the front pocket.
    Revealing,
    /// Letter fully out, promoted above every layer.
    Out,
    /// Letter enlarged for reading.
    Zoomed,
    /// Letter sliding back in above the flap, below the front.
    Returning,
}

impl ViewState {
    /// Derive the discrete phase from the current flags.
    pub fn phase(&self) -> Phase {
        if self.zoomed {
            Phase::Zoomed
        } else if self.returning {
            Phase::Returning
        } else if self.letter_above {
            Phase::Out
        } else if self.letter_out {
            Phase::Revealing
        } else if self.opening {
            Phase::Opening
        } else {
            Phase::Closed
        }
    }

    /// Check the structural invariant the schedules maintain.
    ///
    /// Forward implications (`zoomed ⇒ letter_above ⇒ letter_out ⇒
    /// opening`), the returning exclusions, and "an offset implies the
    /// pull engaged". Property tests assert this over arbitrary
    /// interleavings of opens, resets, and clock advances.
    pub fn invariant_holds(&self) -> bool {
        let forward_chain = (!self.zoomed || self.letter_above)
            && (!self.letter_above || self.letter_out)
            && (!self.letter_out || self.opening);
        let returning_excludes =
            !self.returning || (self.opening && !self.letter_out && !self.letter_above && !self.zoomed);
        let offset_implies_pull = self.envelope_offset == 0 || self.pulled_down;
        let pull_in_motion = !self.pulled_down || self.opening;
        forward_chain && returning_excludes && offset_implies_pull && pull_in_motion
    }

    /// The fully revealed state an uninterrupted `open()` ends in.
    pub fn is_fully_revealed(&self) -> bool {
        self.opening && self.letter_out && self.letter_above && !self.zoomed && !self.returning
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "view_state_tests.rs"]
mod tests;
