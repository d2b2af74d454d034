//! Decoded command packets from the wireless peer.
//!
//! Wire parsing lives in the transport layer; by the time a packet reaches
//! this crate it is already one of the typed values below. Dispatch is
//! exhaustive pattern matching, never runtime type inspection.

use crate::colors::Color;
use crate::time::TimeDuration;

/// A command unit decoded from the peer's byte stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Packet {
    /// Solid-color override for the whole strip.
    ColorSet {
        /// Color to fill with.
        color: Color,
    },
    /// A control-pad button changed state.
    ButtonEvent {
        /// Which button.
        button: Button,
        /// True on press, false on release.
        pressed: bool,
    },
}

/// The eight control-pad buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    One,
    Two,
    Three,
    Four,
    Up,
    Down,
    Left,
    Right,
}

impl Button {
    /// Fixed blocking hold applied when this button is pressed.
    ///
    /// The holds are the only effect button presses currently have; the
    /// per-button visual changes are intentionally left out and the mapping
    /// exists to be extended.
    pub fn hold_duration<D: TimeDuration>(self) -> D {
        D::from_millis(match self {
            Button::One => 3000,
            Button::Two => 3000,
            Button::Three => 2000,
            Button::Four => 3000,
            Button::Up => 2600,
            Button::Down => 2000,
            Button::Left => 2500,
            Button::Right => 2000,
        })
    }
}

/// Marker returned by the transport when inbound bytes fail to decode.
///
/// Malformed units are expected and transient; the dispatcher discards them
/// and keeps listening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DecodeError;

impl core::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "malformed packet bytes")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {}
