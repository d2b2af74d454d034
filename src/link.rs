//! Wireless link capability traits.
//!
//! The radio, advertising payload, and wire decoding all live outside this
//! crate. The engine consumes exactly three capabilities: start advertising,
//! observe whether a peer is connected, and drain decoded packets.

use crate::packet::{DecodeError, Packet};

/// Read-only view of the peer connection state.
///
/// This is all an animation needs for its early-exit check, so it is split
/// from [`CommandLink`] to keep test probes trivial.
pub trait ConnectionStatus {
    /// Returns true while a peer is connected.
    fn is_connected(&self) -> bool;
}

/// Full command channel to the wireless peer.
pub trait CommandLink: ConnectionStatus {
    /// Makes the device discoverable. Called before each idle phase.
    fn start_advertising(&mut self);

    /// Attempts to take the next decoded packet.
    ///
    /// * `None` - no inbound bytes are pending
    /// * `Some(Ok(packet))` - a complete unit decoded
    /// * `Some(Err(_))` - pending bytes failed to decode; the unit is
    ///   consumed and the caller should simply continue
    fn receive(&mut self) -> Option<Result<Packet, DecodeError>>;
}
