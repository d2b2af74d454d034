#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Animation`**: One animation invocation: a pattern, its timing, and its exit policy
//! - **`AnimationKind`**: The five patterns (chase, swap, pulse, colorlist randomizer, colorlist chase)
//! - **`BrightnessWave`**: The shared triangle brightness waveform used by pulse-capable patterns
//! - **`Strip`**: Trait to implement for your LED strip hardware
//! - **`StripState`**: In-memory strip implementation for tests, simulations, and buffer-backed drivers
//! - **`CommandLink`** / **`ConnectionStatus`**: Traits to implement for your wireless transport
//! - **`Packet`** / **`Button`**: Decoded command units arriving from the peer
//! - **`Controller`** / **`Mode`**: The two-phase control loop alternating animations and command dispatch
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! Colors are 8-bit RGB triples (`Srgb<u8>`); brightness is a single `f32`
//! scalar in `0.0..=1.0` applied across the whole strip.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod animation;
pub mod colors;
pub mod controller;
pub mod link;
pub mod packet;
pub mod strip;
pub mod time;
pub mod waveform;

pub use animation::{Animation, AnimationKind};
pub use colors::Color;
pub use controller::{Controller, Mode};
pub use link::{CommandLink, ConnectionStatus};
pub use packet::{Button, DecodeError, Packet};
pub use strip::{MAX_BRIGHTNESS, Strip, StripError, StripState};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use waveform::{BrightnessWave, MIN_BRIGHTNESS};
