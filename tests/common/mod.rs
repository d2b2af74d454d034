//! Shared test infrastructure for strip-animator integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use strip_animator::{
    Color, CommandLink, ConnectionStatus, DecodeError, Packet, Strip, StripState, TimeDuration,
    TimeInstant, TimeSource,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }

    fn saturating_sub(self, other: Self) -> Self {
        TestDuration(self.0.saturating_sub(other.0))
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Clock
// ============================================================================

/// Clock that returns instantly from every sleep, advancing a virtual time
/// counter and recording the requested delay.
pub struct MockClock {
    current_time: Cell<TestInstant>,
    sleeps: RefCell<Vec<TestDuration>>,
}

impl MockClock {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
            sleeps: RefCell::new(Vec::new()),
        }
    }

    /// Every sleep requested so far, in order.
    pub fn sleeps(&self) -> Vec<TestDuration> {
        self.sleeps.borrow().clone()
    }

    pub fn sleep_count(&self) -> usize {
        self.sleeps.borrow().len()
    }

    /// Sum of all requested sleeps in milliseconds.
    pub fn total_slept(&self) -> u64 {
        self.sleeps.borrow().iter().map(|d| d.0).sum()
    }
}

impl TimeSource<TestInstant> for MockClock {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }

    fn sleep(&self, duration: TestDuration) {
        self.sleeps.borrow_mut().push(duration);
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + duration.0));
    }
}

// ============================================================================
// Recording Strip
// ============================================================================

/// One mutation observed on the strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StripOp {
    Fill(Color),
    Set(usize, Color),
    Brightness(f32),
}

/// Strip that records every mutation while delegating to a real
/// [`StripState`], so tests can replay exactly what an animation painted
/// step by step.
pub struct RecordingStrip<const MAX: usize> {
    state: StripState<MAX>,
    pub ops: Vec<StripOp>,
}

impl<const MAX: usize> RecordingStrip<MAX> {
    pub fn new(len: usize) -> Self {
        Self {
            state: StripState::new(len).expect("len within capacity"),
            ops: Vec::new(),
        }
    }

    pub fn pixels(&self) -> &[Color] {
        self.state.pixels()
    }
}

impl<const MAX: usize> Strip for RecordingStrip<MAX> {
    fn len(&self) -> usize {
        self.state.len()
    }

    fn fill(&mut self, color: Color) {
        self.ops.push(StripOp::Fill(color));
        self.state.fill(color);
    }

    fn set(&mut self, index: usize, color: Color) {
        self.ops.push(StripOp::Set(index, color));
        self.state.set(index, color);
    }

    fn get(&self, index: usize) -> Color {
        self.state.get(index)
    }

    fn set_brightness(&mut self, value: f32) {
        self.ops.push(StripOp::Brightness(value));
        self.state.set_brightness(value);
    }

    fn brightness(&self) -> f32 {
        self.state.brightness()
    }
}

/// Replays fill/set ops onto a plain pixel array, ignoring brightness.
pub fn replay_pixels(len: usize, ops: &[StripOp]) -> Vec<Color> {
    let mut pixels = vec![strip_animator::colors::BLACK; len];
    for op in ops {
        match *op {
            StripOp::Fill(color) => pixels.iter_mut().for_each(|p| *p = color),
            StripOp::Set(index, color) => pixels[index] = color,
            StripOp::Brightness(_) => {}
        }
    }
    pixels
}

// ============================================================================
// Connection Probes
// ============================================================================

/// Probe that never reports a peer.
pub struct NeverConnected;

impl ConnectionStatus for NeverConnected {
    fn is_connected(&self) -> bool {
        false
    }
}

/// Probe that always reports a peer.
pub struct AlwaysConnected;

impl ConnectionStatus for AlwaysConnected {
    fn is_connected(&self) -> bool {
        true
    }
}

/// Probe that answers each query from a script, then repeats the last entry.
pub struct ScriptedStatus {
    script: Vec<bool>,
    index: Cell<usize>,
}

impl ScriptedStatus {
    pub fn new(script: &[bool]) -> Self {
        assert!(!script.is_empty());
        Self {
            script: script.to_vec(),
            index: Cell::new(0),
        }
    }
}

impl ConnectionStatus for ScriptedStatus {
    fn is_connected(&self) -> bool {
        let index = self.index.get();
        self.index.set(index + 1);
        *self
            .script
            .get(index)
            .unwrap_or_else(|| self.script.last().unwrap())
    }
}

// ============================================================================
// Mock Link
// ============================================================================

/// Command link with an externally settable connection flag, a queue of
/// inbound decode results, and an advertising counter.
///
/// The flag and queue use interior mutability so a test can keep driving the
/// link through the controller's shared accessor.
pub struct MockLink {
    connected: Cell<bool>,
    inbox: RefCell<VecDeque<Result<Packet, DecodeError>>>,
    advertise_count: Cell<usize>,
}

impl MockLink {
    pub fn new() -> Self {
        Self {
            connected: Cell::new(false),
            inbox: RefCell::new(VecDeque::new()),
            advertise_count: Cell::new(0),
        }
    }

    pub fn set_connected(&self, value: bool) {
        self.connected.set(value);
    }

    pub fn push(&self, unit: Result<Packet, DecodeError>) {
        self.inbox.borrow_mut().push_back(unit);
    }

    pub fn advertise_count(&self) -> usize {
        self.advertise_count.get()
    }

    pub fn pending(&self) -> usize {
        self.inbox.borrow().len()
    }
}

impl ConnectionStatus for MockLink {
    fn is_connected(&self) -> bool {
        self.connected.get()
    }
}

impl CommandLink for MockLink {
    fn start_advertising(&mut self) {
        self.advertise_count.set(self.advertise_count.get() + 1);
    }

    fn receive(&mut self) -> Option<Result<Packet, DecodeError>> {
        self.inbox.borrow_mut().pop_front()
    }
}
