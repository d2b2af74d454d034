//! The top-level control loop and mode state machine.
//!
//! The controller alternates between two phases, driven entirely by the
//! link's connection status: while no peer is connected it picks random
//! animations from the library and runs them back to back; once a peer
//! connects it stops animating and dispatches inbound command packets until
//! the peer goes away, then advertises and returns to the idle phase. This
//! alternation is the program's whole top-level structure and is meant to
//! run unattended indefinitely.

use core::marker::PhantomData;

use rand::Rng;

use crate::animation::{Animation, AnimationKind};
use crate::colors::{self, BLACK, WHITE};
use crate::link::CommandLink;
use crate::packet::Packet;
use crate::strip::Strip;
use crate::time::{TimeDuration, TimeInstant, TimeSource};

/// The two phases of the control loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// No peer connected; randomized animations run autonomously.
    Idle,
    /// A peer is connected; inbound packets drive the strip.
    Connected,
}

/// Cap on every idle-mode animation invocation.
const IDLE_RUN_MILLIS: u64 = 20_000;
/// Pause between idle-mode invocations.
const IDLE_PAUSE_MILLIS: u64 = 500;
/// Total duration of the boot-time flash.
const STARTUP_FLASH_MILLIS: u64 = 2_000;
/// Step delay of the boot-time flash.
const STARTUP_STEP_MILLIS: u64 = 100;

/// Owns the strip, the link, and the RNG; borrows the time source.
///
/// All collaborators are injected at construction so the whole loop runs
/// against mocks in tests, with scripted connection status and zero
/// wall-clock delay.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `S` - Strip implementation type
/// * `T` - Time source implementation type
/// * `L` - Command link implementation type
/// * `R` - Random number generator type
pub struct Controller<'t, I, S, T, L, R>
where
    I: TimeInstant,
    S: Strip,
    T: TimeSource<I>,
    L: CommandLink,
    R: Rng,
{
    strip: S,
    link: L,
    rng: R,
    time_source: &'t T,
    mode: Mode,
    _instant: PhantomData<I>,
}

impl<'t, I, S, T, L, R> Controller<'t, I, S, T, L, R>
where
    I: TimeInstant,
    S: Strip,
    T: TimeSource<I>,
    L: CommandLink,
    R: Rng,
{
    /// Creates an idle controller. Nothing happens until [`start`] or
    /// [`poll`] is called.
    ///
    /// [`start`]: Controller::start
    /// [`poll`]: Controller::poll
    pub fn new(strip: S, link: L, rng: R, time_source: &'t T) -> Self {
        Self {
            strip,
            link,
            rng,
            time_source,
            mode: Mode::Idle,
            _instant: PhantomData,
        }
    }

    /// Boot sequence: baseline reset, a short black/white flash so a
    /// freshly powered strip visibly works, then start advertising.
    pub fn start(&mut self) {
        self.strip.reset();

        let flash = Animation {
            kind: AnimationKind::Swap {
                primary: BLACK,
                secondary: WHITE,
            },
            step_delay: I::Duration::from_millis(STARTUP_STEP_MILLIS),
            total_duration: I::Duration::from_millis(STARTUP_FLASH_MILLIS),
            exit_on_connect: false,
        };
        flash.run(&mut self.strip, self.time_source, &self.link, &mut self.rng);

        self.link.start_advertising();
        self.mode = Mode::Idle;
    }

    /// Runs the control loop forever.
    pub fn run(&mut self) -> ! {
        self.start();
        loop {
            self.poll();
        }
    }

    /// Executes one state-machine step.
    ///
    /// In `Idle` this runs a full randomized animation (up to 20 s, ended
    /// early if a peer connects), then samples the connection status. In
    /// `Connected` it drains at most one pending packet, or falls back to
    /// `Idle` (advertising again) once the peer is gone.
    pub fn poll(&mut self) {
        match self.mode {
            Mode::Idle => {
                self.run_random_animation();

                if self.link.is_connected() {
                    self.mode = Mode::Connected;
                } else {
                    self.time_source
                        .sleep(I::Duration::from_millis(IDLE_PAUSE_MILLIS));
                }
            }
            Mode::Connected => {
                if !self.link.is_connected() {
                    self.link.start_advertising();
                    self.mode = Mode::Idle;
                    return;
                }

                match self.link.receive() {
                    Some(Ok(packet)) => self.dispatch(packet),
                    // Malformed units are dropped where they occur; nothing
                    // pending means nothing to do.
                    Some(Err(_)) | None => {}
                }
            }
        }
    }

    /// Applies one decoded packet to the strip.
    ///
    /// A color packet becomes a solid fill. A button press blocks for that
    /// button's fixed hold; the per-button visual changes are intentionally
    /// inert. Releases are ignored.
    pub fn dispatch(&mut self, packet: Packet) {
        match packet {
            Packet::ColorSet { color } => self.strip.fill(color),
            Packet::ButtonEvent { button, pressed } => {
                if pressed {
                    self.time_source.sleep(button.hold_duration());
                }
            }
        }
    }

    /// Current phase of the control loop.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Read access to the strip, for observation.
    pub fn strip(&self) -> &S {
        &self.strip
    }

    /// Read access to the link.
    pub fn link(&self) -> &L {
        &self.link
    }

    /// Picks one of the five animation kinds uniformly, draws fresh
    /// parameters for it, and runs it with the idle-mode cap and early exit.
    fn run_random_animation(&mut self) {
        let total = I::Duration::from_millis(IDLE_RUN_MILLIS);

        let animation: Animation<'static, I::Duration> = match self.rng.gen_range(0..5u8) {
            0 => {
                let (primary, secondary) = colors::random_color_pair(&mut self.rng);
                Animation {
                    kind: AnimationKind::Chase {
                        primary,
                        secondary,
                        length: self.rng.gen_range(4..=8usize),
                    },
                    step_delay: I::Duration::from_millis(self.rng.gen_range(1..=4u64) * 100),
                    total_duration: total,
                    exit_on_connect: true,
                }
            }
            1 => {
                let (primary, secondary) = colors::random_color_pair(&mut self.rng);
                Animation {
                    kind: AnimationKind::Swap { primary, secondary },
                    step_delay: I::Duration::from_millis(self.rng.gen_range(3..=10u64) * 100),
                    total_duration: total,
                    exit_on_connect: true,
                }
            }
            2 => {
                let (primary, _) = colors::random_color_pair(&mut self.rng);
                Animation {
                    kind: AnimationKind::Pulse {
                        primary,
                        pulses: self.rng.gen_range(4..=8u16),
                    },
                    step_delay: I::Duration::from_millis(100),
                    total_duration: total,
                    exit_on_connect: true,
                }
            }
            3 => Animation {
                kind: AnimationKind::ColorlistRandomizer {
                    colors: colors::random_color_list(&mut self.rng),
                    pulses: self.rng.gen_range(4..=8u16),
                },
                step_delay: I::Duration::from_millis(self.rng.gen_range(3..=10u64) * 100),
                total_duration: total,
                exit_on_connect: true,
            },
            _ => Animation {
                kind: AnimationKind::ColorlistChase {
                    colors: colors::random_color_list(&mut self.rng),
                    pulses: self.rng.gen_range(4..=8u16),
                },
                step_delay: I::Duration::from_millis(self.rng.gen_range(1..=4u64) * 100),
                total_duration: total,
                exit_on_connect: true,
            },
        };

        animation.run(&mut self.strip, self.time_source, &self.link, &mut self.rng);
    }
}
