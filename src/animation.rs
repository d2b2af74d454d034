//! The animation library: five time-stepped patterns over a [`Strip`].
//!
//! Every animation is a bounded loop of `total_duration / step_delay` steps.
//! Each step paints, optionally samples the connection status for an early
//! exit, then sleeps for `step_delay`. Whatever way the loop ends, the strip
//! is reset to its all-black, full-brightness baseline so the next run never
//! observes leftover state.

use rand::Rng;

use crate::colors::{BLACK, Color};
use crate::link::ConnectionStatus;
use crate::strip::Strip;
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::waveform::BrightnessWave;

/// Which pattern to run, with its pattern-specific parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationKind<'a> {
    /// A window of `length` primary-colored pixels walks along a secondary
    /// background, wrapping at the end of the strip.
    Chase {
        primary: Color,
        secondary: Color,
        length: usize,
    },
    /// Even/odd pixels alternate between two colors that trade places on a
    /// five-step cadence. The exchange fires on every step whose index is
    /// not a multiple of five, so four out of five steps repaint; step zero
    /// leaves the plain secondary fill on display. The asymmetric cadence
    /// is intentional.
    Swap { primary: Color, secondary: Color },
    /// Solid fill whose brightness follows the triangle waveform for
    /// `pulses` cycles over the run.
    Pulse { primary: Color, pulses: u16 },
    /// Pixels seeded from `colors`, then scrambled each step by one random
    /// transposition per position (a deliberately cheap, biased shuffle).
    /// Brightness pulses when `pulses > 0`.
    ColorlistRandomizer { colors: &'a [Color], pulses: u16 },
    /// The whole `colors` pattern rotates one position per step.
    /// Brightness pulses when `pulses > 0`.
    ColorlistChase { colors: &'a [Color], pulses: u16 },
}

/// One animation invocation: a pattern plus its timing and exit policy.
///
/// Invocations are ephemeral; the control loop builds a fresh one for every
/// run and nothing is persisted afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation<'a, D: TimeDuration> {
    /// Pattern and its parameters.
    pub kind: AnimationKind<'a>,
    /// Delay after each step.
    pub step_delay: D,
    /// Total run duration; together with `step_delay` this fixes the step
    /// count.
    pub total_duration: D,
    /// When set, the connection status is sampled after each paint and a
    /// connected peer ends the run immediately.
    pub exit_on_connect: bool,
}

impl<'a, D: TimeDuration> Animation<'a, D> {
    /// Number of steps this invocation will execute if not exited early.
    pub fn loops(&self) -> u64 {
        self.total_duration.as_millis() / self.step_delay.as_millis()
    }

    /// Runs the animation to completion or early exit.
    ///
    /// Paints through `strip`, sleeps on `time_source`, and samples `link`
    /// for the early-exit check. `rng` feeds the randomizer pattern and is
    /// untouched by the others.
    ///
    /// # Panics
    /// Panics if the strip is empty, if `step_delay` is zero, or if a
    /// colorlist pattern is invoked with an empty color list. All three are
    /// caller bugs, not runtime conditions.
    pub fn run<I, S, T, C, R>(&self, strip: &mut S, time_source: &T, link: &C, rng: &mut R)
    where
        I: TimeInstant<Duration = D>,
        S: Strip,
        T: TimeSource<I>,
        C: ConnectionStatus,
        R: Rng,
    {
        let loops = self.loops();
        let n = strip.len();

        match self.kind {
            AnimationKind::Chase {
                primary,
                secondary,
                length,
            } => {
                strip.fill(secondary);
                self.run_steps(strip, time_source, link, |strip, i| {
                    let start = (i % n as u64) as usize;
                    for k in 0..n {
                        let offset = (k + n - start) % n;
                        let color = if offset < length { primary } else { secondary };
                        strip.set(k, color);
                    }
                });
            }
            AnimationKind::Swap { primary, secondary } => {
                strip.fill(secondary);
                let mut primary = primary;
                let mut secondary = secondary;
                self.run_steps(strip, time_source, link, |strip, i| {
                    if i % 5 != 0 {
                        core::mem::swap(&mut primary, &mut secondary);
                        for k in 0..n {
                            strip.set(k, if k % 2 == 0 { primary } else { secondary });
                        }
                    }
                });
            }
            AnimationKind::Pulse { primary, pulses } => {
                strip.fill(primary);
                let wave = BrightnessWave::new(loops, pulses);
                self.run_steps(strip, time_source, link, |strip, i| {
                    if let Some(wave) = wave {
                        strip.set_brightness(wave.level(i));
                    }
                });
            }
            AnimationKind::ColorlistRandomizer { colors, pulses } => {
                strip.fill(BLACK);
                let wave = BrightnessWave::new(loops, pulses);
                for i in 0..n {
                    strip.set(i, colors[i % colors.len()]);
                }
                self.run_steps(strip, time_source, link, |strip, i| {
                    if let Some(wave) = wave {
                        strip.set_brightness(wave.level(i));
                    }
                    for j in 0..n {
                        let k = rng.gen_range(0..n);
                        if j != k {
                            let a = strip.get(j);
                            let b = strip.get(k);
                            strip.set(j, b);
                            strip.set(k, a);
                        }
                    }
                });
            }
            AnimationKind::ColorlistChase { colors, pulses } => {
                strip.fill(BLACK);
                let wave = BrightnessWave::new(loops, pulses);
                self.run_steps(strip, time_source, link, |strip, i| {
                    if let Some(wave) = wave {
                        strip.set_brightness(wave.level(i));
                    }
                    let base = (i % n as u64) as usize;
                    for j in 0..n {
                        strip.set((base + j) % n, colors[j % colors.len()]);
                    }
                });
            }
        }
    }

    /// The shared step loop: paint, early-exit sample, sleep; reset on any
    /// way out.
    fn run_steps<I, S, T, C>(
        &self,
        strip: &mut S,
        time_source: &T,
        link: &C,
        mut step: impl FnMut(&mut S, u64),
    ) where
        I: TimeInstant<Duration = D>,
        S: Strip,
        T: TimeSource<I>,
        C: ConnectionStatus,
    {
        for i in 0..self.loops() {
            step(strip, i);

            if self.exit_on_connect && link.is_connected() {
                strip.reset();
                return;
            }

            time_source.sleep(self.step_delay);
        }

        strip.reset();
    }
}
