//! Channel series produced by a penetration run.
//!
//! A [`History`] holds one growable sequence per output channel, all of equal
//! length, with one entry per logged sample. Channels use the display units
//! that callers plot against:
//!
//! | channel | field | unit |
//! |---|---|---|
//! | `t` | `t` | ms |
//! | `DoP` | `dop` | m |
//! | `v`, `u` | `v`, `u` | m/s |
//! | `L` | `length` | m |
//! | `Le` | `erosion` | – |
//! | `vdot`, `udot` | `vdot`, `udot` | m/s² |
//! | `Ldot` | `ldot` | m/s |
//! | `s`, `sdot` | `s`, `sdot` | m, m/s |
//! | `alpha`, `alphadot` | `alpha`, `alphadot` | –, 1/s |
//! | `vu_sdot` | `vu_sdot` | 1/s² |
//! | `Y` | `y` | GPa |
//! | `Rt` | `rt` | GPa |

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::State;

const MS_PER_S: f64 = 1e3;
const GPA_PER_PA: f64 = 1e-9;

/// One logged row of a [`History`], in channel display units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sample {
    pub t: f64,
    #[cfg_attr(feature = "serde", serde(rename = "DoP"))]
    pub dop: f64,
    pub v: f64,
    pub u: f64,
    #[cfg_attr(feature = "serde", serde(rename = "L"))]
    pub length: f64,
    #[cfg_attr(feature = "serde", serde(rename = "Le"))]
    pub erosion: f64,
    pub vdot: f64,
    pub udot: f64,
    #[cfg_attr(feature = "serde", serde(rename = "Ldot"))]
    pub ldot: f64,
    pub s: f64,
    pub sdot: f64,
    pub alpha: f64,
    pub alphadot: f64,
    pub vu_sdot: f64,
    #[cfg_attr(feature = "serde", serde(rename = "Y"))]
    pub y: f64,
    #[cfg_attr(feature = "serde", serde(rename = "Rt"))]
    pub rt: f64,
}

impl Sample {
    /// Builds a sample from a state plus the target's yield strength and
    /// resistance (both in Pa) at that state.
    #[must_use]
    pub fn from_state(state: &State, yield_strength: f64, resistance: f64) -> Self {
        Self {
            t: state.t * MS_PER_S,
            dop: state.dop,
            v: state.v,
            u: state.u,
            length: state.length,
            erosion: state.erosion,
            vdot: state.vdot,
            udot: state.udot,
            ldot: state.ldot,
            s: state.s,
            sdot: state.sdot,
            alpha: state.alpha,
            alphadot: state.alphadot,
            vu_sdot: state.vu_sdot,
            y: yield_strength * GPA_PER_PA,
            rt: resistance * GPA_PER_PA,
        }
    }

    /// Returns the sample shifted in time (ms) and depth (m).
    #[must_use]
    pub fn shifted(self, time: f64, depth: f64) -> Self {
        Self {
            t: self.t + time,
            dop: self.dop + depth,
            ..self
        }
    }
}

/// Time series of logged samples, stored column-wise.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct History {
    pub t: Vec<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "DoP"))]
    pub dop: Vec<f64>,
    pub v: Vec<f64>,
    pub u: Vec<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "L"))]
    pub length: Vec<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "Le"))]
    pub erosion: Vec<f64>,
    pub vdot: Vec<f64>,
    pub udot: Vec<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "Ldot"))]
    pub ldot: Vec<f64>,
    pub s: Vec<f64>,
    pub sdot: Vec<f64>,
    pub alpha: Vec<f64>,
    pub alphadot: Vec<f64>,
    pub vu_sdot: Vec<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "Y"))]
    pub y: Vec<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "Rt"))]
    pub rt: Vec<f64>,
}

impl History {
    /// Creates an empty history with room for `capacity` samples per channel.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            t: Vec::with_capacity(capacity),
            dop: Vec::with_capacity(capacity),
            v: Vec::with_capacity(capacity),
            u: Vec::with_capacity(capacity),
            length: Vec::with_capacity(capacity),
            erosion: Vec::with_capacity(capacity),
            vdot: Vec::with_capacity(capacity),
            udot: Vec::with_capacity(capacity),
            ldot: Vec::with_capacity(capacity),
            s: Vec::with_capacity(capacity),
            sdot: Vec::with_capacity(capacity),
            alpha: Vec::with_capacity(capacity),
            alphadot: Vec::with_capacity(capacity),
            vu_sdot: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
            rt: Vec::with_capacity(capacity),
        }
    }

    /// Appends one sample to every channel.
    pub fn push(&mut self, sample: Sample) {
        self.t.push(sample.t);
        self.dop.push(sample.dop);
        self.v.push(sample.v);
        self.u.push(sample.u);
        self.length.push(sample.length);
        self.erosion.push(sample.erosion);
        self.vdot.push(sample.vdot);
        self.udot.push(sample.udot);
        self.ldot.push(sample.ldot);
        self.s.push(sample.s);
        self.sdot.push(sample.sdot);
        self.alpha.push(sample.alpha);
        self.alphadot.push(sample.alphadot);
        self.vu_sdot.push(sample.vu_sdot);
        self.y.push(sample.y);
        self.rt.push(sample.rt);
    }

    /// Number of logged samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.t.len()
    }

    /// Returns `true` if nothing has been logged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Returns the sample at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Sample> {
        if index >= self.len() {
            return None;
        }
        Some(Sample {
            t: self.t[index],
            dop: self.dop[index],
            v: self.v[index],
            u: self.u[index],
            length: self.length[index],
            erosion: self.erosion[index],
            vdot: self.vdot[index],
            udot: self.udot[index],
            ldot: self.ldot[index],
            s: self.s[index],
            sdot: self.sdot[index],
            alpha: self.alpha[index],
            alphadot: self.alphadot[index],
            vu_sdot: self.vu_sdot[index],
            y: self.y[index],
            rt: self.rt[index],
        })
    }

    /// Returns the first logged sample.
    #[must_use]
    pub fn first(&self) -> Option<Sample> {
        self.get(0)
    }

    /// Returns the last logged sample.
    #[must_use]
    pub fn last(&self) -> Option<Sample> {
        self.len().checked_sub(1).and_then(|index| self.get(index))
    }

    /// Iterates over the logged samples in order.
    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        (0..self.len()).filter_map(|index| self.get(index))
    }

    /// Appends the samples of `other`, skipping its first `skip` rows and
    /// shifting the rest by `time` (ms) and `depth` (m).
    pub fn extend_shifted(&mut self, other: &History, skip: usize, time: f64, depth: f64) {
        for sample in other.samples().skip(skip) {
            self.push(sample.shifted(time, depth));
        }
    }
}

impl FromIterator<Sample> for History {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        let mut history = History::default();
        for sample in iter {
            history.push(sample);
        }
        history
    }
}

/// Terminal samples of a sweep over impact velocities.
///
/// Entry `i` of every channel in `terminal` belongs to impact velocity `v0[i]`.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VelocitySweep {
    /// Impact velocities in m/s, in the order they were swept.
    #[cfg_attr(feature = "serde", serde(rename = "V0"))]
    pub v0: Vec<f64>,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub terminal: History,
}

impl VelocitySweep {
    /// Number of swept velocities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.v0.len()
    }

    /// Returns `true` if no velocity was swept.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.v0.is_empty()
    }

    /// Records the terminal sample for one impact velocity.
    pub fn push(&mut self, v0: f64, terminal: Sample) {
        self.v0.push(v0);
        self.terminal.push(terminal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn state(t: f64, dop: f64) -> State {
        State {
            t,
            dop,
            u: 500.0,
            v: 900.0,
            length: 0.08,
            alpha: 4.0,
            ..State::default()
        }
    }

    #[test]
    fn sample_converts_display_units() {
        let sample = Sample::from_state(&state(2e-5, 0.01), 1.2e9, 3.5e9);

        assert_relative_eq!(sample.t, 0.02, max_relative = 1e-12);
        assert_relative_eq!(sample.dop, 0.01);
        assert_relative_eq!(sample.y, 1.2, max_relative = 1e-12);
        assert_relative_eq!(sample.rt, 3.5, max_relative = 1e-12);
        assert_relative_eq!(sample.alpha, 4.0);
    }

    #[test]
    fn channels_stay_aligned() {
        let mut history = History::with_capacity(4);
        assert!(history.is_empty());

        history.push(Sample::from_state(&state(0.0, 0.0), 1e9, 2e9));
        history.push(Sample::from_state(&state(1e-5, 0.005), 1e9, 2e9));

        assert_eq!(history.len(), 2);
        assert_eq!(history.rt.len(), 2);
        assert_eq!(history.vu_sdot.len(), 2);
        assert_relative_eq!(history.last().unwrap().dop, 0.005);
        assert_relative_eq!(history.first().unwrap().t, 0.0);
        assert!(history.get(2).is_none());
    }

    #[test]
    fn extend_shifted_offsets_time_and_depth() {
        let first: History = [state(0.0, 0.0), state(1e-5, 0.004)]
            .iter()
            .map(|s| Sample::from_state(s, 1e9, 1e9))
            .collect();
        let second: History = [state(0.0, 0.0), state(1e-5, 0.002), state(2e-5, 0.003)]
            .iter()
            .map(|s| Sample::from_state(s, 1e9, 1e9))
            .collect();

        let mut combined = first.clone();
        let end = first.last().unwrap();
        combined.extend_shifted(&second, 1, end.t, end.dop);

        assert_eq!(combined.len(), 4);
        assert_relative_eq!(combined.t[2], 0.02, max_relative = 1e-12);
        assert_relative_eq!(combined.dop[2], 0.006, max_relative = 1e-12);
        assert_relative_eq!(combined.dop[3], 0.007, max_relative = 1e-12);
    }

    #[test]
    fn sweep_rows_track_velocities() {
        let mut sweep = VelocitySweep::default();
        sweep.push(500.0, Sample::from_state(&state(1e-4, 0.01), 1e9, 1e9));
        sweep.push(1000.0, Sample::from_state(&state(2e-4, 0.03), 1e9, 1e9));

        assert_eq!(sweep.len(), 2);
        assert_eq!(sweep.v0, vec![500.0, 1000.0]);
        assert_eq!(sweep.terminal.len(), 2);
    }
}
