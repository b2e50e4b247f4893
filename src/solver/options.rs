//! Display-side options.
//!
//! These are the knobs a rendering front end reads when driving the solvers.
//! None of them affect the tours produced.

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{random_points, Point};

/// Options recognized by a rendering consumer.
///
/// Deserializes from camelCase keys (`fps`, `randomNodes`, `delay`,
/// `stepDelay`); missing keys take their defaults. Delays are milliseconds.
///
/// # Examples
///
/// ```
/// use u_tsp::solver::DisplayOptions;
///
/// let opts: DisplayOptions =
///     serde_json::from_str(r#"{"randomNodes": 12, "stepDelay": 50}"#).unwrap();
/// assert_eq!(opts.random_nodes, 12);
/// assert_eq!(opts.step_delay().as_millis(), 50);
/// assert_eq!(opts.fps, 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayOptions {
    /// Target render rate in frames per second.
    pub fps: u32,
    /// Number of random vertices to generate.
    pub random_nodes: usize,
    /// Pause before solving starts, in milliseconds.
    pub delay: u64,
    /// Pause between solver steps, in milliseconds.
    pub step_delay: u64,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            fps: 30,
            random_nodes: 10,
            delay: 0,
            step_delay: 0,
        }
    }
}

impl DisplayOptions {
    /// Pause before solving starts.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay)
    }

    /// Pause between solver steps.
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay)
    }

    /// Interval between frames; zero when `fps` is zero.
    pub fn frame_interval(&self) -> Duration {
        if self.fps == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs(1) / self.fps
        }
    }

    /// Generates `random_nodes` points inside a `width × height` canvas.
    pub fn random_points<R: Rng>(&self, width: f64, height: f64, rng: &mut R) -> Vec<Point> {
        random_points(self.random_nodes, width, height, rng)
    }
}
