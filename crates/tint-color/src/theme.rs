//! Step generation for luminosity ramps.

use serde::{Deserialize, Serialize};
use tint_common::{Hex, Hsl, ThemeError};

use crate::converter;

/// Largest `count` [`create_steps`] will allocate for.
pub const MAX_STEP_COUNT: usize = 1024;

/// Bounds and count for [`create_steps`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepOptions {
    pub min: i32,
    pub max: i32,
    pub count: usize,
}

impl Default for StepOptions {
    fn default() -> Self {
        Self {
            min: 10,
            max: 100,
            count: 10,
        }
    }
}

impl StepOptions {
    pub fn steps(&self) -> Result<Vec<i32>, ThemeError> {
        create_steps(self.min, self.max, self.count)
    }
}

/// `count` roughly evenly spaced integers from `min` to `max`.
///
/// The spacing is `round((max - min) / (count - 1))`. The result has exactly
/// `count` elements: `min + i * size` for `i < count - 1`, then `max`. The
/// last element is always exactly `max`, absorbing whatever drift the
/// rounded spacing accumulated, and `max` never appears twice at the end
/// (`create_steps(20, 100, 5)` is `[20, 40, 60, 80, 100]`, five values).
///
/// Fewer than two steps is [`ThemeError::InvalidStepCount`]; more than
/// [`MAX_STEP_COUNT`] is [`ThemeError::TooManySteps`].
pub fn create_steps(min: i32, max: i32, count: usize) -> Result<Vec<i32>, ThemeError> {
    if count < 2 {
        return Err(ThemeError::InvalidStepCount(count));
    }
    if count > MAX_STEP_COUNT {
        return Err(ThemeError::TooManySteps {
            count,
            max: MAX_STEP_COUNT,
        });
    }

    let distance = f64::from(max) - f64::from(min);
    let size = (distance / (count - 1) as f64).round() as i64;

    let mut steps: Vec<i32> = (0..count - 1)
        .map(|i| (i64::from(min) + i as i64 * size) as i32)
        .collect();
    steps.push(max);
    Ok(steps)
}

/// Hold the hue and saturation of `base` and walk luminosity through
/// `steps`, clamping each step to `[0, 100]`.
pub fn luminosity_ramp(base: Hsl, steps: &[i32]) -> Vec<Hex> {
    steps
        .iter()
        .map(|&step| {
            let luminosity = step.clamp(0, 100) as u8;
            converter::hsl_to_hex(Hsl::new(base.hue, base.saturation, luminosity))
        })
        .collect()
}

/// Facade handle for the step generator and ramp builder.
#[derive(Debug, Clone, Copy, Default)]
pub struct Theme;

impl Theme {
    pub fn create_steps(&self, min: i32, max: i32, count: usize) -> Result<Vec<i32>, ThemeError> {
        create_steps(min, max, count)
    }

    pub fn luminosity_ramp(&self, base: Hsl, steps: &[i32]) -> Vec<Hex> {
        luminosity_ramp(base, steps)
    }
}
