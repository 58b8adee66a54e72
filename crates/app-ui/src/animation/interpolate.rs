use serde::{Deserialize, Serialize};

/// Behaviour for values outside the input range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Extrapolate {
    /// Continue the linear mapping past the range
    Extend,
    /// Pin to the nearest output endpoint
    #[default]
    Clamp,
    /// Return the input unchanged
    Identity,
}

/// Linear range mapping from an input range onto an output range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterpolationConfig {
    /// Input endpoints
    pub input_range: [f32; 2],
    /// Output endpoints matching `input_range`
    pub output_range: [f32; 2],
    /// Out-of-range behaviour
    pub extrapolate: Extrapolate,
}

impl InterpolationConfig {
    /// Clamped mapping between two ranges
    pub const fn clamped(input_range: [f32; 2], output_range: [f32; 2]) -> Self {
        Self {
            input_range,
            output_range,
            extrapolate: Extrapolate::Clamp,
        }
    }
}

/// Map `value` through `config`
///
/// A degenerate input range (both endpoints equal) yields the first output
/// endpoint.
pub fn interpolate(value: f32, config: &InterpolationConfig) -> f32 {
    let [in_start, in_end] = config.input_range;
    let [out_start, out_end] = config.output_range;

    let span = in_end - in_start;
    if span.abs() <= f32::EPSILON {
        return out_start;
    }

    let (lo, hi) = if in_start <= in_end {
        (in_start, in_end)
    } else {
        (in_end, in_start)
    };

    let input = if value < lo || value > hi {
        match config.extrapolate {
            Extrapolate::Extend => value,
            Extrapolate::Clamp => value.clamp(lo, hi),
            Extrapolate::Identity => return value,
        }
    } else {
        value
    };

    out_start + (input - in_start) / span * (out_end - out_start)
}
