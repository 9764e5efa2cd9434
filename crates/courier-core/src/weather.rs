//! Weather vocabulary shared by the cost model, the resource gate, and the
//! environment simulation.
//!
//! The engine itself only consumes [`Conditions::factor`], a scalar in (0, 1]
//! where 1.0 means "no penalty".  The [`WeatherKind`] tag rides along for the
//! resource gate, whose consumption accounting is condition-specific.

use std::fmt;

// ── WeatherKind ───────────────────────────────────────────────────────────────

/// The current weather condition.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum WeatherKind {
    #[default]
    Clear,
    Clouds,
    RainLight,
    Rain,
    Storm,
    Fog,
    Wind,
    Heat,
    Cold,
}

impl WeatherKind {
    /// All conditions, in transition-draw order.
    pub const ALL: [WeatherKind; 9] = [
        WeatherKind::Clear,
        WeatherKind::Clouds,
        WeatherKind::RainLight,
        WeatherKind::Rain,
        WeatherKind::Storm,
        WeatherKind::Fog,
        WeatherKind::Wind,
        WeatherKind::Heat,
        WeatherKind::Cold,
    ];

    /// Speed multiplier at full intensity.  1.0 = no slowdown.
    #[inline]
    pub fn base_factor(self) -> f32 {
        match self {
            WeatherKind::Clear     => 1.00,
            WeatherKind::Clouds    => 0.98,
            WeatherKind::RainLight => 0.90,
            WeatherKind::Rain      => 0.85,
            WeatherKind::Storm     => 0.75,
            WeatherKind::Fog       => 0.88,
            WeatherKind::Wind      => 0.92,
            WeatherKind::Heat      => 0.90,
            WeatherKind::Cold      => 0.92,
        }
    }

    /// Human-readable label.
    pub fn as_str(self) -> &'static str {
        match self {
            WeatherKind::Clear     => "clear",
            WeatherKind::Clouds    => "clouds",
            WeatherKind::RainLight => "rain_light",
            WeatherKind::Rain      => "rain",
            WeatherKind::Storm     => "storm",
            WeatherKind::Fog       => "fog",
            WeatherKind::Wind      => "wind",
            WeatherKind::Heat      => "heat",
            WeatherKind::Cold      => "cold",
        }
    }
}

impl fmt::Display for WeatherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Conditions ────────────────────────────────────────────────────────────────

/// The weather snapshot published once per tick.
///
/// `factor` stays in (0, 1]: condition multipliers bottom out at 0.75 and
/// intensity scaling only pulls the value back toward 1.0.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Conditions {
    pub kind: WeatherKind,
    pub factor: f32,
}

impl Conditions {
    /// Clear sky, no penalty.
    #[inline]
    pub fn clear() -> Self {
        Self { kind: WeatherKind::Clear, factor: 1.0 }
    }

    /// A condition at full intensity.
    #[inline]
    pub fn steady(kind: WeatherKind) -> Self {
        Self { kind, factor: kind.base_factor() }
    }
}

impl Default for Conditions {
    fn default() -> Self {
        Conditions::clear()
    }
}

impl fmt::Display for Conditions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2})", self.kind, self.factor)
    }
}
