use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Progress remapping applied to a traversal before interpolation.
///
/// Every curve maps `0.0` to (approximately) `0.0` and `1.0` to (approximately) `1.0`. The
/// elastic curves overshoot the unit interval in between.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Easing {
    #[default]
    Linear,
    /// Quadratic, slow start.
    EaseIn,
    /// Quadratic, slow end.
    EaseOut,
    /// Quadratic, slow at both ends.
    EaseInOut,
    ElasticIn,
    ElasticOut,
    ElasticInOut,
}

impl Easing {
    pub const ALL: [Easing; 7] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::ElasticIn,
        Easing::ElasticOut,
        Easing::ElasticInOut,
    ];

    /// Canonical lowercase name, as accepted by [`Easing::from_name`]
    pub fn name(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseIn => "easein",
            Easing::EaseOut => "easeout",
            Easing::EaseInOut => "easeinout",
            Easing::ElasticIn => "elasticin",
            Easing::ElasticOut => "elasticout",
            Easing::ElasticInOut => "elasticinout",
        }
    }

    /// Case-insensitive lookup. Returns `None` for names that don't match any curve.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        Self::ALL.into_iter().find(|easing| easing.name() == name)
    }

    /// Like [`Easing::parse`], but unknown names fall back to [`Easing::Linear`].
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_default()
    }

    pub fn ease(self, t: f64) -> f64 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1. - (1. - t).powi(2),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2. * t * t
                } else {
                    1. - (-2. * t + 2.).powi(2) / 2.
                }
            }
            Easing::ElasticIn => (13. * PI / 2. * t).sin() * 2f64.powf(10. * (t - 1.)),
            Easing::ElasticOut => (-13. * PI / 2. * (t + 1.)).sin() * 2f64.powf(-10. * t) + 1.,
            Easing::ElasticInOut => {
                let wave = ((2. * t - 1.1) * 5. * PI).sin();
                if t < 0.5 {
                    -(2f64.powf(10. * (2. * t - 1.)) * wave) / 2.
                } else {
                    (2f64.powf(-10. * (2. * t - 1.)) * wave) / 2. + 1.
                }
            }
        }
    }
}

impl From<&str> for Easing {
    fn from(value: &str) -> Self {
        Self::from_name(value)
    }
}

impl std::fmt::Display for Easing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Applies the easing curve named `name` to `t`, using linear for unknown names.
pub fn ease(name: &str, t: f64) -> f64 {
    Easing::from_name(name).ease(t)
}
