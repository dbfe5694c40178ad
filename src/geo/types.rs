use serde::{Deserialize, Serialize};

/// A single GPS observation.
///
/// Optional fields stay optional all the way through the engine: an absent
/// speed is never treated as zero and an absent fix is never treated as
/// a fix at (0, 0).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoFix {
    /// Degrees, -90..=90
    pub latitude: f64,
    /// Degrees, -180..=180
    pub longitude: f64,
    /// Speed over ground in m/s
    pub speed_mps: Option<f64>,
    /// Horizontal accuracy radius in meters
    pub accuracy_m: Option<f64>,
    /// Source label, informational only
    pub provider: Option<String>,
}

impl GeoFix {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            speed_mps: None,
            accuracy_m: None,
            provider: None,
        }
    }

    pub fn with_speed(mut self, speed_mps: f64) -> Self {
        self.speed_mps = Some(speed_mps);
        self
    }

    pub fn with_accuracy(mut self, accuracy_m: f64) -> Self {
        self.accuracy_m = Some(accuracy_m);
        self
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }
}

/// The starting mark.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PinLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl PinLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<&GeoFix> for PinLocation {
    fn from(fix: &GeoFix) -> Self {
        Self::new(fix.latitude, fix.longitude)
    }
}
