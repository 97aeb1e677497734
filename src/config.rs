use serde::Deserialize;

/// Top-level radmom configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RadmomConfig {
    /// Velocity axis settings.
    #[serde(default)]
    pub velocity: VelocityToml,

    /// Noise settings.
    #[serde(default)]
    pub noise: NoiseToml,

    /// Peak search settings.
    #[serde(default)]
    pub peaks: PeaksToml,

    /// Smoothing settings.
    #[serde(default)]
    pub smoothing: SmoothingToml,

    /// Receiver settings.
    #[serde(default)]
    pub receiver: ReceiverToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VelocityToml {
    #[serde(default = "default_min_velocity")]
    pub min: f64,
    #[serde(default = "default_max_velocity")]
    pub max: f64,
}

impl Default for VelocityToml {
    fn default() -> Self {
        Self {
            min: default_min_velocity(),
            max: default_max_velocity(),
        }
    }
}

fn default_min_velocity() -> f64 {
    -7.885
}
fn default_max_velocity() -> f64 {
    7.885
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoiseToml {
    #[serde(default = "default_n_averages")]
    pub n_averages: f64,
    #[serde(default)]
    pub distance_factor: f64,
    /// Fixed noise mean; estimated per spectrum if unset.
    #[serde(default)]
    pub mean: Option<f64>,
    /// Fixed noise maximum; derived per spectrum if unset.
    #[serde(default)]
    pub max: Option<f64>,
}

impl Default for NoiseToml {
    fn default() -> Self {
        Self {
            n_averages: default_n_averages(),
            distance_factor: 0.0,
            mean: None,
            max: None,
        }
    }
}

fn default_n_averages() -> f64 {
    150.0
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PeaksToml {
    #[serde(default = "default_max_peaks")]
    pub max_peaks: usize,
    #[serde(default = "default_min_snr")]
    pub min_snr: f64,
    #[serde(default = "default_min_bins")]
    pub min_bins: usize,
    #[serde(default)]
    pub wider: bool,
}

impl Default for PeaksToml {
    fn default() -> Self {
        Self {
            max_peaks: default_max_peaks(),
            min_snr: default_min_snr(),
            min_bins: default_min_bins(),
            wider: false,
        }
    }
}

fn default_max_peaks() -> usize {
    3
}
fn default_min_snr() -> f64 {
    1.2
}
fn default_min_bins() -> usize {
    2
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SmoothingToml {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_window")]
    pub window: usize,
    #[serde(default = "default_order")]
    pub order: usize,
    #[serde(default = "default_boundary")]
    pub boundary: String,
}

impl Default for SmoothingToml {
    fn default() -> Self {
        Self {
            enabled: true,
            window: default_window(),
            order: default_order(),
            boundary: default_boundary(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_window() -> usize {
    5
}
fn default_order() -> usize {
    2
}
fn default_boundary() -> String {
    "mirror".to_string()
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReceiverToml {
    #[serde(default)]
    pub miscalibration_db: f64,
}
