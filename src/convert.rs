//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};

use radmom_column::{BoundaryMode, MomentsConfig, SegmentConfig, SmoothConfig};

use crate::config::*;

/// Parses a smoothing boundary name into the corresponding enum variant.
pub fn parse_boundary(s: &str) -> Result<BoundaryMode> {
    match s.to_lowercase().as_str() {
        "mirror" => Ok(BoundaryMode::Mirror),
        "periodic" => Ok(BoundaryMode::Periodic),
        other => bail!("unknown smoothing boundary: {other:?}"),
    }
}

/// Builds the smoothing filter, or `None` when smoothing is disabled.
pub fn build_smooth_config(smoothing: &SmoothingToml) -> Result<Option<SmoothConfig>> {
    if !smoothing.enabled {
        return Ok(None);
    }
    let boundary = parse_boundary(&smoothing.boundary)?;
    Ok(Some(
        SmoothConfig::new(smoothing.window, smoothing.order).with_boundary(boundary),
    ))
}

/// Builds a [`SegmentConfig`] from the TOML peak configuration.
pub fn build_segment_config(peaks: &PeaksToml) -> SegmentConfig {
    SegmentConfig::new(peaks.max_peaks)
        .with_peak_min_snr(peaks.min_snr)
        .with_peak_min_bins(peaks.min_bins)
        .with_wider_peak(peaks.wider)
}

/// Builds a validated [`MomentsConfig`] from the whole TOML configuration.
///
/// `max_peaks`, if given, overrides `[peaks].max_peaks`.
pub fn build_moments_config(
    config: &RadmomConfig,
    max_peaks: Option<usize>,
) -> Result<MomentsConfig> {
    let mut segment = build_segment_config(&config.peaks);
    if let Some(n) = max_peaks {
        segment = SegmentConfig::new(n)
            .with_peak_min_snr(segment.peak_min_snr())
            .with_peak_min_bins(segment.peak_min_bins())
            .with_wider_peak(segment.use_wider_peak());
    }

    let mut cfg = MomentsConfig::new()
        .with_velocity_range(config.velocity.min, config.velocity.max)
        .with_n_averages(config.noise.n_averages)
        .with_noise_distance_factor(config.noise.distance_factor)
        .with_segment(segment)
        .with_smoothing(build_smooth_config(&config.smoothing)?)
        .with_receiver_miscalibration_db(config.receiver.miscalibration_db);
    if let Some(mean) = config.noise.mean {
        cfg = cfg.with_noise_mean(mean);
    }
    if let Some(max) = config.noise.max {
        cfg = cfg.with_noise_max(max);
    }

    cfg.validate().context("invalid moments configuration")?;
    Ok(cfg)
}
