//! Time formatting and progress math

use crate::error::{PlaybackError, Result};

/// Format seconds as `M:SS`
///
/// Minutes are unpadded, seconds are zero-padded to two digits. Both parts
/// are floored. Negative and non-finite input is rejected.
pub fn format_time(seconds: f64) -> Result<String> {
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(PlaybackError::InvalidDuration(seconds));
    }

    let minutes = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    Ok(format!("{}:{:02}", minutes, secs))
}

/// Fraction of the track played, in `[0, 1]`
///
/// Returns `None` until the duration is known (NaN, infinite or zero before
/// metadata loads) or when the current time is not a valid time.
pub fn progress_fraction(current: f64, duration: f64) -> Option<f64> {
    if !current.is_finite() || current < 0.0 {
        return None;
    }
    if !duration.is_finite() || duration <= 0.0 {
        return None;
    }
    Some((current / duration).clamp(0.0, 1.0))
}

/// Playhead position for a seek fraction
///
/// The fraction is clamped to `[0, 1]` first.
pub fn seek_position(fraction: f64, duration: f64) -> Result<f64> {
    if !fraction.is_finite() {
        return Err(PlaybackError::InvalidSeekFraction(fraction));
    }
    if !duration.is_finite() || duration < 0.0 {
        return Err(PlaybackError::InvalidDuration(duration));
    }
    Ok(fraction.clamp(0.0, 1.0) * duration)
}
