pub mod linear;

use linear::InterpolateLinear;

use crate::{easing::Easing, errors::InvalidInput, pose::CameraPose};

/// Samples a waypoint path at global progress `t`.
///
/// `t` is progress across the whole path, not per segment: with `N` waypoints, each of the
/// `N - 1` segments covers an equal share of `[0, 1]`. Values outside of `[0, 1]` (elastic easing
/// overshoot) extrapolate along the first or last segment.
pub fn interpolate(waypoints: &[CameraPose], t: f64) -> Result<CameraPose, InvalidInput> {
    if waypoints.len() < 2 {
        return Err(InvalidInput::NotEnoughWaypoints(waypoints.len()));
    }
    if !t.is_finite() {
        return Err(InvalidInput::NonFinite(t));
    }

    let segments = (waypoints.len() - 1) as f64;
    let scaled = t * segments;
    let index = (scaled.floor().max(0.) as usize).min(waypoints.len() - 2);
    let local_t = scaled - index as f64;

    Ok(waypoints[index].interpolate_linear(&waypoints[index + 1], local_t))
}

/// Evenly spaced (in raw time) samples of the eased path, endpoints included. Used to preview
/// a path before playing it.
pub fn sample_path(
    waypoints: &[CameraPose],
    easing: Easing,
    samples: usize,
) -> Result<Vec<CameraPose>, InvalidInput> {
    match samples {
        0 => Ok(Vec::new()),
        1 => Ok(vec![interpolate(waypoints, easing.ease(0.))?]),
        n => (0..n)
            .map(|i| interpolate(waypoints, easing.ease(i as f64 / (n - 1) as f64)))
            .collect(),
    }
}
