/// Affine interpolation from one range onto another.
///
/// `value` at `input_min` maps to `output_min`, `value` at `input_max` maps
/// to `output_max`, and everything in between scales linearly. Values
/// outside the input range extrapolate; nothing is clamped. The caller
/// guarantees `input_min != input_max`.
///
/// Both directions of the pixel/plane conversion go through this: workers
/// map pixel columns and rows onto the viewport, hosts map clicked pixels
/// back onto plane coordinates.
#[inline]
#[must_use]
pub fn map_range(
    value: f64,
    input_min: f64,
    input_max: f64,
    output_min: f64,
    output_max: f64,
) -> f64 {
    let t = (value - input_min) / (input_max - input_min);
    t * (output_max - output_min) + output_min
}
