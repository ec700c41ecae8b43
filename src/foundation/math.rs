/// Left-to-right running sums: `out[k]` is `values[0] + ... + values[k]`,
/// accumulated in index order.
///
/// Each entry is the same float as summing that run directly, so equal runs of
/// equal values produce bit-identical sums.
pub(crate) fn running_sums(values: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len());
    let mut acc = 0.0;
    for &v in values {
        acc += v;
        out.push(acc);
    }
    out
}

/// Approximate float equality within an absolute tolerance.
#[cfg(test)]
pub(crate) fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}
