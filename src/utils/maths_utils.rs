use argminmax::ArgMinMax;

// All helpers expect a non-empty slice; callers only ever pass full windows.

pub fn get_max(vec: &[f64]) -> f64 {
    let max_index: usize = vec.argmax();
    vec[max_index]
}

pub fn get_min(vec: &[f64]) -> f64 {
    let min_index: usize = vec.argmin();
    vec[min_index]
}

pub fn get_min_max(vec: &[f64]) -> (f64, f64) {
    let (min_index, max_index) = vec.argminmax();
    (vec[min_index], vec[max_index])
}

/// Peak-to-peak spread of the slice (max - min)
pub fn spread(vec: &[f64]) -> f64 {
    let (min, max) = get_min_max(vec);
    max - min
}

/// Arithmetic mean. Returns 0.0 for an empty slice.
pub fn mean(vec: &[f64]) -> f64 {
    if vec.is_empty() {
        return 0.0;
    }
    vec.iter().sum::<f64>() / vec.len() as f64
}

/// Relative distance of `value` from `reference`, as a fraction of `reference`.
pub fn relative_distance(reference: f64, value: f64) -> f64 {
    (reference - value).abs() / reference
}
