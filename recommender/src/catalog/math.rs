/// Scale a vector to unit Euclidean norm.
/// A norm of exactly zero is substituted with 1.0, so the zero vector maps to
/// the zero vector instead of NaN.
pub fn unit_normalized(v: &[f32]) -> Vec<f32> {
    let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm = if norm == 0.0 { 1.0 } else { norm };

    v.iter().map(|x| x / norm).collect()
}

/// Dot product of two equal-length vectors.
/// For unit vectors this equals their cosine similarity.
pub fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}
