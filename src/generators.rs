//! Identity and negative LUT generators (§1, ambient — thin CUBE-text
//! writers used by tests and by the CLI's `generate` path).

/// Write an identity CUBE LUT of the given size: `sample(i, j, k)` equals
/// the normalized grid coordinate itself.
pub fn identity_cube(size: usize) -> String {
    build_cube(size, &format!("Identity LUT {size}x{size}x{size}"), |r, g, b| (r, g, b))
}

/// Write a negative CUBE LUT of the given size: `sample(i, j, k)` equals
/// `1 - coordinate` per channel.
pub fn negative_cube(size: usize) -> String {
    build_cube(size, &format!("Negative LUT {size}x{size}x{size}"), |r, g, b| {
        (1.0 - r, 1.0 - g, 1.0 - b)
    })
}

fn build_cube(size: usize, title: &str, f: impl Fn(f64, f64, f64) -> (f64, f64, f64)) -> String {
    assert!(size >= 2, "CUBE LUT_3D_SIZE must be >= 2");
    let divisor = (size - 1) as f64;

    let mut out = String::new();
    out.push_str(&format!("TITLE \"{title}\"\n"));
    out.push_str("DOMAIN_MIN 0.0 0.0 0.0\n");
    out.push_str("DOMAIN_MAX 1.0 1.0 1.0\n");
    out.push_str(&format!("LUT_3D_SIZE {size}\n"));

    for b_idx in 0..size {
        for g_idx in 0..size {
            for r_idx in 0..size {
                let (r, g, b) = f(r_idx as f64 / divisor, g_idx as f64 / divisor, b_idx as f64 / divisor);
                out.push_str(&format!("{r:.6} {g:.6} {b:.6}\n"));
            }
        }
    }
    out
}
