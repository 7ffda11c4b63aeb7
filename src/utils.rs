/// Round to 2 decimal places, the display precision of the calculator.
/// Every determinant-family function rounds its own result with this, so
/// the rounding is cumulative through minor/cofactor chains.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
