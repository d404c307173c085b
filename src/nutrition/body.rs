//! Body composition
//!
//! Lean mass from body fat percent. Absent stays absent: a missing or
//! unusable reading never turns into zero lean mass.

pub const MAX_BODY_FAT_PCT: f64 = 70.0;

/// Lean body mass in kg, or None when it cannot be derived
pub fn lean_mass_kg(weight_kg: f64, body_fat_pct: Option<f64>) -> Option<f64> {
    let pct = body_fat_pct.filter(|pct| *pct >= 0.0)?;
    let fraction = pct.clamp(0.0, MAX_BODY_FAT_PCT) / 100.0;
    let lean = weight_kg * (1.0 - fraction);
    lean.is_finite().then_some(lean)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lean_mass_from_body_fat() {
        let lean = lean_mass_kg(77.1, Some(18.0)).unwrap();
        assert!((lean - 63.222).abs() < 1e-9);
    }

    #[test]
    fn test_missing_or_negative_body_fat_is_absent() {
        assert_eq!(lean_mass_kg(77.1, None), None);
        assert_eq!(lean_mass_kg(77.1, Some(-1.0)), None);
        assert_eq!(lean_mass_kg(77.1, Some(f64::NAN)), None);
    }

    #[test]
    fn test_body_fat_clamped_to_max() {
        let at_max = lean_mass_kg(100.0, Some(70.0)).unwrap();
        assert!((at_max - 30.0).abs() < 1e-9);
        let above = lean_mass_kg(100.0, Some(95.0)).unwrap();
        assert!((above - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_non_finite_weight_is_absent() {
        assert_eq!(lean_mass_kg(f64::NAN, Some(20.0)), None);
        assert_eq!(lean_mass_kg(f64::INFINITY, Some(20.0)), None);
    }
}
