//! Unit conversion constants and normalization
//!
//! Everything downstream works in kilograms and centimeters.

use crate::models::Measurements;

/// Kilograms per pound (exact)
pub const KG_PER_LB: f64 = 0.45359237;
/// Centimeters per inch (exact)
pub const CM_PER_IN: f64 = 2.54;
/// Inches per foot
pub const IN_PER_FT: u32 = 12;

/// Pounds to kilograms
pub fn lb_to_kg(lb: f64) -> f64 {
    lb * KG_PER_LB
}

/// Kilograms to pounds
pub fn kg_to_lb(kg: f64) -> f64 {
    kg / KG_PER_LB
}

/// Inches to centimeters
pub fn in_to_cm(inches: f64) -> f64 {
    inches * CM_PER_IN
}

/// Centimeters to inches
pub fn cm_to_in(cm: f64) -> f64 {
    cm / CM_PER_IN
}

/// Convert entered measurements to `(height_cm, weight_kg)` without rounding
pub fn normalize(measurements: &Measurements) -> (f64, f64) {
    match *measurements {
        Measurements::Imperial { feet, inches, pounds } => {
            let total_inches = feet * IN_PER_FT + inches;
            (in_to_cm(f64::from(total_inches)), lb_to_kg(pounds))
        }
        Measurements::Metric { height_cm, weight_kg } => (height_cm, weight_kg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pound_and_inch_constants() {
        assert_eq!(lb_to_kg(1.0), 0.45359237);
        assert_eq!(in_to_cm(1.0), 2.54);
        assert!((kg_to_lb(lb_to_kg(170.0)) - 170.0).abs() < 1e-9);
        assert!((cm_to_in(in_to_cm(70.0)) - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_imperial() {
        let (height_cm, weight_kg) = normalize(&Measurements::Imperial {
            feet: 5,
            inches: 10,
            pounds: 170.0,
        });
        assert!((height_cm - 177.8).abs() < 1e-9);
        assert!((weight_kg - 77.1107029).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_metric_passthrough() {
        let m = Measurements::Metric { height_cm: 165.5, weight_kg: 61.3 };
        assert_eq!(normalize(&m), (165.5, 61.3));
    }
}
