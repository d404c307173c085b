//! Energy expenditure
//!
//! BMR via Katch-McArdle when lean mass is known, Mifflin-St Jeor otherwise,
//! then TDEE by activity multiplier.

use crate::models::{ActivityLevel, BmrMethod, Sex, UserProfile};

/// Mifflin-St Jeor (1990): 10w + 6.25h - 5a + s, s = +5 male / -161 female
pub fn mifflin_st_jeor(sex: Sex, weight_kg: f64, height_cm: f64, age: u32) -> f64 {
    let sex_constant = match sex {
        Sex::Male => 5.0,
        Sex::Female => -161.0,
    };
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age) + sex_constant
}

/// Katch-McArdle: 370 + 21.6 x lean body mass (kg)
pub fn katch_mcardle(lean_mass_kg: f64) -> f64 {
    370.0 + 21.6 * lean_mass_kg
}

/// Pick the BMR equation based on lean mass availability
pub fn calculate_bmr(profile: &UserProfile, lean_mass_kg: Option<f64>) -> (f64, BmrMethod) {
    match lean_mass_kg.filter(|lean| lean.is_finite()) {
        Some(lean) => (katch_mcardle(lean), BmrMethod::KatchMcArdle),
        None => (
            mifflin_st_jeor(profile.sex, profile.weight_kg, profile.height_cm, profile.age),
            BmrMethod::MifflinStJeor,
        ),
    }
}

/// TDEE = BMR x activity multiplier
pub fn calculate_tdee(bmr: f64, activity: ActivityLevel) -> f64 {
    bmr * activity.multiplier()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(sex: Sex) -> UserProfile {
        UserProfile {
            sex,
            age: 30,
            height_cm: 178.0,
            weight_kg: 77.1,
            body_fat_pct: None,
            activity: ActivityLevel::Moderate,
        }
    }

    #[test]
    fn test_mifflin_st_jeor_male() {
        let bmr = mifflin_st_jeor(Sex::Male, 77.1, 178.0, 30);
        assert!((bmr - 1738.5).abs() < 1e-9);
    }

    #[test]
    fn test_mifflin_st_jeor_female_offset() {
        let male = mifflin_st_jeor(Sex::Male, 60.0, 165.0, 25);
        let female = mifflin_st_jeor(Sex::Female, 60.0, 165.0, 25);
        assert!((male - female - 166.0).abs() < 1e-9);
        assert!((female - 1345.25).abs() < 1e-9);
    }

    #[test]
    fn test_bmr_without_lean_mass_uses_mifflin() {
        let (bmr, method) = calculate_bmr(&profile(Sex::Male), None);
        assert_eq!(method, BmrMethod::MifflinStJeor);
        assert!((bmr - 1738.5).abs() < 1e-9);
    }

    #[test]
    fn test_bmr_with_lean_mass_uses_katch() {
        let (bmr, method) = calculate_bmr(&profile(Sex::Male), Some(63.222));
        assert_eq!(method, BmrMethod::KatchMcArdle);
        assert!((bmr - 1735.5952).abs() < 1e-6);
    }

    #[test]
    fn test_bmr_non_finite_lean_mass_falls_back() {
        let (_, method) = calculate_bmr(&profile(Sex::Female), Some(f64::NAN));
        assert_eq!(method, BmrMethod::MifflinStJeor);
    }

    #[test]
    fn test_tdee_moderate() {
        assert!((calculate_tdee(1738.5, ActivityLevel::Moderate) - 1738.5 * 1.55).abs() < 1e-9);
        assert_eq!(calculate_tdee(0.0, ActivityLevel::Athlete), 0.0);
    }
}
