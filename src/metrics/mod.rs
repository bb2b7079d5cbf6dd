//! Derived-metric calculations
//!
//! Anthropometric conversions and the 30-day normalization applied to
//! per-period consumption counts before encoding.

/// Length of the survey's reference window in days
pub const REFERENCE_WINDOW_DAYS: u32 = 30;

/// How often a food item is consumed, as entered on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    /// Count is per day
    PerDay,
    /// Count is per week
    PerWeek,
    /// Count is per month
    PerMonth,
}

impl Frequency {
    /// Normalize a per-period count to the 30-day reference window
    ///
    /// Per-day counts scale by 30, per-week by 4, per-month pass through.
    #[must_use]
    pub fn normalize(self, count: u8) -> u32 {
        let count = u32::from(count);
        match self {
            Self::PerDay => count * 30,
            Self::PerWeek => count * 4,
            Self::PerMonth => count,
        }
    }
}

/// Body mass index from weight and height, rounded to 2 decimal places
#[must_use]
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    round2(weight_kg / (height_m * height_m))
}

/// Convert a feet-and-inches height to centimeters
#[must_use]
pub fn height_from_feet_inches(feet: u8, inches: u8) -> f64 {
    f64::from((u32::from(feet) * 12) + u32::from(inches)) * 2.54
}

/// Round to 2 decimal places
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bmi_is_rounded_to_two_decimals() {
        assert_eq!(bmi(70.0, 175.0), 22.86);
        assert_eq!(bmi(60.0, 165.0), 22.04);
    }

    #[test]
    fn feet_and_inches_convert_to_centimeters() {
        assert_eq!(height_from_feet_inches(5, 10), 177.8);
        assert_eq!(height_from_feet_inches(6, 0), 182.88);
    }

    #[test]
    fn counts_normalize_to_a_thirty_day_window() {
        assert_eq!(Frequency::PerDay.normalize(3), 90);
        assert_eq!(Frequency::PerWeek.normalize(3), 12);
        assert_eq!(Frequency::PerMonth.normalize(3), 3);
        assert_eq!(Frequency::PerDay.normalize(0), 0);
    }
}
