//! # Weight Normalization and Formatting
//!
//! This module provides the two weight helpers used by the kitchen report:
//!
//! - `extract_weight` scans a free-text product name for an embedded
//!   quantity+unit token (e.g. "סלט חומוס 250 גרם", "רוטב 1.5 ליטר") and
//!   normalizes it to base units: grams for mass, milliliters for volume.
//! - `format_weight` renders an aggregated base-unit total back into a
//!   display string, switching to the larger unit (kg/l) at 1000 base units.
//!
//! A name with no recognizable token yields `{ value: 0, unit: None }`.
//! That is a defined "no embedded weight" result, not a parse failure:
//! callers display a packaging count only. When a name carries more than
//! one token, the first by scan order wins.

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::weight_patterns::WEIGHT_TOKEN_REGEX;

/// Mass/volume unit attached to a weight value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightUnit {
    #[serde(rename = "g")]
    Grams,
    #[serde(rename = "kg")]
    Kilograms,
    #[serde(rename = "ml")]
    Milliliters,
    #[serde(rename = "l")]
    Liters,
}

impl WeightUnit {
    /// Display symbol for the unit.
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightUnit::Grams => "g",
            WeightUnit::Kilograms => "kg",
            WeightUnit::Milliliters => "ml",
            WeightUnit::Liters => "l",
        }
    }

    /// The unit used once a total crosses the large-form threshold.
    pub fn large_form(&self) -> WeightUnit {
        match self {
            WeightUnit::Grams | WeightUnit::Kilograms => WeightUnit::Kilograms,
            WeightUnit::Milliliters | WeightUnit::Liters => WeightUnit::Liters,
        }
    }

    pub fn is_mass(&self) -> bool {
        matches!(self, WeightUnit::Grams | WeightUnit::Kilograms)
    }

    pub fn is_volume(&self) -> bool {
        matches!(self, WeightUnit::Milliliters | WeightUnit::Liters)
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A per-unit weight extracted from a product name, in base units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmbeddedWeight {
    /// Base-unit value: grams for mass, milliliters for volume
    pub value: f64,
    /// `None` when the name carries no recognizable weight token
    pub unit: Option<WeightUnit>,
}

impl EmbeddedWeight {
    /// The defined "no embedded weight" result.
    pub fn none() -> Self {
        Self {
            value: 0.0,
            unit: None,
        }
    }
}

/// Map a matched unit token to its family and base-unit multiplier.
fn classify_unit_token(token: &str) -> (WeightUnit, f64) {
    match token.to_lowercase().as_str() {
        "kg" | "קילו" => (WeightUnit::Grams, 1000.0),
        "g" | "גרם" => (WeightUnit::Grams, 1.0),
        "l" | "ליטר" => (WeightUnit::Milliliters, 1000.0),
        "ml" => (WeightUnit::Milliliters, 1.0),
        token if token.starts_with('ק') => (WeightUnit::Grams, 1000.0), // ק"ג with either quote mark
        _ => (WeightUnit::Milliliters, 1.0), // מ"ל with either quote mark
    }
}

/// Extract the first embedded quantity+unit token from a product name,
/// normalized to base units (grams / milliliters).
///
/// # Examples
///
/// ```rust
/// use catering_reports::weight::{extract_weight, WeightUnit};
///
/// let w = extract_weight("סלט חומוס 250 גרם");
/// assert_eq!(w.value, 250.0);
/// assert_eq!(w.unit, Some(WeightUnit::Grams));
///
/// let none = extract_weight("שניצל עוף");
/// assert_eq!(none.value, 0.0);
/// assert_eq!(none.unit, None);
/// ```
pub fn extract_weight(name: &str) -> EmbeddedWeight {
    let Some(captures) = WEIGHT_TOKEN_REGEX.captures(name) else {
        trace!("No embedded weight token in '{}'", name);
        return EmbeddedWeight::none();
    };

    // Both groups are guaranteed by the pattern
    let value: f64 = match captures[1].parse() {
        Ok(v) => v,
        Err(_) => return EmbeddedWeight::none(),
    };
    let (unit, multiplier) = classify_unit_token(&captures[2]);

    debug!(
        "Extracted weight token '{}' from '{}' -> {} {}",
        &captures[0],
        name,
        value * multiplier,
        unit
    );

    EmbeddedWeight {
        value: value * multiplier,
        unit: Some(unit),
    }
}

/// Render an aggregated base-unit total as a display string.
///
/// Totals of 1000 base units or more switch to the large unit with two
/// decimals; smaller totals render as a bare integer with the small unit.
/// Already-large units (`kg`/`l`) carried through from recipe data render
/// with two decimals unchanged. A missing unit or zero total renders as
/// the `"-"` sentinel. Pure and total: every input yields a string.
///
/// # Examples
///
/// ```rust
/// use catering_reports::weight::{format_weight, WeightUnit};
///
/// assert_eq!(format_weight(999.0, Some(WeightUnit::Grams)), "999 g");
/// assert_eq!(format_weight(1000.0, Some(WeightUnit::Grams)), "1.00 kg");
/// assert_eq!(format_weight(0.0, Some(WeightUnit::Grams)), "-");
/// assert_eq!(format_weight(500.0, None), "-");
/// ```
pub fn format_weight(total_base_units: f64, unit: Option<WeightUnit>) -> String {
    let Some(unit) = unit else {
        return "-".to_string();
    };
    if total_base_units == 0.0 {
        return "-".to_string();
    }

    match unit {
        WeightUnit::Grams | WeightUnit::Milliliters => {
            if total_base_units >= 1000.0 {
                format!("{:.2} {}", total_base_units / 1000.0, unit.large_form())
            } else {
                format!("{} {}", total_base_units as i64, unit)
            }
        }
        WeightUnit::Kilograms | WeightUnit::Liters => {
            format!("{:.2} {}", total_base_units, unit)
        }
    }
}
