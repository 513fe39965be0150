//! Fixture sanity checks
//!
//! Numeric-range checks over the static tables. Illustrative demo
//! validation, not a data-integrity mechanism.

use crate::modules::fixtures;

/// Validation failure for a fixture field
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{subject}: {field} = {value} out of range {min}..={max}")]
    OutOfRange {
        subject: String,
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("unknown wind scenario: {0}")]
    UnknownScenario(String),
}

fn check_range(
    subject: &str,
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), ValidationError> {
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            subject: subject.to_string(),
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Run range checks across every fixture table.
///
/// Returns the number of checks performed.
pub fn validate_fixtures() -> Result<usize, ValidationError> {
    let mut checks = 0;

    for sample in fixtures::material_samples() {
        check_range(sample.name, "silica_pct", sample.silica_pct, 0.0, 100.0)?;
        check_range(sample.name, "iron_pct", sample.iron_pct, 0.0, 100.0)?;
        check_range(
            sample.name,
            "density_kg_m3",
            sample.density_kg_m3,
            500.0,
            8000.0,
        )?;
        checks += 3;
    }

    for stat in fixtures::canopy_stats() {
        check_range(&stat.plot, "mean_height_m", stat.mean_height_m, 0.0, 120.0)?;
        check_range(&stat.plot, "cover_pct", stat.cover_pct, 0.0, 100.0)?;
        checks += 2;
    }

    for scenario in fixtures::wind_scenarios() {
        checks += validate_wind_scenario(&scenario)?;
    }

    Ok(checks)
}

/// Range checks for a single wind scenario.
///
/// Returns the number of checks performed.
pub fn validate_wind_scenario(
    scenario: &fixtures::WindScenario,
) -> Result<usize, ValidationError> {
    check_range(
        scenario.label,
        "wind_speed_ms",
        scenario.wind_speed_ms,
        0.0,
        60.0,
    )?;
    check_range(scenario.label, "gust_factor", scenario.gust_factor, 1.0, 4.0)?;
    check_range(
        scenario.label,
        "max_deflection_mm",
        scenario.max_deflection_mm,
        0.0,
        500.0,
    )?;
    check_range(
        scenario.label,
        "safety_factor",
        scenario.safety_factor,
        0.1,
        20.0,
    )?;
    Ok(4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::fixtures::WindScenario;

    #[test]
    fn test_shipped_fixtures_pass() {
        let checks = validate_fixtures().unwrap();
        assert!(checks > 0);
    }

    #[test]
    fn test_out_of_range_scenario_fails() {
        let bad = WindScenario {
            id: "bad",
            label: "Impossible gale",
            wind_speed_ms: 300.0,
            gust_factor: 1.5,
            max_deflection_mm: 10.0,
            safety_factor: 2.0,
        };
        let err = validate_wind_scenario(&bad).unwrap_err();
        match err {
            ValidationError::OutOfRange { field, value, .. } => {
                assert_eq!(field, "wind_speed_ms");
                assert_eq!(value, 300.0);
            }
            other => panic!("expected OutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_error_display_names_subject() {
        let err = ValidationError::OutOfRange {
            subject: "Storm cell".to_string(),
            field: "safety_factor",
            value: 0.0,
            min: 0.1,
            max: 20.0,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("Storm cell"));
        assert!(msg.contains("safety_factor"));
    }
}
