//! Wind-loading assessment (physics module)
//!
//! The "simulation" is a lookup into the static scenario table plus the
//! shared range checks; findings are derived directly from the fixture
//! numbers. No finite-element computation happens here.

use crate::modules::fixtures::{self, WindScenario};
use crate::modules::validate::{validate_wind_scenario, ValidationError};

/// Deflection above this is flagged for review (mm)
const DEFLECTION_REVIEW_MM: f64 = 50.0;
/// Minimum acceptable safety factor
const SAFETY_FACTOR_FLOOR: f64 = 1.5;

/// Result of assessing one wind scenario
#[derive(Debug, Clone)]
pub struct WindAssessment {
    pub scenario: WindScenario,
    pub within_limits: bool,
    pub findings: Vec<String>,
}

/// Look up a scenario by id and assess it.
pub fn run_wind_scenario(id: &str) -> Result<WindAssessment, ValidationError> {
    let scenario = fixtures::wind_scenarios()
        .into_iter()
        .find(|s| s.id == id)
        .ok_or_else(|| ValidationError::UnknownScenario(id.to_string()))?;

    validate_wind_scenario(&scenario)?;

    let mut findings = Vec::new();
    let mut within_limits = true;

    if scenario.max_deflection_mm > DEFLECTION_REVIEW_MM {
        within_limits = false;
        findings.push(format!(
            "deflection {:.1} mm exceeds review threshold {:.1} mm",
            scenario.max_deflection_mm, DEFLECTION_REVIEW_MM
        ));
    }
    if scenario.safety_factor < SAFETY_FACTOR_FLOOR {
        within_limits = false;
        findings.push(format!(
            "safety factor {:.2} below floor {:.2}",
            scenario.safety_factor, SAFETY_FACTOR_FLOOR
        ));
    }
    if findings.is_empty() {
        findings.push("all checked values within limits".to_string());
    }

    Ok(WindAssessment {
        scenario,
        within_limits,
        findings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calm_scenario_within_limits() {
        let assessment = run_wind_scenario("calm").unwrap();
        assert!(assessment.within_limits);
        assert_eq!(assessment.findings.len(), 1);
    }

    #[test]
    fn test_storm_scenario_flagged() {
        let assessment = run_wind_scenario("storm").unwrap();
        assert!(!assessment.within_limits);
        // Both the deflection and the safety factor fail for the storm cell
        assert_eq!(assessment.findings.len(), 2);
    }

    #[test]
    fn test_unknown_scenario() {
        let err = run_wind_scenario("tornado").unwrap_err();
        assert!(matches!(err, ValidationError::UnknownScenario(_)));
    }
}
