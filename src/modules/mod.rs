//! Survey module registry
//!
//! The product's analysis modules. Every entry is simulated or roadmap
//! material; the registry exists to drive listings and the module panel.

pub mod fixtures;
pub mod physics;
pub mod validate;

pub use physics::{run_wind_scenario, WindAssessment};
pub use validate::{validate_fixtures, ValidationError};

/// Delivery status of a module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleStatus {
    /// Backed by static fixtures and fake processing
    Simulated,
    /// Marketing prose only, nothing behind it
    Roadmap,
}

impl ModuleStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ModuleStatus::Simulated => "simulated",
            ModuleStatus::Roadmap => "roadmap",
        }
    }
}

/// One survey module entry
#[derive(Debug, Clone, Copy)]
pub struct SurveyModule {
    pub id: &'static str,
    pub title: &'static str,
    pub status: ModuleStatus,
    pub blurb: &'static str,
}

/// Simulated-operation lifecycle
///
/// Replaces timer-based fake delays: a run is Pending until its handler
/// fills in results, then Complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationStatus {
    Pending,
    Complete,
}

/// One simulated analysis run
#[derive(Debug, Clone)]
pub struct AnalysisRun {
    pub module_id: &'static str,
    pub status: OperationStatus,
    pub summary: String,
}

impl AnalysisRun {
    pub fn pending(module_id: &'static str) -> Self {
        Self {
            module_id,
            status: OperationStatus::Pending,
            summary: String::new(),
        }
    }

    pub fn complete(&mut self, summary: String) {
        self.status = OperationStatus::Complete;
        self.summary = summary;
    }

    pub fn is_complete(&self) -> bool {
        self.status == OperationStatus::Complete
    }
}

const REGISTRY: &[SurveyModule] = &[
    SurveyModule {
        id: "topography",
        title: "Topography",
        status: ModuleStatus::Simulated,
        blurb: "Surface composition from fixture material samples.",
    },
    SurveyModule {
        id: "biology",
        title: "Biology",
        status: ModuleStatus::Simulated,
        blurb: "Canopy statistics per survey plot.",
    },
    SurveyModule {
        id: "physics",
        title: "Physics",
        status: ModuleStatus::Simulated,
        blurb: "Wind-loading scenarios with range checks.",
    },
    SurveyModule {
        id: "quantum",
        title: "Quantum",
        status: ModuleStatus::Roadmap,
        blurb: "Future quantum-assisted material analysis.",
    },
    SurveyModule {
        id: "discovery",
        title: "AI Discovery",
        status: ModuleStatus::Simulated,
        blurb: "Free-form survey questions answered by the hosted model.",
    },
];

/// All registered modules, in display order
pub fn registry() -> &'static [SurveyModule] {
    REGISTRY
}

/// Look up a module by id
pub fn find(id: &str) -> Option<&'static SurveyModule> {
    REGISTRY.iter().find(|m| m.id == id)
}
