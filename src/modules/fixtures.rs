//! Static fixture tables
//!
//! Hand-authored demo data backing the simulated analysis modules.
//! Loaded once, never mutated except by the render-stress helper.

use serde::Serialize;

/// Soil/rock composition sample (topography module)
#[derive(Debug, Clone, Serialize)]
pub struct MaterialSample {
    pub name: &'static str,
    pub silica_pct: f64,
    pub iron_pct: f64,
    pub density_kg_m3: f64,
}

/// Canopy statistics per survey plot (biology module)
#[derive(Debug, Clone, Serialize)]
pub struct CanopyStat {
    pub plot: String,
    pub mean_height_m: f64,
    pub cover_pct: f64,
    pub species_count: u32,
}

/// Wind loading scenario (physics module)
#[derive(Debug, Clone, Serialize)]
pub struct WindScenario {
    pub id: &'static str,
    pub label: &'static str,
    pub wind_speed_ms: f64,
    pub gust_factor: f64,
    pub max_deflection_mm: f64,
    pub safety_factor: f64,
}

/// Installed plugin metadata (plugin browser)
#[derive(Debug, Clone, Serialize)]
pub struct PluginMeta {
    pub name: &'static str,
    pub version: &'static str,
    pub vendor: &'static str,
    pub enabled: bool,
}

/// Everything the reproducibility export snapshots
#[derive(Debug, Clone, Serialize)]
pub struct FixtureSnapshot {
    pub materials: Vec<MaterialSample>,
    pub canopy: Vec<CanopyStat>,
    pub wind_scenarios: Vec<WindScenario>,
    pub plugins: Vec<PluginMeta>,
}

pub fn material_samples() -> Vec<MaterialSample> {
    vec![
        MaterialSample {
            name: "ridge basalt",
            silica_pct: 49.2,
            iron_pct: 12.1,
            density_kg_m3: 3011.0,
        },
        MaterialSample {
            name: "valley loess",
            silica_pct: 68.4,
            iron_pct: 4.3,
            density_kg_m3: 1440.0,
        },
        MaterialSample {
            name: "scree granite",
            silica_pct: 72.0,
            iron_pct: 2.7,
            density_kg_m3: 2650.0,
        },
    ]
}

pub fn canopy_stats() -> Vec<CanopyStat> {
    vec![
        CanopyStat {
            plot: "B-01".to_string(),
            mean_height_m: 18.4,
            cover_pct: 82.0,
            species_count: 14,
        },
        CanopyStat {
            plot: "B-02".to_string(),
            mean_height_m: 12.9,
            cover_pct: 64.5,
            species_count: 9,
        },
        CanopyStat {
            plot: "B-03".to_string(),
            mean_height_m: 21.7,
            cover_pct: 91.2,
            species_count: 17,
        },
    ]
}

pub fn wind_scenarios() -> Vec<WindScenario> {
    vec![
        WindScenario {
            id: "calm",
            label: "Calm morning",
            wind_speed_ms: 3.2,
            gust_factor: 1.1,
            max_deflection_mm: 4.0,
            safety_factor: 4.8,
        },
        WindScenario {
            id: "front",
            label: "Pressure front",
            wind_speed_ms: 14.6,
            gust_factor: 1.6,
            max_deflection_mm: 38.5,
            safety_factor: 2.1,
        },
        WindScenario {
            id: "storm",
            label: "Storm cell",
            wind_speed_ms: 26.0,
            gust_factor: 2.3,
            max_deflection_mm: 95.0,
            safety_factor: 1.2,
        },
    ]
}

pub fn plugin_catalog() -> Vec<PluginMeta> {
    vec![
        PluginMeta {
            name: "terrain-mesh",
            version: "0.9.2",
            vendor: "Underwhere Labs",
            enabled: true,
        },
        PluginMeta {
            name: "species-index",
            version: "1.2.0",
            vendor: "Field Partners",
            enabled: true,
        },
        PluginMeta {
            name: "quantum-preview",
            version: "0.1.0",
            vendor: "Underwhere Labs",
            enabled: false,
        },
    ]
}

/// Snapshot of all fixture tables (for the reproducibility export)
pub fn snapshot() -> FixtureSnapshot {
    FixtureSnapshot {
        materials: material_samples(),
        canopy: canopy_stats(),
        wind_scenarios: wind_scenarios(),
        plugins: plugin_catalog(),
    }
}

/// Generate synthetic canopy rows for render-stress testing.
///
/// Debug aid only; the generated plots are not part of the fixture set.
pub fn canopy_stress_rows(count: usize) -> Vec<CanopyStat> {
    (0..count)
        .map(|i| CanopyStat {
            plot: format!("S-{:04}", i),
            mean_height_m: 10.0 + (i % 20) as f64 * 0.7,
            cover_pct: 40.0 + (i % 60) as f64,
            species_count: 4 + (i % 12) as u32,
        })
        .collect()
}
