//! Loads search plans and their expected outcomes from TOML files.

use capicrypto_algorithms::ec::Point;
use capicrypto_algorithms::search::{FoundCurve, SearchConfig};
use num_bigint::BigUint;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding the fixture files
pub fn vectors_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src").join("vectors")
}

/// A curve a plan must find
#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedCurve {
    pub p: u64,
    pub a: u64,
    pub b: u64,
    pub generator: (u64, u64),
    pub order: u64,
}

impl ExpectedCurve {
    /// Whether `found` is this curve
    pub fn matches(&self, found: &FoundCurve) -> bool {
        let generator = Point::Affine {
            x: BigUint::from(self.generator.0),
            y: BigUint::from(self.generator.1),
        };
        found.params.p() == &BigUint::from(self.p)
            && found.params.a() == &BigUint::from(self.a)
            && found.params.b() == &BigUint::from(self.b)
            && found.generator == generator
            && found.order == BigUint::from(self.order)
    }
}

/// A search plan with its expected report
#[derive(Debug, Clone, Deserialize)]
pub struct PlanFixture {
    pub description: String,
    pub config: SearchConfig,
    #[serde(default)]
    pub expected: Vec<ExpectedCurve>,
    pub rejected: usize,
}

#[derive(Debug, Deserialize)]
struct PlanFile {
    plans: BTreeMap<String, PlanFixture>,
}

/// Parse a plan file
pub fn load_plans(path: &Path) -> Result<BTreeMap<String, PlanFixture>, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let file: PlanFile =
        toml::from_str(&text).map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;
    Ok(file.plans)
}

static SEARCH_PLANS: Lazy<Result<BTreeMap<String, PlanFixture>, String>> =
    Lazy::new(|| load_plans(&vectors_dir().join("search_plans.toml")));

/// A named plan from `search_plans.toml`
pub fn search_plan(name: &str) -> Result<PlanFixture, String> {
    let plans = SEARCH_PLANS.as_ref().map_err(Clone::clone)?;
    plans
        .get(name)
        .cloned()
        .ok_or_else(|| format!("No search plan named {name:?}"))
}

/// Names of every plan in `search_plans.toml`
pub fn search_plan_names() -> Result<Vec<String>, String> {
    let plans = SEARCH_PLANS.as_ref().map_err(Clone::clone)?;
    Ok(plans.keys().cloned().collect())
}
