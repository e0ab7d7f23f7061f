//! Scenario files (TOML or JSON) with schema validation.
//!
//! Both formats are parsed into a JSON value, checked against the bundled
//! `scenario.v1` schema, then deserialized. The schema is structural only;
//! numeric consistency is left to `core::validator`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::validator_for;
use serde_json::Value;
use tracing::debug;

use crate::core::types::{Process, Scenario};

pub const SCENARIO_SCHEMA: &str = include_str!("../../schemas/scenario.v1.schema.json");

/// On-disk encoding, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioFormat {
    Toml,
    Json,
}

impl ScenarioFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            _ => Err(anyhow!(
                "unsupported scenario file {} (expected .toml or .json)",
                path.display()
            )),
        }
    }
}

/// The sample scenario shipped by `banker init`.
pub fn sample_scenario() -> Scenario {
    let row = |id: &str, allocation: [i64; 3], max: [i64; 3]| {
        Process::new(id, allocation.to_vec(), max.to_vec())
    };
    Scenario {
        resources: Some(3),
        available: vec![3, 3, 2],
        processes: vec![
            row("P0", [0, 1, 0], [7, 5, 3]),
            row("P1", [2, 0, 0], [3, 2, 2]),
            row("P2", [3, 0, 2], [9, 0, 2]),
            row("P3", [2, 1, 1], [2, 2, 2]),
            row("P4", [0, 0, 2], [4, 3, 3]),
        ],
    }
}

/// Load a scenario from disk and check it against the schema.
pub fn load_scenario(path: &Path) -> Result<Scenario> {
    let format = ScenarioFormat::from_path(path)?;
    debug!(path = %path.display(), ?format, "loading scenario");
    let contents =
        fs::read_to_string(path).with_context(|| format!("read scenario {}", path.display()))?;
    let scenario = parse_scenario(&contents, format)
        .with_context(|| format!("parse scenario {}", path.display()))?;
    debug!(
        processes = scenario.processes.len(),
        resources = scenario.resource_count(),
        "scenario loaded"
    );
    Ok(scenario)
}

/// Parse scenario text in the given format.
pub fn parse_scenario(contents: &str, format: ScenarioFormat) -> Result<Scenario> {
    let value: Value = match format {
        ScenarioFormat::Toml => toml::from_str(contents).context("parse toml")?,
        ScenarioFormat::Json => serde_json::from_str(contents).context("parse json")?,
    };
    validate_schema(&value)?;
    serde_json::from_value(value).context("deserialize scenario")
}

/// Atomically write a scenario to disk (temp file + rename).
pub fn write_scenario(path: &Path, scenario: &Scenario) -> Result<()> {
    let mut buf = match ScenarioFormat::from_path(path)? {
        ScenarioFormat::Toml => toml::to_string_pretty(scenario).context("serialize toml")?,
        ScenarioFormat::Json => {
            serde_json::to_string_pretty(scenario).context("serialize json")?
        }
    };
    buf.push('\n');
    write_atomic(path, &buf)
}

fn validate_schema(instance: &Value) -> Result<()> {
    let schema: Value = serde_json::from_str(SCENARIO_SCHEMA).context("parse scenario schema")?;
    let compiled = validator_for(&schema).map_err(|err| anyhow!("invalid schema: {}", err))?;
    if !compiled.is_valid(instance) {
        let messages = compiled
            .iter_errors(instance)
            .map(|err| err.to_string())
            .collect::<Vec<_>>();
        bail!("scenario schema validation failed: {}", messages.join("; "));
    }
    Ok(())
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp scenario {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace scenario {}", path.display()))?;
    Ok(())
}
