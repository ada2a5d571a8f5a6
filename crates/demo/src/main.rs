use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::info;

use toolspec_demo::{init_logging, sample};
use toolspec_schema::{CallableDescriptor, translate, translate_all};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    let output = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => describe_file(&path)?,
        None => {
            info!("No descriptor file given, describing get_current_temperature");
            serde_json::to_value(sample::get_current_temperature_schema()?)?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Translates a file holding one descriptor, or an array of them into a
/// `tools` array.
fn describe_file(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let raw: Value = serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in {}", path.display()))?;

    if raw.is_array() {
        let descriptors: Vec<CallableDescriptor> = serde_json::from_value(raw)?;
        info!(count = descriptors.len(), path = %path.display(), "Translating descriptors");
        let tools = translate_all(&descriptors)?;
        Ok(serde_json::to_value(tools)?)
    } else {
        let descriptor: CallableDescriptor = serde_json::from_value(raw)?;
        info!(callable = %descriptor.name, path = %path.display(), "Translating descriptor");
        Ok(serde_json::to_value(translate(&descriptor)?)?)
    }
}
