// ABOUTME: CLI careers command - list the career catalog

use anyhow::Result;
use orvia::onboarding::CareerKey;
use orvia::presenter::OutputFormat;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct CareerEntry {
    position: usize,
    key: CareerKey,
    label: &'static str,
}

/// Execute the careers command
pub fn execute(format: OutputFormat) -> Result<()> {
    let entries: Vec<CareerEntry> = CareerKey::all()
        .iter()
        .enumerate()
        .map(|(idx, key)| CareerEntry {
            position: idx + 1,
            key: *key,
            label: key.label(),
        })
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Text => {
            println!("{:<4} {:<8} LABEL", "#", "KEY");
            for entry in &entries {
                println!("{:<4} {:<8} {}", entry.position, entry.key.as_str(), entry.label);
            }
        }
    }

    Ok(())
}
