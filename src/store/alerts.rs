use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

use crate::core::flight_url::FlightQuery;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FareAlert {
    pub origin: String,
    pub destination: String,
    pub depart_date: String,
    pub return_date: Option<String>,
    pub ceiling_usd: u32,
    pub paused: bool,
    pub created_at: u64, // Unix timestamp (milliseconds)
}

impl FareAlert {
    /// Human-readable route line matching `FlightQuery::route_label`.
    pub fn route_label(&self) -> String {
        match &self.return_date {
            Some(ret) => format!(
                "{} → {}  {} / {}",
                self.origin, self.destination, self.depart_date, ret
            ),
            None => format!(
                "{} → {}  {} one-way",
                self.origin, self.destination, self.depart_date
            ),
        }
    }
}

/// Alerts keyed by id, in creation order.
pub type FareAlerts = IndexMap<String, FareAlert>;

/// Derives the deterministic alert id for a query: the first 8 hex chars of
/// the SHA-256 of its route key. Re-adding a watch for the same route+dates
/// therefore updates the existing alert instead of duplicating it.
pub fn alert_id(query: &FlightQuery) -> String {
    let mut hasher = Sha256::new();
    hasher.update(query.route_key().as_bytes());
    let result = hasher.finalize();
    format!(
        "{:02x}{:02x}{:02x}{:02x}",
        result[0], result[1], result[2], result[3]
    )
}

/// Loads fare alerts from the config directory.
/// Returns an empty map if the file doesn't exist.
pub fn load_alerts(config_dir: &Path) -> Result<FareAlerts> {
    let path = config_dir.join("alerts.json");

    if !path.exists() {
        return Ok(FareAlerts::new());
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read alerts from {}", path.display()))?;

    let alerts: FareAlerts = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse alerts from {}", path.display()))?;

    Ok(alerts)
}

/// Saves fare alerts to the config directory.
pub fn save_alerts(config_dir: &Path, alerts: &FareAlerts) -> Result<()> {
    fs::create_dir_all(config_dir).with_context(|| {
        format!(
            "Failed to create config directory: {}",
            config_dir.display()
        )
    })?;

    let path = config_dir.join("alerts.json");

    let content = serde_json::to_string_pretty(alerts).context("Failed to serialize alerts")?;

    fs::write(&path, content)
        .with_context(|| format!("Failed to write alerts to {}", path.display()))?;

    Ok(())
}

/// Inserts a watch for `query`, or refreshes the ceiling of an existing one.
/// Returns the alert id.
pub fn upsert_alert(alerts: &mut FareAlerts, query: &FlightQuery, ceiling_usd: u32) -> String {
    let id = alert_id(query);

    if let Some(existing) = alerts.get_mut(&id) {
        existing.ceiling_usd = ceiling_usd;
        existing.paused = false;
    } else {
        alerts.insert(
            id.clone(),
            FareAlert {
                origin: query.origin().to_string(),
                destination: query.destination().to_string(),
                depart_date: query.depart_date().to_string(),
                return_date: query.return_date().map(str::to_string),
                ceiling_usd,
                paused: false,
                created_at: now_ms(),
            },
        );
    }
    id
}

/// Toggles the paused flag of an alert.
/// Returns `true` if the alert is now paused, `false` if resumed or missing.
pub fn toggle_paused(alerts: &mut FareAlerts, id: &str) -> bool {
    match alerts.get_mut(id) {
        Some(alert) => {
            alert.paused = !alert.paused;
            alert.paused
        }
        None => false,
    }
}

/// Returns the current time in milliseconds since UNIX epoch.
pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
