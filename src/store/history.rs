use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::flight_url::FlightQuery;
use crate::store::alerts::now_ms;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchRecord {
    pub route_key: String,
    pub route_label: String,
    pub url: String,
    /// Lowest fare the user has logged for this route, if any.
    pub best_price_usd: Option<u32>,
    /// Carrier of the best fare, when the user named one.
    #[serde(default)]
    pub airline: Option<String>,
    pub recorded_at: u64, // Unix timestamp (milliseconds)
    pub count: u32,
}

/// Maximum number of history records to keep
const MAX_HISTORY: usize = 200;

/// Loads search history from the config directory.
/// Returns an empty Vec if the file doesn't exist or is corrupted.
pub fn load_history(config_dir: &Path) -> Vec<SearchRecord> {
    let path = config_dir.join("history.json");

    if !path.exists() {
        return Vec::new();
    }

    match std::fs::read_to_string(&path) {
        Ok(contents) => {
            serde_json::from_str::<Vec<SearchRecord>>(&contents).unwrap_or_else(|_| Vec::new())
        }
        Err(_) => Vec::new(),
    }
}

/// Saves search history to the config directory.
pub fn save_history(config_dir: &Path, history: &[SearchRecord]) {
    let path = config_dir.join("history.json");
    let json = serde_json::to_string_pretty(&history).unwrap_or_else(|_| "[]".to_string());
    std::fs::write(&path, json).ok();
}

/// Records a launched search, updating the existing record for the same
/// route+dates or creating a new one. Evicts the oldest record when the
/// list exceeds MAX_HISTORY.
pub fn record_search(history: &mut Vec<SearchRecord>, query: &FlightQuery) {
    let key = query.route_key();
    let now = now_ms();

    if let Some(record) = history.iter_mut().find(|r| r.route_key == key) {
        record.count += 1;
        record.recorded_at = now;
        record.url = query.url();
    } else {
        history.push(SearchRecord {
            route_key: key,
            route_label: query.route_label(),
            url: query.url(),
            best_price_usd: None,
            airline: None,
            recorded_at: now,
            count: 1,
        });
    }

    while history.len() > MAX_HISTORY {
        if let Some((oldest_idx, _)) = history
            .iter()
            .enumerate()
            .min_by_key(|(_, r)| r.recorded_at)
        {
            history.remove(oldest_idx);
        }
    }
}

/// Logs a fare the user spotted for a route, keeping the lowest seen.
/// The airline travels with the fare: it is stored only when this price
/// becomes the best one. Returns the price now stored, or `None` if the
/// route has no record.
pub fn record_price(
    history: &mut [SearchRecord],
    route_key: &str,
    price_usd: u32,
    airline: Option<&str>,
) -> Option<u32> {
    let record = history.iter_mut().find(|r| r.route_key == route_key)?;
    let is_best = record.best_price_usd.is_none_or(|existing| price_usd <= existing);
    if is_best {
        record.best_price_usd = Some(price_usd);
        record.airline = airline.map(str::to_string);
    }
    record.recorded_at = now_ms();
    record.best_price_usd
}

/// Lowest logged fare for a route, if any.
pub fn best_price_for(history: &[SearchRecord], route_key: &str) -> Option<u32> {
    history
        .iter()
        .find(|r| r.route_key == route_key)
        .and_then(|r| r.best_price_usd)
}

/// Display order: most recently touched first.
pub fn sorted_indices(history: &[SearchRecord]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..history.len()).collect();
    // Ties (same millisecond) resolve to the later-appended record
    indices.sort_by(|&a, &b| (history[b].recorded_at, b).cmp(&(history[a].recorded_at, a)));
    indices
}
