use crate::api::models::{DataDragonChampions, QueueInfo};
use crate::error::{AppError, NormalizeError};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

/// Static id → display name tables, loaded once at startup and shared read-only.
///
/// The champion table is a JSON object of champion key (as a string, the way
/// Data Dragon writes it) to champion name. The queue table is Riot's queue
/// catalog: an array of `{queueId, map, description}` objects. A missing or
/// malformed file is an `AppError::LookupTable`.
#[derive(Debug, Clone, Default)]
pub struct LookupTables {
    champions: HashMap<i64, String>,
    queues: HashMap<i64, String>,
}

impl LookupTables {
    pub fn new(champions: HashMap<i64, String>, queues: HashMap<i64, String>) -> Self {
        LookupTables { champions, queues }
    }

    pub fn load(champion_path: &Path, queue_path: &Path) -> Result<Self, AppError> {
        let champions = parse_champion_table(&read_table(champion_path)?)?;
        let queues = parse_queue_table(&read_table(queue_path)?)?;
        Ok(LookupTables { champions, queues })
    }

    pub fn champion_name(&self, champion_id: i64) -> Result<&str, NormalizeError> {
        self.champions
            .get(&champion_id)
            .map(String::as_str)
            .ok_or(NormalizeError::UnknownLookupKey {
                table: "champion",
                key: champion_id,
            })
    }

    pub fn queue_name(&self, queue_id: i64) -> Result<&str, NormalizeError> {
        self.queues
            .get(&queue_id)
            .map(String::as_str)
            .ok_or(NormalizeError::UnknownLookupKey {
                table: "queue",
                key: queue_id,
            })
    }

    pub fn champion_count(&self) -> usize {
        self.champions.len()
    }

    pub fn queue_count(&self) -> usize {
        self.queues.len()
    }
}

fn read_table(path: &Path) -> Result<String, AppError> {
    fs::read_to_string(path)
        .map_err(|e| AppError::LookupTable(format!("Failed to read {}: {}", path.display(), e)))
}

pub fn parse_champion_table(raw: &str) -> Result<HashMap<i64, String>, AppError> {
    let table: HashMap<String, String> = serde_json::from_str(raw)
        .map_err(|e| AppError::LookupTable(format!("Failed to parse champion table: {}", e)))?;

    table
        .into_iter()
        .map(|(key, name)| {
            key.parse::<i64>()
                .map(|id| (id, name))
                .map_err(|_| AppError::LookupTable(format!("Invalid champion key {:?}", key)))
        })
        .collect()
}

pub fn parse_queue_table(raw: &str) -> Result<HashMap<i64, String>, AppError> {
    let queues: Vec<QueueInfo> = serde_json::from_str(raw)
        .map_err(|e| AppError::LookupTable(format!("Failed to parse queue table: {}", e)))?;

    Ok(queues
        .into_iter()
        .map(|q| {
            let name = q
                .description
                .or(q.map)
                .unwrap_or_else(|| format!("Queue {}", q.queue_id));
            (q.queue_id, name)
        })
        .collect())
}

/// Builds the champion table from a Data Dragon `champion.json` catalog.
/// Sorted by key so the written file diffs cleanly between patches.
pub fn champion_table_from_catalog(catalog: &DataDragonChampions) -> BTreeMap<String, String> {
    catalog
        .data
        .values()
        .map(|champion| (champion.key.clone(), champion.id.clone()))
        .collect()
}
