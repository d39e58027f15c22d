use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

pub const CITY_FIELD: &str = "city";

/// A single venue record. Fields other than `city` are carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Venue {
    pub data: Map<String, Value>,
}

impl Venue {
    pub fn name(&self) -> Option<&str> {
        self.data.get("name").and_then(|v| v.as_str())
    }

    pub fn city(&self) -> Option<&Value> {
        self.data.get(CITY_FIELD)
    }

    pub fn set_city(&mut self, city: &str) {
        self.data
            .insert(CITY_FIELD.to_string(), Value::String(city.to_string()));
    }
}

impl From<Map<String, Value>> for Venue {
    fn from(data: Map<String, Value>) -> Self {
        Self { data }
    }
}

/// The venue file as read from storage: the untouched bytes plus the parsed records.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub raw: Vec<u8>,
    pub venues: Vec<Venue>,
}

#[derive(Debug, Clone)]
pub struct MigrationResult {
    pub venues: Vec<Venue>,
    pub updated: usize,
    pub already_set: usize,
}

#[derive(Debug, Clone)]
pub struct MigrationSummary {
    pub output_path: String,
    pub backup_path: String,
    pub updated: usize,
    pub already_set: usize,
    pub distribution: BTreeMap<String, usize>,
}

impl MigrationSummary {
    pub fn total(&self) -> usize {
        self.updated + self.already_set
    }
}
