//! Local cache of DNS zones, persisted as TOML.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Result, ShellError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: u32,
    /// Subdomain label; empty for the zone apex.
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub target: String,
    pub ttl: u32,
}

impl Record {
    pub fn fqdn(&self, domain: &str) -> String {
        if self.name.is_empty() {
            domain.to_string()
        } else {
            format!("{}.{domain}", self.name)
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    zones: BTreeMap<String, Vec<Record>>,
}

#[derive(Debug)]
pub struct ZoneStore {
    /// Backing file; `None` keeps everything in memory.
    path: Option<PathBuf>,
    data: StoreFile,
    default_ttl: u32,
}

impl ZoneStore {
    pub fn in_memory(default_ttl: u32) -> Self {
        Self {
            path: None,
            data: StoreFile::default(),
            default_ttl,
        }
    }

    /// Load the cache from `path`. A missing file is an empty cache.
    pub fn open(path: &Path, default_ttl: u32) -> Result<Self> {
        let data: StoreFile = match fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).map_err(|source| ShellError::StoreFormat {
                path: path.to_path_buf(),
                source,
            })?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => StoreFile::default(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self {
            path: Some(path.to_path_buf()),
            data,
            default_ttl,
        })
    }

    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string(&self.data)?;
        fs::write(path, contents)?;
        tracing::debug!(path = %path.display(), "zone store saved");
        Ok(())
    }

    pub fn domain_names(&self) -> impl Iterator<Item = &str> {
        self.data.zones.keys().map(String::as_str)
    }

    pub fn records(&self, domain: &str) -> Option<&[Record]> {
        self.data.zones.get(domain).map(Vec::as_slice)
    }

    /// Record names across every cached zone.
    pub fn record_names(&self) -> impl Iterator<Item = &str> {
        self.data
            .zones
            .values()
            .flatten()
            .map(|record| record.name.as_str())
    }

    /// Add a record, creating the zone if needed. Returns the new record id,
    /// or `None` when the zone already holds the largest possible id.
    pub fn add_record(
        &mut self,
        domain: &str,
        name: &str,
        kind: &str,
        target: &str,
    ) -> Option<u32> {
        let ttl = self.default_ttl;
        let records = self.data.zones.entry(domain.to_string()).or_default();
        let id = records
            .iter()
            .map(|record| record.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)?;
        records.push(Record {
            id,
            name: name.to_string(),
            kind: kind.to_string(),
            target: target.to_string(),
            ttl,
        });
        Some(id)
    }

    pub fn remove_record(&mut self, domain: &str, id: u32) -> Option<Record> {
        let records = self.data.zones.get_mut(domain)?;
        let index = records.iter().position(|record| record.id == id)?;
        Some(records.remove(index))
    }
}
