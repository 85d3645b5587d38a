//! Fixture-data generator.
//!
//! The generated suite reads this document at runtime; the generator
//! itself never does. Records are typed here so the emitted field names
//! stay in one place.

use std::path::{Path, PathBuf};

use cloudsuite_core::{FileRules, GeneratedFile};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct VmRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub status: &'static str,
    pub region: &'static str,
}

#[derive(Debug, Serialize)]
pub struct StorageRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub size: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Debug, Serialize)]
pub struct UserRecord {
    pub username: &'static str,
    pub role: &'static str,
    #[serde(rename = "accessLevel")]
    pub access_level: &'static str,
}

#[derive(Debug, Serialize)]
struct FixtureDoc {
    vms: Vec<VmRecord>,
    storage: Vec<StorageRecord>,
    users: Vec<UserRecord>,
}

/// The static `data/test-data.json` document.
pub struct FixturesJson;

impl FixturesJson {
    fn document() -> FixtureDoc {
        FixtureDoc {
            vms: vec![
                VmRecord {
                    id: "vm001",
                    name: "prod-vm-1",
                    status: "running",
                    region: "us-east",
                },
                VmRecord {
                    id: "vm002",
                    name: "test-vm-2",
                    status: "stopped",
                    region: "us-west",
                },
            ],
            storage: vec![
                StorageRecord {
                    id: "st001",
                    name: "data-store-1",
                    size: "500GB",
                    kind: "block",
                },
                StorageRecord {
                    id: "st002",
                    name: "backup-store-2",
                    size: "1TB",
                    kind: "object",
                },
            ],
            users: vec![
                UserRecord {
                    username: "admin",
                    role: "admin",
                    access_level: "full",
                },
                UserRecord {
                    username: "user1",
                    role: "user",
                    access_level: "read",
                },
            ],
        }
    }
}

impl GeneratedFile for FixturesJson {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("data").join("test-data.json")
    }

    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    fn render(&self) -> String {
        let mut content = serde_json::to_string_pretty(&Self::document())
            .expect("static fixture document serializes");
        content.push('\n');
        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_contain_the_three_collections() {
        let content = FixturesJson.render();
        let doc: serde_json::Value = serde_json::from_str(&content).unwrap();

        assert_eq!(doc["vms"].as_array().unwrap().len(), 2);
        assert_eq!(doc["storage"].as_array().unwrap().len(), 2);
        assert_eq!(doc["users"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_fixture_field_names_match_the_consumer() {
        let content = FixturesJson.render();
        let doc: serde_json::Value = serde_json::from_str(&content).unwrap();

        assert_eq!(doc["vms"][0]["id"], "vm001");
        assert_eq!(doc["vms"][0]["region"], "us-east");
        assert_eq!(doc["storage"][0]["type"], "block");
        assert_eq!(doc["users"][0]["accessLevel"], "full");
    }

    #[test]
    fn test_fixtures_path() {
        assert_eq!(
            FixturesJson.path(Path::new("")),
            Path::new("data/test-data.json")
        );
    }
}
