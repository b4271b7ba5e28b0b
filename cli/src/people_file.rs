use std::path::Path;

use anyhow::Context;
use chat_compose::PeopleDirectory;
use chat_compose::Person;
use chat_compose::UserId;
use serde::Deserialize;

/// One entry of a people JSON file.
#[derive(Debug, Deserialize)]
struct PersonRecord {
    user_id: u64,
    email: String,
    full_name: String,
    #[serde(default)]
    status: Option<String>,
}

/// Load a JSON array of people (with optional status text) into a [`PeopleDirectory`].
pub fn load_people(path: &Path) -> anyhow::Result<PeopleDirectory> {
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_people(&contents).with_context(|| format!("parse {}", path.display()))
}

fn parse_people(contents: &str) -> anyhow::Result<PeopleDirectory> {
    let records: Vec<PersonRecord> = serde_json::from_str(contents)?;
    let mut directory = PeopleDirectory::new();
    for record in records {
        let user_id = UserId(record.user_id);
        directory.add_person(Person {
            user_id,
            email: record.email,
            full_name: record.full_name,
        });
        directory.set_status_text(user_id, record.status);
    }
    tracing::debug!(count = directory.len(), "loaded people directory");
    Ok(directory)
}
