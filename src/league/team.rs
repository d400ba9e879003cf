use serde::{Deserialize, Serialize};

/// Read-only roster entry supplied by external team management.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    pub home_venue: Option<String>,
}

impl Team {
    pub fn new(id: u32, name: &str) -> Self {
        Team {
            id,
            name: String::from(name),
            home_venue: None,
        }
    }

    pub fn with_venue(id: u32, name: &str, venue: &str) -> Self {
        Team {
            id,
            name: String::from(name),
            home_venue: Some(String::from(venue)),
        }
    }
}
