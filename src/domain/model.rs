use chrono::NaiveDate;
use std::collections::{BTreeSet, HashMap};

/// A dated deliverable imported from one CSV row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Milestone {
    pub name: String,
    pub start: String,
    pub date: NaiveDate,
    /// First name only, empty when the row had no assignee.
    pub assigned: String,
    /// Set once by the resolver.
    pub assigned_id: Option<String>,
    pub completed: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub basecamp_id: String,
    pub first_name: String,
    pub last_name: String,
}

impl Person {
    pub fn display_name(&self, use_only_first_name: bool) -> String {
        if use_only_first_name {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}

/// Display name to Basecamp person id, built once per run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonDirectory {
    ids: HashMap<String, String>,
}

impl PersonDirectory {
    /// Later entries overwrite earlier ones sharing a display name.
    pub fn from_people<I>(people: I, use_only_first_name: bool) -> Self
    where
        I: IntoIterator<Item = Person>,
    {
        let ids = people
            .into_iter()
            .map(|p| (p.display_name(use_only_first_name), p.basecamp_id))
            .collect();
        Self { ids }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.ids.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.ids.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for PersonDirectory {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExtractResult {
    pub milestones: Vec<Milestone>,
    /// Distinct non-blank assignee names, reported but not used for filtering.
    pub assignees: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub parsed: usize,
    pub submitted: usize,
    pub assignees: BTreeSet<String>,
}
