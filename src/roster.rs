//! Section roster domain types.
//!
//! A roster is the list of students enrolled in one section of a course.
//! Rosters are loaded from a JSON file at startup; a built-in demo roster
//! is used when no file is given.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Identifier for a drop target, e.g. `"CSE101-student42"`.
///
/// The identifier is opaque to this application; the drop backend is the
/// authority on what it refers to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DropTarget(String);

impl DropTarget {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DropTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DropTarget {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// One enrolled student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentEntry {
    pub id: DropTarget,
    pub name: String,
    pub email: String,
}

/// The roster of one section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    pub course: String,
    pub students: Vec<StudentEntry>,
}

impl Roster {
    /// Load a roster from a JSON file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading roster file {}", path.display()))?;
        let roster: Roster = serde_json::from_str(&content)
            .with_context(|| format!("parsing roster file {}", path.display()))?;
        Ok(roster)
    }

    /// Look up a student by drop target.
    #[must_use]
    pub fn find(&self, target: &DropTarget) -> Option<&StudentEntry> {
        self.students.iter().find(|s| &s.id == target)
    }

    /// Remove a student by drop target, returning the removed entry.
    pub fn remove(&mut self, target: &DropTarget) -> Option<StudentEntry> {
        let idx = self.students.iter().position(|s| &s.id == target)?;
        Some(self.students.remove(idx))
    }

    /// Built-in roster used when no file is given on the command line.
    #[must_use]
    pub fn demo() -> Self {
        let student = |n: u32, name: &str| StudentEntry {
            id: DropTarget::new(format!("CSE101-student{n}")),
            name: name.to_string(),
            email: format!("{}@university.edu", name.to_lowercase().replace(' ', ".")),
        };
        Self {
            course: "CSE101".to_string(),
            students: vec![
                student(17, "Ada Osei"),
                student(23, "Lin Zhao"),
                student(42, "Maya Petrov"),
                student(58, "Tom Okafor"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn demo_roster_has_students() {
        let roster = Roster::demo();
        assert_eq!(roster.course, "CSE101");
        assert!(!roster.students.is_empty());
    }

    #[test]
    fn find_and_remove_by_target() {
        let mut roster = Roster::demo();
        let target = DropTarget::from("CSE101-student42");
        assert!(roster.find(&target).is_some());

        let removed = roster.remove(&target).expect("student should exist");
        assert_eq!(removed.id, target);
        assert!(roster.find(&target).is_none());
    }

    #[test]
    fn remove_unknown_target_returns_none() {
        let mut roster = Roster::demo();
        let before = roster.students.len();
        assert!(roster.remove(&DropTarget::from("CSE999-student1")).is_none());
        assert_eq!(roster.students.len(), before);
    }

    #[test]
    fn load_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{
                "course": "CSE101",
                "students": [
                    {{"id": "CSE101-student42", "name": "Maya Petrov", "email": "maya@university.edu"}}
                ]
            }}"#
        )
        .expect("write temp roster");

        let roster = Roster::load_from(file.path()).expect("roster should load");
        assert_eq!(roster.course, "CSE101");
        assert_eq!(roster.students.len(), 1);
        assert_eq!(roster.students[0].id, DropTarget::from("CSE101-student42"));
    }

    #[test]
    fn load_from_missing_file_returns_error() {
        let result = Roster::load_from(Path::new("/nonexistent/roster.json"));
        assert!(result.is_err());
    }
}
