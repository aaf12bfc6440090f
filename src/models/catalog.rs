//! Course catalog model.
//!
//! The catalog is the full set of available courses, loaded once from a
//! JSON document and never mutated afterwards. It answers id lookups and
//! produces the grouped/sorted views the presentation layer renders.
//!
//! # Document Format
//! A JSON object with a `courses` array of course records. Unreachable or
//! malformed documents yield a [`CatalogError`]; the session layer maps
//! that to a degraded empty-catalog state rather than a crash.
//!
//! # Ordering
//! Departments iterate in ascending lexicographic order; courses within a
//! department are ordered ascending by course code (byte-wise `str`
//! comparison).

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::Course;

/// Failure to obtain a usable catalog.
///
/// Terminal for the session: there is no retry, the caller starts over.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog document could not be read.
    #[error("failed to read catalog document: {0}")]
    Io(#[from] std::io::Error),
    /// The catalog document could not be parsed.
    #[error("failed to parse catalog document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Wire shape of the catalog document.
#[derive(Deserialize)]
struct CatalogDocument {
    courses: Vec<Course>,
}

/// The set of available courses, in document order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    /// Creates a catalog from an already-loaded course list.
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    /// Creates an empty catalog (the degraded state).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses a catalog from a JSON document string.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        Ok(Self::new(doc.courses))
    }

    /// Parses a catalog from a JSON document reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_json::from_reader(reader)?;
        Ok(Self::new(doc.courses))
    }

    /// Loads a catalog from a JSON file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Finds a course by id.
    pub fn find(&self, course_id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == course_id)
    }

    /// All courses in document order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Number of courses.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog holds no courses.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Groups courses by department for display.
    ///
    /// Departments come out in ascending lexicographic order; within a
    /// department, courses are sorted ascending by course code.
    pub fn by_department(&self) -> Vec<(&str, Vec<&Course>)> {
        let mut grouped: BTreeMap<&str, Vec<&Course>> = BTreeMap::new();
        for course in &self.courses {
            grouped.entry(course.department.as_str()).or_default().push(course);
        }
        grouped
            .into_iter()
            .map(|(dept, mut courses)| {
                courses.sort_by(|a, b| a.course_code.cmp(&b.course_code));
                (dept, courses)
            })
            .collect()
    }
}
