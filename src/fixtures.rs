use include_dir::{include_dir, Dir};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::store::{Course, Grade, Student};

static FIXTURE_DIR: Dir = include_dir!("data");

pub const COURSES_FILE: &str = "courses.json";
pub const STUDENTS_FILE: &str = "students.json";
pub const GRADES_FILE: &str = "grades.json";

/// Errors raised while loading fixture documents, before the server starts
/// accepting requests.
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("fixture document {0} is missing")]
    Missing(&'static str),

    #[error("failed to read fixture document {file}")]
    Io {
        file: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("fixture document {file} is not valid JSON")]
    Json {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// The three seed collections in one place. Loaded once at startup, either
/// from the documents embedded in the binary or from a directory override.
#[derive(Debug, Clone, Default)]
pub struct FixtureSet {
    pub courses: Vec<Course>,
    pub students: Vec<Student>,
    pub grades: Vec<Grade>,
}

impl FixtureSet {
    /// Parses the fixture documents compiled into the binary from `data/`.
    pub fn embedded() -> Result<Self, FixtureError> {
        Ok(Self {
            courses: parse_embedded(COURSES_FILE)?,
            students: parse_embedded(STUDENTS_FILE)?,
            grades: parse_embedded(GRADES_FILE)?,
        })
    }

    /// Loads the same three documents from a directory on disk instead.
    pub fn from_dir(dir: &Path) -> Result<Self, FixtureError> {
        Ok(Self {
            courses: parse_file(dir, COURSES_FILE)?,
            students: parse_file(dir, STUDENTS_FILE)?,
            grades: parse_file(dir, GRADES_FILE)?,
        })
    }
}

fn parse_embedded<T: DeserializeOwned>(file: &'static str) -> Result<Vec<T>, FixtureError> {
    let contents = FIXTURE_DIR
        .get_file(file)
        .ok_or(FixtureError::Missing(file))?
        .contents();
    serde_json::from_slice(contents).map_err(|source| FixtureError::Json { file, source })
}

fn parse_file<T: DeserializeOwned>(dir: &Path, file: &'static str) -> Result<Vec<T>, FixtureError> {
    let text =
        fs::read_to_string(dir.join(file)).map_err(|source| FixtureError::Io { file, source })?;
    serde_json::from_str(&text).map_err(|source| FixtureError::Json { file, source })
}
