use serde::{Deserialize, Serialize};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::fixtures::FixtureSet;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i32,
    pub name: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub lastname: String,
    pub course_id: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    pub id: i32,
    pub course_id: i32,
    pub student_id: i32,
    pub grade: f64,
}

/// The three entity collections, seeded once from fixtures and mutated in
/// place for the lifetime of the process. Collections keep insertion order;
/// all lookups are linear scans and a missing id is a normal `None`, never
/// an error.
#[derive(Debug, Default)]
pub struct Store {
    courses: Vec<Course>,
    students: Vec<Student>,
    grades: Vec<Grade>,
}

impl Store {
    pub fn new(fixtures: FixtureSet) -> Self {
        Self {
            courses: fixtures.courses,
            students: fixtures.students,
            grades: fixtures.grades,
        }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn grades(&self) -> &[Grade] {
        &self.grades
    }

    pub fn course(&self, id: i32) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    pub fn student(&self, id: i32) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    pub fn grade(&self, id: i32) -> Option<&Grade> {
        self.grades.iter().find(|g| g.id == id)
    }

    /// Appends a course and returns it. Ids are derived from the current
    /// collection length, so deleting a record and creating a new one reuses
    /// the freed id.
    pub fn create_course(&mut self, name: String, description: String) -> Course {
        let course = Course {
            id: self.courses.len() as i32 + 1,
            name,
            description,
        };
        self.courses.push(course.clone());
        course
    }

    /// Appends a student and returns it. `course_id` is not checked against
    /// the course collection; a dangling reference resolves to `None` later.
    pub fn create_student(&mut self, name: String, lastname: String, course_id: i32) -> Student {
        let student = Student {
            id: self.students.len() as i32 + 1,
            name,
            lastname,
            course_id,
        };
        self.students.push(student.clone());
        student
    }

    /// Appends a grade and returns it. Neither reference nor the numeric
    /// range of `grade` is validated.
    pub fn create_grade(&mut self, course_id: i32, student_id: i32, grade: f64) -> Grade {
        let grade = Grade {
            id: self.grades.len() as i32 + 1,
            course_id,
            student_id,
            grade,
        };
        self.grades.push(grade.clone());
        grade
    }

    /// Removes every course matching `id` and returns the remaining
    /// collection. Students and grades referencing the course are left
    /// untouched; their `course_id` becomes a dangling reference.
    pub fn delete_course(&mut self, id: i32) -> Vec<Course> {
        self.courses.retain(|c| c.id != id);
        self.courses.clone()
    }

    /// Removes the matching student and cascades to every grade assigned to
    /// them, then returns the remaining students.
    pub fn delete_student(&mut self, id: i32) -> Vec<Student> {
        self.students.retain(|s| s.id != id);
        self.grades.retain(|g| g.student_id != id);
        self.students.clone()
    }

    /// Removes the matching grade and returns the remaining collection.
    pub fn delete_grade(&mut self, id: i32) -> Vec<Grade> {
        self.grades.retain(|g| g.id != id);
        self.grades.clone()
    }
}

/// Shared handle to the store. Queries take read locks, mutations take write
/// locks; no lock is held across an await point. A poisoned lock is recovered
/// since every mutation is a single push or retain with no intermediate
/// state.
#[derive(Clone)]
pub struct SharedStore {
    inner: Arc<RwLock<Store>>,
}

impl SharedStore {
    pub fn new(store: Store) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Store> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Store> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
