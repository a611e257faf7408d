use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub id: String,
    pub name: String,
    pub professor: String,
}

impl CourseRecord {
    pub fn new(id: &str, name: &str, professor: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            professor: professor.to_string(),
        }
    }
}

/// Read-only mapping from lowercase faculty key to its ordered course list.
///
/// Built once before the server starts; list order is preserved because it
/// decides ties in the recommendation.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    faculties: HashMap<String, Vec<CourseRecord>>,
}

impl Catalog {
    /// Build a catalog from configured entries. Keys are lowercased, so
    /// callers must not pass two keys that differ only in case.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<CourseRecord>)>,
    {
        let mut faculties: HashMap<String, Vec<CourseRecord>> = HashMap::new();
        for (faculty, courses) in entries {
            faculties
                .entry(faculty.to_lowercase())
                .or_default()
                .extend(courses);
        }
        Self { faculties }
    }

    /// The catalog shipped with the service.
    pub fn builtin() -> Self {
        Self::from_entries([
            (
                "ingegneria".to_string(),
                vec![
                    CourseRecord::new("ing-01", "Analisi Matematica I", "M. Rossi"),
                    CourseRecord::new("ing-02", "Fisica Generale", "L. Bianchi"),
                    CourseRecord::new(
                        "ing-03",
                        "Mobile Applications and Cloud Computing",
                        "R. Beraldi",
                    ),
                ],
            ),
            (
                "lettere".to_string(),
                vec![
                    CourseRecord::new("let-01", "Letteratura Italiana", "G. Verdi"),
                    CourseRecord::new("let-02", "Filologia Romanza", "A. Neri"),
                ],
            ),
        ])
    }

    /// Courses registered for `faculty`, matched case-insensitively.
    /// Unknown faculties yield an empty slice.
    pub fn courses_for(&self, faculty: &str) -> &[CourseRecord] {
        self.faculties
            .get(&faculty.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn faculty_count(&self) -> usize {
        self.faculties.len()
    }
}
