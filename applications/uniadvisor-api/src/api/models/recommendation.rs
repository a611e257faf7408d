use serde::{Deserialize, Serialize};

use crate::catalog::CourseRecord;

pub const RECOMMENDATION_REASON: &str = "most popular course this month";

#[derive(Debug, Default)]
pub struct RecommendationQuery {
    pub faculty: Option<String>,
}

impl RecommendationQuery {
    /// Build from raw query pairs. A repeated `faculty` keeps its first value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let faculty = pairs
            .into_iter()
            .find(|(key, _)| key == "faculty")
            .map(|(_, value)| value);
        Self { faculty }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub name: String,
    pub reason: String,
}

impl From<&CourseRecord> for Recommendation {
    fn from(course: &CourseRecord) -> Self {
        Self {
            id: course.id.clone(),
            name: course.name.clone(),
            reason: RECOMMENDATION_REASON.to_string(),
        }
    }
}
