use crate::catalog::CourseRecord;

/// Pick the course with the longest name, counted in characters.
///
/// Ties keep the earliest course in list order; `Iterator::max_by_key` would
/// keep the last one.
pub fn select_longest(courses: &[CourseRecord]) -> Option<&CourseRecord> {
    let mut best: Option<(&CourseRecord, usize)> = None;
    for course in courses {
        let len = course.name.chars().count();
        match best {
            Some((_, best_len)) if len <= best_len => {}
            _ => best = Some((course, len)),
        }
    }
    best.map(|(course, _)| course)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_list_has_no_pick() {
        assert_eq!(select_longest(&[]), None);
    }

    #[test]
    fn test_picks_longest_ingegneria() {
        let catalog = Catalog::builtin();
        let pick = select_longest(catalog.courses_for("ingegneria")).unwrap();
        assert_eq!(pick.id, "ing-03");
        assert_eq!(pick.name, "Mobile Applications and Cloud Computing");
    }

    #[test]
    fn test_picks_longest_lettere() {
        // "Letteratura Italiana" is 20 chars, "Filologia Romanza" is 17
        let catalog = Catalog::builtin();
        let pick = select_longest(catalog.courses_for("lettere")).unwrap();
        assert_eq!(pick.id, "let-01");
    }

    #[test]
    fn test_ties_keep_first() {
        let courses = vec![
            CourseRecord::new("a", "Chimica", "X"),
            CourseRecord::new("b", "Diritto", "Y"),
            CourseRecord::new("c", "Storia", "Z"),
        ];
        assert_eq!(select_longest(&courses).unwrap().id, "a");
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        // "Società" has 7 chars but 8 bytes
        let courses = vec![
            CourseRecord::new("a", "Società", "X"),
            CourseRecord::new("b", "Economia", "Y"),
        ];
        assert_eq!(select_longest(&courses).unwrap().id, "b");

        let courses = vec![
            CourseRecord::new("a", "Società", "X"),
            CourseRecord::new("b", "Finanza", "Y"),
        ];
        assert_eq!(select_longest(&courses).unwrap().id, "a");
    }
}
