//! Client-side search, sort and pagination.
//!
//! Used where the backend returns the whole list (a student's enrollments, the
//! course catalogue) or ignores sort parameters (the teacher dashboard sorts the
//! returned page itself). Rows expose their sortable fields through [`Sortable`]
//! and their searchable text through [`Searchable`].

use std::cmp::Ordering;

use crate::models::{Course, Enrollment, Page, User};
use crate::table::{SortOrder, SortState, TableState};

/// A comparable cell value.
#[derive(Clone, Debug, PartialEq)]
pub enum SortValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl SortValue {
    fn compare(&self, other: &SortValue) -> Ordering {
        match (self, other) {
            (SortValue::Int(a), SortValue::Int(b)) => a.cmp(b),
            (SortValue::Float(a), SortValue::Float(b)) => a.total_cmp(b),
            (SortValue::Int(a), SortValue::Float(b)) => (*a as f64).total_cmp(b),
            (SortValue::Float(a), SortValue::Int(b)) => a.total_cmp(&(*b as f64)),
            (SortValue::Text(a), SortValue::Text(b)) => {
                a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
            }
            (a, b) => a.as_text().cmp(&b.as_text()),
        }
    }

    fn as_text(&self) -> String {
        match self {
            SortValue::Int(n) => n.to_string(),
            SortValue::Float(n) => n.to_string(),
            SortValue::Text(s) => s.clone(),
        }
    }
}

pub trait Sortable {
    /// Value of `field`, or `None` when the row has no value for it.
    fn sort_value(&self, field: &str) -> Option<SortValue>;
}

pub trait Searchable {
    /// Whether the row matches an already lowercased, trimmed needle.
    fn matches(&self, needle: &str) -> bool;
}

/// Stable sort by `sort`; rows without a value go last in either direction.
pub fn sort_rows<T: Sortable>(rows: &mut [T], sort: &SortState) {
    rows.sort_by(|a, b| {
        match (a.sort_value(&sort.field), b.sort_value(&sort.field)) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => {
                let ord = a.compare(&b);
                match sort.order {
                    SortOrder::Asc => ord,
                    SortOrder::Desc => ord.reverse(),
                }
            }
        }
    });
}

/// Rows matching `search` (case-insensitive); everything for a blank search.
pub fn filter_rows<T: Searchable + Clone>(rows: &[T], search: &str) -> Vec<T> {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return rows.to_vec();
    }
    rows.iter().filter(|row| row.matches(&needle)).cloned().collect()
}

/// Filter, sort and slice `rows` for the table's current page.
pub fn apply<T: Searchable + Sortable + Clone>(rows: &[T], table: &TableState) -> Page<T> {
    let mut matching = filter_rows(rows, &table.search);
    sort_rows(&mut matching, &table.sort);
    let total = matching.len() as u64;
    let items = matching
        .into_iter()
        .skip(table.offset())
        .take(table.limit as usize)
        .collect();
    Page { items, total }
}

fn text(s: &str) -> Option<SortValue> {
    Some(SortValue::Text(s.to_string()))
}

impl Sortable for User {
    fn sort_value(&self, field: &str) -> Option<SortValue> {
        match field {
            "id" => Some(SortValue::Int(self.id)),
            "name" => text(&self.name),
            "email" => text(&self.email),
            "role" => text(self.role.as_str()),
            "specialization" => self.specialization.as_deref().and_then(text),
            "createdAt" => self.created_at.map(|t| SortValue::Int(t.timestamp_millis())),
            _ => None,
        }
    }
}

impl Searchable for User {
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.email.to_lowercase().contains(needle)
            || self.id.to_string().contains(needle)
    }
}

impl Sortable for Course {
    fn sort_value(&self, field: &str) -> Option<SortValue> {
        match field {
            "id" => Some(SortValue::Int(self.id)),
            "title" => text(&self.title),
            "description" => text(&self.description),
            "duration" => Some(SortValue::Int(i64::from(self.duration))),
            "category" => text(&self.category),
            "rating" => Some(SortValue::Float(self.display_rating())),
            "createdAt" => self.created_at.map(|t| SortValue::Int(t.timestamp_millis())),
            _ => None,
        }
    }
}

impl Searchable for Course {
    fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.id.to_string().contains(needle)
    }
}

impl Sortable for Enrollment {
    fn sort_value(&self, field: &str) -> Option<SortValue> {
        match field {
            "id" => Some(SortValue::Int(self.id)),
            "courseId" => Some(SortValue::Int(self.course_id)),
            "studentId" => Some(SortValue::Int(self.student_id)),
            "courseTitle" => text(&self.course_title),
            "studentName" => self.student_name.as_deref().and_then(text),
            "enrollmentDate" => self
                .enrollment_date
                .or(self.created_at)
                .map(|t| SortValue::Int(t.timestamp_millis())),
            "createdAt" => self.created_at.map(|t| SortValue::Int(t.timestamp_millis())),
            _ => None,
        }
    }
}

impl Searchable for Enrollment {
    fn matches(&self, needle: &str) -> bool {
        self.course_title.to_lowercase().contains(needle)
            || self
                .student_name
                .as_deref()
                .is_some_and(|n| n.to_lowercase().contains(needle))
            || self.id.to_string().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: i64, title: &str, rating: Option<f64>) -> Course {
        Course {
            id,
            title: title.to_string(),
            description: String::new(),
            duration: 1,
            category: "dev".to_string(),
            rating,
            created_at: None,
        }
    }

    fn titles(page: &Page<Course>) -> Vec<&str> {
        page.items.iter().map(|c| c.title.as_str()).collect()
    }

    #[test]
    fn test_sort_text_case_insensitive_both_directions() {
        let rows = vec![course(1, "beta", None), course(2, "Alpha", None), course(3, "gamma", None)];
        let mut table = TableState::new("title", 10);
        assert_eq!(titles(&apply(&rows, &table)), vec!["Alpha", "beta", "gamma"]);

        table.toggle_sort("title");
        assert_eq!(titles(&apply(&rows, &table)), vec!["gamma", "beta", "Alpha"]);
    }

    #[test]
    fn test_missing_values_sort_last() {
        let mut enrollments: Vec<Enrollment> = serde_json::from_value(serde_json::json!([
            {"id": 1, "courseId": 1, "courseTitle": "a", "studentName": "Zed"},
            {"id": 2, "courseId": 1, "courseTitle": "b"},
            {"id": 3, "courseId": 1, "courseTitle": "c", "studentName": "Amy"}
        ]))
        .unwrap();
        let mut sort = SortState::new("studentName", SortOrder::Desc);
        sort_rows(&mut enrollments, &sort);
        let ids: Vec<i64> = enrollments.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3, 2]);

        sort.toggle("studentName");
        sort_rows(&mut enrollments, &sort);
        let ids: Vec<i64> = enrollments.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_search_matches_title_and_id() {
        let rows = vec![course(12, "Rust", None), course(3, "Go", None)];
        let mut table = TableState::new("id", 10);
        table.set_search("  RUST ".to_string());
        assert_eq!(titles(&apply(&rows, &table)), vec!["Rust"]);

        table.set_search("12".to_string());
        assert_eq!(apply(&rows, &table).total, 1);
    }

    #[test]
    fn test_pagination_slices_after_filtering() {
        let rows: Vec<Course> = (1..=23).map(|i| course(i, &format!("c{i}"), None)).collect();
        let mut table = TableState::new("id", 10);
        table.set_page(3);
        let page = apply(&rows, &table);
        assert_eq!(page.total, 23);
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.items[0].id, 21);
    }

    #[test]
    fn test_rating_sort_uses_display_rating() {
        let rows = vec![course(4, "a", None), course(1, "b", Some(4.5)), course(9, "c", Some(1.0))];
        let table = TableState::new("rating", 10);
        assert_eq!(titles(&apply(&rows, &table)), vec!["c", "b", "a"]);
    }
}
