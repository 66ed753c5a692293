//! Query invalidation bookkeeping.
//!
//! Every list loader belongs to a scope and reads that scope's generation when it
//! runs. Bumping the generation (after a successful mutation) makes every loader
//! bound to the scope run again. Failed mutations leave the generations alone.

use std::collections::HashMap;

/// Well-known query scopes.
pub mod scope {
    pub const STUDENTS: &str = "students";
    pub const TEACHERS: &str = "teachers";
    pub const COURSES: &str = "courses";
    pub const ENROLLMENTS: &str = "enrollments";
    pub const MY_ENROLLMENTS: &str = "myEnrollments";
    pub const ANALYTICS: &str = "analytics";
    pub const RECENT_USERS: &str = "recentUsers";
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryClient {
    generations: HashMap<String, u64>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current generation of `scope`; 0 until first invalidated.
    pub fn generation(&self, scope: &str) -> u64 {
        self.generations.get(scope).copied().unwrap_or(0)
    }

    pub fn invalidate(&mut self, scope: &str) {
        *self.generations.entry(scope.to_string()).or_insert(0) += 1;
    }

    pub fn invalidate_all(&mut self, scopes: &[&str]) {
        for scope in scopes {
            self.invalidate(scope);
        }
    }

    /// Invalidate `scopes` if the mutation succeeded. Returns whether it did.
    pub fn settle<T, E>(&mut self, result: &Result<T, E>, scopes: &[&str]) -> bool {
        if result.is_ok() {
            self.invalidate_all(scopes);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Page;
    use std::cell::{Cell, RefCell};

    /// A list endpoint that counts how often it is fetched.
    struct FakeCourses {
        rows: RefCell<Vec<i64>>,
        fetches: Cell<u32>,
        fail_deletes: bool,
    }

    impl FakeCourses {
        fn new(rows: Vec<i64>) -> Self {
            Self {
                rows: RefCell::new(rows),
                fetches: Cell::new(0),
                fail_deletes: false,
            }
        }

        async fn list(&self) -> Page<i64> {
            self.fetches.set(self.fetches.get() + 1);
            let items = self.rows.borrow().clone();
            Page {
                total: items.len() as u64,
                items,
            }
        }

        async fn delete(&self, id: i64) -> Result<(), String> {
            if self.fail_deletes {
                return Err("Failed to delete course.".to_string());
            }
            self.rows.borrow_mut().retain(|row| *row != id);
            Ok(())
        }
    }

    /// Mirrors a dashboard list: refetches only when its scope generation moved.
    struct CourseList {
        seen_generation: Option<u64>,
        page: Page<i64>,
    }

    impl CourseList {
        async fn sync(&mut self, client: &QueryClient, backend: &FakeCourses) {
            let generation = client.generation(scope::COURSES);
            if self.seen_generation != Some(generation) {
                self.page = backend.list().await;
                self.seen_generation = Some(generation);
            }
        }
    }

    #[tokio::test]
    async fn test_delete_invalidates_and_refetches_list() {
        let backend = FakeCourses::new(vec![1, 2, 3]);
        let mut client = QueryClient::new();
        let mut list = CourseList { seen_generation: None, page: Page::default() };

        list.sync(&client, &backend).await;
        list.sync(&client, &backend).await;
        assert_eq!(backend.fetches.get(), 1);

        let result = backend.delete(2).await;
        assert!(client.settle(&result, &[scope::COURSES, scope::ENROLLMENTS]));
        assert_eq!(client.generation(scope::ENROLLMENTS), 1);

        list.sync(&client, &backend).await;
        assert_eq!(backend.fetches.get(), 2);
        assert_eq!(list.page.items, vec![1, 3]);
        assert_eq!(list.page.total, 2);
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_cached_list() {
        let mut backend = FakeCourses::new(vec![1, 2]);
        backend.fail_deletes = true;
        let mut client = QueryClient::new();
        let mut list = CourseList { seen_generation: None, page: Page::default() };

        list.sync(&client, &backend).await;
        let result = backend.delete(1).await;
        assert!(!client.settle(&result, &[scope::COURSES]));

        list.sync(&client, &backend).await;
        assert_eq!(backend.fetches.get(), 1);
        assert_eq!(client.generation(scope::COURSES), 0);
    }

    #[test]
    fn test_scopes_are_independent() {
        let mut client = QueryClient::new();
        client.invalidate(scope::STUDENTS);
        client.invalidate(scope::STUDENTS);
        assert_eq!(client.generation(scope::STUDENTS), 2);
        assert_eq!(client.generation(scope::TEACHERS), 0);
    }
}
