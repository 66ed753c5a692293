//! Query string for paginated list endpoints.

use store::table::{SortOrder, SortState, TableState, DEFAULT_PAGE_SIZE};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListParams {
    pub page: u32,
    pub limit: u32,
    pub search: String,
    pub sort: Option<SortState>,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            search: String::new(),
            sort: None,
        }
    }
}

impl ListParams {
    pub fn page(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
            ..Self::default()
        }
    }

    /// First `limit` rows, newest first.
    pub fn recent(limit: u32) -> Self {
        Self {
            sort: Some(SortState::new("createdAt", SortOrder::Desc)),
            ..Self::page(1, limit)
        }
    }

    /// Everything a server-side table sends: page, search and sort.
    pub fn from_table(table: &TableState) -> Self {
        Self {
            page: table.page.max(1),
            limit: table.limit.max(1),
            search: table.search.clone(),
            sort: Some(table.sort.clone()),
        }
    }

    /// Same as [`from_table`](Self::from_table) without the sort, for tables
    /// that sort the returned page themselves.
    pub fn from_table_unsorted(table: &TableState) -> Self {
        Self {
            sort: None,
            ..Self::from_table(table)
        }
    }

    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![("page", self.page.to_string()), ("limit", self.limit.to_string())];
        let search = self.search.trim();
        if !search.is_empty() {
            query.push(("search", search.to_string()));
        }
        if let Some(sort) = &self.sort {
            query.push(("sortField", sort.field.clone()));
            query.push(("sortOrder", sort.order.as_str().to_string()));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_only_page_and_limit() {
        assert_eq!(
            ListParams::default().to_query(),
            vec![("page", "1".to_string()), ("limit", "10".to_string())]
        );
    }

    #[test]
    fn test_recent_users_query() {
        assert_eq!(
            ListParams::recent(5).to_query(),
            vec![
                ("page", "1".to_string()),
                ("limit", "5".to_string()),
                ("sortField", "createdAt".to_string()),
                ("sortOrder", "DESC".to_string()),
            ]
        );
    }

    #[test]
    fn test_from_table_trims_search() {
        let mut table = TableState::new("name", 10);
        table.set_page(3);
        table.set_search("  ada ".to_string());
        table.toggle_sort("name");

        let query = ListParams::from_table(&table).to_query();
        assert!(query.contains(&("page", "1".to_string())));
        assert!(query.contains(&("search", "ada".to_string())));
        assert!(query.contains(&("sortOrder", "DESC".to_string())));

        let unsorted = ListParams::from_table_unsorted(&table).to_query();
        assert!(!unsorted.iter().any(|(k, _)| *k == "sortField"));
    }

    #[test]
    fn test_blank_search_is_omitted() {
        let mut table = TableState::default();
        table.set_search("   ".to_string());
        let query = ListParams::from_table(&table).to_query();
        assert!(!query.iter().any(|(k, _)| *k == "search"));
    }
}
