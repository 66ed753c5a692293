//! # Generic list table
//!
//! [`GenericTable`] draws a search box, an optional create button, sortable
//! headers, rows, and a pagination bar for any row type implementing
//! [`TableRow`]. It holds no state of its own: the owner passes a
//! [`TableState`] plus the rows for the current page and receives search, sort
//! and page events back.
//!
//! Cells are plain text produced by a function pointer per [`Column`]; per-row
//! buttons go in the `actions` callback, which renders the last column.

use dioxus::prelude::*;
use store::table::{page_window, showing_range, total_pages};
use store::{Course, Enrollment, Page, TableState, User};

use crate::components::{Button, ButtonVariant};

/// A row the table can key.
pub trait TableRow: Clone + PartialEq + 'static {
    fn row_key(&self) -> i64;
}

impl TableRow for User {
    fn row_key(&self) -> i64 {
        self.id
    }
}

impl TableRow for Course {
    fn row_key(&self) -> i64 {
        self.id
    }
}

impl TableRow for Enrollment {
    fn row_key(&self) -> i64 {
        self.id
    }
}

pub struct Column<T> {
    /// Field name reported to `on_sort`; also what the backend sorts on.
    pub key: &'static str,
    pub header: &'static str,
    pub sortable: bool,
    pub cell: fn(&T) -> String,
}

impl<T> Column<T> {
    pub fn new(key: &'static str, header: &'static str, cell: fn(&T) -> String) -> Self {
        Self {
            key,
            header,
            sortable: true,
            cell,
        }
    }

    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            header: self.header,
            sortable: self.sortable,
            cell: self.cell,
        }
    }
}

impl<T> PartialEq for Column<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.header == other.header && self.sortable == other.sortable
    }
}

/// Header suffix for a column: the direction arrow when it is the sort column.
pub fn sort_marker<T>(column: &Column<T>, state: &TableState) -> &'static str {
    if column.sortable && state.sort.is_active(column.key) {
        state.sort.order.arrow()
    } else {
        ""
    }
}

/// Rows, total and loading flag from a page loader's current value.
/// A failed load shows as an empty table.
pub fn page_parts<T: Clone, E>(value: &Option<Result<Page<T>, E>>) -> (Vec<T>, u64, bool) {
    match value {
        Some(Ok(page)) => (page.items.clone(), page.total, false),
        Some(Err(_)) => (Vec::new(), 0, false),
        None => (Vec::new(), 0, true),
    }
}

/// Move `table` back to its last page once a load reports fewer rows than the
/// current page needs, as after deleting the only row on the last page.
pub fn use_page_clamp(table: Signal<TableState>, total: u64, loading: bool) {
    use_effect(use_reactive((&total, &loading), move |(total, loading)| {
        let mut table = table;
        if !loading && table.peek().page_past_end(total) {
            table.write().clamp_page(total);
        }
    }));
}

#[component]
pub fn GenericTable<T: TableRow>(
    columns: Vec<Column<T>>,
    rows: Vec<T>,
    total: u64,
    state: TableState,
    #[props(default)] loading: bool,
    #[props(default = true)] searchable: bool,
    #[props(default = "Search...".to_string())] search_placeholder: String,
    on_search: EventHandler<String>,
    on_sort: EventHandler<String>,
    on_page: Option<EventHandler<u32>>,
    #[props(default = "Add New".to_string())] create_label: String,
    on_create: Option<EventHandler<()>>,
    actions: Option<Callback<T, Element>>,
    #[props(default = "No items found".to_string())] empty_message: String,
) -> Element {
    let span = columns.len() + usize::from(actions.is_some());
    let skeleton_rows = state.limit.max(1);

    rsx! {
        div {
            class: "lms-table",
            div {
                class: "lms-table-toolbar",
                if searchable {
                    input {
                        class: "input lms-table-search",
                        r#type: "search",
                        placeholder: "{search_placeholder}",
                        value: "{state.search}",
                        oninput: move |evt| on_search.call(evt.value()),
                    }
                }
                if let Some(handler) = on_create {
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| handler.call(()),
                        "+ {create_label}"
                    }
                }
            }

            div {
                class: "lms-table-scroll",
                table {
                    thead {
                        tr {
                            for column in columns.iter() {
                                th {
                                    key: "{column.key}",
                                    class: if column.sortable { "sortable" } else { "" },
                                    onclick: {
                                        let key = column.key;
                                        let sortable = column.sortable;
                                        move |_| {
                                            if sortable {
                                                on_sort.call(key.to_string());
                                            }
                                        }
                                    },
                                    "{column.header} "
                                    {sort_marker(column, &state)}
                                }
                            }
                            if actions.is_some() {
                                th { "Actions" }
                            }
                        }
                    }
                    tbody {
                        if loading {
                            for i in 0..skeleton_rows {
                                tr {
                                    key: "skeleton-{i}",
                                    for column in columns.iter() {
                                        td { key: "{column.key}", div { class: "skeleton" } }
                                    }
                                    if actions.is_some() {
                                        td { div { class: "skeleton" } }
                                    }
                                }
                            }
                        } else if rows.is_empty() {
                            tr {
                                td { class: "lms-table-empty", colspan: "{span}", "{empty_message}" }
                            }
                        } else {
                            for row in rows.iter() {
                                tr {
                                    key: "{row.row_key()}",
                                    for column in columns.iter() {
                                        td { key: "{column.key}", {(column.cell)(row)} }
                                    }
                                    if let Some(actions) = actions {
                                        td { class: "lms-table-actions", {actions.call(row.clone())} }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if let Some(on_page) = on_page {
                if total > 0 {
                    Pagination {
                        page: state.page,
                        limit: state.limit,
                        total: total,
                        on_page: on_page,
                    }
                }
            }
        }
    }
}

#[component]
pub fn Pagination(page: u32, limit: u32, total: u64, on_page: EventHandler<u32>) -> Element {
    let last = total_pages(total, limit);
    let (from, to) = showing_range(page, limit, total);

    rsx! {
        div {
            class: "pagination",
            span {
                class: "pagination-summary",
                "Showing {from} to {to} of {total} results"
            }
            div {
                class: "pagination-buttons",
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: page <= 1,
                    onclick: move |_| on_page.call(page.saturating_sub(1).max(1)),
                    "Previous"
                }
                for n in page_window(page, last) {
                    Button {
                        key: "{n}",
                        variant: page_variant(n, page),
                        onclick: move |_| on_page.call(n),
                        "{n}"
                    }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: page >= last,
                    onclick: move |_| on_page.call((page + 1).min(last)),
                    "Next"
                }
            }
        }
    }
}

fn page_variant(n: u32, current: u32) -> ButtonVariant {
    if n == current {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Ghost
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::mount_and_run;
    use std::cell::Cell;
    use std::time::Duration;
    use store::{Role, SortOrder};

    fn name_column() -> Column<User> {
        Column::new("name", "Name", |u: &User| u.name.clone())
    }

    #[test]
    fn test_cell_renders_text() {
        let user = User {
            id: 3,
            name: "Ada".into(),
            email: "ada@example.com".into(),
            role: Role::Student,
            specialization: None,
            created_at: None,
        };
        assert_eq!((name_column().cell)(&user), "Ada");
        assert_eq!(user.row_key(), 3);
    }

    #[test]
    fn test_sort_marker_only_on_active_sortable_column() {
        let mut state = TableState::new("name", 10);
        assert_eq!(sort_marker(&name_column(), &state), SortOrder::Asc.arrow());

        state.toggle_sort("name");
        assert_eq!(sort_marker(&name_column(), &state), SortOrder::Desc.arrow());

        let email = Column::new("email", "Email", |u: &User| u.email.clone());
        assert_eq!(sort_marker(&email, &state), "");

        let unsortable = name_column().unsortable();
        assert_eq!(sort_marker(&unsortable, &state), "");
    }

    #[test]
    fn test_page_parts() {
        let loaded: Option<Result<Page<i64>, String>> = Some(Ok(Page {
            items: vec![1, 2],
            total: 12,
        }));
        assert_eq!(page_parts(&loaded), (vec![1, 2], 12, false));

        let failed: Option<Result<Page<i64>, String>> = Some(Err("boom".into()));
        assert_eq!(page_parts(&failed), (vec![], 0, false));
        assert_eq!(page_parts::<i64, String>(&None), (vec![], 0, true));
    }

    thread_local! {
        static CLAMPED: Cell<Option<Signal<TableState>>> = const { Cell::new(None) };
    }

    /// Third page open, but the list now holds only 15 rows.
    #[component]
    fn ShrunkList() -> Element {
        let table = use_signal(|| {
            let mut table = TableState::new("id", 10);
            table.set_page(3);
            table
        });
        CLAMPED.with(|cell| cell.set(Some(table)));
        use_page_clamp(table, 15, false);
        rsx! { p { "page {table.read().page}" } }
    }

    #[component]
    fn StillLoading() -> Element {
        let table = use_signal(|| {
            let mut table = TableState::new("id", 10);
            table.set_page(3);
            table
        });
        CLAMPED.with(|cell| cell.set(Some(table)));
        use_page_clamp(table, 0, true);
        rsx! { p { "page {table.read().page}" } }
    }

    async fn page_after_render(app: fn() -> Element) -> u32 {
        let mut dom = VirtualDom::new(app);
        mount_and_run(&mut dom, Duration::from_millis(100)).await;
        let table = CLAMPED.with(|cell| cell.get()).expect("table was mounted");
        dom.in_runtime(|| table.peek().page)
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn test_page_clamped_once_total_shrinks() {
        assert_eq!(page_after_render(ShrunkList).await, 2);
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn test_page_kept_while_loading() {
        assert_eq!(page_after_render(StillLoading).await, 3);
    }

    #[test]
    fn test_columns_compare_by_descriptor() {
        assert!(name_column() == name_column().clone());
        assert!(name_column() != name_column().unsortable());
    }
}
