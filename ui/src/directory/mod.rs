//! Member directory: paged loading from `GET /users`, ages derived from the
//! date of birth, and checkbox filters over six columns.
//!
//! Rows accumulate page by page. A member is shown when no filter is active,
//! or when any one selected value matches its column.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};

use crate::services::client::{ClientError, DirectoryApi, DirectoryMember, UsersPageResponse};

pub const DIRECTORY_ERROR_MESSAGE: &str = "Could not load members. Please try again.";

/// Columns the sidebar offers checkboxes for, in display order
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum FilterColumn {
    Age,
    Village,
    City,
    Community,
    State,
    Country,
}

impl FilterColumn {
    pub const ALL: [FilterColumn; 6] = [
        FilterColumn::Age,
        FilterColumn::Village,
        FilterColumn::City,
        FilterColumn::Community,
        FilterColumn::State,
        FilterColumn::Country,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FilterColumn::Age => "Age",
            FilterColumn::Village => "Village",
            FilterColumn::City => "City",
            FilterColumn::Community => "Community",
            FilterColumn::State => "State",
            FilterColumn::Country => "Country",
        }
    }

    /// The row's value in this column; blank cells have none
    pub fn value_of(&self, row: &MemberRow) -> Option<String> {
        let text = match self {
            FilterColumn::Age => return row.age.map(|age| age.to_string()),
            FilterColumn::Village => &row.member.village,
            FilterColumn::City => &row.member.city,
            FilterColumn::Community => &row.member.community,
            FilterColumn::State => &row.member.state,
            FilterColumn::Country => &row.member.country,
        };
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }
}

/// A directory member with the age computed on load
#[derive(Clone, PartialEq, Debug)]
pub struct MemberRow {
    pub member: DirectoryMember,
    pub age: Option<u32>,
}

impl MemberRow {
    pub fn new(member: DirectoryMember, today: NaiveDate) -> Self {
        let age = parse_birth_date(&member.dateofbirth).and_then(|birth| age_on(birth, today));
        Self { member, age }
    }
}

/// Accepts `YYYY-MM-DD`, optionally followed by a time part
pub fn parse_birth_date(value: &str) -> Option<NaiveDate> {
    let date = value.trim().get(..10)?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Whole years between `birth` and `today`; `None` for a birth date in the future
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> Option<u32> {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    u32::try_from(age).ok()
}

#[derive(Clone, Debug)]
pub enum DirectoryAction {
    PageLoaded {
        page: u32,
        response: UsersPageResponse,
        today: NaiveDate,
    },
    PageFailed(ClientError),
    ToggleFilter {
        column: FilterColumn,
        value: String,
        checked: bool,
    },
    ResetFilters,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct DirectoryState {
    rows: Vec<MemberRow>,
    /// Next page to request, counted from zero
    next_page: u32,
    total: u64,
    loaded_any: bool,
    pub is_loading: bool,
    pub error: Option<String>,
    filters: BTreeMap<FilterColumn, BTreeSet<String>>,
}

impl DirectoryState {
    /// Reduces the state based on an action in-place (preserves Dioxus Signal reactivity)
    pub fn reduce_in_place(&mut self, action: DirectoryAction) {
        match action {
            DirectoryAction::PageLoaded {
                page,
                response,
                today,
            } => self.finish_load(page, response, today),
            DirectoryAction::PageFailed(error) => {
                warn!("Directory page failed to load: {}", error);
                self.is_loading = false;
                self.error = Some(
                    error
                        .server_message()
                        .unwrap_or(DIRECTORY_ERROR_MESSAGE)
                        .to_string(),
                );
            }
            DirectoryAction::ToggleFilter {
                column,
                value,
                checked,
            } => self.toggle_filter(column, value, checked),
            DirectoryAction::ResetFilters => {
                self.filters.clear();
            }
        }
    }

    /// Claim the loading slot and return the page to fetch.
    ///
    /// Returns `None` while a page is in flight or once every member is loaded.
    pub fn begin_load(&mut self) -> Option<u32> {
        if self.is_loading || !self.has_more() {
            return None;
        }
        self.is_loading = true;
        self.error = None;
        Some(self.next_page)
    }

    pub fn finish_load(&mut self, page: u32, response: UsersPageResponse, today: NaiveDate) {
        self.is_loading = false;
        if page != self.next_page {
            debug!("Ignoring stale directory page {}", page);
            return;
        }
        debug!(
            "Directory page {} brought {} member(s)",
            page,
            response.users.len()
        );
        let fetched = response.users.len();
        self.rows.extend(
            response
                .users
                .into_iter()
                .map(|member| MemberRow::new(member, today)),
        );
        self.loaded_any = true;
        if fetched == 0 {
            // Nothing further on the backend, whatever its total says
            self.total = self.rows.len() as u64;
        } else {
            self.total = response.total;
            self.next_page = page + 1;
        }
    }

    pub fn has_more(&self) -> bool {
        !self.loaded_any || (self.rows.len() as u64) < self.total
    }

    pub fn is_selected(&self, column: FilterColumn, value: &str) -> bool {
        self.filters
            .get(&column)
            .is_some_and(|values| values.contains(value))
    }

    pub fn has_filters(&self) -> bool {
        !self.filters.is_empty()
    }

    fn toggle_filter(&mut self, column: FilterColumn, value: String, checked: bool) {
        if checked {
            self.filters.entry(column).or_default().insert(value);
            return;
        }
        if let Some(values) = self.filters.get_mut(&column) {
            values.remove(&value);
            if values.is_empty() {
                self.filters.remove(&column);
            }
        }
    }

    /// Rows passing the filters, in load order
    pub fn visible(&self) -> Vec<&MemberRow> {
        if self.filters.is_empty() {
            return self.rows.iter().collect();
        }
        self.rows
            .iter()
            .filter(|row| {
                self.filters.iter().any(|(column, values)| {
                    column
                        .value_of(row)
                        .is_some_and(|value| values.contains(&value))
                })
            })
            .collect()
    }

    /// Distinct values per column, in the order they were first seen
    pub fn filter_options(&self) -> Vec<(FilterColumn, Vec<String>)> {
        FilterColumn::ALL
            .iter()
            .map(|column| {
                let mut values: Vec<String> = Vec::new();
                for value in self.rows.iter().filter_map(|row| column.value_of(row)) {
                    if !values.contains(&value) {
                        values.push(value);
                    }
                }
                (*column, values)
            })
            .collect()
    }

    pub fn summary(&self) -> String {
        format!(
            "Displaying {} of {} users.",
            self.visible().len(),
            self.total
        )
    }
}

/// The calendar date ages are measured against
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Fetch one page and turn the reply into the action that applies it
pub async fn fetch_page<A>(api: &A, page: u32, today: NaiveDate) -> DirectoryAction
where
    A: DirectoryApi + ?Sized,
{
    match api.users_page(page).await {
        Ok(response) => DirectoryAction::PageLoaded {
            page,
            response,
            today,
        },
        Err(error) => DirectoryAction::PageFailed(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::client::ClientResult;
    use async_trait::async_trait;
    use std::cell::RefCell;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn member(name: &str, dateofbirth: &str, village: &str, city: &str) -> DirectoryMember {
        DirectoryMember {
            name: name.to_string(),
            dateofbirth: dateofbirth.to_string(),
            gender: "female".to_string(),
            village: village.to_string(),
            city: city.to_string(),
            community: "Riverside".to_string(),
            state: "Lagos".to_string(),
            country: "Nigeria".to_string(),
        }
    }

    fn loaded(members: Vec<DirectoryMember>) -> DirectoryState {
        let mut state = DirectoryState::default();
        let page = state.begin_load().unwrap();
        let total = members.len() as u64;
        state.finish_load(
            page,
            UsersPageResponse {
                users: members,
                total,
            },
            today(),
        );
        state
    }

    async fn load_next(backend: &PagedBackend, state: &mut DirectoryState) -> Option<u32> {
        let page = state.begin_load()?;
        state.reduce_in_place(fetch_page(backend, page, today()).await);
        Some(page)
    }

    struct PagedBackend {
        pages: Vec<ClientResult<UsersPageResponse>>,
        requested: RefCell<Vec<u32>>,
    }

    #[async_trait(?Send)]
    impl DirectoryApi for PagedBackend {
        async fn users_page(&self, page: u32) -> ClientResult<UsersPageResponse> {
            self.requested.borrow_mut().push(page);
            self.pages
                .get(page as usize)
                .cloned()
                .unwrap_or_else(|| Ok(UsersPageResponse::default()))
        }
    }

    #[test]
    fn test_age_counts_whole_years() {
        let birth = NaiveDate::from_ymd_opt(1990, 6, 16).unwrap();
        assert_eq!(age_on(birth, today()), Some(33));
        let birth = NaiveDate::from_ymd_opt(1990, 6, 15).unwrap();
        assert_eq!(age_on(birth, today()), Some(34));
        let birth = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        assert_eq!(age_on(birth, today()), None);
    }

    #[test]
    fn test_birth_date_parsing() {
        assert_eq!(
            parse_birth_date("1988-10-05T00:00:00.000Z"),
            NaiveDate::from_ymd_opt(1988, 10, 5)
        );
        assert_eq!(parse_birth_date("1988-10-05"), NaiveDate::from_ymd_opt(1988, 10, 5));
        assert_eq!(parse_birth_date("05/10/1988"), None);
        assert_eq!(parse_birth_date(""), None);
    }

    #[test]
    fn test_filters_match_any_selected_value() {
        let mut state = loaded(vec![
            member("Ada", "1990-01-01", "Gad", "Ikeja"),
            member("Ben", "1980-01-01", "Dan", "Accra"),
            member("Chi", "2000-01-01", "Levi", "Kumasi"),
        ]);
        assert_eq!(state.visible().len(), 3);

        state.reduce_in_place(DirectoryAction::ToggleFilter {
            column: FilterColumn::Village,
            value: "Gad".to_string(),
            checked: true,
        });
        state.reduce_in_place(DirectoryAction::ToggleFilter {
            column: FilterColumn::City,
            value: "Kumasi".to_string(),
            checked: true,
        });
        let names: Vec<&str> = state.visible().iter().map(|r| r.member.name.as_str()).collect();
        assert_eq!(names, vec!["Ada", "Chi"]);
        assert_eq!(state.summary(), "Displaying 2 of 3 users.");

        state.reduce_in_place(DirectoryAction::ToggleFilter {
            column: FilterColumn::Age,
            value: "44".to_string(),
            checked: true,
        });
        assert_eq!(state.visible().len(), 3);

        state.reduce_in_place(DirectoryAction::ResetFilters);
        assert!(!state.has_filters());
        assert_eq!(state.visible().len(), 3);
    }

    #[test]
    fn test_unchecking_last_value_drops_the_column() {
        let mut state = loaded(vec![member("Ada", "1990-01-01", "Gad", "Ikeja")]);
        state.reduce_in_place(DirectoryAction::ToggleFilter {
            column: FilterColumn::Village,
            value: "Dan".to_string(),
            checked: true,
        });
        assert!(state.visible().is_empty());
        assert!(state.is_selected(FilterColumn::Village, "Dan"));

        state.reduce_in_place(DirectoryAction::ToggleFilter {
            column: FilterColumn::Village,
            value: "Dan".to_string(),
            checked: false,
        });
        assert!(!state.has_filters());
        assert_eq!(state.visible().len(), 1);
    }

    #[test]
    fn test_filter_options_are_distinct_in_first_seen_order() {
        let state = loaded(vec![
            member("Ada", "1990-01-01", "Gad", "Ikeja"),
            member("Ben", "not a date", "Dan", "Ikeja"),
            member("Chi", "1990-02-01", "Gad", " "),
        ]);
        let options = state.filter_options();
        assert_eq!(options.len(), 6);
        assert_eq!(options[0], (FilterColumn::Age, vec!["34".to_string()]));
        assert_eq!(
            options[1],
            (FilterColumn::Village, vec!["Gad".to_string(), "Dan".to_string()])
        );
        assert_eq!(options[2], (FilterColumn::City, vec!["Ikeja".to_string()]));
    }

    #[tokio::test]
    async fn test_pages_append_until_total_reached() {
        let backend = PagedBackend {
            pages: vec![
                Ok(UsersPageResponse {
                    users: vec![
                        member("Ada", "1990-01-01", "Gad", "Ikeja"),
                        member("Ben", "1980-01-01", "Dan", "Accra"),
                    ],
                    total: 3,
                }),
                Ok(UsersPageResponse {
                    users: vec![member("Chi", "2000-01-01", "Levi", "Kumasi")],
                    total: 3,
                }),
            ],
            requested: RefCell::new(Vec::new()),
        };
        let mut state = DirectoryState::default();

        assert_eq!(load_next(&backend, &mut state).await, Some(0));
        assert_eq!(state.visible().len(), 2);
        assert!(state.has_more());

        assert_eq!(load_next(&backend, &mut state).await, Some(1));
        assert_eq!(state.visible().len(), 3);
        assert!(!state.has_more());

        assert_eq!(load_next(&backend, &mut state).await, None);
        assert_eq!(*backend.requested.borrow(), vec![0, 1]);
        assert_eq!(state.visible()[2].age, Some(24));
    }

    #[tokio::test]
    async fn test_failed_page_can_be_retried() {
        let backend = PagedBackend {
            pages: vec![Err(ClientError::Network {
                message: "offline".to_string(),
            })],
            requested: RefCell::new(Vec::new()),
        };
        let mut state = DirectoryState::default();

        assert_eq!(load_next(&backend, &mut state).await, Some(0));
        assert_eq!(state.error.as_deref(), Some(DIRECTORY_ERROR_MESSAGE));
        assert!(!state.is_loading);
        assert!(state.visible().is_empty());
        assert_eq!(state.begin_load(), Some(0));
    }

    #[test]
    fn test_loading_slot_is_exclusive_and_stale_pages_ignored() {
        let mut state = DirectoryState::default();
        assert_eq!(state.begin_load(), Some(0));
        assert_eq!(state.begin_load(), None);

        state.finish_load(
            4,
            UsersPageResponse {
                users: vec![member("Ada", "1990-01-01", "Gad", "Ikeja")],
                total: 1,
            },
            today(),
        );
        assert!(state.visible().is_empty());
        assert_eq!(state.begin_load(), Some(0));
    }

    #[test]
    fn test_empty_page_ends_paging() {
        let mut state = DirectoryState::default();
        let page = state.begin_load().unwrap();
        state.finish_load(
            page,
            UsersPageResponse {
                users: Vec::new(),
                total: 50,
            },
            today(),
        );
        assert!(!state.has_more());
        assert_eq!(state.summary(), "Displaying 0 of 0 users.");
        assert_eq!(state.begin_load(), None);
    }
}
