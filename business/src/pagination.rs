//! Pagination and sort state of the users table, and its URL form.
//!
//! The URL form is `?page=<activePage>&sort=<field>,<order>`, with a 1-based
//! page. [`PaginationState::reduce`] is the only way the state changes in
//! response to user interaction.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use thiserror::Error;

use crate::query::QueryParams;

pub const ITEMS_PER_PAGE: usize = 20;

/// Numbered buttons shown by the pager at once.
pub const MAX_PAGE_BUTTONS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSortError {
    #[error("unknown sort field `{0}`")]
    UnknownField(String),
    #[error("unknown sort order `{0}`")]
    UnknownOrder(String),
    #[error("sort must look like `<field>,<asc|desc>`, got `{0}`")]
    Malformed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(ParseSortError::UnknownOrder(other.to_owned())),
        }
    }
}

/// Sortable columns of the users table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Id,
    Login,
    Email,
    LangKey,
    CreatedDate,
    LastModifiedBy,
    LastModifiedDate,
}

impl SortField {
    pub const ALL: [Self; 7] = [
        Self::Id,
        Self::Login,
        Self::Email,
        Self::LangKey,
        Self::CreatedDate,
        Self::LastModifiedBy,
        Self::LastModifiedDate,
    ];

    /// Field name as the backend and the URL spell it.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Login => "login",
            Self::Email => "email",
            Self::LangKey => "langKey",
            Self::CreatedDate => "createdDate",
            Self::LastModifiedBy => "lastModifiedBy",
            Self::LastModifiedDate => "lastModifiedDate",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ParseSortError::UnknownField(s.to_owned()))
    }
}

/// Parses `"<field>,<order>"`.
pub fn parse_sort(spec: &str) -> Result<(SortField, SortOrder), ParseSortError> {
    let (field, order) = spec
        .split_once(',')
        .ok_or_else(|| ParseSortError::Malformed(spec.to_owned()))?;
    Ok((field.parse()?, order.parse()?))
}

/// Parses a 1-based page number.
pub fn parse_page(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|page| *page >= 1)
}

/// User interactions that move the pagination state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationEvent {
    /// Column header clicked: sort by that column, flipping the order.
    Sort(SortField),
    /// Pager clicked: jump to this 1-based page.
    Page(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    pub active_page: u32,
    pub items_per_page: usize,
    pub sort: SortField,
    pub order: SortOrder,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(ITEMS_PER_PAGE)
    }
}

impl PaginationState {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            active_page: 1,
            items_per_page,
            sort: SortField::default(),
            order: SortOrder::default(),
        }
    }

    /// Initial state for a location: `page` and `sort` each apply when
    /// present and valid, everything else keeps its default.
    pub fn from_search(search: &str, items_per_page: usize) -> Self {
        let params = QueryParams::parse(search);
        let mut state = Self::new(items_per_page);
        if let Some(page) = params.get("page").and_then(parse_page) {
            state.active_page = page;
        }
        match params.get("sort").map(parse_sort) {
            Some(Ok((sort, order))) => {
                state.sort = sort;
                state.order = order;
            }
            Some(Err(err)) => log::debug!("ignoring sort parameter: {err}"),
            None => {}
        }
        state
    }

    /// State after an external URL change. Both `page` and `sort` must be
    /// present and valid, otherwise the URL is not a pagination URL and
    /// `None` is returned.
    pub fn with_search(&self, search: &str) -> Option<Self> {
        let params = QueryParams::parse(search);
        let page = params.get("page").and_then(parse_page)?;
        let (sort, order) = params.get("sort").map(parse_sort)?.ok()?;
        Some(Self {
            active_page: page,
            sort,
            order,
            ..self.clone()
        })
    }

    pub fn reduce(&self, event: PaginationEvent) -> Self {
        match event {
            PaginationEvent::Sort(field) => Self {
                sort: field,
                order: self.order.flipped(),
                ..self.clone()
            },
            PaginationEvent::Page(page) => Self {
                active_page: page.max(1),
                ..self.clone()
            },
        }
    }

    /// Zero-based page index for the backend.
    pub fn page_index(&self) -> u32 {
        self.active_page.saturating_sub(1)
    }

    /// `"<field>,<order>"`.
    pub fn sort_spec(&self) -> String {
        format!("{},{}", self.sort, self.order)
    }

    /// `?page=<activePage>&sort=<field>,<order>`.
    pub fn to_search(&self) -> String {
        format!("?page={}&sort={}", self.active_page, self.sort_spec())
    }
}

/// `ceil(total_items / items_per_page)`.
pub fn page_count(total_items: u64, items_per_page: usize) -> u32 {
    if items_per_page == 0 {
        return 0;
    }
    let pages = total_items.div_ceil(items_per_page as u64);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Numbered pages the pager shows: at most `max_buttons`, centred on
/// `active_page` where possible and clamped to `1..=total_pages`.
pub fn page_window(active_page: u32, total_pages: u32, max_buttons: u32) -> RangeInclusive<u32> {
    if total_pages == 0 || max_buttons == 0 {
        return 1..=0;
    }
    if total_pages <= max_buttons {
        return 1..=total_pages;
    }
    let active = active_page.clamp(1, total_pages);
    let start = active
        .saturating_sub(max_buttons / 2)
        .max(1)
        .min(total_pages - max_buttons + 1);
    start..=start + max_buttons - 1
}

/// The "Showing a - b of n items." line under the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemCount {
    pub first: u64,
    pub last: u64,
    pub total: u64,
}

impl ItemCount {
    /// A page past the end, or an empty result, counts as `0 - 0`.
    pub fn new(active_page: u32, items_per_page: usize, total: u64) -> Self {
        let per_page = items_per_page as u64;
        let start = u64::from(active_page.max(1) - 1) * per_page;
        if per_page == 0 || start >= total {
            return Self {
                first: 0,
                last: 0,
                total,
            };
        }
        Self {
            first: start + 1,
            last: (start + per_page).min(total),
            total,
        }
    }
}

impl fmt::Display for ItemCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Showing {} - {} of {} items.",
            self.first, self.last, self.total
        )
    }
}
