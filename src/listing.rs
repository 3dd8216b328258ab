use sqlx::{postgres::PgRow, FromRow};

use crate::config::PagingConfig;
use crate::db::StoreError;

pub const DEFAULT_ORDER_NAME: &str = "id";
pub const DEFAULT_ORDER_TYPE: &str = "ASC";

/// A table that can be listed page by page.
pub trait Listable: for<'r> FromRow<'r, PgRow> + Send + Unpin {
    const TABLE: &'static str;
    const COLUMNS: &'static str;

    /// Maps an API sort field to the trusted column it orders by.
    fn sort_column(name: &str) -> Option<&'static str>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn parse(raw: &str) -> Result<Self, StoreError> {
        match raw {
            "ASC" => Ok(Self::Asc),
            "DESC" => Ok(Self::Desc),
            other => Err(StoreError::InvalidSortParameter(format!(
                "orderType must be ASC or DESC, got {other:?}"
            ))),
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Builds the list statement for `T`.
///
/// Only identifiers from the allow-list reach the statement text; `$1` is
/// the page size and `$2` the offset.
pub fn list_sql<T: Listable>(order_name: &str, order_type: &str) -> Result<String, StoreError> {
    let column = T::sort_column(order_name).ok_or_else(|| {
        StoreError::InvalidSortParameter(format!(
            "cannot order {} by {order_name:?}",
            T::TABLE
        ))
    })?;
    let direction = SortDirection::parse(order_type)?;

    // id breaks ties so consecutive pages neither repeat nor skip rows
    let tiebreak = if column == "id" { "" } else { ", id ASC" };

    Ok(format!(
        "SELECT {} FROM {} WHERE is_deleted = false ORDER BY {} {}{} LIMIT $1 OFFSET $2",
        T::COLUMNS,
        T::TABLE,
        column,
        direction.as_sql(),
        tiebreak
    ))
}

/// Raw list query string. Every field is optional and kept as text so that
/// malformed numbers degrade to zero instead of rejecting the request.
/// A missing or blank `count` means the configured default page size, not zero.
/// When a key repeats, its first value wins.
#[derive(Debug, Default)]
pub struct ListQuery {
    pub start: Option<String>,
    pub count: Option<String>,
    pub order_name: Option<String>,
    pub order_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub start: i64,
    pub count: i64,
    pub order_name: String,
    pub order_type: String,
}

impl ListQuery {
    /// Collects the known keys from decoded query pairs, ignoring the rest.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut q = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "start" => &mut q.start,
                "count" => &mut q.count,
                "orderName" => &mut q.order_name,
                "orderType" => &mut q.order_type,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        q
    }

    pub fn into_params(self, paging: &PagingConfig) -> ListParams {
        let start = self.start.as_deref().map(non_negative).unwrap_or(0);
        let count = match self.count.as_deref().map(str::trim) {
            None | Some("") => paging.default_page_size,
            Some(raw) => non_negative(raw).min(paging.max_page_size),
        };
        ListParams {
            start,
            count,
            order_name: self
                .order_name
                .unwrap_or_else(|| DEFAULT_ORDER_NAME.to_string()),
            order_type: self
                .order_type
                .unwrap_or_else(|| DEFAULT_ORDER_TYPE.to_string()),
        }
    }
}

fn non_negative(raw: &str) -> i64 {
    raw.trim().parse::<i64>().unwrap_or(0).max(0)
}
