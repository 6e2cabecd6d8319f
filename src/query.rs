//! OData system query options.
//!
//! Each struct serializes to the variable names used in the URL templates
//! (`%24top` is the pct-encoded form of `$top`). Unset options are skipped
//! and never reach the URL.

use serde::Serialize;

fn strings<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}

/// Options for `GET` on a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CollectionQueryParameters {
    /// Include a count of the items (`$count`).
    #[serde(rename = "%24count", skip_serializing_if = "Option::is_none")]
    pub count: Option<bool>,
    /// Related entities to expand (`$expand`).
    #[serde(rename = "%24expand", skip_serializing_if = "Option::is_none")]
    pub expand: Option<Vec<String>>,
    /// Filter expression (`$filter`).
    #[serde(rename = "%24filter", skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Sort order (`$orderby`).
    #[serde(rename = "%24orderby", skip_serializing_if = "Option::is_none")]
    pub orderby: Option<Vec<String>>,
    /// Search phrase (`$search`).
    #[serde(rename = "%24search", skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Properties to return (`$select`).
    #[serde(rename = "%24select", skip_serializing_if = "Option::is_none")]
    pub select: Option<Vec<String>>,
    /// Number of items to skip (`$skip`).
    #[serde(rename = "%24skip", skip_serializing_if = "Option::is_none")]
    pub skip: Option<i32>,
    /// Page size (`$top`).
    #[serde(rename = "%24top", skip_serializing_if = "Option::is_none")]
    pub top: Option<i32>,
}

impl CollectionQueryParameters {
    /// Sets `$count`.
    pub fn count(mut self, count: bool) -> Self {
        self.count = Some(count);
        self
    }

    /// Sets `$expand`.
    pub fn expand<I, S>(mut self, expand: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expand = Some(strings(expand));
        self
    }

    /// Sets `$filter`.
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Sets `$orderby`.
    pub fn orderby<I, S>(mut self, orderby: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.orderby = Some(strings(orderby));
        self
    }

    /// Sets `$search`.
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Sets `$select`.
    pub fn select<I, S>(mut self, select: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select = Some(strings(select));
        self
    }

    /// Sets `$skip`.
    pub fn skip(mut self, skip: i32) -> Self {
        self.skip = Some(skip);
        self
    }

    /// Sets `$top`.
    pub fn top(mut self, top: i32) -> Self {
        self.top = Some(top);
        self
    }
}

/// Options for `GET` on a single entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ItemQueryParameters {
    /// Related entities to expand (`$expand`).
    #[serde(rename = "%24expand", skip_serializing_if = "Option::is_none")]
    pub expand: Option<Vec<String>>,
    /// Properties to return (`$select`).
    #[serde(rename = "%24select", skip_serializing_if = "Option::is_none")]
    pub select: Option<Vec<String>>,
}

impl ItemQueryParameters {
    /// Sets `$expand`.
    pub fn expand<I, S>(mut self, expand: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expand = Some(strings(expand));
        self
    }

    /// Sets `$select`.
    pub fn select<I, S>(mut self, select: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select = Some(strings(select));
        self
    }
}

/// Options for `GET …/$count`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CountQueryParameters {
    /// Filter expression (`$filter`).
    #[serde(rename = "%24filter", skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Search phrase (`$search`).
    #[serde(rename = "%24search", skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl CountQueryParameters {
    /// Sets `$filter`.
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Sets `$search`.
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}
