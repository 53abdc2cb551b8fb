use serde::{Deserialize, Serialize};

/// Pagination block attached to every listing response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Info {
    /// Total number of records matching the request.
    pub count: i64,
    /// Total number of pages.
    pub pages: i64,
    /// URL of the next page, `None` on the last page.
    pub next: Option<String>,
    /// URL of the previous page, `None` on the first page.
    pub prev: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiResponse<T> {
    pub info: Info,
    pub results: Vec<T>,
}

/// Body of a multi-id lookup. The API answers a single id with a bare
/// object and anything longer with an array.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(val: OneOrMany<T>) -> Self {
        match val {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}
