//! Shared query infrastructure: the [`Query`] trait and [`QueryCommon`] fields.

use url::Url;

/// Trait implemented by all query builders. Provides URL serialization and
/// the shared pagination builder.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Sets the page number (1-indexed).
    fn with_page(mut self, page: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().page = Some(page);
        self
    }
}

/// Fields shared by all query types.
#[derive(Clone, Copy, Default, Debug)]
pub struct QueryCommon {
    /// Page number (1-indexed). `None` lets the API serve its first page
    /// without a `page` parameter on the wire.
    pub page: Option<i64>,
}

impl QueryCommon {
    /// Appends the pagination parameter to the URL when one is set.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(page) = self.page {
            url.query_pairs_mut().append_pair("page", &page.to_string());
        }
        url
    }
}
