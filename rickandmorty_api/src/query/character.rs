use url::Url;

use crate::types::{Gender, Status};

use super::{common::QueryCommon, Query};

/// Filters accepted by the `/character` listing.
///
/// Every filter is optional. The API matches `name`, `species` and `type`
/// as case-insensitive substrings and `status`/`gender` exactly.
#[derive(Default, Clone, Debug)]
pub struct CharacterQuery {
    pub common: QueryCommon,
    pub name: Option<String>,
    pub status: Option<Status>,
    pub species: Option<String>,
    pub kind: Option<String>,
    pub gender: Option<Gender>,
}

impl Query for CharacterQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if let Some(name) = &self.name {
            url.query_pairs_mut().append_pair("name", name);
        }
        if let Some(status) = &self.status {
            url.query_pairs_mut()
                .append_pair("status", status.to_string().as_str());
        }
        if let Some(species) = &self.species {
            url.query_pairs_mut().append_pair("species", species);
        }
        if let Some(kind) = &self.kind {
            url.query_pairs_mut().append_pair("type", kind);
        }
        if let Some(gender) = &self.gender {
            url.query_pairs_mut()
                .append_pair("gender", gender.to_string().as_str());
        }
        url
    }
}

impl CharacterQuery {
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_species(mut self, species: &str) -> Self {
        self.species = Some(species.to_string());
        self
    }

    pub fn with_type(mut self, kind: &str) -> Self {
        self.kind = Some(kind.to_string());
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// True when any filter beyond pagination is set. Filtered listings
    /// are served under `/character/` rather than `/character`.
    pub fn has_filters(&self) -> bool {
        self.name.is_some()
            || self.status.is_some()
            || self.species.is_some()
            || self.kind.is_some()
            || self.gender.is_some()
    }
}
