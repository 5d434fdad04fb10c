//! Query parameters for list endpoints.

/// Query string for list and referral endpoints.
///
/// Parameters are sent in the order they were first set. Setting a name
/// again replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    params: Vec<(String, String)>,
}

impl ListQuery {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page number.
    #[must_use]
    pub fn page(self, page: u32) -> Self {
        self.param("page", page)
    }

    /// Sets the page size.
    #[must_use]
    pub fn limit(self, limit: u32) -> Self {
        self.param("limit", limit)
    }

    /// Sets the number of items to skip.
    #[must_use]
    pub fn offset(self, offset: u32) -> Self {
        self.param("offset", offset)
    }

    /// Sets the search string.
    #[must_use]
    pub fn search(self, search: impl Into<String>) -> Self {
        self.param("search", search.into())
    }

    /// Sets an arbitrary parameter.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        let name = name.into();
        let value = value.to_string();
        match self.params.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = value,
            None => self.params.push((name, value)),
        }
        self
    }

    /// Returns the parameters in send order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.params
    }

    /// Returns true if no parameter is set.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub(crate) fn into_pairs(self) -> Vec<(String, String)> {
        self.params
    }
}
