//! Filter and page state for a collection request.
//!
//! One rule does most of the work here: touching any filter sends you back to
//! page 1, because the old page number was only meaningful under the old
//! filters. Filters are `Option`s; `None` means "all" and never reaches the
//! wire. A search box full of whitespace counts as no search at all, so the
//! server never has to decide what an empty-string match means.

/// Query state a list controller carries between fetches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    pub search: String,
    /// Wire name `type` (lost/found).
    pub kind: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}

impl ListQuery {
    pub fn new(limit: u32) -> Self {
        Self {
            page: 1,
            limit,
            search: String::new(),
            kind: None,
            category: None,
            status: None,
        }
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn set_kind(&mut self, kind: Option<String>) {
        self.kind = kind;
        self.page = 1;
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.category = category;
        self.page = 1;
    }

    pub fn set_status(&mut self, status: Option<String>) {
        self.status = status;
        self.page = 1;
    }

    /// Query pairs for the request, in a stable order.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(kind) = &self.kind {
            params.push(("type", kind.clone()));
        }
        if let Some(category) = &self.category {
            params.push(("category", category.clone()));
        }
        if let Some(status) = &self.status {
            params.push(("status", status.clone()));
        }
        let search = self.search.trim();
        if !search.is_empty() {
            params.push(("search", search.to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param<'a>(params: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_starts_on_page_one() {
        let query = ListQuery::new(12);
        assert_eq!(query.page, 1);
        assert_eq!(param(&query.params(), "page"), Some("1"));
        assert_eq!(param(&query.params(), "limit"), Some("12"));
    }

    #[test]
    fn test_every_filter_change_resets_the_page() {
        let mut query = ListQuery::new(10);
        query.page = 4;
        query.set_search("projector");
        assert_eq!(query.page, 1);

        query.page = 4;
        query.set_category(Some("Urgent".into()));
        assert_eq!(query.page, 1);

        query.page = 4;
        query.set_kind(Some("lost".into()));
        assert_eq!(query.page, 1);

        query.page = 4;
        query.set_status(Some("pending".into()));
        assert_eq!(query.page, 1);
    }

    #[test]
    fn test_empty_search_is_omitted_entirely() {
        let mut query = ListQuery::new(12);
        query.set_search("");
        assert_eq!(param(&query.params(), "search"), None);

        query.set_search("   ");
        assert_eq!(param(&query.params(), "search"), None);

        query.set_search("  charger ");
        assert_eq!(param(&query.params(), "search"), Some("charger"));
    }

    #[test]
    fn test_category_filter_without_search() {
        let mut query = ListQuery::new(12);
        query.set_category(Some("Workshop".into()));

        let params = query.params();
        assert_eq!(param(&params, "category"), Some("Workshop"));
        assert_eq!(param(&params, "search"), None);
    }

    #[test]
    fn test_none_filters_stay_off_the_wire() {
        let query = ListQuery::new(10);
        let params = query.params();
        assert_eq!(param(&params, "type"), None);
        assert_eq!(param(&params, "category"), None);
        assert_eq!(param(&params, "status"), None);
    }
}
