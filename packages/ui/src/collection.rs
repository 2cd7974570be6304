//! Paginated collection state shared by every list page.
//!
//! [`use_collection`] owns the query (page, search, filters), the fetched
//! items, and the pagination echoed by the server. Every filter change resets
//! to page one and triggers a fetch; responses are tagged with a sequence
//! number so a slow response for an old query can never overwrite a newer
//! one. A failed fetch keeps the previous items on screen and surfaces the
//! error message alongside them.

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use api::{ApiClient, ApiError, ListQuery, Page, Pagination};
use dioxus::prelude::*;

use crate::auth::use_api;

type Fetcher<T> = Rc<dyn Fn(ListQuery) -> Pin<Box<dyn Future<Output = Result<Page<T>, ApiError>>>>>;

pub struct Collection<T: 'static> {
    pub items: Signal<Vec<T>>,
    pub pagination: Signal<Pagination>,
    pub query: Signal<ListQuery>,
    pub loading: Signal<bool>,
    pub error: Signal<Option<String>>,
    seq: Signal<u64>,
    fetcher: Signal<Fetcher<T>>,
}

impl<T: 'static> Clone for Collection<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Collection<T> {}

/// Fetch-on-mount list state driven by a single endpoint call.
///
/// ```ignore
/// let notices = use_collection(12, |client, query| async move {
///     client.list_notices(&query).await
/// });
/// ```
pub fn use_collection<T, F, Fut>(limit: u32, fetch: F) -> Collection<T>
where
    T: 'static,
    F: Fn(ApiClient, ListQuery) -> Fut + 'static,
    Fut: Future<Output = Result<Page<T>, ApiError>> + 'static,
{
    let client = use_api();
    let query = use_signal(|| ListQuery::new(limit));
    let items = use_signal(Vec::new);
    let pagination = use_signal(Pagination::default);
    let loading = use_signal(|| true);
    let error = use_signal(|| None);
    let seq = use_signal(|| 0u64);
    let fetcher: Signal<Fetcher<T>> = use_signal(move || {
        Rc::new(move |query: ListQuery| {
            let future = fetch(client.clone(), query);
            Box::pin(future) as Pin<Box<dyn Future<Output = Result<Page<T>, ApiError>>>>
        }) as Fetcher<T>
    });

    let handle = Collection {
        items,
        pagination,
        query,
        loading,
        error,
        seq,
        fetcher,
    };
    use_hook(|| handle.refresh());
    handle
}

impl<T: 'static> Collection<T> {
    /// Re-run the fetch for the current query. Stale responses are dropped:
    /// only the most recently started fetch may write results.
    pub fn refresh(self) {
        let mut this = self;
        let seq = this.seq.peek().wrapping_add(1);
        this.seq.set(seq);
        this.loading.set(true);
        let run = this.fetcher.peek().clone();
        let query = this.query.peek().clone();
        spawn(async move {
            let result = run(query).await;
            if *this.seq.peek() != seq {
                return;
            }
            match result {
                Ok(page) => {
                    this.items.set(page.items);
                    this.pagination.set(page.pagination);
                    this.error.set(None);
                }
                Err(err) => {
                    tracing::warn!("list fetch failed: {err}");
                    this.error.set(Some(err.to_string()));
                }
            }
            this.loading.set(false);
        });
    }

    pub fn set_search(self, value: String) {
        let mut this = self;
        this.query.write().set_search(value);
        this.refresh();
    }

    pub fn set_kind(self, value: Option<String>) {
        let mut this = self;
        this.query.write().set_kind(value);
        this.refresh();
    }

    pub fn set_category(self, value: Option<String>) {
        let mut this = self;
        this.query.write().set_category(value);
        this.refresh();
    }

    pub fn set_status(self, value: Option<String>) {
        let mut this = self;
        this.query.write().set_status(value);
        this.refresh();
    }

    /// Jump back to the first page and refetch. Used after a create so the
    /// newest item is on screen.
    pub fn first_page(self) {
        let mut this = self;
        this.query.write().page = 1;
        this.refresh();
    }

    /// Ignored on the last page.
    pub fn next_page(self) {
        let mut this = self;
        let page = this.query.peek().page;
        if page >= this.pagination.peek().total {
            return;
        }
        this.query.write().page = page + 1;
        this.refresh();
    }

    /// Ignored on the first page.
    pub fn prev_page(self) {
        let mut this = self;
        let page = this.query.peek().page;
        if page <= 1 {
            return;
        }
        this.query.write().page = page - 1;
        this.refresh();
    }
}
