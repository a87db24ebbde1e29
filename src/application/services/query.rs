use crate::application::ports::admin_api::ListRequest;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Pagination plus the resource's filter set. The one invariant that matters:
/// changing any filter resets the page to 1, so a narrower result set can
/// never leave the view stranded on an out-of-range page of stale rows.
#[derive(Debug)]
pub struct PageQuery<F> {
    page: u32,
    limit: u32,
    total_pages: u32,
    filters: F,
}

impl<F: Clone> PageQuery<F> {
    pub fn new(limit: u32, filters: F) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
            total_pages: 1,
            filters,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn filters(&self) -> &F {
        &self.filters
    }

    /// Mutate the filter set and reset pagination to the first page.
    pub fn set_filters(&mut self, mutate: impl FnOnce(&mut F)) {
        mutate(&mut self.filters);
        self.page = 1;
    }

    pub fn set_total_pages(&mut self, pages: u32) {
        self.total_pages = pages.max(1);
    }

    pub fn next_page(&mut self) -> bool {
        if self.page < self.total_pages {
            self.page += 1;
            true
        } else {
            false
        }
    }

    pub fn prev_page(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// The full parameter set for the next fetch.
    pub fn request(&self) -> ListRequest<F> {
        ListRequest {
            page: self.page,
            limit: self.limit,
            filters: self.filters.clone(),
        }
    }
}

/// Collapses a burst of keystrokes into one settled value: each call stores
/// the latest text and waits out the idle delay; only the call that is still
/// the newest when its delay expires yields the value, every earlier call
/// resolves to `None`.
pub struct Debouncer {
    delay: Duration,
    ticket: AtomicU64,
    pending: Mutex<String>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            ticket: AtomicU64::new(0),
            pending: Mutex::new(String::new()),
        }
    }

    pub async fn debounce(&self, value: impl Into<String>) -> Option<String> {
        let ticket = self.ticket.fetch_add(1, Ordering::SeqCst) + 1;
        *self.pending.lock().expect("debouncer poisoned") = value.into();

        tokio::time::sleep(self.delay).await;

        if self.ticket.load(Ordering::SeqCst) == ticket {
            Some(self.pending.lock().expect("debouncer poisoned").clone())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Filters {
        search: String,
        status: Option<&'static str>,
    }

    #[test]
    fn filter_change_resets_page() {
        let mut query = PageQuery::new(10, Filters::default());
        query.set_total_pages(5);
        assert!(query.next_page());
        assert!(query.next_page());
        assert_eq!(query.page(), 3);

        query.set_filters(|f| f.status = Some("published"));
        assert_eq!(query.page(), 1);
        assert_eq!(query.filters().status, Some("published"));
    }

    #[test]
    fn pagination_clamps_at_both_ends() {
        let mut query = PageQuery::new(10, Filters::default());
        assert!(!query.prev_page());
        assert!(!query.next_page());

        query.set_total_pages(2);
        assert!(query.next_page());
        assert!(!query.next_page());
        assert_eq!(query.page(), 2);
    }

    #[test]
    fn request_carries_the_full_filter_set() {
        let mut query = PageQuery::new(25, Filters::default());
        query.set_filters(|f| f.search = "history".to_string());
        let request = query.request();
        assert_eq!(request.page, 1);
        assert_eq!(request.limit, 25);
        assert_eq!(request.filters.search, "history");
    }

    #[tokio::test(start_paused = true)]
    async fn burst_of_keystrokes_settles_to_final_value_once() {
        let debouncer = std::sync::Arc::new(Debouncer::new(Duration::from_millis(500)));

        let mut handles = Vec::new();
        for (offset_ms, text) in [(0u64, "h"), (80, "hi"), (160, "his"), (240, "hist"), (320, "histo")] {
            let debouncer = debouncer.clone();
            handles.push(tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(offset_ms)).await;
                debouncer.debounce(text).await
            }));
        }

        let mut settled = Vec::new();
        for handle in handles {
            if let Some(value) = handle.await.unwrap() {
                settled.push(value);
            }
        }

        assert_eq!(settled, vec!["histo".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn pause_between_keystrokes_fires_twice() {
        let debouncer = std::sync::Arc::new(Debouncer::new(Duration::from_millis(500)));

        let first = {
            let debouncer = debouncer.clone();
            tokio::spawn(async move { debouncer.debounce("draft").await })
        };
        let second = {
            let debouncer = debouncer.clone();
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(700)).await;
                debouncer.debounce("draft two").await
            })
        };

        assert_eq!(first.await.unwrap(), Some("draft".to_string()));
        assert_eq!(second.await.unwrap(), Some("draft two".to_string()));
    }
}
