//! Page aggregation for callback-driven pagination
//!
//! Paginated describe operations push pages into a caller-supplied handler
//! instead of returning them. [`PageCollector`] is the accumulator those
//! handlers feed: it concatenates page payloads in arrival order and checks
//! that nothing arrives after the page flagged as last.

use log::{debug, warn};

use crate::error::AggregationError;

/// Per-page callback handed to paginated client operations.
///
/// Receives the page payload and whether it is the last page; returns `false`
/// to ask the client to stop delivering pages.
pub type PageHandler<'a, P> = &'a mut (dyn FnMut(P, bool) -> bool + Send);

/// Ordered accumulator for one aggregation run.
#[derive(Debug)]
pub struct PageCollector<T> {
    operation: &'static str,
    items: Vec<T>,
    pages: usize,
    last_page_seen: bool,
    violation: Option<AggregationError>,
}

impl<T> PageCollector<T> {
    /// Create an empty collector for the named remote operation.
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            items: Vec::new(),
            pages: 0,
            last_page_seen: false,
            violation: None,
        }
    }

    /// Append one page of items.
    ///
    /// Returns whether the client should keep delivering pages. A page that
    /// arrives after the last page is dropped and recorded as a violation.
    pub fn push_page<I>(&mut self, items: I, last_page: bool) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        self.pages += 1;

        if self.last_page_seen {
            if self.violation.is_none() {
                warn!(
                    "{}: page {} arrived after the last page",
                    self.operation, self.pages
                );
                self.violation = Some(AggregationError::PageAfterLastPage {
                    operation: self.operation,
                    page: self.pages,
                });
            }
            return false;
        }

        let before = self.items.len();
        self.items.extend(items);
        debug!(
            "{}: page {} returned {} items (last: {})",
            self.operation,
            self.pages,
            self.items.len() - before,
            last_page
        );

        self.last_page_seen = last_page;
        true
    }

    /// Number of pages received so far, including rejected ones
    pub fn pages(&self) -> usize {
        self.pages
    }

    /// Number of items accepted so far
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consume the collector, yielding every accepted item in arrival order.
    pub fn finish(self) -> Result<Vec<T>, AggregationError> {
        match self.violation {
            Some(violation) => Err(violation),
            None => Ok(self.items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collector_empty() {
        let collector: PageCollector<u32> = PageCollector::new("DescribeVolumes");

        assert!(collector.is_empty());
        assert_eq!(collector.pages(), 0);
        assert_eq!(collector.finish().unwrap(), Vec::<u32>::new());
    }

    #[test]
    fn test_collector_preserves_page_order() {
        let mut collector = PageCollector::new("DescribeSnapshots");

        assert!(collector.push_page(vec![1, 2, 3, 4], false));
        assert!(collector.push_page(vec![5, 6, 7, 8], true));

        assert_eq!(collector.pages(), 2);
        assert_eq!(collector.finish().unwrap(), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_collector_accepts_empty_pages() {
        let mut collector = PageCollector::new("DescribeSubnets");

        collector.push_page(Vec::new(), false);
        collector.push_page(vec!["a"], false);
        collector.push_page(Vec::new(), true);

        assert_eq!(collector.pages(), 3);
        assert_eq!(collector.finish().unwrap(), vec!["a"]);
    }

    #[test]
    fn test_collector_flattens_nested_groups() {
        let mut collector = PageCollector::new("DescribeInstances");
        let groups = vec![vec!["i-1", "i-2"], vec!["i-3"]];

        collector.push_page(groups.into_iter().flatten(), true);

        assert_eq!(collector.finish().unwrap(), vec!["i-1", "i-2", "i-3"]);
    }

    #[test]
    fn test_page_after_last_page_is_violation() {
        let mut collector = PageCollector::new("DescribeVolumes");

        assert!(collector.push_page(vec![1], true));
        assert!(!collector.push_page(vec![2], false));
        assert!(!collector.push_page(vec![3], true));

        assert_eq!(collector.len(), 1);
        assert_eq!(
            collector.finish().unwrap_err(),
            AggregationError::PageAfterLastPage {
                operation: "DescribeVolumes",
                page: 2,
            }
        );
    }

    #[test]
    fn test_handler_closure_drives_collector() {
        let mut collector = PageCollector::new("DescribeNatGateways");
        {
            let handler: PageHandler<'_, Vec<u8>> =
                &mut |page, last| collector.push_page(page, last);
            handler(vec![1, 2], false);
            handler(vec![3], true);
        }

        assert_eq!(collector.finish().unwrap(), vec![1, 2, 3]);
    }
}
