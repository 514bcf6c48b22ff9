//! Runs passenger fetches off the UI thread.
//!
//! Each request gets its own worker thread; outcomes come back over a
//! channel that the event loop drains between frames. Ordering of the
//! outcomes is whatever order the responses arrive in.

use crate::domain::{FetchError, FetchRequest, PassengerPage, PassengerSource};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome {
    pub request: FetchRequest,
    pub result: Result<PassengerPage, FetchError>,
}

pub struct FetchDispatcher {
    source: Arc<dyn PassengerSource>,
    tx: Sender<FetchOutcome>,
    rx: Receiver<FetchOutcome>,
}

impl FetchDispatcher {
    pub fn new(source: Arc<dyn PassengerSource>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { source, tx, rx }
    }

    pub fn dispatch(&self, request: FetchRequest) {
        info!(seq = request.seq, page = request.page, size = request.rows_per_page, "fetching passengers");
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let result = source.fetch_page(request.page, request.rows_per_page);
            if tx.send(FetchOutcome { request, result }).is_err() {
                debug!(seq = request.seq, "dispatcher dropped before fetch completed");
            }
        });
    }

    /// Outcomes that have arrived since the last call, without blocking.
    pub fn drain(&self) -> Vec<FetchOutcome> {
        self.rx.try_iter().collect()
    }

    /// Waits up to `timeout` for the next outcome.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<FetchOutcome> {
        self.rx.recv_timeout(timeout).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FetchResult, Passenger};
    use std::sync::Mutex;

    /// Answers from a fixed dataset and records every call.
    struct ScriptedSource {
        calls: Mutex<Vec<(usize, usize)>>,
        fail_page: Option<usize>,
    }

    impl PassengerSource for ScriptedSource {
        fn fetch_page(&self, page: usize, rows_per_page: usize) -> FetchResult<PassengerPage> {
            self.calls.lock().unwrap().push((page, rows_per_page));
            if self.fail_page == Some(page) {
                return Err(FetchError::Status(503));
            }
            let items = (0..rows_per_page)
                .map(|i| Passenger {
                    id: format!("{}-{}", page, i),
                    name: format!("Passenger {}", i),
                    trips: i as u64,
                })
                .collect();
            Ok(PassengerPage { items, total_count: 42 })
        }
    }

    fn source(fail_page: Option<usize>) -> Arc<ScriptedSource> {
        Arc::new(ScriptedSource {
            calls: Mutex::new(Vec::new()),
            fail_page,
        })
    }

    #[test]
    fn test_dispatch_delivers_outcome() {
        let source = source(None);
        let dispatcher = FetchDispatcher::new(source.clone());
        let request = FetchRequest { seq: 1, page: 0, rows_per_page: 10 };

        dispatcher.dispatch(request);
        let outcome = dispatcher.recv_timeout(Duration::from_secs(5)).unwrap();

        assert_eq!(outcome.request, request);
        let page = outcome.result.unwrap();
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.total_count, 42);
        assert_eq!(*source.calls.lock().unwrap(), vec![(0, 10)]);
    }

    #[test]
    fn test_failures_are_delivered_not_dropped() {
        let dispatcher = FetchDispatcher::new(source(Some(2)));
        dispatcher.dispatch(FetchRequest { seq: 4, page: 2, rows_per_page: 10 });

        let outcome = dispatcher.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(outcome.result, Err(FetchError::Status(503)));
    }

    #[test]
    fn test_drain_is_empty_when_idle() {
        let dispatcher = FetchDispatcher::new(source(None));
        assert!(dispatcher.drain().is_empty());
    }
}
