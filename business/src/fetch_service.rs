use std::fmt::Debug;

use ehttp::{Request, Response, Result};

/// Callback invoked once a fetch finishes, on whatever thread the fetcher uses.
pub type OnDone = Box<dyn FnOnce(Result<Response>) + Send + 'static>;

pub trait FetchService: Send + Sync + Debug {
    fn fetch(&self, request: Request, on_done: OnDone);
}

#[derive(Debug, Default)]
pub struct EhttpFetcher;

impl FetchService for EhttpFetcher {
    fn fetch(&self, request: Request, on_done: OnDone) {
        ehttp::fetch(request, on_done);
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub use mock::{MockFetcher, json_response};

#[cfg(any(test, feature = "test-utils"))]
mod mock {
    use std::sync::Mutex;

    use super::{FetchService, OnDone};
    use ehttp::{Request, Response, Result};

    /// Builds a JSON response the way `ehttp` would hand it back.
    pub fn json_response(status: u16, body: &serde_json::Value) -> Response {
        Response {
            url: String::new(),
            ok: (200..300).contains(&status),
            status,
            status_text: String::new(),
            headers: Default::default(),
            bytes: serde_json::to_vec(body).unwrap_or_default(),
        }
    }

    /// Fetcher that answers synchronously with a canned result, or holds the
    /// callbacks until the test releases them.
    #[derive(Default)]
    pub struct MockFetcher {
        pub response: Option<Result<Response>>,
        hold: bool,
        requests: Mutex<Vec<Request>>,
        pending: Mutex<Vec<OnDone>>,
    }

    impl std::fmt::Debug for MockFetcher {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("MockFetcher")
                .field("response", &self.response.as_ref().map(|r| r.is_ok()))
                .field("hold", &self.hold)
                .finish_non_exhaustive()
        }
    }

    impl MockFetcher {
        pub fn responding(response: Result<Response>) -> Self {
            Self {
                response: Some(response),
                ..Self::default()
            }
        }

        /// A fetcher that never answers until [`MockFetcher::release`] is called.
        pub fn holding() -> Self {
            Self {
                hold: true,
                ..Self::default()
            }
        }

        /// Requests seen so far, oldest first.
        pub fn requests(&self) -> Vec<Request> {
            self.requests
                .lock()
                .map(|requests| requests.clone())
                .unwrap_or_default()
        }

        pub fn pending(&self) -> usize {
            self.pending.lock().map(|p| p.len()).unwrap_or_default()
        }

        /// Answers the held request at `index` (in send order) with `result`.
        pub fn release(&self, index: usize, result: Result<Response>) {
            let on_done = match self.pending.lock() {
                Ok(mut pending) if index < pending.len() => pending.remove(index),
                _ => return,
            };
            on_done(result);
        }
    }

    impl FetchService for MockFetcher {
        fn fetch(&self, request: Request, on_done: OnDone) {
            if let Ok(mut requests) = self.requests.lock() {
                requests.push(request);
            }

            if self.hold {
                if let Ok(mut pending) = self.pending.lock() {
                    pending.push(on_done);
                }
                return;
            }

            match &self.response {
                Some(response) => on_done(response.clone()),
                None => on_done(Err("MockFetcher: no response set".to_owned())),
            }
        }
    }
}
