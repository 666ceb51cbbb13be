//! Generic fetch-with-state: `{data, loading, error}` tracking for one call
//! site.
//!
//! # Design
//! `UseApi` owns an operation and the dependency value it was last run
//! with. Rendering with a new dependency value starts a fetch; rendering
//! with the same value does nothing. A fetch is split into `begin` (returns
//! a [`Ticket`]) and `settle` so callers that drive requests on their own
//! schedule can overlap them. Overlapping fetches are not sequenced: the
//! last one to settle wins.
//!
//! `unmount` invalidates every outstanding ticket. Results that arrive for
//! an unmounted hook are dropped instead of written into dead state.

use crate::error::{resolve_message, ApiError};
use crate::http::ApiResponse;

/// Message used when a failed fetch carries no usable text.
pub const FETCH_ERROR_FALLBACK: &str = "An error occurred";

/// Tri-state result of the most recent fetch.
///
/// While `loading` is true neither `data` nor `error` describe the pending
/// request. `data` survives a failed refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> FetchState<T> {
    /// Nothing fetched yet; a fetch is about to start.
    pub fn pending() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
        }
    }

    pub fn is_settled(&self) -> bool {
        !self.loading
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::pending()
    }
}

/// Identifies one started fetch. Tickets from before an unmount are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    mount: u64,
    seq: u64,
}

impl Ticket {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

type Operation<T, D> = Box<dyn Fn(&D) -> Result<ApiResponse<T>, ApiError> + Send + Sync>;

/// Fetch state bound to one operation and its dependency value.
pub struct UseApi<T, D = ()> {
    operation: Operation<T, D>,
    deps: Option<D>,
    state: FetchState<T>,
    mount: u64,
    mounted: bool,
    next_seq: u64,
}

impl<T, D> UseApi<T, D>
where
    D: PartialEq,
{
    pub fn new(
        operation: impl Fn(&D) -> Result<ApiResponse<T>, ApiError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            operation: Box::new(operation),
            deps: None,
            state: FetchState::pending(),
            mount: 0,
            mounted: false,
            next_seq: 0,
        }
    }

    /// Mount on first call, then fetch whenever `deps` changes.
    ///
    /// Returns `true` when a fetch ran.
    pub fn render(&mut self, deps: D) -> bool {
        if self.mounted && self.deps.as_ref() == Some(&deps) {
            return false;
        }
        if !self.mounted {
            self.mounted = true;
            self.mount += 1;
            self.state = FetchState::pending();
        }
        self.deps = Some(deps);
        self.run();
        true
    }

    /// Run the operation again with the current dependencies.
    ///
    /// Returns `false` when the hook is not mounted.
    pub fn refetch(&mut self) -> bool {
        if !self.mounted || self.deps.is_none() {
            return false;
        }
        self.run();
        true
    }

    fn run(&mut self) {
        let Some(ticket) = self.begin() else {
            return;
        };
        let result = match self.deps.as_ref() {
            Some(deps) => (self.operation)(deps),
            None => return,
        };
        self.settle(ticket, result);
    }

    /// Enter the loading state for a new fetch.
    ///
    /// Returns `None` and leaves the state untouched when the hook is not
    /// mounted.
    pub fn begin(&mut self) -> Option<Ticket> {
        if !self.mounted {
            return None;
        }
        self.state.loading = true;
        self.state.error = None;
        let ticket = Ticket {
            mount: self.mount,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        Some(ticket)
    }

    /// Apply the outcome of the fetch identified by `ticket`.
    ///
    /// Returns `false` if the result was dropped because the hook was
    /// unmounted after the fetch began.
    pub fn settle(&mut self, ticket: Ticket, result: Result<ApiResponse<T>, ApiError>) -> bool {
        if !self.mounted || ticket.mount != self.mount {
            tracing::debug!(seq = ticket.seq, "dropping result for inactive fetch");
            return false;
        }
        match result {
            Ok(response) => {
                self.state.data = Some(response.data);
                self.state.error = None;
            }
            Err(err) => {
                tracing::error!(error = %err, "API Hook Error");
                self.state.error = Some(resolve_message(&err, FETCH_ERROR_FALLBACK));
            }
        }
        self.state.loading = false;
        true
    }

    /// Stop accepting results. A later `render` mounts again with fresh
    /// state and refetches.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.deps = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn deps(&self) -> Option<&D> {
        self.deps.as_ref()
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    pub fn data(&self) -> Option<&T> {
        self.state.data.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.state.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }
}

impl<T> UseApi<T, ()> {
    /// `render` for hooks without dependencies.
    pub fn mount(&mut self) -> bool {
        self.render(())
    }
}
