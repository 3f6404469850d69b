// Debounced search driver

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use log::debug;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::catalog::{CatalogClient, CatalogResult, Movie};

use super::state::{SearchPhase, SearchSnapshot};

/// Pause between the last keystroke and the catalog request.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Debounced, ordering-safe driver for the catalog search box.
///
/// Keystrokes arm a timer instead of hitting the catalog; only text that
/// survives the debounce window untouched becomes a request. Each issued
/// request carries an id from a monotonic counter and a response is only
/// applied while its id is still the most recently issued one, so a slow
/// early response can never clobber the results of a later query. Blank
/// text skips searching entirely and reloads the popular listing, which
/// runs through the same id fence.
///
/// An armed timer does not invalidate a request already on the wire; only
/// issuing the next request does. Observers watch [`SearchSnapshot`]
/// updates through [`QueryController::subscribe`].
///
/// Must be created inside a tokio runtime; timers and fetches run as
/// tasks on it.
pub struct QueryController {
    inner: Arc<Inner>,
}

struct Inner {
    catalog: Arc<dyn CatalogClient>,
    debounce: Duration,
    state_tx: watch::Sender<SearchSnapshot>,
    control: Mutex<Control>,
}

/// Mutable control block. One lock serializes every transition, and every
/// snapshot send happens while holding it, so timer fires and response
/// applies cannot interleave badly.
struct Control {
    /// Generation of the armed debounce timer; bumped to orphan old timers.
    arm_epoch: u64,
    /// The armed timer task, aborted when a keystroke supersedes it.
    armed_timer: Option<JoinHandle<()>>,
    /// Id the next issued request will take.
    next_request_id: u64,
    /// Most recently issued request id, the fence responses check against.
    latest_request_id: u64,
    /// Set once closed; everything after is a no-op.
    closed: bool,
}

impl Control {
    fn issue_request_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        self.latest_request_id = id;
        id
    }

    fn disarm(&mut self) {
        if let Some(timer) = self.armed_timer.take() {
            timer.abort();
        }
        self.arm_epoch += 1;
    }
}

impl QueryController {
    /// Starts the controller and immediately loads the popular listing.
    pub fn new(catalog: Arc<dyn CatalogClient>, debounce: Duration) -> Self {
        let (state_tx, _) = watch::channel(SearchSnapshot::initial());
        let inner = Arc::new(Inner {
            catalog,
            debounce,
            state_tx,
            control: Mutex::new(Control {
                arm_epoch: 0,
                armed_timer: None,
                next_request_id: 1,
                latest_request_id: 0,
                closed: false,
            }),
        });

        let mut control = inner.lock_control();
        Inner::start_popular(&inner, &mut control);
        drop(control);

        Self { inner }
    }

    /// Reflects a keystroke: replaces the query text and re-arms the
    /// debounce timer. Blank text falls straight back to the popular
    /// listing with no debounce.
    pub fn set_query(&self, text: &str) {
        let inner = &self.inner;
        let mut control = inner.lock_control();
        if control.closed {
            return;
        }
        control.disarm();

        if text.trim().is_empty() {
            inner.state_tx.send_modify(|snapshot| {
                snapshot.query.clear();
                snapshot.phase = SearchPhase::Idle;
                snapshot.error = None;
            });
            Inner::start_popular(inner, &mut control);
            return;
        }

        let query = text.to_string();
        inner.state_tx.send_modify(|snapshot| {
            snapshot.query = query.clone();
            snapshot.phase = SearchPhase::Pending;
            snapshot.loading = true;
            snapshot.error = None;
        });

        let epoch = control.arm_epoch;
        let task_inner = Arc::clone(inner);
        control.armed_timer = Some(tokio::spawn(Inner::fire_after_debounce(
            task_inner, epoch, query,
        )));
    }

    /// Current state, for callers that do not want a subscription.
    pub fn snapshot(&self) -> SearchSnapshot {
        self.inner.state_tx.borrow().clone()
    }

    /// Watch handle over every snapshot change.
    pub fn subscribe(&self) -> watch::Receiver<SearchSnapshot> {
        self.inner.state_tx.subscribe()
    }

    /// Shuts the controller down: cancels any armed timer and makes all
    /// later calls and late responses no-ops. Idempotent.
    pub fn close(&self) {
        let mut control = self.inner.lock_control();
        if control.closed {
            return;
        }
        control.closed = true;
        control.disarm();
    }
}

impl Drop for QueryController {
    fn drop(&mut self) {
        self.close();
    }
}

impl Inner {
    fn lock_control(&self) -> MutexGuard<'_, Control> {
        self.control.lock().expect("search control lock poisoned")
    }

    /// Issues a popular-listing request under the caller's lock and
    /// resolves it on a task. Fenced like any search request.
    fn start_popular(inner: &Arc<Inner>, control: &mut Control) {
        let request_id = control.issue_request_id();
        inner.state_tx.send_modify(|snapshot| {
            snapshot.loading = true;
        });

        let inner = Arc::clone(inner);
        tokio::spawn(async move {
            let result = inner.catalog.popular_movies(1).await;
            inner.apply_popular(request_id, result);
        });
    }

    /// Body of the armed timer task: waits out the debounce, then issues
    /// the request if no later keystroke re-armed in the meantime.
    async fn fire_after_debounce(inner: Arc<Inner>, epoch: u64, query: String) {
        tokio::time::sleep(inner.debounce).await;

        let request_id = {
            let mut control = inner.lock_control();
            if control.closed || control.arm_epoch != epoch {
                return;
            }
            control.armed_timer = None;
            let id = control.issue_request_id();
            inner.state_tx.send_modify(|snapshot| {
                snapshot.phase = SearchPhase::InFlight;
                snapshot.loading = true;
            });
            id
        };

        debug!("search request {} issued for {:?}", request_id, query);
        let result = inner.catalog.search_movies(&query).await;
        inner.apply_search(request_id, result);
    }

    fn apply_search(&self, request_id: u64, result: CatalogResult<Vec<Movie>>) {
        let _control = match self.passing_fence(request_id) {
            Some(guard) => guard,
            None => return,
        };
        self.state_tx.send_modify(|snapshot| {
            snapshot.phase = SearchPhase::Settled;
            snapshot.loading = false;
            match result {
                Ok(movies) => {
                    snapshot.movies = movies;
                    snapshot.error = None;
                }
                Err(err) => {
                    snapshot.movies = Vec::new();
                    snapshot.error = Some(err);
                }
            }
        });
    }

    fn apply_popular(&self, request_id: u64, result: CatalogResult<Vec<Movie>>) {
        let _control = match self.passing_fence(request_id) {
            Some(guard) => guard,
            None => return,
        };
        self.state_tx.send_modify(|snapshot| {
            snapshot.loading = false;
            match result {
                Ok(movies) => {
                    snapshot.movies = movies;
                    snapshot.error = None;
                }
                // Keep whatever was on screen; just record the failure.
                Err(err) => snapshot.error = Some(err),
            }
        });
    }

    /// Takes the control lock and keeps it only if `request_id` is still
    /// the latest issued request on a live controller. The returned guard
    /// is held across the snapshot send so applies stay serialized.
    fn passing_fence(&self, request_id: u64) -> Option<MutexGuard<'_, Control>> {
        let control = self.lock_control();
        if control.closed || control.latest_request_id != request_id {
            debug!("discarding stale response for request {}", request_id);
            return None;
        }
        Some(control)
    }
}
