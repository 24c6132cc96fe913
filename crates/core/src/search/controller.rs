//! The search controller.
//!
//! [`SearchController`] is the only writer of query text, search state, and
//! selection. Requests run on the worker spawned by [`runtime::spawn`]; the
//! owner drains replies with [`SearchController::pump`] (non-blocking) or
//! [`SearchController::wait`] (blocking) and only the newest request may
//! settle the state.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::time::{Duration, Instant};

use tracing::{debug, info, trace, warn};

use super::runtime::{self, SearchCommand, SearchReply};
use super::{SearchState, normalize_query};
use crate::catalog::{Catalog, CatalogError, SearchResult};

/// What happened to a call to [`SearchController::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
	/// The query was blank; nothing changed.
	Rejected,
	/// A request with this id was handed to the worker.
	Issued(u64),
}

impl Drop for SearchController {
	fn drop(&mut self) {
		let _ = self.tx.send(SearchCommand::Shutdown);
	}
}

/// Owns the query, the tagged search state, and the selected result.
pub struct SearchController {
	query: String,
	state: SearchState,
	selection: Option<usize>,
	tx: Sender<SearchCommand>,
	rx: Receiver<SearchReply>,
	latest_request_id: Arc<AtomicU64>,
	next_request_id: u64,
	in_flight: Option<u64>,
}

impl SearchController {
	/// Start a worker for `catalog` and return an idle controller.
	pub fn new(catalog: Arc<dyn Catalog>) -> Self {
		let (tx, rx, latest_request_id) = runtime::spawn(catalog);
		Self {
			query: String::new(),
			state: SearchState::Idle,
			selection: None,
			tx,
			rx,
			latest_request_id,
			next_request_id: 0,
			in_flight: None,
		}
	}

	/// Convenience wrapper around [`SearchController::new`].
	pub fn with_catalog<C: Catalog + 'static>(catalog: C) -> Self {
		Self::new(Arc::new(catalog))
	}

	/// Text of the last accepted query.
	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	/// Current search state.
	#[must_use]
	pub fn state(&self) -> &SearchState {
		&self.state
	}

	/// Whether a request is in flight.
	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.state.is_loading()
	}

	/// Results of the last successful search.
	#[must_use]
	pub fn results(&self) -> &[SearchResult] {
		self.state.results()
	}

	/// Inline error message, if the last search failed.
	#[must_use]
	pub fn error(&self) -> Option<&str> {
		self.state.error()
	}

	/// Whether the last search matched nothing.
	#[must_use]
	pub fn is_empty_result(&self) -> bool {
		self.state.is_empty_result()
	}

	/// The selected result, if any.
	#[must_use]
	pub fn selection(&self) -> Option<&SearchResult> {
		self.results().get(self.selection?)
	}

	/// Position of the selected result within [`SearchController::results`].
	#[must_use]
	pub fn selected_index(&self) -> Option<usize> {
		self.selection
	}

	/// Issue a search for `query`.
	///
	/// Blank queries are rejected without touching any state. Otherwise the
	/// selection is cleared, the state becomes [`SearchState::Loading`], and
	/// any reply to an earlier request will be ignored.
	pub fn submit(&mut self, query: &str) -> Submission {
		let Some(query) = normalize_query(query) else {
			trace!("ignoring blank query");
			return Submission::Rejected;
		};

		self.query = query.to_string();
		self.selection = None;
		self.state = SearchState::Loading;

		let id = self.advance_request_id();
		self.in_flight = Some(id);
		info!(id, query = %self.query, "issuing catalog search");

		let command = SearchCommand::Query {
			id,
			query: self.query.clone(),
		};
		if self.tx.send(command).is_err() {
			self.fail_disconnected();
		}
		Submission::Issued(id)
	}

	/// Reset to an idle, empty view and forget any in-flight request.
	pub fn clear(&mut self) {
		debug!(state = self.state.label(), "clearing search");
		self.query.clear();
		self.state = SearchState::Idle;
		self.selection = None;
		if self.in_flight.take().is_some() {
			self.advance_request_id();
		}
	}

	/// Select the result at `index`. Returns `false` when there is no such
	/// result, leaving the selection unchanged.
	pub fn select_item(&mut self, index: usize) -> bool {
		if index >= self.results().len() {
			return false;
		}
		self.selection = Some(index);
		true
	}

	/// Clear the selection.
	pub fn dismiss_selection(&mut self) {
		self.selection = None;
	}

	/// Acknowledge a search that matched nothing, returning to idle.
	pub fn dismiss_empty(&mut self) {
		if self.state.is_empty_result() {
			self.state = SearchState::Idle;
		}
	}

	/// Apply every reply that has already arrived. Returns whether the state
	/// changed.
	pub fn pump(&mut self) -> bool {
		let mut changed = false;
		loop {
			match self.rx.try_recv() {
				Ok(reply) => changed |= self.apply_reply(reply),
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => {
					changed |= self.fail_disconnected();
					break;
				}
			}
		}
		changed
	}

	/// Block until the newest request settles or `timeout` elapses. Returns
	/// whether nothing is left in flight.
	pub fn wait(&mut self, timeout: Duration) -> bool {
		self.wait_until(Instant::now().checked_add(timeout))
	}

	/// Block until the newest request settles.
	pub fn settle(&mut self) {
		self.wait_until(None);
	}

	fn wait_until(&mut self, deadline: Option<Instant>) -> bool {
		while self.in_flight.is_some() {
			let received = match deadline {
				Some(deadline) => {
					let remaining = deadline.saturating_duration_since(Instant::now());
					self.rx.recv_timeout(remaining)
				}
				None => self.rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
			};
			match received {
				Ok(reply) => {
					self.apply_reply(reply);
				}
				Err(RecvTimeoutError::Timeout) => return false,
				Err(RecvTimeoutError::Disconnected) => {
					self.fail_disconnected();
				}
			}
		}
		true
	}

	/// Settle the state from a reply, ignoring replies to superseded requests.
	fn apply_reply(&mut self, reply: SearchReply) -> bool {
		if self.in_flight != Some(reply.id) {
			debug!(id = reply.id, "discarding stale catalog reply");
			return false;
		}
		self.in_flight = None;

		self.state = match reply.outcome {
			Ok(results) if results.is_empty() => {
				info!(id = reply.id, "catalog search matched nothing");
				SearchState::Empty
			}
			Ok(results) => {
				info!(id = reply.id, count = results.len(), "catalog search succeeded");
				SearchState::Success(results)
			}
			Err(err) => {
				warn!(id = reply.id, error = %err, "catalog search failed");
				SearchState::Error(err.user_message())
			}
		};
		true
	}

	fn fail_disconnected(&mut self) -> bool {
		if self.in_flight.take().is_none() {
			return false;
		}
		let err = CatalogError::Disconnected;
		warn!(error = %err, "search worker unavailable");
		self.state = SearchState::Error(err.user_message());
		true
	}

	fn advance_request_id(&mut self) -> u64 {
		self.next_request_id = self.next_request_id.saturating_add(1);
		self.latest_request_id
			.store(self.next_request_id, Ordering::Release);
		self.next_request_id
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Mutex;
	use std::sync::mpsc;

	use super::*;

	const WAIT: Duration = Duration::from_secs(5);

	fn book(title: &str) -> SearchResult {
		SearchResult::titled(title)
	}

	/// Answers every query with one entry per comma-separated title in the
	/// query, and records what it was asked.
	#[derive(Default)]
	struct EchoCatalog {
		queries: Arc<Mutex<Vec<String>>>,
	}

	impl Catalog for EchoCatalog {
		fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchResult>, CatalogError> {
			assert_eq!(limit, crate::catalog::SEARCH_LIMIT);
			self.queries.lock().unwrap().push(query.to_string());
			if query == "nothing" {
				return Ok(Vec::new());
			}
			Ok(query.split(',').map(book).collect())
		}
	}

	/// Fails every request with the configured error.
	struct FailingCatalog(fn() -> CatalogError);

	impl Catalog for FailingCatalog {
		fn search(&self, _query: &str, _limit: usize) -> Result<Vec<SearchResult>, CatalogError> {
			Err((self.0)())
		}
	}

	/// Holds each request until the test releases it.
	struct GatedCatalog {
		gate: Mutex<mpsc::Receiver<()>>,
	}

	impl Catalog for GatedCatalog {
		fn search(&self, query: &str, _limit: usize) -> Result<Vec<SearchResult>, CatalogError> {
			let _ = self.gate.lock().unwrap().recv();
			Ok(vec![book(query)])
		}
	}

	/// Holds "slow" until the test releases it and answers anything else at once.
	struct SlowFirstCatalog {
		gate: Mutex<mpsc::Receiver<()>>,
	}

	impl Catalog for SlowFirstCatalog {
		fn search(&self, query: &str, _limit: usize) -> Result<Vec<SearchResult>, CatalogError> {
			if query == "slow" {
				let _ = self.gate.lock().unwrap().recv();
			}
			Ok(vec![book(query)])
		}
	}

	fn echo_controller() -> (SearchController, Arc<Mutex<Vec<String>>>) {
		let catalog = EchoCatalog::default();
		let queries = Arc::clone(&catalog.queries);
		(SearchController::with_catalog(catalog), queries)
	}

	#[test]
	fn blank_queries_change_nothing() {
		let (mut controller, queries) = echo_controller();

		assert_eq!(controller.submit(""), Submission::Rejected);
		assert_eq!(controller.submit("   "), Submission::Rejected);
		assert_eq!(controller.state(), &SearchState::Idle);
		assert_eq!(controller.query(), "");

		controller.submit("dune");
		assert!(controller.wait(WAIT));
		assert_eq!(*queries.lock().unwrap(), vec!["dune".to_string()]);
	}

	#[test]
	fn blank_query_keeps_previous_results() {
		let (mut controller, _) = echo_controller();
		controller.submit("a,b");
		assert!(controller.wait(WAIT));

		assert_eq!(controller.submit(" \t "), Submission::Rejected);
		assert_eq!(controller.results().len(), 2);
	}

	#[test]
	fn successful_search_populates_results() {
		let (mut controller, queries) = echo_controller();

		controller.submit("  a,b,c  ");
		assert!(controller.wait(WAIT));

		assert_eq!(controller.results().len(), 3);
		assert!(!controller.is_loading());
		assert_eq!(controller.error(), None);
		assert!(!controller.is_empty_result());
		assert_eq!(controller.query(), "a,b,c");
		assert_eq!(*queries.lock().unwrap(), vec!["a,b,c".to_string()]);
	}

	#[test]
	fn no_matches_is_empty_not_error() {
		let (mut controller, _) = echo_controller();

		controller.submit("nothing");
		assert!(controller.wait(WAIT));

		assert_eq!(controller.state(), &SearchState::Empty);
		assert!(controller.results().is_empty());
		assert_eq!(controller.error(), None);
	}

	#[test]
	fn error_status_reads_network_error() {
		let mut controller =
			SearchController::with_catalog(FailingCatalog(|| CatalogError::Status(500)));

		controller.submit("dune");
		assert!(controller.wait(WAIT));

		assert_eq!(controller.state(), &SearchState::Error("Network error".into()));
		assert!(controller.results().is_empty());
	}

	#[test]
	fn blank_error_message_uses_fallback() {
		let mut controller =
			SearchController::with_catalog(FailingCatalog(|| CatalogError::Message(String::new())));

		controller.submit("dune");
		assert!(controller.wait(WAIT));

		assert_eq!(controller.error(), Some(crate::catalog::FALLBACK_MESSAGE));
	}

	#[test]
	fn loading_spans_submit_to_settle() {
		let (release, gate) = mpsc::channel();
		let mut controller = SearchController::with_catalog(GatedCatalog {
			gate: Mutex::new(gate),
		});

		controller.submit("dune");
		assert!(controller.is_loading());
		assert!(!controller.pump());
		assert!(controller.is_loading());

		release.send(()).unwrap();
		assert!(controller.wait(WAIT));
		assert!(!controller.is_loading());
		assert_eq!(controller.results(), &[book("dune")]);
	}

	#[test]
	fn newer_submission_wins_over_slow_earlier_one() {
		let (release, gate) = mpsc::channel();
		let mut controller = SearchController::with_catalog(GatedCatalog {
			gate: Mutex::new(gate),
		});

		controller.submit("first");
		controller.submit("second");
		release.send(()).unwrap();
		release.send(()).unwrap();
		assert!(controller.wait(WAIT));

		assert_eq!(controller.results(), &[book("second")]);
	}

	#[test]
	fn hung_request_does_not_block_a_newer_one() {
		let (release, gate) = mpsc::channel();
		let mut controller = SearchController::with_catalog(SlowFirstCatalog {
			gate: Mutex::new(gate),
		});

		controller.submit("slow");
		std::thread::sleep(Duration::from_millis(100));
		controller.submit("fast");
		assert!(controller.wait(Duration::from_secs(2)));
		assert_eq!(controller.results(), &[book("fast")]);

		release.send(()).unwrap();
		std::thread::sleep(Duration::from_millis(50));
		controller.pump();
		assert_eq!(controller.results(), &[book("fast")]);
	}

	#[test]
	fn stale_reply_is_discarded() {
		let (mut controller, _) = echo_controller();
		let Submission::Issued(first) = controller.submit("first") else {
			panic!("expected first submission to be issued");
		};
		controller.submit("second");

		let applied = controller.apply_reply(SearchReply {
			id: first,
			outcome: Ok(vec![book("stale")]),
		});
		assert!(!applied);
		assert!(controller.is_loading());
	}

	#[test]
	fn submit_clears_selection() {
		let (mut controller, _) = echo_controller();
		controller.submit("a,b");
		assert!(controller.wait(WAIT));
		assert!(controller.select_item(1));
		assert_eq!(controller.selection(), Some(&book("b")));

		controller.submit("c");
		assert_eq!(controller.selection(), None);
		assert!(controller.wait(WAIT));
		assert_eq!(controller.selection(), None);
	}

	#[test]
	fn select_then_dismiss_clears_selection() {
		let (mut controller, _) = echo_controller();
		controller.submit("a,b");
		assert!(controller.wait(WAIT));

		assert!(controller.select_item(0));
		assert_eq!(controller.selected_index(), Some(0));
		controller.dismiss_selection();
		assert_eq!(controller.selection(), None);
	}

	#[test]
	fn selection_must_come_from_current_results() {
		let (mut controller, _) = echo_controller();
		assert!(!controller.select_item(0));

		controller.submit("a");
		assert!(controller.wait(WAIT));
		assert!(!controller.select_item(1));
		assert_eq!(controller.selection(), None);
	}

	#[test]
	fn clear_resets_everything() {
		let (mut controller, _) = echo_controller();
		controller.submit("a,b");
		assert!(controller.wait(WAIT));
		controller.select_item(0);

		controller.clear();
		assert_eq!(controller.query(), "");
		assert!(controller.results().is_empty());
		assert_eq!(controller.state(), &SearchState::Idle);
		assert_eq!(controller.selection(), None);

		let mut failing =
			SearchController::with_catalog(FailingCatalog(|| CatalogError::Status(502)));
		failing.submit("dune");
		assert!(failing.wait(WAIT));
		failing.clear();
		assert_eq!(failing.state(), &SearchState::Idle);
		assert_eq!(failing.query(), "");
	}

	#[test]
	fn clear_invalidates_in_flight_request() {
		let (release, gate) = mpsc::channel();
		let mut controller = SearchController::with_catalog(GatedCatalog {
			gate: Mutex::new(gate),
		});

		controller.submit("dune");
		controller.clear();
		release.send(()).unwrap();

		assert!(controller.wait(WAIT));
		std::thread::sleep(Duration::from_millis(50));
		controller.pump();
		assert_eq!(controller.state(), &SearchState::Idle);
	}

	#[test]
	fn dismissing_empty_returns_to_idle() {
		let (mut controller, _) = echo_controller();
		controller.submit("nothing");
		assert!(controller.wait(WAIT));

		controller.dismiss_empty();
		assert_eq!(controller.state(), &SearchState::Idle);

		controller.submit("a");
		assert!(controller.wait(WAIT));
		controller.dismiss_empty();
		assert_eq!(controller.results().len(), 1);
	}
}
