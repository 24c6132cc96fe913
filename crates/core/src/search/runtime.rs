//! Background search worker thread and command infrastructure.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use tracing::{debug, trace, warn};

use crate::catalog::{Catalog, CatalogError, SEARCH_LIMIT, SearchResult};

/// Commands understood by the background search worker.
#[derive(Debug)]
pub enum SearchCommand {
	/// Search the catalog for the provided query.
	Query {
		/// Identifier that lets the controller correlate replies with requests.
		id: u64,
		/// Trimmed query text.
		query: String,
	},
	/// Stop the background worker thread.
	Shutdown,
}

/// Outcome of one catalog request.
#[derive(Debug)]
pub struct SearchReply {
	/// Identifier of the originating [`SearchCommand::Query`].
	pub id: u64,
	/// Entries found, or why the request failed.
	pub outcome: Result<Vec<SearchResult>, CatalogError>,
}

/// Launch the dispatcher thread and return its communication channels.
///
/// The returned counter holds the id of the newest query. Queries that are
/// already superseded when dequeued are skipped; every other query runs on
/// its own thread, so a slow request never holds up a newer one.
pub fn spawn(
	catalog: Arc<dyn Catalog>,
) -> (Sender<SearchCommand>, Receiver<SearchReply>, Arc<AtomicU64>) {
	let (command_tx, command_rx) = mpsc::channel();
	let (reply_tx, reply_rx) = mpsc::channel();
	let latest_request_id = Arc::new(AtomicU64::new(0));
	let thread_latest = Arc::clone(&latest_request_id);

	thread::spawn(move || worker_loop(&catalog, command_rx, &reply_tx, &thread_latest));

	(command_tx, reply_rx, latest_request_id)
}

fn worker_loop(
	catalog: &Arc<dyn Catalog>,
	command_rx: Receiver<SearchCommand>,
	reply_tx: &Sender<SearchReply>,
	latest_request_id: &Arc<AtomicU64>,
) {
	debug!("search worker started");
	while let Ok(command) = command_rx.recv() {
		if !handle_command(catalog, reply_tx, latest_request_id, command) {
			break;
		}
	}
	debug!("search worker stopped");
}

fn handle_command(
	catalog: &Arc<dyn Catalog>,
	reply_tx: &Sender<SearchReply>,
	latest_request_id: &Arc<AtomicU64>,
	command: SearchCommand,
) -> bool {
	match command {
		SearchCommand::Query { id, query } => {
			if is_superseded(id, latest_request_id) {
				trace!(id, "skipping superseded query");
				return true;
			}
			let request_catalog = Arc::clone(catalog);
			let request_tx = reply_tx.clone();
			let request_latest = Arc::clone(latest_request_id);
			let spawned = thread::Builder::new()
				.name(format!("booksy-search-{id}"))
				.spawn(move || {
					run_query(request_catalog.as_ref(), &request_tx, &request_latest, id, &query);
				});
			if let Err(err) = spawned {
				warn!(id, error = %err, "failed to start search thread");
				let outcome = Err(CatalogError::Message(err.to_string()));
				return reply_tx.send(SearchReply { id, outcome }).is_ok();
			}
			true
		}
		SearchCommand::Shutdown => false,
	}
}

fn run_query(
	catalog: &dyn Catalog,
	reply_tx: &Sender<SearchReply>,
	latest_request_id: &AtomicU64,
	id: u64,
	query: &str,
) {
	let outcome = catalog.search(query, SEARCH_LIMIT);
	if is_superseded(id, latest_request_id) {
		trace!(id, "dropping reply for superseded query");
		return;
	}
	// The controller may already be gone.
	let _ = reply_tx.send(SearchReply { id, outcome });
}

fn is_superseded(id: u64, latest_request_id: &AtomicU64) -> bool {
	id < latest_request_id.load(Ordering::Acquire)
}
