use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, warn};

use super::{Catalog, CatalogError, SearchResult, parse_search_response};

/// Default host of the Open Library search API.
pub const DEFAULT_BASE_URL: &str = "https://openlibrary.org";
/// Default host of the Open Library covers service.
pub const DEFAULT_COVERS_URL: &str = "https://covers.openlibrary.org";

/// Where the catalog and its cover images live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEndpoints {
	/// Base URL of the search API.
	pub base_url: String,
	/// Base URL of the covers service.
	pub covers_url: String,
}

impl Default for CatalogEndpoints {
	fn default() -> Self {
		Self {
			base_url: DEFAULT_BASE_URL.to_string(),
			covers_url: DEFAULT_COVERS_URL.to_string(),
		}
	}
}

/// Blocking client for the Open Library search endpoint.
#[derive(Debug, Clone)]
pub struct OpenLibrary {
	client: Client,
	endpoints: CatalogEndpoints,
}

impl OpenLibrary {
	/// Build a client. `timeout` of `None` lets requests run to completion.
	pub fn new(endpoints: CatalogEndpoints, timeout: Option<Duration>) -> Result<Self, CatalogError> {
		let client = Client::builder()
			.user_agent(concat!("booksy/", env!("CARGO_PKG_VERSION")))
			.timeout(timeout)
			.build()
			.map_err(CatalogError::Client)?;
		Ok(Self { client, endpoints })
	}

	/// Full search URL for a title query.
	#[must_use]
	pub fn search_url(&self, query: &str, limit: usize) -> String {
		format!(
			"{}/search.json?title={}&limit={limit}",
			self.endpoints.base_url.trim_end_matches('/'),
			urlencoding::encode(query),
		)
	}
}

impl Catalog for OpenLibrary {
	fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchResult>, CatalogError> {
		let url = self.search_url(query, limit);
		debug!(%url, "requesting catalog search");

		let response = self
			.client
			.get(&url)
			.send()
			.map_err(CatalogError::Transport)?;

		let status = response.status();
		if !status.is_success() {
			warn!(status = status.as_u16(), "catalog search returned an error status");
			return Err(CatalogError::Status(status.as_u16()));
		}

		let body = response.text().map_err(CatalogError::Transport)?;
		debug!(bytes = body.len(), "catalog search body received");
		parse_search_response(&body)
	}
}

#[cfg(test)]
mod tests {
	use std::io::{BufRead, BufReader, Write};
	use std::net::TcpListener;
	use std::thread;

	use super::*;

	/// Serve one canned HTTP response and hand back the request line.
	fn serve_once(status: &str, body: &'static str) -> (String, thread::JoinHandle<String>) {
		let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
		let addr = listener.local_addr().expect("addr");
		let status = status.to_string();
		let handle = thread::spawn(move || {
			let (mut stream, _) = listener.accept().expect("accept");
			let mut reader = BufReader::new(stream.try_clone().expect("clone"));
			let mut request_line = String::new();
			reader.read_line(&mut request_line).expect("request line");
			loop {
				let mut header = String::new();
				reader.read_line(&mut header).expect("header");
				if header == "\r\n" || header.is_empty() {
					break;
				}
			}
			let response = format!(
				"HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
				body.len()
			);
			stream.write_all(response.as_bytes()).expect("write");
			request_line.trim_end().to_string()
		});
		(format!("http://{addr}"), handle)
	}

	fn client_for(base_url: String) -> OpenLibrary {
		let endpoints = CatalogEndpoints {
			base_url,
			..CatalogEndpoints::default()
		};
		OpenLibrary::new(endpoints, Some(Duration::from_secs(5))).expect("client")
	}

	#[test]
	fn search_url_encodes_query_and_limit() {
		let client = client_for("https://openlibrary.org/".into());
		assert_eq!(
			client.search_url("the lord & rings", 20),
			"https://openlibrary.org/search.json?title=the%20lord%20%26%20rings&limit=20"
		);
	}

	#[test]
	fn successful_response_is_parsed() {
		let (base, server) = serve_once(
			"200 OK",
			r#"{"docs":[{"key":"/works/OL1W","title":"Dune"},{"title":"Dune Messiah"}]}"#,
		);
		let results = client_for(base).search("dune", 20).expect("search");
		assert_eq!(results.len(), 2);
		assert_eq!(results[1].title, "Dune Messiah");

		let request_line = server.join().expect("server");
		assert_eq!(request_line, "GET /search.json?title=dune&limit=20 HTTP/1.1");
	}

	#[test]
	fn error_status_maps_to_network_error() {
		let (base, server) = serve_once("503 Service Unavailable", "{}");
		let err = client_for(base).search("dune", 20).unwrap_err();
		server.join().expect("server");
		assert!(matches!(err, CatalogError::Status(503)));
		assert_eq!(err.user_message(), "Network error");
	}

	#[test]
	fn malformed_body_surfaces_parser_message() {
		let (base, server) = serve_once("200 OK", "not json");
		let err = client_for(base).search("dune", 20).unwrap_err();
		server.join().expect("server");
		assert!(matches!(err, CatalogError::Decode(_)));
	}

	#[test]
	fn unreachable_host_is_a_transport_error() {
		let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
		let addr = listener.local_addr().expect("addr");
		drop(listener);
		let err = client_for(format!("http://{addr}"))
			.search("dune", 20)
			.unwrap_err();
		assert!(matches!(err, CatalogError::Transport(_)));
		assert!(!err.user_message().is_empty());
	}
}
