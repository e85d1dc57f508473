//! Remote index discovery.

use crate::dataframe::DataFrame;
use std::sync::Arc;
use std::time::Duration;
use tabsearch_client::{RestClient, Transport};
use tabsearch_core::schema::Schema;
use tabsearch_core::Result;

/// Connection settings for one index on a remote node.
#[derive(Clone, Debug)]
pub struct RemoteIndex {
    url: String,
    index: String,
    doc_type: Option<String>,
    headers: Vec<(String, String)>,
    auth: Option<(String, String)>,
    timeout: Option<Duration>,
}

impl RemoteIndex {
    pub fn new(url: impl Into<String>, index: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            index: index.into(),
            doc_type: None,
            headers: Vec::new(),
            auth: None,
            timeout: None,
        }
    }

    /// Restricts discovery and search to one document type.
    pub fn doc_type(mut self, doc_type: impl Into<String>) -> Self {
        self.doc_type = Some(doc_type.into());
        self
    }

    /// Adds a header sent with every request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn basic_auth(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.auth = Some((user.into(), password.into()));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Endpoint answering with the index mapping.
    pub fn mapping_endpoint(&self) -> String {
        match &self.doc_type {
            Some(doc_type) => format!("{}/_mapping/{}", self.index, doc_type),
            None => self.index.clone(),
        }
    }

    /// Endpoint accepting search documents.
    pub fn search_endpoint(&self) -> String {
        match &self.doc_type {
            Some(doc_type) => format!("{}/{}/_search", self.index, doc_type),
            None => format!("{}/_search", self.index),
        }
    }

    fn client(&self, endpoint: String) -> RestClient {
        let mut client = RestClient::new(self.url.as_str(), endpoint);
        for (name, value) in &self.headers {
            client = client.header(name.as_str(), value.as_str());
        }
        if let Some((user, password)) = &self.auth {
            client = client.basic_auth(user.as_str(), password.as_str());
        }
        if let Some(timeout) = self.timeout {
            client = client.timeout(timeout);
        }
        client
    }

    /// Fetches the mapping and returns a DataFrame bound to the search endpoint.
    pub fn connect(&self) -> Result<DataFrame> {
        let mapping = self.client(self.mapping_endpoint()).get(None)?;
        let schema = Schema::from_mapping(mapping)?;
        log::debug!(
            "discovered {} columns in index {}",
            schema.len(),
            schema.index()
        );
        let search = self.client(self.search_endpoint());
        Ok(DataFrame::new(Arc::new(search), schema))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        let remote = RemoteIndex::new("http://localhost:9200", "people");
        assert_eq!(remote.mapping_endpoint(), "people");
        assert_eq!(remote.search_endpoint(), "people/_search");

        let remote = remote.doc_type("person");
        assert_eq!(remote.mapping_endpoint(), "people/_mapping/person");
        assert_eq!(remote.search_endpoint(), "people/person/_search");
    }

    #[test]
    fn test_client_carries_options() {
        let remote = RemoteIndex::new("http://localhost:9200/", "people")
            .header("X-Opaque-Id", "report-42")
            .timeout(Duration::from_secs(3));
        let client = remote.client(remote.search_endpoint());
        assert_eq!(client.request_url(), "http://localhost:9200/people/_search");
        assert_eq!(
            client.headers(),
            [("X-Opaque-Id".to_string(), "report-42".to_string())]
        );
    }
}
