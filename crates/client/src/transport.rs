//! The transport seam.

use serde_json::Value;
use std::sync::Arc;
use tabsearch_core::Result;

/// Query-string parameters of a request.
pub type Params<'a> = &'a [(&'a str, &'a str)];

/// A synchronous JSON request channel bound to one endpoint.
///
/// A non-success status must surface as `Error::Server`, carrying the
/// server's `error` object when the body was parseable. Failures to send
/// the request or decode a success body surface as `Error::Transport`.
pub trait Transport: Send + Sync {
    /// Sends a GET request.
    fn get(&self, params: Option<Params<'_>>) -> Result<Value>;

    /// Sends a POST request with a JSON body.
    fn post(&self, body: &Value, params: Option<Params<'_>>) -> Result<Value>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn get(&self, params: Option<Params<'_>>) -> Result<Value> {
        (**self).get(params)
    }

    fn post(&self, body: &Value, params: Option<Params<'_>>) -> Result<Value> {
        (**self).post(body, params)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn get(&self, params: Option<Params<'_>>) -> Result<Value> {
        (**self).get(params)
    }

    fn post(&self, body: &Value, params: Option<Params<'_>>) -> Result<Value> {
        (**self).post(body, params)
    }
}
