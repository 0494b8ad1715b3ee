//! Request dispatch.
//!
//! The route table is fixed. The first path segment selects the handler and
//! the remainder of the path is handed to it as its argument:
//!
//! | primary      | method     | handler                     |
//! |--------------|------------|-----------------------------|
//! | (empty)      | any        | [`handlers::root`]          |
//! | `echo`       | any        | [`handlers::echo`]          |
//! | `user-agent` | any        | [`handlers::user_agent`]    |
//! | `files`      | GET        | [`handlers::get_file`]      |
//! | `files`      | POST       | [`handlers::post_file`]     |
//!
//! Everything else is 404.

pub mod handlers;

use std::sync::Arc;

use crate::config::Config;
use crate::http::encoding::ContentEncoding;
use crate::http::path::PathSegments;
use crate::http::request::{Method, Request};
use crate::http::response::{Response, ResponseOptions};
use crate::store::FileStore;

/// Shared, read-only state handed to every connection.
#[derive(Debug, Clone)]
pub struct Router {
    inner: Arc<RouterInner>,
}

#[derive(Debug)]
struct RouterInner {
    store: FileStore,
    encodings: Vec<ContentEncoding>,
}

impl Router {
    pub fn new(store: FileStore, encodings: Vec<ContentEncoding>) -> Self {
        Self {
            inner: Arc::new(RouterInner { store, encodings }),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(FileStore::new(&cfg.data_dir), cfg.encodings.clone())
    }

    pub fn store(&self) -> &FileStore {
        &self.inner.store
    }

    pub async fn dispatch(&self, req: &Request) -> anyhow::Result<Response> {
        let opts = ResponseOptions::for_request(req, &self.inner.encodings);
        let segments = PathSegments::parse(&req.path);

        let response = match (segments.primary, &req.method) {
            ("", _) => handlers::root(&opts)?,
            ("echo", _) => handlers::echo(&opts, segments.secondary)?,
            ("user-agent", _) => handlers::user_agent(&opts, req)?,
            ("files", &Method::GET) => {
                handlers::get_file(&opts, self.store(), segments.secondary).await?
            }
            ("files", &Method::POST) => {
                handlers::post_file(self.store(), segments.secondary, req).await
            }
            _ => {
                tracing::info!(
                    method = req.method.as_str(),
                    path = %req.path,
                    "Route not found"
                );
                Response::not_found(&opts)
            }
        };

        Ok(response)
    }
}
