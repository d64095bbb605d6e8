//! Service state management.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::engine::QueryEngine;
use crate::registry::MetadataRegistry;

/// Shared service state: the query engine plus process start time.
pub struct ServiceState<R: MetadataRegistry + 'static> {
    /// The query engine shared by every handler.
    pub engine: Arc<QueryEngine<R>>,
    /// When this service instance started.
    pub started_at: DateTime<Utc>,
}

impl<R: MetadataRegistry + 'static> ServiceState<R> {
    /// Create service state around a constructed engine.
    pub fn new(engine: QueryEngine<R>) -> Self {
        Self {
            engine: Arc::new(engine),
            started_at: Utc::now(),
        }
    }

    /// Seconds since the service started.
    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}

impl<R: MetadataRegistry + 'static> Clone for ServiceState<R> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
            started_at: self.started_at,
        }
    }
}
