//! # Application State
//!
//! Shared state handed to every handler through axum's `State` extractor.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use solar_core::{Lead, SolarCalculator};
use tokio::sync::RwLock;
use tracing::debug;

use crate::config::ApiConfig;

// =============================================================================
// Lead Inbox
// =============================================================================

/// Most recent leads accepted since the process started.
///
/// The CMS owns durable storage; this inbox only lets the storefront read
/// back a lead it just submitted. Holds at most `capacity` leads, the oldest
/// is evicted first.
#[derive(Debug)]
pub struct LeadInbox {
    capacity: usize,
    inner: RwLock<InboxEntries>,
}

#[derive(Debug, Default)]
struct InboxEntries {
    by_id: HashMap<String, Lead>,
    /// Ids in arrival order, oldest at the front.
    order: VecDeque<String>,
}

impl LeadInbox {
    /// Creates an inbox holding at most `capacity` leads (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        LeadInbox {
            capacity: capacity.max(1),
            inner: RwLock::new(InboxEntries::default()),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Stores a lead, evicting the oldest when full. Returns the inbox size.
    pub async fn push(&self, lead: Lead) -> usize {
        let mut inner = self.inner.write().await;

        let id = lead.id.clone();
        if inner.by_id.insert(id.clone(), lead).is_none() {
            inner.order.push_back(id);
        }

        while inner.order.len() > self.capacity {
            if let Some(oldest) = inner.order.pop_front() {
                inner.by_id.remove(&oldest);
                debug!(lead_id = %oldest, "Evicted oldest lead from inbox");
            }
        }

        inner.order.len()
    }

    /// Finds a lead by id.
    pub async fn get(&self, id: &str) -> Option<Lead> {
        self.inner.read().await.by_id.get(id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.order.len()
    }
}

// =============================================================================
// App State
// =============================================================================

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub calculator: SolarCalculator,
    pub leads: Arc<LeadInbox>,
    pub config: Arc<ApiConfig>,
}

impl AppState {
    pub fn new(config: ApiConfig) -> Self {
        AppState {
            calculator: SolarCalculator::standard(),
            leads: Arc::new(LeadInbox::with_capacity(config.max_leads)),
            config: Arc::new(config),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new(ApiConfig::default())
    }
}
