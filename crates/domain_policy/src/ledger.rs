//! In-memory policy ledger
//!
//! Reads and writes are scoped by the identity the ledger was built with.
//! Like the underwriter directory, each body runs under the lock and the
//! simulated latency is awaited afterwards.

use async_trait::async_trait;
use chrono::Utc;
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use core_kernel::{settle, BusyIndicator, IdSequence, OperationKind, PolicyId, SharedLatency};
use domain_auth::{Identity, IdentityProvider};

use crate::error::PolicyError;
use crate::policy::{NewPolicy, Policy, PolicyPatch};
use crate::ports::PolicyPort;

#[derive(Debug, Default)]
struct LedgerState {
    records: Vec<Policy>,
    sequence: IdSequence,
}

impl LedgerState {
    /// Resolves `id` to an index the caller may access
    fn accessible_position(
        &self,
        id: PolicyId,
        identity: Option<&Identity>,
    ) -> Result<usize, PolicyError> {
        let index = self
            .records
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| PolicyError::not_found(id))?;

        if !self.records[index].is_accessible_by(identity) {
            warn!(
                policy = %id,
                caller = identity.map(|i| i.id.as_str()).unwrap_or("anonymous"),
                "Policy access denied"
            );
            return Err(PolicyError::unauthorized(id));
        }
        Ok(index)
    }

    fn visible(&self, identity: Option<&Identity>) -> Vec<Policy> {
        self.records
            .iter()
            .filter(|p| p.is_accessible_by(identity))
            .cloned()
            .collect()
    }
}

/// Vehicle policies held in process memory
pub struct PolicyLedger {
    state: RwLock<LedgerState>,
    identity: Arc<dyn IdentityProvider>,
    latency: SharedLatency,
    busy: BusyIndicator,
}

impl PolicyLedger {
    /// Creates an empty ledger; the first id is `POL00001`
    pub fn new(identity: Arc<dyn IdentityProvider>, latency: SharedLatency) -> Self {
        Self::with_records(Vec::new(), identity, latency)
    }

    /// Creates a ledger from existing records
    ///
    /// The sequence continues after the highest id present.
    pub fn with_records(
        records: Vec<Policy>,
        identity: Arc<dyn IdentityProvider>,
        latency: SharedLatency,
    ) -> Self {
        let next = records.iter().map(|p| p.id.sequence()).max().unwrap_or(0) + 1;
        Self {
            state: RwLock::new(LedgerState {
                records,
                sequence: IdSequence::starting_at(next),
            }),
            identity,
            latency,
            busy: BusyIndicator::new(),
        }
    }
}

impl fmt::Debug for PolicyLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolicyLedger")
            .field("latency", &self.latency)
            .field("busy", &self.busy.in_flight())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl PolicyPort for PolicyLedger {
    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<Policy>, PolicyError> {
        let _busy = self.busy.begin();
        let identity = self.identity.current_identity();
        let policies = self.state.read().await.visible(identity.as_ref());
        settle(&self.latency, OperationKind::List).await;
        debug!(count = policies.len(), "Listed policies");
        Ok(policies)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn get_by_id(&self, id: PolicyId) -> Result<Policy, PolicyError> {
        let _busy = self.busy.begin();
        let identity = self.identity.current_identity();
        let found = {
            let state = self.state.read().await;
            state
                .accessible_position(id, identity.as_ref())
                .map(|index| state.records[index].clone())
        };
        let policy = found?;
        settle(&self.latency, OperationKind::Read).await;
        Ok(policy)
    }

    #[instrument(skip(self, policy), fields(owner = %policy.owner_underwriter_id))]
    async fn create(&self, policy: NewPolicy) -> Result<Policy, PolicyError> {
        let _busy = self.busy.begin();
        let created = {
            let mut state = self.state.write().await;
            let id = PolicyId::from_sequence(state.sequence.advance());
            let record = policy.issue(id, Utc::now());
            state.records.push(record.clone());
            record
        };
        info!(
            id = %created.id,
            insurance_type = %created.insurance_type,
            premium = %created.premium_amount,
            "Policy issued"
        );
        settle(&self.latency, OperationKind::Write).await;
        Ok(created)
    }

    #[instrument(skip(self, patch), fields(id = %id))]
    async fn update(&self, id: PolicyId, patch: PolicyPatch) -> Result<Policy, PolicyError> {
        let _busy = self.busy.begin();
        let identity = self.identity.current_identity();
        let updated = {
            let mut state = self.state.write().await;
            let index = state.accessible_position(id, identity.as_ref())?;
            let record = &mut state.records[index];
            record.apply(patch);
            record.clone()
        };
        info!(id = %id, "Policy updated");
        settle(&self.latency, OperationKind::Write).await;
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn recent(&self, limit: usize) -> Result<Vec<Policy>, PolicyError> {
        let _busy = self.busy.begin();
        let identity = self.identity.current_identity();
        let mut policies = self.state.read().await.visible(identity.as_ref());
        // Newest first; ids break ties between policies issued in the same instant
        policies.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        policies.truncate(limit);
        settle(&self.latency, OperationKind::List).await;
        Ok(policies)
    }

    fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }
}
