//! In-memory underwriter directory
//!
//! Each operation runs its body under the directory lock and only then waits
//! out the simulated latency, so two calls never interleave their mutations;
//! only their completion order can differ.

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use core_kernel::{settle, BusyIndicator, IdSequence, OperationKind, SharedLatency, UnderwriterId};

use crate::error::UnderwriterError;
use crate::ports::UnderwriterPort;
use crate::underwriter::{NewUnderwriter, Underwriter, UnderwriterPatch};

/// Birth date of the demo underwriter `UW001`
pub const SEED_DATE_OF_BIRTH: NaiveDate = seed_date(2002, 8, 2);

/// Joining date of the demo underwriter `UW001`
pub const SEED_JOINING_DATE: NaiveDate = seed_date(2025, 4, 10);

// Evaluated at compile time, so a bad literal fails the build.
const fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("seed date out of range"),
    }
}

#[derive(Debug, Default)]
struct DirectoryState {
    records: Vec<Underwriter>,
    sequence: IdSequence,
}

impl DirectoryState {
    fn position(&self, id: UnderwriterId) -> Result<usize, UnderwriterError> {
        self.records
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| UnderwriterError::not_found(id))
    }
}

/// Underwriter records held in process memory
#[derive(Debug)]
pub struct UnderwriterDirectory {
    state: RwLock<DirectoryState>,
    latency: SharedLatency,
    busy: BusyIndicator,
}

impl UnderwriterDirectory {
    /// Creates an empty directory; the first id is `UW001`
    pub fn new(latency: SharedLatency) -> Self {
        Self {
            state: RwLock::new(DirectoryState::default()),
            latency,
            busy: BusyIndicator::new(),
        }
    }

    /// Creates a directory holding the demo underwriter `UW001`
    ///
    /// The seed has no stored password; its login lives in the credential
    /// registry. The next id handed out is `UW002`.
    pub fn with_demo_seed(latency: SharedLatency) -> Self {
        let seed = Underwriter {
            id: UnderwriterId::from_sequence(1),
            name: "Ajit Singh".to_string(),
            date_of_birth: SEED_DATE_OF_BIRTH,
            joining_date: SEED_JOINING_DATE,
            password: None,
        };
        Self::with_records(vec![seed], latency)
    }

    /// Creates a directory from existing records
    ///
    /// The sequence continues after the highest id present.
    pub fn with_records(records: Vec<Underwriter>, latency: SharedLatency) -> Self {
        let next = records.iter().map(|u| u.id.sequence()).max().unwrap_or(0) + 1;
        Self {
            state: RwLock::new(DirectoryState {
                records,
                sequence: IdSequence::starting_at(next),
            }),
            latency,
            busy: BusyIndicator::new(),
        }
    }
}

#[async_trait]
impl UnderwriterPort for UnderwriterDirectory {
    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<Underwriter>, UnderwriterError> {
        let _busy = self.busy.begin();
        let records = self.state.read().await.records.clone();
        settle(&self.latency, OperationKind::List).await;
        debug!(count = records.len(), "Listed underwriters");
        Ok(records)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn get_by_id(&self, id: UnderwriterId) -> Result<Underwriter, UnderwriterError> {
        let _busy = self.busy.begin();
        let found = {
            let state = self.state.read().await;
            state.position(id).map(|index| state.records[index].clone())
        };
        // Lookup misses fail without waiting
        let underwriter = found?;
        settle(&self.latency, OperationKind::Read).await;
        Ok(underwriter)
    }

    #[instrument(skip(self, underwriter), fields(name = %underwriter.name))]
    async fn create(&self, underwriter: NewUnderwriter) -> Result<Underwriter, UnderwriterError> {
        let _busy = self.busy.begin();
        let created = {
            let mut state = self.state.write().await;
            let id = UnderwriterId::from_sequence(state.sequence.advance());
            let record = underwriter.with_id(id);
            state.records.push(record.clone());
            record
        };
        info!(id = %created.id, "Underwriter created");
        settle(&self.latency, OperationKind::Write).await;
        Ok(created)
    }

    #[instrument(skip(self, patch), fields(id = %id))]
    async fn update(
        &self,
        id: UnderwriterId,
        patch: UnderwriterPatch,
    ) -> Result<Underwriter, UnderwriterError> {
        let _busy = self.busy.begin();
        let updated = {
            let mut state = self.state.write().await;
            let index = state.position(id)?;
            let record = &mut state.records[index];
            record.apply(patch);
            record.clone()
        };
        info!(id = %id, "Underwriter updated");
        settle(&self.latency, OperationKind::Write).await;
        Ok(updated)
    }

    async fn count(&self) -> Result<usize, UnderwriterError> {
        let _busy = self.busy.begin();
        let count = self.state.read().await.records.len();
        settle(&self.latency, OperationKind::List).await;
        Ok(count)
    }

    fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }
}
