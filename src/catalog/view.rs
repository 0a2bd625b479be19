use log::debug;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use super::{CatalogBuilder, FailurePolicy};
use crate::error::CatalogError;
use crate::package::PackageRecord;
use crate::runtime::Runtime;

/// One row of the flat package list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    pub label: String,
    /// `"<name> [<version>]"`
    pub tooltip: String,
    /// Tooltip and title, one per line
    pub detail: String,
    pub path: PathBuf,
}

impl From<&PackageRecord> for CatalogItem {
    fn from(record: &PackageRecord) -> Self {
        Self {
            label: record.label().to_string(),
            tooltip: record.tooltip(),
            detail: record.summary(),
            path: record.path.clone(),
        }
    }
}

struct Snapshot {
    generation: u64,
    packages: Arc<[PackageRecord]>,
    skipped: Arc<[CatalogError]>,
}

/// The catalog currently on display.
///
/// Each [`refresh`](Self::refresh) builds a complete new catalog and swaps it
/// in as a whole. Refreshes are numbered when they start; a refresh that
/// finishes after a newer one has already been applied is dropped, so the
/// display always shows the most recently requested scan.
pub struct CatalogView<'a, R: Runtime> {
    builder: CatalogBuilder<'a, R>,
    policy: FailurePolicy,
    issued: AtomicU64,
    current: Mutex<Snapshot>,
}

impl<'a, R: Runtime> CatalogView<'a, R> {
    pub fn new(builder: CatalogBuilder<'a, R>, policy: FailurePolicy) -> Self {
        Self {
            builder,
            policy,
            issued: AtomicU64::new(0),
            current: Mutex::new(Snapshot {
                generation: 0,
                packages: Arc::from(Vec::new()),
                skipped: Arc::from(Vec::new()),
            }),
        }
    }

    /// Rebuild the catalog and return the snapshot now on display.
    ///
    /// On failure the previous snapshot stays in place.
    #[tracing::instrument(skip(self))]
    pub async fn refresh(&self) -> Result<Arc<[PackageRecord]>, CatalogError> {
        let ticket = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("Starting refresh #{}", ticket);

        let catalog = self.builder.build(self.policy).await?;

        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        if ticket > current.generation {
            *current = Snapshot {
                generation: ticket,
                packages: catalog.packages.into(),
                skipped: catalog.skipped.into(),
            };
        } else {
            debug!(
                "Discarding refresh #{}, #{} is already displayed",
                ticket, current.generation
            );
        }
        Ok(current.packages.clone())
    }

    pub fn packages(&self) -> Arc<[PackageRecord]> {
        self.snapshot(|s| s.packages.clone())
    }

    /// Failures skipped while building the displayed snapshot.
    pub fn skipped(&self) -> Arc<[CatalogError]> {
        self.snapshot(|s| s.skipped.clone())
    }

    /// Number of the refresh on display, 0 before the first successful one.
    pub fn generation(&self) -> u64 {
        self.snapshot(|s| s.generation)
    }

    /// Flat list of display rows; packages never have children.
    pub fn items(&self) -> Vec<CatalogItem> {
        self.packages().iter().map(CatalogItem::from).collect()
    }

    fn snapshot<T>(&self, f: impl FnOnce(&Snapshot) -> T) -> T {
        let current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        f(&current)
    }
}
