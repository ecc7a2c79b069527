//! Court proximity index.
//!
//! Answers "courts near point P within radius R" without scanning the whole
//! catalog: courts live in a coarse lat/long grid, a query visits only the
//! cells its radius can touch, then ranks candidates by exact haversine
//! distance. Each cell's contents are published as a single atomic `Arc`
//! swap, so queries never observe a partially-updated cell.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use tracing::debug;

use crate::domain::court::{Court, CourtId};
use crate::domain::geo::{self, CellKey, GeoPoint};
use crate::errors::DomainError;

/// Court existence seam for game creation.
///
/// The roster service depends on court identity only; this trait points that
/// dependency at the catalog without coupling the index to rosters.
pub trait CourtDirectory: Send + Sync {
    fn contains(&self, court_id: &str) -> bool;
    fn lookup(&self, court_id: &str) -> Option<Court>;
}

/// Default grid cell size in degrees (~1.1 km of latitude per cell).
pub const DEFAULT_CELL_SIZE_DEG: f64 = 0.01;

pub struct ProximityIndex {
    cell_size_deg: f64,
    /// Cell contents, replaced wholesale on every mutation.
    cells: DashMap<CellKey, Arc<[Court]>>,
    /// Court id -> cell currently holding it.
    locations: DashMap<CourtId, CellKey>,
    /// Serializes upsert/remove against each other; queries stay lock-free.
    write_gate: Mutex<()>,
}

impl ProximityIndex {
    pub fn new() -> Self {
        Self::with_cell_size(DEFAULT_CELL_SIZE_DEG)
    }

    /// Index over a custom grid cell size (degrees).
    ///
    /// INVARIANT: the cell size is fixed for the life of the index; every
    /// stored location key was computed with it.
    pub fn with_cell_size(cell_size_deg: f64) -> Self {
        assert!(
            cell_size_deg.is_finite() && cell_size_deg > 0.0,
            "cell size must be a positive number of degrees"
        );
        Self {
            cell_size_deg,
            cells: DashMap::new(),
            locations: DashMap::new(),
            write_gate: Mutex::new(()),
        }
    }

    /// Insert a court, replacing any previous record with the same id
    /// (including relocation to a different cell).
    pub fn upsert(&self, court: Court) {
        let _guard = self.write_gate.lock();

        let cell = geo::cell_for(court.location(), self.cell_size_deg);
        let previous = self.locations.insert(court.id.clone(), cell);
        if let Some(previous_cell) = previous {
            if previous_cell != cell {
                self.remove_from_cell(previous_cell, &court.id);
            }
        }
        debug!(court_id = %court.id, ?cell, "court indexed");
        self.replace_in_cell(cell, court);
    }

    /// Drop a court from the index. Returns false for an unknown id.
    pub fn remove(&self, court_id: &str) -> bool {
        let _guard = self.write_gate.lock();

        match self.locations.remove(court_id) {
            Some((_, cell)) => {
                self.remove_from_cell(cell, court_id);
                debug!(court_id, "court removed from index");
                true
            }
            None => false,
        }
    }

    /// Current record for a court, if indexed.
    pub fn get(&self, court_id: &str) -> Option<Court> {
        let cell = *self.locations.get(court_id)?.value();
        let contents = self.cells.get(&cell).map(|entry| Arc::clone(entry.value()))?;
        contents.iter().find(|court| court.id == court_id).cloned()
    }

    /// Courts within `radius_meters` of `origin`, ascending by great-circle
    /// distance (ties break by court id), truncated to `limit`.
    ///
    /// An empty catalog yields an empty sequence, never an error. A zero
    /// radius is answered: only a court at exactly distance 0 can qualify.
    pub fn query(
        &self,
        origin: GeoPoint,
        radius_meters: f64,
        limit: usize,
    ) -> Result<Vec<Court>, DomainError> {
        if !radius_meters.is_finite() || radius_meters < 0.0 {
            return Err(DomainError::InvalidRadius { radius_meters });
        }
        if limit == 0 || self.locations.is_empty() {
            return Ok(Vec::new());
        }

        // A wide radius over a small catalog is cheaper as a straight scan
        // than as a sweep of mostly-empty cells.
        let covering = geo::covering_cell_count(origin, radius_meters, self.cell_size_deg);
        let mut hits: Vec<(f64, Court)> = Vec::new();
        if covering <= self.cells.len() as u64 {
            for cell in geo::covering_cells(origin, radius_meters, self.cell_size_deg) {
                let Some(contents) = self.cells.get(&cell).map(|entry| Arc::clone(entry.value()))
                else {
                    continue;
                };
                Self::collect_within(origin, radius_meters, &contents, &mut hits);
            }
        } else {
            let snapshots: Vec<Arc<[Court]>> = self
                .cells
                .iter()
                .map(|entry| Arc::clone(entry.value()))
                .collect();
            for contents in snapshots {
                Self::collect_within(origin, radius_meters, &contents, &mut hits);
            }
        }

        hits.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.id.cmp(&b.1.id)));
        hits.truncate(limit);
        Ok(hits.into_iter().map(|(_, court)| court).collect())
    }

    /// Number of indexed courts.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    fn collect_within(
        origin: GeoPoint,
        radius_meters: f64,
        contents: &Arc<[Court]>,
        hits: &mut Vec<(f64, Court)>,
    ) {
        for court in contents.iter() {
            let distance = geo::haversine_meters(origin, court.location());
            if distance <= radius_meters {
                hits.push((distance, court.clone()));
            }
        }
    }

    /// Publish `cell` without `court_id`. Caller holds the write gate.
    fn remove_from_cell(&self, cell: CellKey, court_id: &str) {
        let current = self.cells.get(&cell).map(|entry| Arc::clone(entry.value()));
        let Some(current) = current else { return };

        let remaining: Vec<Court> = current
            .iter()
            .filter(|court| court.id != court_id)
            .cloned()
            .collect();
        if remaining.is_empty() {
            self.cells.remove(&cell);
        } else {
            self.cells.insert(cell, remaining.into());
        }
    }

    /// Publish `cell` with `court` replacing any same-id record. Caller
    /// holds the write gate.
    fn replace_in_cell(&self, cell: CellKey, court: Court) {
        let current = self.cells.get(&cell).map(|entry| Arc::clone(entry.value()));
        let mut contents: Vec<Court> = current
            .map(|arc| {
                arc.iter()
                    .filter(|existing| existing.id != court.id)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        contents.push(court);
        self.cells.insert(cell, contents.into());
    }
}

impl Default for ProximityIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl CourtDirectory for ProximityIndex {
    fn contains(&self, court_id: &str) -> bool {
        self.locations.contains_key(court_id)
    }

    fn lookup(&self, court_id: &str) -> Option<Court> {
        self.get(court_id)
    }
}
