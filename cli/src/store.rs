// SPDX-FileCopyrightText: 2026 roteiro contributors
//
// SPDX-License-Identifier: Apache-2.0

//! File-backed stand-in for the app's network and device-storage
//! collaborators, so the engine is usable end-to-end from the terminal.
//! Trips and activities live in one JSON document, the active trip id in a
//! side file, both under the configured data dir.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use roteiro_core::{
    ActiveTripStore, ActivityDraft, ActivityRecord, ActivityService, DayBucket, Error, Trip,
    TripDraft, TripService,
};
use uuid::Uuid;

const TRIPS_FILE: &str = "trips.json";
const ACTIVE_TRIP_FILE: &str = "active_trip";

#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
struct Document {
    trips: Vec<Trip>,
    /// Activities per trip id, kept sorted by `occurs_at`.
    activities: BTreeMap<String, Vec<ActivityRecord>>,
}

/// Local trip store rooted at a data directory.
#[derive(Debug)]
pub struct Store {
    dir: PathBuf,
    doc: Document,
}

impl Store {
    /// Loads the store from `dir`, starting empty if nothing is there yet.
    pub fn load_or_new(dir: &Path) -> Result<Store, Error> {
        let path = dir.join(TRIPS_FILE);
        let doc = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)
                .map_err(|e| Error::Store(format!("failed to parse {}: {e}", path.display())))?,
            Err(e) if e.kind() == ErrorKind::NotFound => Document::default(),
            Err(e) => {
                return Err(Error::Store(format!(
                    "failed to read {}: {e}",
                    path.display()
                )));
            }
        };

        Ok(Store {
            dir: dir.to_path_buf(),
            doc,
        })
    }

    /// Writes the whole document back to disk.
    pub fn dump(&self) -> Result<(), Error> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| Error::Store(format!("failed to create {}: {e}", self.dir.display())))?;

        let path = self.dir.join(TRIPS_FILE);
        let raw = serde_json::to_string_pretty(&self.doc)
            .map_err(|e| Error::Store(format!("failed to encode trips: {e}")))?;
        fs::write(&path, raw)
            .map_err(|e| Error::Store(format!("failed to write {}: {e}", path.display())))
    }

    fn active_trip_path(&self) -> PathBuf {
        self.dir.join(ACTIVE_TRIP_FILE)
    }
}

impl TripService for Store {
    fn create(&mut self, draft: &TripDraft) -> Result<Trip, Error> {
        let trip = Trip {
            id: Uuid::new_v4().to_string(),
            destination: draft.destination.clone(),
            starts_at: draft.starts_at,
            ends_at: draft.ends_at,
        };
        tracing::debug!(id = %trip.id, destination = %trip.destination, "creating trip");

        self.doc.trips.push(trip.clone());
        self.doc.activities.insert(trip.id.clone(), Vec::new());
        Ok(trip)
    }

    fn get(&self, id: &str) -> Result<Option<Trip>, Error> {
        Ok(self.doc.trips.iter().find(|t| t.id == id).cloned())
    }
}

impl ActivityService for Store {
    /// One bucket per day of the trip span, plus extra buckets for any
    /// activity that rolled outside the span (unclamped hour input can put
    /// one there). Activities inside a bucket stay sorted by time.
    fn list_day_buckets(&self, trip_id: &str) -> Result<Vec<DayBucket>, Error> {
        let trip = self
            .get(trip_id)?
            .ok_or_else(|| Error::Service(format!("trip not found: {trip_id}")))?;
        let activities = self
            .doc
            .activities
            .get(trip_id)
            .map_or(&[][..], |v| v.as_slice());

        let mut days: Vec<NaiveDate> = trip
            .starts_at
            .iter_days()
            .take_while(|day| *day <= trip.ends_at)
            .collect();
        for activity in activities {
            let day = activity.occurs_at.date();
            if !days.contains(&day) {
                days.push(day);
            }
        }
        days.sort();

        Ok(days
            .into_iter()
            .map(|date| DayBucket {
                date,
                activities: activities
                    .iter()
                    .filter(|a| a.occurs_at.date() == date)
                    .cloned()
                    .collect(),
            })
            .collect())
    }

    fn create(&mut self, draft: &ActivityDraft) -> Result<ActivityRecord, Error> {
        if self.get(&draft.trip_id)?.is_none() {
            return Err(Error::Service(format!("trip not found: {}", draft.trip_id)));
        }

        let record = ActivityRecord {
            id: Uuid::new_v4(),
            title: draft.title.clone(),
            occurs_at: draft.occurs_at,
        };
        tracing::debug!(id = %record.id, occurs_at = %record.occurs_at, "creating activity");

        let list = self.doc.activities.entry(draft.trip_id.clone()).or_default();
        list.push(record.clone());
        list.sort_by_key(|a| a.occurs_at);
        Ok(record)
    }
}

impl ActiveTripStore for Store {
    fn load(&self) -> Result<Option<String>, Error> {
        match fs::read_to_string(self.active_trip_path()) {
            Ok(id) if id.trim().is_empty() => Ok(None),
            Ok(id) => Ok(Some(id.trim().to_string())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::Store(format!("failed to read active trip: {e}"))),
        }
    }

    fn save(&mut self, trip_id: &str) -> Result<(), Error> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| Error::Store(format!("failed to create {}: {e}", self.dir.display())))?;
        fs::write(self.active_trip_path(), trip_id)
            .map_err(|e| Error::Store(format!("failed to write active trip: {e}")))
    }

    fn clear(&mut self) -> Result<(), Error> {
        match fs::remove_file(self.active_trip_path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::Store(format!("failed to clear active trip: {e}"))),
        }
    }
}
