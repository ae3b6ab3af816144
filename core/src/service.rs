// SPDX-FileCopyrightText: 2026 roteiro contributors
//
// SPDX-License-Identifier: Apache-2.0

use crate::{ActivityDraft, ActivityRecord, DayBucket, Error, Trip, TripDraft};

/// The trips collaborator. The core ships no implementation; backends live
/// at the edges (an HTTP client in the app, a local store in the CLI).
pub trait TripService {
    /// Creates a trip and returns it with its server-assigned id.
    fn create(&mut self, draft: &TripDraft) -> Result<Trip, Error>;

    /// Looks a trip up by id.
    fn get(&self, id: &str) -> Result<Option<Trip>, Error>;
}

/// The activities collaborator.
pub trait ActivityService {
    /// Activities of a trip, grouped per day and chronologically ordered,
    /// one bucket per trip day.
    fn list_day_buckets(&self, trip_id: &str) -> Result<Vec<DayBucket>, Error>;

    /// Creates an activity and returns the stored record.
    fn create(&mut self, draft: &ActivityDraft) -> Result<ActivityRecord, Error>;
}

/// Device-local storage of the active trip id.
pub trait ActiveTripStore {
    fn load(&self) -> Result<Option<String>, Error>;

    fn save(&mut self, trip_id: &str) -> Result<(), Error>;

    fn clear(&mut self) -> Result<(), Error>;
}
