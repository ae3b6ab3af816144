// SPDX-FileCopyrightText: 2026 roteiro contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{NaiveDate, NaiveDateTime};

/// A trip as the server owns it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Trip {
    /// Server-assigned identifier, also what the device remembers as the
    /// active trip.
    pub id: String,

    pub destination: String,

    pub starts_at: NaiveDate,

    pub ends_at: NaiveDate,
}

/// Draft for a new trip, built by the first screen.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TripDraft {
    pub destination: String,

    pub starts_at: NaiveDate,

    pub ends_at: NaiveDate,

    /// Guests to invite, already validated by the screen.
    pub emails_to_invite: Vec<String>,
}

/// Draft for a new activity, built by the activities screen from a chosen
/// calendar day and typed hour text via
/// [`combine_date_and_hour`](crate::combine_date_and_hour).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ActivityDraft {
    pub trip_id: String,

    pub title: String,

    pub occurs_at: NaiveDateTime,
}
