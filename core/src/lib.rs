// SPDX-FileCopyrightText: 2026 roteiro contributors
//
// SPDX-License-Identifier: Apache-2.0

mod error;
mod locale;
mod range;
mod service;
mod timeline;
mod trip;

pub use crate::{
    error::Error,
    locale::Locale,
    range::{DayMark, RangeSelection},
    service::{ActiveTripStore, ActivityService, TripService},
    timeline::{
        ActivityRecord, DayBucket, DaySection, SectionActivity, build_sections,
        combine_date_and_hour,
    },
    trip::{ActivityDraft, Trip, TripDraft},
};

/// Application name, used for config and data directories.
pub const APP_NAME: &str = "roteiro";
