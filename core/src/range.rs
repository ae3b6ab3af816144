// SPDX-FileCopyrightText: 2026 roteiro contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::Locale;

/// The dates a user has tapped so far on the trip calendar.
///
/// The three states are explicit so the transition table in [`select_day`]
/// is exhaustive: there is no way to hold an end date without a start, and
/// a `Range` always satisfies `start <= end` because only [`select_day`]
/// constructs it.
///
/// [`select_day`]: RangeSelection::select_day
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RangeSelection {
    /// Nothing tapped yet.
    #[default]
    Empty,

    /// One endpoint tapped, waiting for the other.
    StartOnly(NaiveDate),

    /// Both endpoints chosen, in chronological order.
    Range { start: NaiveDate, end: NaiveDate },
}

/// Rendering hints for one day of a selected range.
///
/// Field names are camelCase on the wire because the map is handed to a
/// calendar widget expecting `{selected, startingDay, endingDay}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayMark {
    pub selected: bool,
    pub starting_day: bool,
    pub ending_day: bool,
}

impl RangeSelection {
    /// The start of the selection, if one has been tapped.
    pub fn starts_at(&self) -> Option<NaiveDate> {
        match self {
            RangeSelection::Empty => None,
            RangeSelection::StartOnly(start) => Some(*start),
            RangeSelection::Range { start, .. } => Some(*start),
        }
    }

    /// The end of the selection, present only once the range is complete.
    pub fn ends_at(&self) -> Option<NaiveDate> {
        match self {
            RangeSelection::Range { end, .. } => Some(*end),
            _ => None,
        }
    }

    /// Folds a tapped day into the selection and returns the next state.
    ///
    /// Taps may arrive in either chronological order: the earlier of the
    /// two dates always becomes the start. A tap on a completed range
    /// restarts the selection from the tapped day. Total over all inputs,
    /// never fails.
    #[must_use]
    pub fn select_day(self, tapped: NaiveDate) -> RangeSelection {
        match self {
            RangeSelection::Empty => RangeSelection::StartOnly(tapped),
            RangeSelection::StartOnly(start) if tapped < start => RangeSelection::Range {
                start: tapped,
                end: start,
            },
            RangeSelection::StartOnly(start) => RangeSelection::Range {
                start,
                end: tapped,
            },
            RangeSelection::Range { .. } => RangeSelection::StartOnly(tapped),
        }
    }

    /// Per-day rendering hints for a completed range.
    ///
    /// Empty unless both endpoints are set; otherwise one entry for every
    /// day from start to end inclusive, with the endpoints flagged. A
    /// single-day range yields one entry flagged as both start and end.
    pub fn marked_dates(&self) -> BTreeMap<NaiveDate, DayMark> {
        let RangeSelection::Range { start, end } = *self else {
            return BTreeMap::new();
        };

        start
            .iter_days()
            .take_while(|day| *day <= end)
            .map(|day| {
                let mark = DayMark {
                    selected: true,
                    starting_day: day == start,
                    ending_day: day == end,
                };
                (day, mark)
            })
            .collect()
    }

    /// Human-readable summary of a completed range, e.g. `"22 a 29 de Março."`.
    ///
    /// NOTE: the month name is always taken from the END date, even when the
    /// range spans two months ("28 a 3 de Abril."). The original client
    /// behaves this way and screens rely on the exact text, so it is kept.
    pub fn format_text(&self, locale: Locale) -> Option<String> {
        let RangeSelection::Range { start, end } = self else {
            return None;
        };

        let month = locale.month_name(end.month());
        Some(format!("{} a {} de {}.", start.day(), end.day(), month))
    }

    /// Compact variant for the trip header: zero-padded day numbers and the
    /// end date's abbreviated month, e.g. `"04 a 17 de Ago."`.
    pub fn format_brief(&self, locale: Locale) -> Option<String> {
        let RangeSelection::Range { start, end } = self else {
            return None;
        };

        let month = locale.month_abbrev(end.month());
        Some(format!("{:02} a {:02} de {}.", start.day(), end.day(), month))
    }
}
