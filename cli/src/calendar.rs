// SPDX-FileCopyrightText: 2026 roteiro contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Terminal month grid with the selected range drawn as a highlighted pill.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use chrono::{Datelike, NaiveDate};
use colored::Colorize;
use roteiro_core::{DayMark, Locale, RangeSelection};

const GRID_WIDTH: usize = 7 * 3 - 1; // seven 2-char cells, single spaces between

fn week_header(locale: Locale) -> &'static str {
    match locale {
        Locale::PtBr => "Do Se Te Qa Qi Sx Sá",
        Locale::En => "Su Mo Tu We Th Fr Sa",
    }
}

/// Renders every month the selection spans, one grid per month. Empty and
/// start-only selections have no marks and render nothing.
pub fn render_selection(selection: &RangeSelection, locale: Locale) -> String {
    let marks = selection.marked_dates();
    let (Some(first), Some(last)) = (marks.keys().next(), marks.keys().last()) else {
        return String::new();
    };

    let mut months = vec![(first.year(), first.month())];
    let mut cursor = (first.year(), first.month());
    while cursor != (last.year(), last.month()) {
        cursor = next_month(cursor.0, cursor.1);
        months.push(cursor);
    }

    let mut out = String::new();
    for (i, (year, month)) in months.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&render_month(*year, *month, &marks, locale));
    }
    out
}

/// One month as a grid of day numbers, marked days highlighted.
pub fn render_month(
    year: i32,
    month: u32,
    marks: &BTreeMap<NaiveDate, DayMark>,
    locale: Locale,
) -> String {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .expect("first day of a chrono-derived month must exist");
    let offset = first.weekday().num_days_from_sunday() as usize;
    let day_count = days_in_month(year, month);

    // Center before coloring: escape codes would throw the padding off.
    let title = format!("{} {}", locale.month_name(month), year);
    let title = format!("{title:^0$}", GRID_WIDTH);
    let mut out = format!("{}\n{}\n", title.bold(), week_header(locale));

    let mut cells: Vec<String> = vec!["  ".to_string(); offset];
    for day in 1..=day_count {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .expect("day within month length must exist");
        let cell = format!("{day:>2}");
        let cell = match marks.get(&date) {
            Some(mark) if mark.starting_day || mark.ending_day => {
                cell.black().on_green().bold().to_string()
            }
            Some(_) => cell.black().on_green().to_string(),
            None => cell,
        };
        cells.push(cell);
    }

    for week in cells.chunks(7) {
        let _ = writeln!(out, "{}", week.join(" ").trim_end());
    }
    out
}

fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 { (year + 1, 1) } else { (year, month + 1) }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (ny, nm) = next_month(year, month);
    NaiveDate::from_ymd_opt(ny, nm, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}
