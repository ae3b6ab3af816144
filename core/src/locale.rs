// SPDX-FileCopyrightText: 2026 roteiro contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::Weekday;

const MONTHS_PT_BR: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

const MONTHS_ABBREV_PT_BR: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

/// Weekday names as the upstream locale data delivers them: lowercase, and
/// the working days carry the `-feira` suffix.
const WEEKDAYS_PT_BR: [&str; 7] = [
    "domingo",
    "segunda-feira",
    "terça-feira",
    "quarta-feira",
    "quinta-feira",
    "sexta-feira",
    "sábado",
];

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_ABBREV_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const WEEKDAYS_EN: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Display language for calendar names.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Locale {
    /// Brazilian Portuguese, the app's original language.
    #[default]
    PtBr,

    /// English.
    En,
}

impl Locale {
    /// Full month name for a 1-based month number.
    ///
    /// Out-of-range months fall back to the last month rather than panic;
    /// `chrono` never produces them.
    pub fn month_name(&self, month: u32) -> &'static str {
        let idx = (month.clamp(1, 12) - 1) as usize;
        match self {
            Locale::PtBr => MONTHS_PT_BR[idx],
            Locale::En => MONTHS_EN[idx],
        }
    }

    /// Abbreviated month name for a 1-based month number.
    pub fn month_abbrev(&self, month: u32) -> &'static str {
        let idx = (month.clamp(1, 12) - 1) as usize;
        match self {
            Locale::PtBr => MONTHS_ABBREV_PT_BR[idx],
            Locale::En => MONTHS_ABBREV_EN[idx],
        }
    }

    /// Full weekday name, pt-BR working days including the `-feira` suffix.
    pub fn weekday_name(&self, weekday: Weekday) -> &'static str {
        let idx = weekday.num_days_from_sunday() as usize;
        match self {
            Locale::PtBr => WEEKDAYS_PT_BR[idx],
            Locale::En => WEEKDAYS_EN[idx],
        }
    }
}
