// SPDX-FileCopyrightText: 2026 roteiro contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Write as _;

use colored::Colorize;
use roteiro_core::DaySection;

const EMPTY_DAY_PLACEHOLDER: &str = "Nenhuma atividade cadastrada nessa data";

/// Renders the day sections the way the activities screen lists them:
/// a "Dia N  weekday" heading per day, then one row per activity with its
/// hour label, past activities dimmed.
pub fn render_sections(sections: &[DaySection]) -> String {
    let mut out = String::new();
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(
            out,
            "{} {}  {}",
            "Dia".bold(),
            section.day_number.to_string().bold(),
            section.day_name.dimmed()
        );

        if section.activities.is_empty() {
            let _ = writeln!(out, "  {}", EMPTY_DAY_PLACEHOLDER.dimmed());
            continue;
        }

        for activity in &section.activities {
            let row = format!("  {} {}", activity.hour_label, activity.title);
            if activity.is_past {
                let _ = writeln!(out, "{}", row.dimmed().strikethrough());
            } else {
                let _ = writeln!(out, "{row}");
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use roteiro_core::SectionActivity;
    use uuid::Uuid;

    use super::*;

    fn section(day_number: u32, activities: Vec<SectionActivity>) -> DaySection {
        DaySection {
            day_number,
            day_name: "terça".to_string(),
            activities,
        }
    }

    fn activity(title: &str, hour_label: &str, is_past: bool) -> SectionActivity {
        SectionActivity {
            id: Uuid::new_v4(),
            title: title.to_string(),
            hour_label: hour_label.to_string(),
            is_past,
        }
    }

    #[test]
    fn renders_heading_and_rows_in_order() {
        colored::control::set_override(false);
        let sections = vec![section(
            5,
            vec![
                activity("Check-in", "02:00h", true),
                activity("Jantar", "08:30h", false),
            ],
        )];
        let out = render_sections(&sections);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "Dia 5  terça");
        assert_eq!(lines[1], "  02:00h Check-in");
        assert_eq!(lines[2], "  08:30h Jantar");
    }

    #[test]
    fn empty_day_gets_placeholder() {
        colored::control::set_override(false);
        let out = render_sections(&[section(6, vec![])]);
        assert!(out.contains(EMPTY_DAY_PLACEHOLDER));
    }
}
