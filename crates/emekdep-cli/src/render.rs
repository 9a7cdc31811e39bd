use std::fmt::Write as _;

use emekdep_core::acl::Ability;
use emekdep_core::breadcrumbs::Crumb;
use emekdep_core::shift::{DAYS_PER_WEEK, LessonRow};

pub const DAY_LABELS: [&str; DAYS_PER_WEEK] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const CELL_WIDTH: usize = 11;

/// Renders a lesson-major grid as a fixed-width table, one line per lesson.
pub fn render_shift(rows: &[LessonRow]) -> String {
    let mut out = String::new();

    let _ = write!(out, "{:>3} ", "#");
    for label in DAY_LABELS {
        let _ = write!(out, "|{label:^CELL_WIDTH$}");
    }
    out.push('\n');

    for (index, row) in rows.iter().enumerate() {
        let _ = write!(out, "{:>3} ", index + 1);
        for slot in row {
            let cell = slot
                .labels()
                .map(|(start, end)| format!("{start}-{end}"))
                .unwrap_or_default();
            let _ = write!(out, "|{cell:^CELL_WIDTH$}");
        }
        out.push('\n');
    }

    out
}

/// Lists resolved subjects, one `action subject` pair per line.
pub fn render_ability(ability: &Ability) -> String {
    let mut out = String::new();
    for subject in ability.readable() {
        let _ = writeln!(out, "read  {subject}");
    }
    for subject in ability.writable() {
        let _ = writeln!(out, "write {subject}");
    }
    out
}

pub fn render_crumbs(crumbs: &[Crumb]) -> String {
    crumbs
        .iter()
        .map(|crumb| crumb.title.as_str())
        .collect::<Vec<_>>()
        .join(" > ")
}
