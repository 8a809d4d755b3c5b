//! Plain-text output for the terminal.

use watchlog_core::query::{CatalogStats, FilterCriteria};
use watchlog_core::schedule::FeasibilityReport;
use watchlog_model::{CatalogItem, Schedule};

pub fn item_line(item: &CatalogItem) -> String {
    let mut line = format!("#{:<5} {} [{}", item.id.value(), item.title, item.kind);
    if let Some(year) = item.year {
        line.push_str(&format!(", {year}"));
    }
    line.push(']');
    match item.rating {
        Some(rating) => line.push_str(&format!("  rating {rating:.1}")),
        None => line.push_str("  unrated"),
    }
    line.push_str(&format!("  {} eps", item.episodes));
    if !item.tags.is_empty() {
        line.push_str(&format!("  tags: {}", item.tags.join(", ")));
    }
    line
}

pub fn filter_report(
    criteria: &FilterCriteria,
    hits: &[&CatalogItem],
    catalog_len: usize,
    stats: Option<&CatalogStats>,
) -> String {
    let mut lines = vec!["Filters:".to_string()];
    lines.extend(criteria.to_string().lines().map(|line| format!("  {line}")));
    lines.push(format!("Found {} of {} titles", hits.len(), catalog_len));
    lines.extend(hits.iter().map(|item| format!("  {}", item_line(item))));
    if let Some(stats) = stats {
        lines.push(stats_block(stats));
    }
    lines.join("\n")
}

pub fn stats_block(stats: &CatalogStats) -> String {
    [
        "Statistics:".to_string(),
        format!("  Titles: {}", stats.count),
        format!(
            "  Average rating: {:.2} ({} rated)",
            stats.average_rating, stats.rated
        ),
        format!("  Average episodes: {:.1}", stats.average_episodes),
    ]
    .join("\n")
}

pub fn schedule_report(schedule: &Schedule, feasibility: &FeasibilityReport) -> String {
    let mut lines = Vec::new();
    let mut current_week = 0;

    for entry in &schedule.entries {
        if entry.week != current_week {
            current_week = entry.week;
            lines.push(format!("Week {current_week}"));
        }
        let duration = if entry.is_rest_day() {
            "rest".to_string()
        } else {
            entry.duration.to_string()
        };
        lines.push(format!(
            "  {:<4} {:<24} {duration}",
            entry.weekday.short_label(),
            entry.episodes_label()
        ));
    }

    let summary = &schedule.summary;
    lines.push(format!(
        "Total: {} episodes over {} viewing days ({} {}), {:.2} per day, {}",
        schedule.episode_count(),
        summary.viewing_days,
        summary.weeks,
        if summary.weeks == 1 { "week" } else { "weeks" },
        summary.average_per_day,
        summary.total_duration
    ));
    lines.extend(
        feasibility
            .violations
            .iter()
            .map(|violation| format!("Warning: {violation}")),
    );
    lines.join("\n")
}
