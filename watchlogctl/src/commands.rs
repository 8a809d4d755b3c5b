use anyhow::Context;
use serde_json::json;
use tracing::debug;
use watchlog_config::WatchlogConfig;
use watchlog_core::query::{CatalogStats, FilterCriteria};
use watchlog_model::ScheduleRequest;

use crate::catalog::load_catalog;
use crate::cli::{FilterArgs, ScheduleArgs};
use crate::render;

/// Run `watchlog filter` and return what should be printed.
pub fn run_filter(args: &FilterArgs, config: &WatchlogConfig) -> anyhow::Result<String> {
    let catalog = load_catalog(&args.catalog)?;
    let criteria = FilterCriteria::try_from(args.to_request(config.filter.default_limit)?)
        .context("invalid filter")?;

    let hits = config.filter_engine().apply(&catalog, &criteria);
    let stats = args
        .stats
        .then(|| CatalogStats::from_entries(hits.iter().copied()));
    debug!(
        criteria = criteria.active_count(),
        matched = hits.len(),
        total = catalog.len(),
        "filter applied"
    );

    if args.json {
        let body = json!({
            "criteria": criteria,
            "total": catalog.len(),
            "items": hits,
            "stats": stats,
        });
        return Ok(serde_json::to_string_pretty(&body)?);
    }

    Ok(render::filter_report(
        &criteria,
        &hits,
        catalog.len(),
        stats.as_ref(),
    ))
}

/// Run `watchlog schedule` and return what should be printed.
pub fn run_schedule(args: &ScheduleArgs, config: &WatchlogConfig) -> anyhow::Result<String> {
    let per_day = args
        .per_day
        .unwrap_or(config.schedule.default_episodes_per_day);
    let mut request = ScheduleRequest::new(args.episodes, per_day);
    if let Some(start) = args.start {
        request = request.starting_on(start);
    }

    let mut generator = config.schedule_generator();
    if let Some(minutes) = args.minutes {
        generator = generator.with_episode_minutes(minutes);
    }

    let feasibility = generator
        .limits()
        .check(&request)
        .context("invalid schedule request")?;
    let schedule = generator
        .generate(&request)
        .context("invalid schedule request")?;

    if args.json {
        let body = json!({
            "request": request,
            "schedule": schedule,
            "feasibility": feasibility,
        });
        return Ok(serde_json::to_string_pretty(&body)?);
    }

    Ok(render::schedule_report(&schedule, &feasibility))
}
