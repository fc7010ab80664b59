use anyhow::Result;
use chrono::{Local, TimeZone};
use log::{debug, warn};
use std::io::Write;
use std::time::Duration;

use crate::{
    apps::{APPS, App, AppStatus},
    countdown::{Countdown, TimeLeft},
    runtime::{Clock, SystemClock},
};

/// How often `--watch` redraws the countdowns.
pub const COUNTDOWN_REFRESH: Duration = Duration::from_secs(1);

/// List the apps shown on the page
#[tracing::instrument]
pub async fn apps(watch: bool) -> Result<()> {
    let clock = SystemClock;
    print!("{}", format_apps(APPS, &Local, &clock));

    if watch {
        let countdowns = countdowns(APPS, &Local, &clock);
        if countdowns.is_empty() {
            println!("No upcoming launches");
            return Ok(());
        }
        println!();
        watch_countdowns(&countdowns, COUNTDOWN_REFRESH, &mut std::io::stdout()).await?;
    }
    Ok(())
}

fn countdown_for<'c, Tz: TimeZone, C: Clock>(
    app: &App,
    tz: &Tz,
    clock: &'c C,
) -> Option<Countdown<&'c C>> {
    let AppStatus::ComingSoon { launch_date } = app.status else {
        return None;
    };
    match Countdown::from_launch_date(launch_date, tz, clock) {
        Ok(countdown) => Some(countdown),
        Err(e) => {
            warn!("Skipping countdown for {}: {:#}", app.id, e);
            None
        }
    }
}

fn countdowns<'a, 'c, Tz: TimeZone, C: Clock>(
    apps: &'a [App],
    tz: &Tz,
    clock: &'c C,
) -> Vec<(&'a App, Countdown<&'c C>)> {
    apps.iter()
        .filter_map(|app| countdown_for(app, tz, clock).map(|c| (app, c)))
        .collect()
}

fn format_app<Tz: TimeZone, C: Clock>(app: &App, tz: &Tz, clock: &C) -> String {
    let platforms: Vec<&str> = app.platforms.iter().map(|p| p.as_str()).collect();
    let status = match app.status {
        AppStatus::Available => "available".to_string(),
        AppStatus::ComingSoon { launch_date } => format!("coming soon ({})", launch_date),
    };

    let mut out = format!("{} - {}\n", app.name, app.tagline);
    out.push_str(&format!("  {}\n", app.description));
    out.push_str(&format!("  id: {}\n", app.id));
    out.push_str(&format!("  platforms: {}\n", platforms.join(", ")));
    out.push_str(&format!("  status: {}\n", status));
    if let Some(countdown) = countdown_for(app, tz, clock) {
        out.push_str(&format!("  launching in: {}\n", countdown.remaining()));
    }
    if let Some(repo) = app.repo() {
        out.push_str(&format!("  releases: {}\n", repo));
    }
    for feature in app.features {
        out.push_str(&format!("  - {}\n", feature));
    }
    out
}

fn format_apps<Tz: TimeZone, C: Clock>(apps: &[App], tz: &Tz, clock: &C) -> String {
    apps.iter()
        .map(|app| format_app(app, tz, clock))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Redraws one line per countdown every `period` until all have reached zero.
async fn watch_countdowns<C: Clock, W: Write>(
    countdowns: &[(&App, Countdown<C>)],
    period: Duration,
    out: &mut W,
) -> Result<()> {
    let mut ticker = tokio::time::interval(period);
    loop {
        ticker.tick().await;

        let remaining: Vec<TimeLeft> = countdowns.iter().map(|(_, c)| c.remaining()).collect();
        for ((app, _), left) in countdowns.iter().zip(&remaining) {
            writeln!(out, "{} launching in {}", app.name, left)?;
        }
        out.flush()?;

        if remaining.iter().all(TimeLeft::is_zero) {
            debug!("All launches reached");
            return Ok(());
        }
    }
}
