//! Reporting CLI commands: summary, trends, and the dashboard

use chrono::Local;

use crate::auth::AuthService;
use crate::config::Settings;
use crate::display::{format_dashboard, format_summary, format_trends};
use crate::error::{MonityError, MonityResult};
use crate::models::ReportPeriod;
use crate::services::{resolve_window, AnalyticsService, DashboardService};
use crate::storage::Storage;

use super::parse_date;

fn parse_period(s: &str) -> MonityResult<ReportPeriod> {
    s.parse::<ReportPeriod>()
        .map_err(|e| MonityError::InvalidInput(e.to_string()))
}

/// Handle `monity summary`
pub fn handle_summary(
    storage: &Storage,
    settings: &Settings,
    period: Option<String>,
    from: Option<String>,
    to: Option<String>,
) -> MonityResult<()> {
    let user = AuthService::new(storage, settings).current_user()?;

    let period = match period {
        Some(s) => parse_period(&s)?,
        None => settings.default_period,
    };
    let window = resolve_window(
        period,
        from.as_deref().map(parse_date).transpose()?,
        to.as_deref().map(parse_date).transpose()?,
        Local::now().date_naive(),
    )?;

    let analytics = AnalyticsService::new(storage, settings);
    let summary = analytics.summary(user.id, window)?;

    print!("{}", format_summary(&summary, settings));

    Ok(())
}

/// Handle `monity trends`
pub fn handle_trends(
    storage: &Storage,
    settings: &Settings,
    period: Option<String>,
    from: Option<String>,
    to: Option<String>,
) -> MonityResult<()> {
    let user = AuthService::new(storage, settings).current_user()?;

    let period = match period {
        Some(s) => parse_period(&s)?,
        None => settings.default_period,
    };
    let window = resolve_window(
        period,
        from.as_deref().map(parse_date).transpose()?,
        to.as_deref().map(parse_date).transpose()?,
        Local::now().date_naive(),
    )?;

    let analytics = AnalyticsService::new(storage, settings);
    let trends = analytics.trends(user.id, window)?;

    print!("{}", format_trends(&trends, settings));

    Ok(())
}

/// Handle `monity dashboard`
pub fn handle_dashboard(
    storage: &Storage,
    settings: &Settings,
    period: Option<String>,
) -> MonityResult<()> {
    let auth = AuthService::new(storage, settings);
    let user = auth.current_user()?;

    let period = period.as_deref().map(parse_period).transpose()?;
    let dashboard = DashboardService::new(storage, settings).gather(
        user.id,
        period,
        Local::now().date_naive(),
    )?;

    print!("{}", format_dashboard(&dashboard, &user, settings));

    Ok(())
}
