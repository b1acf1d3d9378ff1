//! Plain-text rendering of users and status.

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use usercache_core::models::{display_or_default, filter_users};
use usercache_core::utils::{age_display, truncate_string};
use usercache_core::{Fetched, User};

use crate::app::Status;

// ============================================================================
// Constants
// ============================================================================

const NAME_WIDTH: usize = 24;
const EMAIL_WIDTH: usize = 28;
const CITY_WIDTH: usize = 16;
const COMPANY_WIDTH: usize = 20;

pub fn newline(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)
}

fn cache_age(last_saved: Option<DateTime<Utc>>) -> String {
    last_saved
        .map(|saved| age_display(saved, Utc::now()))
        .unwrap_or_else(|| "an unknown time".to_string())
}

/// Explains where the data came from when it was not fetched live
fn origin_note<T>(out: &mut impl Write, fetched: &Fetched<T>, last_saved: Option<DateTime<Utc>>) -> io::Result<()> {
    if !fetched.is_from_cache() {
        return Ok(());
    }
    let age = cache_age(last_saved);
    match fetched.suppressed {
        Some(ref error) => writeln!(out, "Showing cached data from {} (network error: {})", age, error)?,
        None => writeln!(out, "Offline - showing cached data from {}", age)?,
    }
    writeln!(out)
}

pub fn user_list(
    out: &mut impl Write,
    fetched: &Fetched<Vec<User>>,
    query: &str,
    last_saved: Option<DateTime<Utc>>,
) -> io::Result<()> {
    origin_note(out, fetched, last_saved)?;

    let matched = filter_users(&fetched.data, query);
    if matched.is_empty() {
        if query.trim().is_empty() {
            writeln!(out, "No users found")?;
        } else {
            writeln!(out, "No users match \"{}\"", query.trim())?;
        }
        return Ok(());
    }

    writeln!(
        out,
        "{:>4}  {:<2}  {:<nw$}  {:<ew$}  {:<cw$}  {:<pw$}",
        "ID", "", "Name", "Email", "City", "Company",
        nw = NAME_WIDTH, ew = EMAIL_WIDTH, cw = CITY_WIDTH, pw = COMPANY_WIDTH,
    )?;
    for user in &matched {
        writeln!(
            out,
            "{:>4}  {:<2}  {:<nw$}  {:<ew$}  {:<cw$}  {:<pw$}",
            user.id,
            user.initials(),
            truncate_string(display_or_default(&user.name), NAME_WIDTH),
            truncate_string(display_or_default(&user.email), EMAIL_WIDTH),
            truncate_string(user.city().unwrap_or("-"), CITY_WIDTH),
            truncate_string(user.company_name().unwrap_or("-"), COMPANY_WIDTH),
            nw = NAME_WIDTH, ew = EMAIL_WIDTH, cw = CITY_WIDTH, pw = COMPANY_WIDTH,
        )?;
    }
    writeln!(out)?;
    writeln!(out, "{} of {} users", matched.len(), fetched.data.len())
}

fn detail_row(out: &mut impl Write, label: &str, value: &str) -> io::Result<()> {
    writeln!(out, "  {:<10}{}", label, display_or_default(value))
}

pub fn user_detail(out: &mut impl Write, fetched: &Fetched<User>, last_saved: Option<DateTime<Utc>>) -> io::Result<()> {
    origin_note(out, fetched, last_saved)?;

    let user = &fetched.data;
    writeln!(out, "[{}] {}", user.initials(), display_or_default(&user.name))?;
    writeln!(out, "{}", display_or_default(&user.email))?;
    writeln!(out)?;

    writeln!(out, "Details")?;
    detail_row(out, "ID", &user.id.to_string())?;
    detail_row(out, "Name", &user.name)?;
    detail_row(out, "Phone", &user.phone)?;
    detail_row(out, "Website", &user.website)?;

    if let Some(ref company) = user.company {
        writeln!(out)?;
        writeln!(out, "Company")?;
        detail_row(out, "Name", &company.name)?;
    }

    if let Some(ref address) = user.address {
        writeln!(out)?;
        writeln!(out, "Address")?;
        detail_row(out, "Street", &address.street)?;
        detail_row(out, "Suite", &address.suite)?;
        detail_row(out, "City", &address.city)?;
        detail_row(out, "Zipcode", &address.zipcode)?;
    }
    Ok(())
}

pub fn status(out: &mut impl Write, status: &Status) -> io::Result<()> {
    writeln!(out, "Service:      {}", status.base_url)?;
    let connectivity = match (&status.connected, status.offline_mode) {
        (_, true) => "offline (forced)".to_string(),
        (Ok(true), _) => "online".to_string(),
        (Ok(false), _) => "offline".to_string(),
        (Err(e), _) => format!("unknown ({})", e),
    };
    writeln!(out, "Network:      {}", connectivity)?;
    writeln!(out, "Cache:        {}", status.cache_dir.display())?;
    let cached = match status.cached_users {
        Ok(count) => format!("{} users, saved {}", count, cache_age(status.last_saved)),
        Err(ref e) => e.clone(),
    };
    writeln!(out, "Cached users: {}", cached)
}
