use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Local, TimeZone, Utc};
use chrono_tz::Tz;

use crate::config::AppConfig;
use crate::models::{City, CITIES};
use crate::prayer_times::{compute_next, TimingsClient, TimingsDay};
use crate::utils::format::{clock_string, date_string};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";

// ─── Shared ──────────────────────────────────────────────────────────────────

fn resolve_city(config: &AppConfig, city: Option<&str>) -> Result<City> {
    match city {
        Some(query) => City::find(query).ok_or_else(|| {
            let known: Vec<&str> = CITIES.iter().map(|c| c.id).collect();
            anyhow!("Unknown city '{}'. Use one of: {}", query, known.join(", "))
        }),
        None => Ok(config.city()),
    }
}

fn fetch_day(config: &AppConfig, city: &City) -> Result<TimingsDay> {
    let client = TimingsClient::new(&config.api).context("Building HTTP client")?;
    client
        .fetch(city)
        .with_context(|| format!("Fetching prayer times for {}", city.label()))
}

fn city_zone(day: &TimingsDay) -> Option<Tz> {
    day.timezone.as_deref().and_then(|tz| tz.parse::<Tz>().ok())
}

// ─── Times ───────────────────────────────────────────────────────────────────

pub fn handle_times(config: &AppConfig, city: Option<&str>) -> Result<()> {
    let city = resolve_city(config, city)?;
    let day = fetch_day(config, &city)?;
    match city_zone(&day) {
        Some(tz) => print_times(&city, &day, &Utc::now().with_timezone(&tz)),
        None => print_times(&city, &day, &Local::now()),
    }
    Ok(())
}

fn print_times<T: TimeZone>(city: &City, day: &TimingsDay, now: &DateTime<T>) {
    let wall = now.naive_local();
    let next = compute_next(&day.entries, now);

    println!();
    println_colored!(GREEN, "  Prayer Times — {}", city.label());
    println_colored!(DIM, "  {}  ·  {}", clock_string(wall), date_string(wall));
    println!();

    for entry in &day.entries {
        let is_next = next.as_ref().is_some_and(|n| n.info.name == entry.name);
        if is_next {
            println_colored!(BOLD, "  {:<10}  {}   ← next", entry.name, entry.label);
        } else if wall.date().and_time(entry.time) <= wall {
            println_colored!(DIM, "  {:<10}  {}", entry.name, entry.label);
        } else {
            println!("  {:<10}  {}", entry.name, entry.label);
        }
    }

    if let Some(next) = next {
        println!();
        println_colored!(
            GREEN,
            "  Next: {} at {} in {}",
            next.info.name,
            next.info.time,
            next.remaining
        );
    }
    println!();
}

// ─── Next ────────────────────────────────────────────────────────────────────

pub fn handle_next(config: &AppConfig, city: Option<&str>) -> Result<()> {
    let city = resolve_city(config, city)?;
    let day = fetch_day(config, &city)?;
    let next = match city_zone(&day) {
        Some(tz) => compute_next(&day.entries, &Utc::now().with_timezone(&tz)),
        None => compute_next(&day.entries, &Local::now()),
    }
    .ok_or_else(|| anyhow!("Timing source returned no prayers for {}", city.label()))?;

    println!("{} {} ({})", next.info.name, next.info.time, next.remaining);
    Ok(())
}

// ─── Cities ──────────────────────────────────────────────────────────────────

pub fn handle_cities(config: &AppConfig) -> Result<()> {
    let current = config.city();
    println!();
    for (i, city) in CITIES.iter().enumerate() {
        if city.id == current.id {
            println_colored!(BOLD, "  {}. {:<10} {}  (default)", i + 1, city.id, city.label());
        } else {
            println!("  {}. {:<10} {}", i + 1, city.id, city.label());
        }
    }
    println!();
    Ok(())
}

// ─── Config ──────────────────────────────────────────────────────────────────

pub fn handle_config(config: &AppConfig, init: bool) -> Result<()> {
    let path = AppConfig::config_path()?;

    if init {
        if path.exists() {
            println_colored!(DIM, "  Config already exists at {}", path.display());
        } else {
            AppConfig::default().save_to(&path)?;
            println_colored!(GREEN, "  ✓ Wrote default config to {}", path.display());
        }
        return Ok(());
    }

    println_colored!(DIM, "# {}", path.display());
    let content = toml::to_string_pretty(config).context("Serializing config")?;
    print!("{}", content);
    Ok(())
}
