use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::loose;

/// A tournament as listed by the backend. Only the fields the site reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "loose::string")]
    pub prize_money: Option<String>,
    #[serde(default, deserialize_with = "loose::string")]
    pub max_players: Option<String>,
    #[serde(default, deserialize_with = "loose::string")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "loose::string")]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "loose::string")]
    pub matches: Option<String>,
    #[serde(default, deserialize_with = "loose::string")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "loose::string")]
    pub status: Option<String>,
}

impl Tournament {
    pub fn prize_display(&self) -> String {
        match &self.prize_money {
            Some(prize) if prize.starts_with('$') => prize.clone(),
            Some(prize) => format!("${}", prize),
            None => "TBA".to_string(),
        }
    }

    pub fn schedule_display(&self) -> String {
        match (&self.start_date, &self.end_date) {
            (Some(start), Some(end)) => format!("{} - {}", format_date(start), format_date(end)),
            (Some(start), None) => format_date(start),
            (None, Some(end)) => format!("Until {}", format_date(end)),
            (None, None) => "Dates TBA".to_string(),
        }
    }
}

/// Renders ISO timestamps and plain dates as "Mar 05, 2025"; anything else verbatim.
pub fn format_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%b %d, %Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%b %d, %Y").to_string();
    }
    raw.to_string()
}

/// A sport shown on the home page, linking to its category listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sport {
    pub name: &'static str,
    pub slug: &'static str,
    pub description: &'static str,
}

pub const SPORTS: &[Sport] = &[
    Sport {
        name: "Soccer",
        slug: "soccer",
        description: "The world's most popular sport. Fast-paced team action with strategic gameplay and incredible skill displays on the pitch.",
    },
    Sport {
        name: "Basketball",
        slug: "basketball",
        description: "High-flying hoops action with fast breaks and clutch shots. Perfect blend of athleticism, strategy, and teamwork.",
    },
    Sport {
        name: "Rugby",
        slug: "rugby",
        description: "Ultimate test of strength, speed, and courage. Intense physical combat combined with tactical brilliance and teamwork.",
    },
    Sport {
        name: "Tennis",
        slug: "tennis",
        description: "Elegant one-on-one competition requiring precision, agility, and mental fortitude. Master your serve and dominate the court.",
    },
];

/// Heading for a listing page.
pub fn category_title(category: Option<&str>) -> String {
    match category.map(str::trim).filter(|c| !c.is_empty()) {
        None => "Upcoming Battles".to_string(),
        Some(c) => match c.to_ascii_lowercase().as_str() {
            "cricket" => "Cricket Tournaments".to_string(),
            "soccer" => "Soccer Tournaments".to_string(),
            "basketball" => "Basketball Tournaments".to_string(),
            "tennis" => "Tennis Tournaments".to_string(),
            _ => format!("{} Tournaments", c),
        },
    }
}

/// Message for a listing that came back empty or failed.
pub fn empty_listing_message(category: Option<&str>) -> String {
    match category.filter(|c| !c.is_empty()) {
        Some(c) => format!("No {} tournaments available", c),
        None => "No tournaments available".to_string(),
    }
}
