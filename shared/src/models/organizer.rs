use serde::{Deserialize, Serialize};

use crate::loose;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrganizerStatus {
    #[default]
    Active,
    Inactive,
}

impl OrganizerStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrganizerStatus::Active => "Active",
            OrganizerStatus::Inactive => "Inactive",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            OrganizerStatus::Active => OrganizerStatus::Inactive,
            OrganizerStatus::Inactive => OrganizerStatus::Active,
        }
    }
}

/// An event host managed from the admin panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organizer {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(alias = "phone", default)]
    pub contact: String,
    #[serde(default)]
    pub street_address: String,
    #[serde(default)]
    pub state: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub status: OrganizerStatus,
    #[serde(default, deserialize_with = "loose::count")]
    pub events: u32,
    #[serde(alias = "createdAt", default, deserialize_with = "loose::string")]
    pub join_date: Option<String>,
}

impl Organizer {
    pub fn initial(&self) -> char {
        self.name.chars().next().map(|c| c.to_ascii_uppercase()).unwrap_or('?')
    }

    pub fn is_active(&self) -> bool {
        self.status == OrganizerStatus::Active
    }

    /// Case-insensitive substring match over every column the table shows.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        let events = self.events.to_string();
        [
            self.name.as_str(),
            self.email.as_str(),
            self.contact.as_str(),
            self.status.label(),
            events.as_str(),
            self.join_date.as_deref().unwrap_or_default(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
    }
}

pub fn filter_organizers<'a>(organizers: &'a [Organizer], term: &str) -> Vec<&'a Organizer> {
    organizers.iter().filter(|o| o.matches(term)).collect()
}

/// Headline numbers for the admin dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_organizers: usize,
    pub active_organizers: usize,
    pub inactive_organizers: usize,
    pub total_events: u64,
}

impl DashboardStats {
    pub fn from_organizers(organizers: &[Organizer]) -> Self {
        let active = organizers.iter().filter(|o| o.is_active()).count();
        Self {
            total_organizers: organizers.len(),
            active_organizers: active,
            inactive_organizers: organizers.len() - active,
            total_events: organizers.iter().map(|o| o.events as u64).sum(),
        }
    }

    /// Share of organizers currently active, in whole percent.
    pub fn active_ratio_percent(&self) -> u8 {
        if self.total_organizers == 0 {
            return 0;
        }
        ((self.active_organizers * 100) / self.total_organizers) as u8
    }
}

/// Organizers with the most events first; ties keep list order.
pub fn top_organizers(organizers: &[Organizer], limit: usize) -> Vec<&Organizer> {
    let mut ranked: Vec<&Organizer> = organizers.iter().collect();
    ranked.sort_by(|a, b| b.events.cmp(&a.events));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn org(name: &str, status: OrganizerStatus, events: u32) -> Organizer {
        Organizer {
            id: name.to_lowercase(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            contact: "+92 300 1234567".to_string(),
            status,
            events,
            join_date: Some("2024-01-15".to_string()),
            ..Default::default()
        }
    }

    fn roster() -> Vec<Organizer> {
        vec![
            org("Ahmed", OrganizerStatus::Active, 12),
            org("Sara", OrganizerStatus::Active, 8),
            org("Hassan", OrganizerStatus::Inactive, 15),
        ]
    }

    #[test]
    fn decodes_wire_record() {
        let raw = r#"{"_id":"o1","name":"Fatima","email":"f@x.io","phone":"+92 345","status":"inactive","events":"6","createdAt":"2024-03-05"}"#;
        let o: Organizer = serde_json::from_str(raw).unwrap();
        assert_eq!(o.contact, "+92 345");
        assert_eq!(o.status, OrganizerStatus::Inactive);
        assert_eq!(o.events, 6);
        assert_eq!(o.join_date.as_deref(), Some("2024-03-05"));
        assert_eq!(o.initial(), 'F');
    }

    #[test]
    fn search_is_case_insensitive_across_columns() {
        let list = roster();
        assert_eq!(filter_organizers(&list, "SARA").len(), 1);
        assert_eq!(filter_organizers(&list, "inactive").len(), 1);
        assert_eq!(filter_organizers(&list, "example.com").len(), 3);
        assert_eq!(filter_organizers(&list, "  ").len(), 3);
        assert!(filter_organizers(&list, "zzz").is_empty());
    }

    #[test]
    fn stats_and_ranking() {
        let list = roster();
        let stats = DashboardStats::from_organizers(&list);
        assert_eq!(stats.total_organizers, 3);
        assert_eq!(stats.active_organizers, 2);
        assert_eq!(stats.inactive_organizers, 1);
        assert_eq!(stats.total_events, 35);
        assert_eq!(stats.active_ratio_percent(), 66);
        let top: Vec<&str> = top_organizers(&list, 2).iter().map(|o| o.name.as_str()).collect();
        assert_eq!(top, vec!["Hassan", "Ahmed"]);
        assert_eq!(DashboardStats::from_organizers(&[]).active_ratio_percent(), 0);
    }

    #[test]
    fn status_toggles() {
        assert_eq!(OrganizerStatus::Active.toggled(), OrganizerStatus::Inactive);
        assert_eq!(OrganizerStatus::Inactive.toggled().label(), "Active");
    }
}
