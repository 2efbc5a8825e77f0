use shared_types::{Category, GeoPoint, Phone, ResourceRecord, ScheduleError, Weekday};
use std::cmp::Ordering;

use crate::utils::display::format_day_hours;
use crate::utils::geo::distance_between;
use crate::utils::schedule::{format_schedule, is_open};

/// Display values derived from a record for one clock reading and origin.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceSummary {
    pub id: String,
    pub name: String,
    pub category: Option<Category>,
    pub id_required: bool,
    /// Phone digits only, ready to dial.
    pub phone: Option<String>,
    pub open_now: bool,
    /// False when some weekday has no entry at all (shown as closed).
    pub hours_complete: bool,
    /// `None` when either end has no location.
    pub distance_miles: Option<f64>,
    pub today_hours: String,
    pub weekly_hours: String,
}

pub fn summarize(
    record: &ResourceRecord,
    day: Weekday,
    time: &str,
    origin: &GeoPoint,
) -> ResourceSummary {
    let open_now = match is_open(&record.hours, day, time) {
        Ok(open) => open,
        Err(err) => {
            tracing::warn!(
                resource = %record.id,
                error = %err,
                "unreadable opening hours, showing as closed"
            );
            false
        }
    };

    let hours_complete = match record.hours.validate() {
        Err(ScheduleError::IncompleteSchedule(missing)) => {
            tracing::warn!(
                resource = %record.id,
                missing = missing.len(),
                "incomplete opening hours, missing days shown as closed"
            );
            false
        }
        _ => true,
    };

    let location = record.location();
    let distance_miles = (origin.is_known() && location.is_known())
        .then(|| distance_between(origin, &location));

    ResourceSummary {
        id: record.id.clone(),
        name: record.name.clone(),
        category: record.category,
        id_required: record.id_required,
        phone: record.phone.as_ref().map(Phone::digits),
        open_now,
        hours_complete,
        distance_miles,
        today_hours: format_day_hours(&record.hours, day),
        weekly_hours: format_schedule(&record.hours),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingFilter {
    pub category: Option<Category>,
    pub open_only: bool,
    /// Records with no known distance are dropped when this is set.
    pub max_distance_miles: Option<f64>,
}

impl ListingFilter {
    fn admits(&self, summary: &ResourceSummary) -> bool {
        if self.category.is_some() && summary.category != self.category {
            return false;
        }
        if self.open_only && !summary.open_now {
            return false;
        }
        match (self.max_distance_miles, summary.distance_miles) {
            (Some(max), Some(distance)) => distance <= max,
            (Some(_), None) => false,
            (None, _) => true,
        }
    }
}

/// Summaries for every record the filter admits. Nearest first when
/// distances are known (unknown distances last), then by name.
pub fn build_listing(
    records: &[ResourceRecord],
    day: Weekday,
    time: &str,
    origin: &GeoPoint,
    filter: &ListingFilter,
) -> Vec<ResourceSummary> {
    let mut listing: Vec<ResourceSummary> = records
        .iter()
        .map(|record| summarize(record, day, time, origin))
        .filter(|summary| filter.admits(summary))
        .collect();

    listing.sort_by(|a, b| {
        compare_distance(a.distance_miles, b.distance_miles).then_with(|| a.name.cmp(&b.name))
    });

    tracing::debug!(
        total = records.len(),
        shown = listing.len(),
        %day,
        time,
        "built resource listing"
    );
    listing
}

fn compare_distance(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{TimeWindow, WeeklySchedule};

    fn record(
        id: &str,
        name: &str,
        category: Category,
        location: Option<(f64, f64)>,
        hours: WeeklySchedule,
    ) -> ResourceRecord {
        ResourceRecord {
            id: id.to_string(),
            name: name.to_string(),
            org_name: None,
            email: None,
            phone: None,
            address: None,
            latitude: location.map(|l| l.0),
            longitude: location.map(|l| l.1),
            category: Some(category),
            id_required: false,
            hours,
        }
    }

    fn records() -> Vec<ResourceRecord> {
        let always = WeeklySchedule::every_day(TimeWindow::new("00:00", "24:00"));
        let mornings = WeeklySchedule::every_day(TimeWindow::new("08:00", "12:00"));
        vec![
            record(
                "far",
                "Food Pantry",
                Category::UrgentNeeds,
                Some((35.1495, -90.0490)),
                always.clone(),
            ),
            record(
                "near",
                "Shelter",
                Category::UrgentNeeds,
                Some((36.13, -86.79)),
                mornings,
            ),
            record("nowhere", "Hotline", Category::Help, None, always.clone()),
            record(
                "clinic",
                "Clinic",
                Category::HealthWellness,
                Some((36.2, -86.9)),
                always,
            ),
        ]
    }

    fn nashville() -> GeoPoint {
        GeoPoint::new(36.1627, -86.7816)
    }

    #[test]
    fn summary_carries_derived_values() {
        let records = records();
        let summary = summarize(&records[1], Weekday::Monday, "09:15", &nashville());

        assert!(summary.open_now);
        assert_eq!(summary.today_hours, "8 AM - 12 PM");
        assert!(summary.weekly_hours.starts_with("Mon:08:00-12:00 "));
        assert!(summary.distance_miles.is_some_and(|d| d > 0.0 && d < 5.0));
    }

    #[test]
    fn unknown_location_has_no_distance() {
        let records = records();
        let summary = summarize(&records[2], Weekday::Monday, "09:15", &nashville());
        assert_eq!(summary.distance_miles, None);

        let from_nowhere = summarize(&records[0], Weekday::Monday, "09:15", &GeoPoint::unknown());
        assert_eq!(from_nowhere.distance_miles, None);
    }

    #[test]
    fn unreadable_hours_show_as_closed() {
        let broken = record(
            "broken",
            "Broken",
            Category::Help,
            None,
            WeeklySchedule::every_day(TimeWindow::new("late", "later")),
        );
        let summary = summarize(&broken, Weekday::Friday, "10:00", &GeoPoint::unknown());
        assert!(!summary.open_now);
    }

    #[test]
    fn incomplete_hours_are_flagged() {
        let partial = record(
            "partial",
            "Partial",
            Category::Help,
            None,
            WeeklySchedule::new()
                .with_day(Weekday::Monday, Some(TimeWindow::new("09:00", "17:00"))),
        );
        let summary = summarize(&partial, Weekday::Monday, "10:00", &GeoPoint::unknown());
        assert!(summary.open_now);
        assert!(!summary.hours_complete);

        let records = records();
        let summary = summarize(&records[1], Weekday::Monday, "10:00", &GeoPoint::unknown());
        assert!(summary.hours_complete);
    }

    #[test]
    fn phone_is_reduced_to_digits() {
        let mut with_phone = records().remove(1);
        with_phone.phone = Some(Phone::Text("(615) 555-0100".to_string()));
        let summary = summarize(&with_phone, Weekday::Monday, "10:00", &nashville());
        assert_eq!(summary.phone.as_deref(), Some("6155550100"));
    }

    #[test]
    fn listing_is_sorted_nearest_first() {
        let listing = build_listing(
            &records(),
            Weekday::Tuesday,
            "15:00",
            &nashville(),
            &ListingFilter::default(),
        );
        let ids: Vec<&str> = listing.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["near", "clinic", "far", "nowhere"]);
    }

    #[test]
    fn listing_without_origin_is_sorted_by_name() {
        let listing = build_listing(
            &records(),
            Weekday::Tuesday,
            "15:00",
            &GeoPoint::unknown(),
            &ListingFilter::default(),
        );
        let names: Vec<&str> = listing.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Clinic", "Food Pantry", "Hotline", "Shelter"]);
    }

    #[test]
    fn filters_combine() {
        let filter = ListingFilter {
            category: Some(Category::UrgentNeeds),
            open_only: true,
            max_distance_miles: None,
        };
        let listing = build_listing(&records(), Weekday::Tuesday, "15:00", &nashville(), &filter);
        let ids: Vec<&str> = listing.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["far"]);

        let nearby = ListingFilter {
            max_distance_miles: Some(25.0),
            ..ListingFilter::default()
        };
        let listing = build_listing(&records(), Weekday::Tuesday, "15:00", &nashville(), &nearby);
        let ids: Vec<&str> = listing.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["near", "clinic"]);
    }
}
