use directory::map::{initial_center, marker_position};
use directory::{format_schedule, ResourceSummary};
use shared_types::ResourceRecord;

pub fn render_listing(listing: &[ResourceSummary]) -> String {
    if listing.is_empty() {
        return "No resources match.".to_string();
    }

    listing
        .iter()
        .map(|summary| {
            let status = if summary.open_now { "OPEN  " } else { "CLOSED" };
            let distance = summary
                .distance_miles
                .map(|miles| format!("{miles:.2} mi"))
                .unwrap_or_else(|| "-".to_string());
            let category = summary
                .category
                .map(|c| c.label())
                .unwrap_or("Uncategorized");
            let id_note = if summary.id_required { " (ID required)" } else { "" };
            let hours_note = if summary.hours_complete { "" } else { " (hours incomplete)" };
            let phone = summary
                .phone
                .as_deref()
                .map(|digits| format!(" | tel: {digits}"))
                .unwrap_or_default();

            let notes = format!("{hours_note}{id_note}{phone}");

            format!(
                "{status} {name} [{category}] {distance} | today: {today}{notes}",
                name = summary.name,
                today = summary.today_hours,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_map(records: &[ResourceRecord]) -> String {
    let (center_lat, center_long) = initial_center(records);
    let mut lines = vec![format!("center: {center_lat:.5}, {center_long:.5}")];

    lines.extend(records.iter().map(|record| {
        let (lat, long) = marker_position(record);
        format!("{} {lat:.5}, {long:.5} {}", record.id, record.name)
    }));
    lines.join("\n")
}

pub fn render_hours(records: &[ResourceRecord]) -> String {
    records
        .iter()
        .map(|record| format!("{}: {}", record.name, format_schedule(&record.hours)))
        .collect::<Vec<_>>()
        .join("\n")
}
