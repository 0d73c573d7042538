// utils/slug.rs
//
// Service matching is string-based: bookings carry a free-text service_type,
// workers carry a list of category slugs. Fan-out matches on the plain slug;
// acceptance additionally consults a variant table so legacy worker profiles
// with older slug spellings still qualify.

use regex::Regex;

/// Lowercase the name and collapse runs of whitespace and '/' into '-'.
pub fn slugify(name: &str) -> String {
    let re = Regex::new(r"[/\s]+").unwrap();
    re.replace_all(&name.to_lowercase(), "-").to_string()
}

/// Known display names mapped to every slug spelling workers may carry.
const SERVICE_SLUG_VARIANTS: &[(&str, &[&str])] = &[
    (
        "Hotel / Restaurant Staff",
        &["hotel-restaurant-staff", "hotel-staff", "restaurant-staff"],
    ),
    (
        "Housekeeping / Cleaning Staff",
        &["housekeeping-cleaning-staff", "housekeeping", "cleaning-staff"],
    ),
    ("Security Guard", &["security-guard", "security"]),
    ("Warehouse Worker", &["warehouse-worker", "warehouse-staff"]),
    ("Delivery Staff", &["delivery-staff", "delivery-boy"]),
    ("Event Staff", &["event-staff", "event-helper"]),
    ("Kitchen Helper", &["kitchen-helper", "kitchen-staff"]),
    ("Office Boy / Peon", &["office-boy-peon", "office-boy", "peon"]),
    ("Construction Labour", &["construction-labour", "construction-worker"]),
    ("Retail Staff", &["retail-staff", "store-staff"]),
];

/// Slugs a worker may carry to be eligible for the given service type.
/// Unknown service names fall back to their plain slug.
pub fn accepted_slugs_for(service_type: &str) -> Vec<String> {
    let mut slugs: Vec<String> = SERVICE_SLUG_VARIANTS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(service_type))
        .map(|(_, variants)| variants.iter().map(|s| s.to_string()).collect())
        .unwrap_or_default();

    let fallback = slugify(service_type);
    if !slugs.contains(&fallback) {
        slugs.push(fallback);
    }
    slugs
}

pub fn worker_matches_service(worker_services: &[String], service_type: &str) -> bool {
    let accepted = accepted_slugs_for(service_type);
    worker_services.iter().any(|s| accepted.contains(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_slashes_and_whitespace() {
        assert_eq!(slugify("Hotel / Restaurant Staff"), "hotel-restaurant-staff");
        assert_eq!(slugify("Security Guard"), "security-guard");
        assert_eq!(slugify("Office  Boy /Peon"), "office-boy-peon");
    }

    #[test]
    fn slugify_keeps_already_clean_names() {
        assert_eq!(slugify("housekeeping"), "housekeeping");
    }

    #[test]
    fn exact_slug_matches() {
        let services = vec!["hotel-restaurant-staff".to_string()];
        assert!(worker_matches_service(&services, "Hotel / Restaurant Staff"));
    }

    #[test]
    fn legacy_variant_slug_matches() {
        let services = vec!["hotel-staff".to_string()];
        assert!(worker_matches_service(&services, "Hotel / Restaurant Staff"));
    }

    #[test]
    fn unrelated_slug_does_not_match() {
        let services = vec!["security-guard".to_string()];
        assert!(!worker_matches_service(&services, "Hotel / Restaurant Staff"));
    }

    #[test]
    fn unknown_service_uses_plain_slug_fallback() {
        let services = vec!["forklift-operator".to_string()];
        assert!(worker_matches_service(&services, "Forklift Operator"));
    }

    #[test]
    fn variant_lookup_is_case_insensitive() {
        let services = vec!["security".to_string()];
        assert!(worker_matches_service(&services, "security guard"));
    }
}
