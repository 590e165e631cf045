use chrono::NaiveDate;

use crate::catalog::models::{ArgoFloat, FloatStatus, TrackPoint};

fn track(points: &[(f64, f64)]) -> Option<Vec<TrackPoint>> {
    Some(
        points
            .iter()
            .map(|&(latitude, longitude)| TrackPoint {
                latitude,
                longitude,
            })
            .collect(),
    )
}

/// The fixed four-float map data set.
pub fn seed_floats() -> Vec<ArgoFloat> {
    vec![
        ArgoFloat {
            id: "1".to_string(),
            platform_number: "1901393".to_string(),
            latitude: 45.2,
            longitude: -30.5,
            last_update: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            status: FloatStatus::Active,
            profiles_count: 247,
            trajectory: track(&[
                (45.2, -30.5),
                (45.1, -30.6),
                (44.9, -30.8),
                (44.8, -31.0),
            ]),
            temperature: Some(15.8),
            salinity: Some(35.2),
            depth: Some(2000.0),
        },
        ArgoFloat {
            id: "2".to_string(),
            platform_number: "1901394".to_string(),
            latitude: 35.7,
            longitude: -25.3,
            last_update: NaiveDate::from_ymd_opt(2024, 1, 14).unwrap(),
            status: FloatStatus::Active,
            profiles_count: 189,
            trajectory: track(&[(35.7, -25.3), (35.6, -25.4), (35.5, -25.6)]),
            temperature: Some(18.5),
            salinity: Some(36.1),
            depth: Some(1800.0),
        },
        ArgoFloat {
            id: "3".to_string(),
            platform_number: "1901395".to_string(),
            latitude: 25.1,
            longitude: -40.8,
            last_update: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            status: FloatStatus::Inactive,
            profiles_count: 156,
            trajectory: None,
            temperature: Some(22.1),
            salinity: Some(35.8),
            depth: Some(1500.0),
        },
        ArgoFloat {
            id: "4".to_string(),
            platform_number: "1901396".to_string(),
            latitude: 55.3,
            longitude: -15.2,
            last_update: NaiveDate::from_ymd_opt(2024, 1, 16).unwrap(),
            status: FloatStatus::Active,
            profiles_count: 312,
            trajectory: None,
            temperature: Some(12.4),
            salinity: Some(34.9),
            depth: Some(2200.0),
        },
    ]
}

/// Pure predicate conjunction over the float list.
///
/// A float is kept when the status filter is "all" or matches its status,
/// and when `min_profiles` is blank or non-numeric (no lower bound) or its
/// profile count meets the bound. The underlying records are never mutated.
pub fn filter_floats(floats: &[ArgoFloat], status: &str, min_profiles: &str) -> Vec<ArgoFloat> {
    let min_profiles: Option<u32> = min_profiles.trim().parse().ok();

    floats
        .iter()
        .filter(|float| {
            let status_matches = status == "all" || float.status.as_str() == status;
            let count_matches = min_profiles.map_or(true, |min| float.profiles_count >= min);
            status_matches && count_matches
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_status_and_blank_bound_is_identity() {
        let floats = seed_floats();
        assert_eq!(filter_floats(&floats, "all", ""), floats);
    }

    #[test]
    fn active_filter_keeps_only_active_floats() {
        let floats = seed_floats();
        let filtered = filter_floats(&floats, "active", "");
        assert_eq!(filtered.len(), 3);
        assert!(filtered.iter().all(|f| f.status == FloatStatus::Active));
    }

    #[test]
    fn min_profiles_bound_is_inclusive() {
        let floats = seed_floats();
        let filtered = filter_floats(&floats, "all", "200");
        let counts: Vec<u32> = filtered.iter().map(|f| f.profiles_count).collect();
        assert_eq!(counts, [247, 312]);
    }

    #[test]
    fn non_numeric_bound_means_no_lower_bound() {
        let floats = seed_floats();
        assert_eq!(filter_floats(&floats, "all", "abc").len(), 4);
        assert_eq!(filter_floats(&floats, "all", "  ").len(), 4);
    }

    #[test]
    fn filters_compose_as_a_conjunction() {
        let floats = seed_floats();
        let filtered = filter_floats(&floats, "active", "200");
        assert_eq!(filtered.len(), 2);
        assert_eq!(filter_floats(&floats, "inactive", "200").len(), 0);
    }

    #[test]
    fn unknown_status_matches_nothing() {
        let floats = seed_floats();
        assert!(filter_floats(&floats, "retired", "").is_empty());
    }
}
