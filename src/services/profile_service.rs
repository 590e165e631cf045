use std::sync::Arc;

use crate::catalog::models::{Profile, ProfileSummary, QcSummary, TsPoint};

/// Owns the session's seeded profile set and derives the read models the
/// dashboard charts consume.
#[derive(Clone)]
pub struct ProfileService {
    profiles: Arc<Vec<Profile>>,
}

impl ProfileService {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self {
            profiles: Arc::new(profiles),
        }
    }

    pub fn list_profiles(&self) -> Vec<ProfileSummary> {
        self.profiles
            .iter()
            .map(|profile| ProfileSummary {
                id: profile.id.clone(),
                float_id: profile.float_id.clone(),
                cycle_number: profile.cycle_number,
                date: profile.date,
                latitude: profile.latitude,
                longitude: profile.longitude,
                sample_count: profile.samples.len(),
            })
            .collect()
    }

    pub fn get_profile(&self, id: &str) -> Option<&Profile> {
        self.profiles.iter().find(|profile| profile.id == id)
    }

    /// Tally samples by QC tier. Tiers 2 and 3 are reported for the
    /// four-tier display but stay zero with the current generator.
    pub fn qc_summary(&self, id: &str) -> Option<QcSummary> {
        let profile = self.get_profile(id)?;
        let mut summary = QcSummary::default();
        for sample in &profile.samples {
            match sample.quality_flag {
                1 => summary.good += 1,
                2 => summary.probably_good += 1,
                3 => summary.correctable += 1,
                _ => summary.bad += 1,
            }
        }
        Some(summary)
    }

    /// Project a profile into T-S diagram points, one per sample.
    pub fn ts_points(&self, id: &str) -> Option<Vec<TsPoint>> {
        let profile = self.get_profile(id)?;
        Some(
            profile
                .samples
                .iter()
                .map(|sample| TsPoint {
                    temperature: sample.temperature,
                    salinity: sample.salinity,
                    depth: sample.depth,
                    qc: sample.quality_flag,
                })
                .collect(),
        )
    }
}
