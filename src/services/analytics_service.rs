use rand::thread_rng;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::analytics;
use crate::catalog::models::AnalyticsReport;

/// Selection parameters from the dashboard controls. Any change triggers a
/// full regeneration; the values themselves do not alter the report shape.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AnalyticsParams {
    #[serde(default = "default_time_range")]
    pub time_range: String,
    #[serde(default = "default_analysis_type")]
    pub analysis_type: String,
    #[serde(default = "default_region")]
    pub region: String,
}

fn default_time_range() -> String {
    "1year".to_string()
}

fn default_analysis_type() -> String {
    "comprehensive".to_string()
}

fn default_region() -> String {
    "global".to_string()
}

#[derive(Clone, Default)]
pub struct AnalyticsService;

impl AnalyticsService {
    pub fn new() -> Self {
        Self
    }

    /// Regenerate the whole report. The previous one is replaced, never
    /// merged.
    pub fn generate(&self) -> AnalyticsReport {
        analytics::generate_report(&mut thread_rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::MONTH_LABELS;

    #[test]
    fn every_generation_has_the_full_report_shape() {
        let service = AnalyticsService::new();
        let report = service.generate();

        assert_eq!(report.temporal.len(), MONTH_LABELS.len());
        assert_eq!(report.spatial.len(), 6);
        assert_eq!(report.anomalies.len(), 3);
        assert_eq!(report.patterns.len(), 3);
    }

    #[test]
    fn static_sections_are_identical_across_generations() {
        let service = AnalyticsService::new();
        let first = service.generate();
        let second = service.generate();

        assert_eq!(first.spatial, second.spatial);
        assert_eq!(first.anomalies, second.anomalies);
        assert_eq!(first.patterns, second.patterns);
        assert_eq!(first.statistics, second.statistics);
    }
}
