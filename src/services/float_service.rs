use std::sync::Arc;

use serde::Deserialize;
use utoipa::IntoParams;

use crate::catalog::floats::filter_floats;
use crate::catalog::models::{ArgoFloat, FloatListResponse};

/// Map filter controls. `region` is tracked by the dashboard but not
/// applied to the predicate, matching the shipped behavior.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FloatFilterParams {
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub min_profiles: String,
    #[serde(default = "default_region")]
    pub region: String,
}

fn default_status() -> String {
    "all".to_string()
}

fn default_region() -> String {
    "all".to_string()
}

/// Owns the fixed float list; filtering produces a new displayed subset
/// without touching the underlying records.
#[derive(Clone)]
pub struct FloatService {
    floats: Arc<Vec<ArgoFloat>>,
}

impl FloatService {
    pub fn new(floats: Vec<ArgoFloat>) -> Self {
        Self {
            floats: Arc::new(floats),
        }
    }

    pub fn filtered(&self, params: &FloatFilterParams) -> FloatListResponse {
        let floats = filter_floats(&self.floats, &params.status, &params.min_profiles);
        FloatListResponse {
            total_floats: self.floats.len(),
            matched: floats.len(),
            floats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::floats::seed_floats;

    fn params(status: &str, min_profiles: &str, region: &str) -> FloatFilterParams {
        FloatFilterParams {
            status: status.to_string(),
            min_profiles: min_profiles.to_string(),
            region: region.to_string(),
        }
    }

    #[test]
    fn response_reports_totals_alongside_the_match() {
        let service = FloatService::new(seed_floats());
        let response = service.filtered(&params("active", "200", "all"));
        assert_eq!(response.total_floats, 4);
        assert_eq!(response.matched, 2);
        assert_eq!(response.floats.len(), 2);
    }

    #[test]
    fn region_parameter_does_not_affect_the_result() {
        let service = FloatService::new(seed_floats());
        let global = service.filtered(&params("all", "", "all"));
        let atlantic = service.filtered(&params("all", "", "atlantic"));
        assert_eq!(global, atlantic);
    }
}
