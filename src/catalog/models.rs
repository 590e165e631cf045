use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Core entity models

/// One depth level of a vertical cast.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProfileSample {
    /// Pressure in decibars, 0 to 2000 in steps of 20
    pub pressure: f64,
    /// Approximate depth in meters (pressure * 1.01)
    pub depth: f64,
    /// In-situ temperature, degrees Celsius
    pub temperature: f64,
    /// Practical salinity, PSU
    pub salinity: f64,
    /// Dissolved oxygen, micromoles per kilogram
    pub oxygen: f64,
    /// Chlorophyll-a, milligrams per cubic meter
    pub chlorophyll: f64,
    /// QC flag: 1 = good, 4 = bad (2/3 are never emitted by the generator)
    pub quality_flag: u8,
}

/// One float's vertical cast: metadata plus 101 pressure-ascending samples.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Profile {
    pub id: String,
    pub float_id: String,
    pub cycle_number: u32,
    pub date: NaiveDate,
    pub latitude: f64,
    pub longitude: f64,
    pub samples: Vec<ProfileSample>,
}

// API response DTOs

/// List-view projection of a profile, without the sample array.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProfileSummary {
    pub id: String,
    pub float_id: String,
    pub cycle_number: u32,
    pub date: NaiveDate,
    pub latitude: f64,
    pub longitude: f64,
    pub sample_count: usize,
}

/// One point of a temperature-salinity diagram.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TsPoint {
    pub temperature: f64,
    pub salinity: f64,
    pub depth: f64,
    pub qc: u8,
}

/// Sample counts per QC tier for one profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct QcSummary {
    pub good: usize,
    pub probably_good: usize,
    pub correctable: usize,
    pub bad: usize,
}

// Float map entities

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FloatStatus {
    Active,
    Inactive,
}

impl FloatStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FloatStatus::Active => "active",
            FloatStatus::Inactive => "inactive",
        }
    }
}

/// One position along a float's drift track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct TrackPoint {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ArgoFloat {
    pub id: String,
    pub platform_number: String,
    pub latitude: f64,
    pub longitude: f64,
    pub last_update: NaiveDate,
    pub status: FloatStatus,
    pub profiles_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trajectory: Option<Vec<TrackPoint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salinity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FloatListResponse {
    pub total_floats: usize,
    pub matched: usize,
    pub floats: Vec<ArgoFloat>,
}

// Analytics models

/// One of the twelve fixed calendar-month trend records.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MonthlyTrendPoint {
    pub month: String,
    pub temperature: f64,
    pub salinity: f64,
    pub profiles: u32,
    pub anomaly_score: f64,
}

/// Reference values for one named ocean region (constant, not generated).
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RegionSummary {
    pub region: String,
    pub temperature: f64,
    pub salinity: f64,
    pub profiles: u32,
    pub quality: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum Severity {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AnomalyRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub severity: Severity,
    pub location: String,
    /// Signed magnitude as displayed, e.g. "+3.2°C"
    pub value: String,
    pub confidence: u8,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PatternRecord {
    pub pattern: String,
    pub strength: u8,
    pub frequency: String,
    pub regions: Vec<String>,
    pub description: String,
}

/// Fixed aggregate snapshot. Deliberately not reconciled with the regional
/// or temporal tables.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CoverageStatistics {
    pub total_profiles: u32,
    pub active_floats: u32,
    pub data_quality: f64,
    pub temporal_coverage: f64,
    pub spatial_coverage: f64,
    pub latest_update: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AnalyticsReport {
    pub temporal: Vec<MonthlyTrendPoint>,
    pub spatial: Vec<RegionSummary>,
    pub anomalies: Vec<AnomalyRecord>,
    pub patterns: Vec<PatternRecord>,
    pub statistics: CoverageStatistics,
}

// Chat models

/// Summary payload attached to a canned reply, tagged by analysis kind.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatData {
    TemperatureAnalysis { profiles: u32, avg_temp: f64 },
    SalinityAnalysis { profiles: u32, avg_salinity: f64 },
    FloatSearch { floats: u32, profiles: u32 },
    BgcAnalysis { parameter: String },
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ChatReply {
    /// Millisecond epoch at reply creation, unique within a session
    pub id: String,
    pub message: String,
    pub suggestions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ChatData>,
}
