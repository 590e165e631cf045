//! The scripted chat responder. Routing is plain substring matching over
//! the lower-cased input, tested in fixed priority order; the first hit
//! decides the branch. Same input text always reaches the same branch.

use chrono::Utc;

use crate::catalog::models::{ChatData, ChatReply};

pub fn respond_to(message: &str) -> ChatReply {
    let query = message.to_lowercase();

    let (response, suggestions, data): (&str, Vec<&str>, Option<ChatData>) =
        if query.contains("temperature") || query.contains("thermal") {
            (
                "I found 2,847 temperature profiles matching your criteria. The average surface \
                 temperature is 18.5°C, with a standard deviation of 4.2°C. The deepest \
                 measurements reach 2,000m depth, showing typical thermocline structure with \
                 rapid temperature decrease in the upper 200m.",
                vec![
                    "Show me the temperature profile visualization",
                    "Compare with historical averages",
                    "Find temperature anomalies",
                    "Export this temperature data",
                ],
                Some(ChatData::TemperatureAnalysis {
                    profiles: 2847,
                    avg_temp: 18.5,
                }),
            )
        } else if query.contains("salinity") {
            (
                "Found 1,956 salinity profiles in your specified region. Salinity ranges from \
                 34.1 to 37.2 PSU, with mean values of 35.6 PSU. Notable halocline features are \
                 present between 50-150m depth, indicating water mass boundaries.",
                vec![
                    "Create a salinity depth profile",
                    "Show T-S diagram",
                    "Identify water masses",
                    "Compare regional salinity patterns",
                ],
                Some(ChatData::SalinityAnalysis {
                    profiles: 1956,
                    avg_salinity: 35.6,
                }),
            )
        } else if query.contains("float") || query.contains("location") {
            (
                "Located 247 active ARGO floats in the specified region. The floats have \
                 collected 15,623 profiles over the past 2 years. Coverage includes depths from \
                 surface to 2,000m with 10-day sampling intervals.",
                vec![
                    "Show float locations on map",
                    "Display float trajectories",
                    "Check float data quality",
                    "Find nearby measurements",
                ],
                Some(ChatData::FloatSearch {
                    floats: 247,
                    profiles: 15623,
                }),
            )
        } else if query.contains("oxygen") || query.contains("bgc") {
            (
                "Biogeochemical ARGO data shows oxygen concentrations ranging from 180-280 \
                 μmol/kg in surface waters, decreasing to 40-120 μmol/kg in intermediate waters. \
                 Oxygen minimum zones are clearly defined between 200-800m depth.",
                vec![
                    "Plot oxygen vs depth profile",
                    "Show oxygen minimum zones",
                    "Compare with chlorophyll data",
                    "Analyze seasonal oxygen trends",
                ],
                Some(ChatData::BgcAnalysis {
                    parameter: "oxygen".to_string(),
                }),
            )
        } else {
            (
                "I can help you explore ARGO oceanographic data in many ways. You can ask about \
                 specific parameters (temperature, salinity, oxygen), geographic regions, time \
                 periods, or request data visualizations. What specific aspect of ocean data \
                 interests you?",
                vec![
                    "Show me a global overview",
                    "Find data in a specific region",
                    "Analyze temperature trends",
                    "Create a custom visualization",
                ],
                None,
            )
        };

    ChatReply {
        id: Utc::now().timestamp_millis().to_string(),
        message: response.to_string(),
        suggestions: suggestions.into_iter().map(str::to_string).collect(),
        data,
    }
}
