pub mod analytics_service;
pub mod chat_service;
pub mod float_service;
pub mod profile_service;

pub use analytics_service::AnalyticsService;
pub use chat_service::{ChatError, ChatService};
pub use float_service::FloatService;
pub use profile_service::ProfileService;
