//! Chain Services
//!
//! The service layer the views call. Each service catches remote failures
//! at the smallest sensible boundary and resolves to a typed default so
//! the views always render.

pub mod agents;
pub mod dashboard;
pub mod enrichment;
pub mod launchpad;

pub use agents::list_agents;
pub use dashboard::dashboard_stats;
pub use enrichment::enrich_agents;
pub use launchpad::{buy_tokens, parse_native_amount};
