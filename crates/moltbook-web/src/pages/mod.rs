//! Routed Pages

mod dashboard;
mod launchpad;
mod profile;

pub use dashboard::DashboardPage;
pub use launchpad::LaunchpadPage;
pub use profile::ProfilePage;
