//! Suite file generators.

mod feature;
mod fixtures_json;
mod gitignore;
mod helpers_ts;
mod maintenance_ts;
mod page_ts;
mod playwright_config;
mod steps_ts;
mod test_ts;

pub use feature::FeatureFile;
pub use fixtures_json::{FixturesJson, StorageRecord, UserRecord, VmRecord};
pub use gitignore::GitIgnore;
pub use helpers_ts::HelpersTs;
pub use maintenance_ts::MaintenanceTs;
pub use page_ts::PageTs;
pub use playwright_config::PlaywrightConfig;
pub use steps_ts::StepsTs;
pub use test_ts::TestTs;
