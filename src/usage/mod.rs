pub mod aggregator;
pub mod fetcher;
pub mod models;

pub use aggregator::aggregate_records;
pub use fetcher::{FeedError, UsageFeed};
pub use models::{AppSummary, DashboardTotals, FeatureSummary, UsageRecord};
