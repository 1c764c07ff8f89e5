pub mod issue_instant;
pub mod unique_id;

pub use issue_instant::UtcIssueInstantFormatter;
pub use unique_id::DefaultUniqueIdGenerator;
