//! Column names the cleaning stage reads and writes.

// Raw columns
pub const SALARY_ESTIMATE: &str = "Salary Estimate";
pub const FOUNDED: &str = "Founded";
pub const SIZE: &str = "Size";
pub const REVENUE: &str = "Revenue";
pub const TYPE_OF_OWNERSHIP: &str = "Type of ownership";
pub const SECTOR: &str = "Sector";
pub const LOCATION: &str = "Location";
pub const INDUSTRY: &str = "Industry";
pub const HEADQUARTERS: &str = "Headquarters";

// Derived columns
pub const MIN_SALARY: &str = "min_salary";
pub const MAX_SALARY: &str = "max_salary";
pub const COMPANY_AGE: &str = "Company Age";
pub const SIZE_MEAN: &str = "Size mean";
pub const REVENUE_MEAN: &str = "Revenue mean";
pub const OWNERSHIP: &str = "Ownership";
pub const OWNERSHIP_GROUPED: &str = "Type of ownership grouped";
pub const SECTOR_GROUPED: &str = "Sector grouped";
pub const LOCATION_GROUPED: &str = "Location grouped";

// Indicator prefixes
pub const OWNERSHIP_PREFIX: &str = "Ownership";
pub const SECTOR_PREFIX: &str = "Sector";
pub const LOCATION_PREFIX: &str = "Location";
