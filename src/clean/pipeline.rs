use log::{debug, info};

use super::columns;
use super::transforms;
use crate::config::CleaningConfig;
use crate::data::model::Table;
use crate::error::Result;

/// One column transform of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Salary,
    Founded,
    Size,
    Revenue,
    Ownership,
    Sector,
    Location,
}

impl Step {
    /// Raw column the step reads.
    pub fn source(self) -> &'static str {
        match self {
            Step::Salary => columns::SALARY_ESTIMATE,
            Step::Founded => columns::FOUNDED,
            Step::Size => columns::SIZE,
            Step::Revenue => columns::REVENUE,
            Step::Ownership => columns::TYPE_OF_OWNERSHIP,
            Step::Sector => columns::SECTOR,
            Step::Location => columns::LOCATION,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Step::Salary => "clean_salary",
            Step::Founded => "clean_founded",
            Step::Size => "clean_size",
            Step::Revenue => "clean_revenue",
            Step::Ownership => "clean_type_of_ownership",
            Step::Sector => "clean_sector",
            Step::Location => "clean_location",
        }
    }

    fn apply(self, table: &Table, reference_year: i64) -> Result<Table> {
        match self {
            Step::Salary => transforms::clean_salary(table),
            Step::Founded => transforms::clean_founded(table, reference_year),
            Step::Size => transforms::clean_size(table),
            Step::Revenue => transforms::clean_revenue(table),
            Step::Ownership => transforms::clean_type_of_ownership(table),
            Step::Sector => transforms::clean_sector(table),
            Step::Location => transforms::clean_location(table),
        }
    }
}

/// Transform order of the default pipeline.
pub const DEFAULT_STEPS: [Step; 6] = [
    Step::Salary,
    Step::Founded,
    Step::Size,
    Step::Revenue,
    Step::Ownership,
    Step::Sector,
];

/// Raw columns dropped once every transform has run. `Industry` and
/// `Headquarters` duplicate `Sector` and `Location`.
pub const RETIRED_COLUMNS: [&str; 8] = [
    columns::SALARY_ESTIMATE,
    columns::FOUNDED,
    columns::SIZE,
    columns::REVENUE,
    columns::TYPE_OF_OWNERSHIP,
    columns::SECTOR,
    columns::INDUSTRY,
    columns::HEADQUARTERS,
];

/// Fixed sequence of transforms followed by column retirement.
///
/// The plan is fixed when the pipeline is built: every step runs before any
/// column is retired, so no step can read a column that is already gone.
#[derive(Debug, Clone)]
pub struct Pipeline {
    steps: Vec<Step>,
    retired: Vec<String>,
    reference_year: i64,
}

impl Pipeline {
    /// Create a pipeline with the default configuration.
    pub fn new() -> Self {
        Self::with_config(&CleaningConfig::default())
    }

    pub fn with_config(config: &CleaningConfig) -> Self {
        let mut steps = DEFAULT_STEPS.to_vec();
        let mut retired: Vec<String> = RETIRED_COLUMNS.iter().map(|c| c.to_string()).collect();
        if config.include_location {
            steps.push(Step::Location);
            retired.push(columns::LOCATION.to_string());
        }
        for column in &config.extra_retired {
            if !retired.contains(column) {
                retired.push(column.clone());
            }
        }
        Pipeline {
            steps,
            retired,
            reference_year: config.reference_year,
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn retired(&self) -> &[String] {
        &self.retired
    }

    /// Every column the input must carry: step sources in order, then the
    /// remaining retired columns.
    pub fn required_columns(&self) -> Vec<&str> {
        let mut required: Vec<&str> = self.steps.iter().map(|s| s.source()).collect();
        for column in &self.retired {
            if !required.contains(&column.as_str()) {
                required.push(column);
            }
        }
        required
    }

    /// Clean `table` into a new table. Fails only when a required column is
    /// missing, before any transform runs.
    pub fn run(&self, table: &Table) -> Result<Table> {
        info!(
            "cleaning {} rows x {} columns",
            table.n_rows(),
            table.n_cols()
        );
        for column in self.required_columns() {
            table.column(column)?;
        }

        let mut transformed = table.clone();
        for step in &self.steps {
            let next = step.apply(&transformed, self.reference_year)?;
            debug!(
                "{}: {} -> {} columns",
                step.name(),
                transformed.n_cols(),
                next.n_cols()
            );
            transformed = next;
        }

        let cleaned = transformed.drop_columns(&self.retired)?;
        info!(
            "cleaning complete: {} rows x {} columns",
            cleaned.n_rows(),
            cleaned.n_cols()
        );
        Ok(cleaned)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Clean `table` with the default pipeline.
pub fn preprocess(table: &Table) -> Result<Table> {
    Pipeline::new().run(table)
}
