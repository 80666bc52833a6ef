//! Column transforms.
//!
//! Each transform reads one raw column and returns a new table with its
//! derived columns attached. The input table is never modified; row order
//! and the existing columns carry over untouched.

use std::collections::BTreeSet;

use log::{debug, warn};

use super::columns;
use super::encode::encode_indicators;
use super::groups::{self, GroupingTable};
use super::metros;
use super::parsers;
use crate::data::model::{CellValue, Column, Table};
use crate::error::Result;

/// Attach `target`, computed cell by cell from `source`.
fn derive<F>(table: &Table, source: &str, target: &str, parse: F) -> Result<Table>
where
    F: Fn(&CellValue) -> CellValue,
{
    let values: Vec<CellValue> = table.column(source)?.values.iter().map(parse).collect();
    let absent = values.iter().filter(|v| v.is_null()).count();
    debug!("'{source}' -> '{target}': {absent} of {} rows absent", values.len());
    table.with_column(Column::new(target, values))
}

/// Attach `target` holding the group of each `source` label.
fn regroup(table: &Table, source: &str, target: &str, grouping: &GroupingTable) -> Result<Table> {
    let column = table.column(source)?;
    let mut unmapped = BTreeSet::new();
    let mut values = Vec::with_capacity(column.len());
    for cell in &column.values {
        let label = cell.label();
        if let Some(label) = &label {
            if !grouping.is_known(label) && !cell.is_sentinel() {
                unmapped.insert(label.to_string());
            }
        }
        values.push(CellValue::from(grouping.resolve(label.as_deref())));
    }
    if !unmapped.is_empty() {
        warn!(
            "{} distinct '{source}' labels are not in the {} table and fell back: {:?}",
            unmapped.len(),
            grouping.name(),
            unmapped
        );
    }
    table.with_column(Column::new(target, values))
}

/// `Salary Estimate` → `min_salary`, `max_salary` in dollars.
pub fn clean_salary(table: &Table) -> Result<Table> {
    let (min, max): (Vec<CellValue>, Vec<CellValue>) = table
        .column(columns::SALARY_ESTIMATE)?
        .values
        .iter()
        .map(|cell| {
            let (low, high) = parsers::parse_salary(cell);
            (CellValue::from(low), CellValue::from(high))
        })
        .unzip();
    table.with_columns([
        Column::new(columns::MIN_SALARY, min),
        Column::new(columns::MAX_SALARY, max),
    ])
}

/// `Founded` → `Company Age`, measured against `reference_year`.
pub fn clean_founded(table: &Table, reference_year: i64) -> Result<Table> {
    derive(table, columns::FOUNDED, columns::COMPANY_AGE, |cell| {
        parsers::company_age(cell, reference_year).into()
    })
}

/// `Size` → `Size mean`.
pub fn clean_size(table: &Table) -> Result<Table> {
    derive(table, columns::SIZE, columns::SIZE_MEAN, |cell| {
        parsers::size_mean(cell).into()
    })
}

/// `Revenue` → `Revenue mean`.
pub fn clean_revenue(table: &Table) -> Result<Table> {
    derive(table, columns::REVENUE, columns::REVENUE_MEAN, |cell| {
        parsers::revenue_mean(cell).into()
    })
}

/// `Type of ownership` → `Ownership` plus `Ownership_*` indicators.
pub fn clean_type_of_ownership(table: &Table) -> Result<Table> {
    let grouped = regroup(
        table,
        columns::TYPE_OF_OWNERSHIP,
        columns::OWNERSHIP,
        &groups::OWNERSHIP,
    )?;
    encode_indicators(&grouped, columns::OWNERSHIP, columns::OWNERSHIP_PREFIX)
}

/// `Type of ownership` → `Type of ownership grouped`, where unknown
/// ownership is its own `Other/Unknown` group. No indicators.
pub fn group_type_of_ownership(table: &Table) -> Result<Table> {
    regroup(
        table,
        columns::TYPE_OF_OWNERSHIP,
        columns::OWNERSHIP_GROUPED,
        &groups::OWNERSHIP_DETAILED,
    )
}

/// `Sector` → `Sector grouped` plus `Sector_*` indicators.
pub fn clean_sector(table: &Table) -> Result<Table> {
    let grouped = regroup(
        table,
        columns::SECTOR,
        columns::SECTOR_GROUPED,
        &groups::SECTOR,
    )?;
    encode_indicators(&grouped, columns::SECTOR_GROUPED, columns::SECTOR_PREFIX)
}

/// `Location` → `Location grouped` plus `Location_*` indicators.
pub fn clean_location(table: &Table) -> Result<Table> {
    let grouped = regroup(
        table,
        columns::LOCATION,
        columns::LOCATION_GROUPED,
        &metros::LOCATION,
    )?;
    encode_indicators(&grouped, columns::LOCATION_GROUPED, columns::LOCATION_PREFIX)
}
