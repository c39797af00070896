//! # timeleft
//!
//! Estimate how many years remain until atmospheric CO2 reaches a
//! (hypothetical) toxic level for human breathing.
//!
//! The crate is split the same way the program runs:
//!   1. [`forward`] projects CO2 concentration year by year,
//!   2. [`threshold`] finds the first year at or above the toxic level,
//!   3. [`report`] and [`forward::quickplot`] present the result.

#[macro_use]
extern crate soa_derive;

/// One modelled year
#[derive(Debug, Clone, PartialEq, Copy, StructOfArray)]
#[soa_derive(Clone, Debug)]
pub struct YearRecord {
    /// Calendar year
    pub year: i32,
    /// Atmospheric CO2 concentration, ppm
    pub co2_ppm: f64,
    /// Emissions during this year, GT CO2/year
    pub emissions_gt: f64,
}

/// Year-by-year projection, stored column-wise.
///
/// A trajectory is only ever built by [`forward::generate`], which appends one
/// record per step, so there is no public way to mutate it afterwards.
#[derive(Debug, Clone)]
pub struct Trajectory {
    records: YearRecordVec,
}

impl Trajectory {
    pub(crate) fn starting_at(record: YearRecord, capacity: usize) -> Self {
        let mut records = YearRecordVec::with_capacity(capacity);
        records.push(record);
        Trajectory { records }
    }

    pub(crate) fn push(&mut self, record: YearRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn years(&self) -> &[i32] {
        &self.records.year
    }

    pub fn co2_ppm(&self) -> &[f64] {
        &self.records.co2_ppm
    }

    pub fn emissions_gt(&self) -> &[f64] {
        &self.records.emissions_gt
    }

    /// Calendar year of the first record
    pub fn start_year(&self) -> Option<i32> {
        self.records.year.first().copied()
    }

    /// Copy of the record at `index`
    pub fn record(&self, index: usize) -> Option<YearRecord> {
        if index >= self.len() {
            return None;
        }
        Some(YearRecord {
            year: self.records.year[index],
            co2_ppm: self.records.co2_ppm[index],
            emissions_gt: self.records.emissions_gt[index],
        })
    }

    /// The most recent record
    pub fn last(&self) -> Option<YearRecord> {
        self.len().checked_sub(1).and_then(|idx| self.record(idx))
    }
}

pub mod appconfig;
pub mod cmdline;
pub mod forward;
pub mod main_body;
pub mod report;
pub mod threshold;
