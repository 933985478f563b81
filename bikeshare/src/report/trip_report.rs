use super::{DurationStats, StationStats, TimeStats, UserStats};
use crate::{error::BikeshareError, model::Dataset};
use std::{fmt::Display, io::Write, time::Instant};

/// printed after every report and after the filter prompts.
pub const SECTION_RULE: &str = "----------------------------------------";

/// a read-only summary computed over a filtered dataset.
pub trait TripReport: Display + Sized {
    /// heading announcing the computation, such as "Calculating Trip Duration".
    const HEADING: &'static str;

    /// builds the report. implementations must handle an empty dataset.
    fn from_dataset(dataset: &Dataset) -> Self;
}

/// computes a report, writes it along with the time taken to compute it, and
/// returns it.
pub fn run_report<R: TripReport, W: Write>(
    dataset: &Dataset,
    out: &mut W,
) -> Result<R, BikeshareError> {
    writeln!(out, "\n{}...\n", R::HEADING)?;
    let start_time = Instant::now();
    let report = R::from_dataset(dataset);
    let elapsed = start_time.elapsed();
    write!(out, "{report}")?;
    writeln!(out, "\nThis took {} seconds.", elapsed.as_secs_f64())?;
    writeln!(out, "{SECTION_RULE}")?;
    Ok(report)
}

/// writes the time, station, duration and user reports, in that order. an
/// empty dataset gets a single notice instead.
pub fn write_all_reports<W: Write>(dataset: &Dataset, out: &mut W) -> Result<(), BikeshareError> {
    if dataset.is_empty() {
        log::warn!("no trips matched the filters for {}", dataset.city);
        writeln!(
            out,
            "\nNo matching trips found for {} with the selected filters.",
            dataset.city
        )?;
        writeln!(out, "{SECTION_RULE}")?;
        return Ok(());
    }
    run_report::<TimeStats, _>(dataset, out)?;
    run_report::<StationStats, _>(dataset, out)?;
    run_report::<DurationStats, _>(dataset, out)?;
    run_report::<UserStats, _>(dataset, out)?;
    Ok(())
}
