use super::prompt::InputCollector;
use crate::{
    config::ExplorerConfig, error::BikeshareError, loader, model::FilterSelection, report,
};
use std::io::{BufRead, Write};

pub const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no.\n";

/// the two states of an interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Stopped,
}

impl SessionState {
    /// only an answer of exactly "yes", in any case, keeps the session running.
    /// a trailing line terminator is ignored, other whitespace is not.
    pub fn after_restart_answer(answer: &str) -> SessionState {
        if answer
            .trim_end_matches(['\r', '\n'])
            .eq_ignore_ascii_case("yes")
        {
            SessionState::Running
        } else {
            SessionState::Stopped
        }
    }
}

/// runs sessions until the user declines to restart: collect filters, load the
/// dataset, print the reports, ask to restart. a city file that cannot be
/// loaded is reported and the filters are collected again. closing the input
/// ends the session normally.
pub fn run<R: BufRead, W: Write>(
    config: &ExplorerConfig,
    input: R,
    output: W,
) -> Result<(), BikeshareError> {
    let mut collector = InputCollector::new(input, output);
    match run_until_stopped(config, &mut collector) {
        Err(BikeshareError::InputClosed(field)) => {
            log::info!("input closed while waiting for {field}, ending session");
            Ok(())
        }
        result => result,
    }
}

fn run_until_stopped<R: BufRead, W: Write>(
    config: &ExplorerConfig,
    collector: &mut InputCollector<R, W>,
) -> Result<(), BikeshareError> {
    let mut state = SessionState::Running;
    while state == SessionState::Running {
        let selection = collector.collect_filters()?;
        match loader::load_dataset(config, &selection) {
            Ok(dataset) => report::write_all_reports(&dataset, collector.output())?,
            Err(e) if e.is_dataset_error() => {
                log::error!("{e}");
                writeln!(
                    collector.output(),
                    "Unable to load trip data for {}: {e}\nPlease choose again.",
                    selection.city
                )?;
                continue;
            }
            Err(e) => return Err(e),
        }
        let answer = collector.ask(RESTART_PROMPT, "restart answer")?;
        state = SessionState::after_restart_answer(&answer);
        log::debug!("restart answer '{answer}' -> {state:?}");
    }
    Ok(())
}

/// loads one selection and prints its reports without prompting.
pub fn run_once<W: Write>(
    config: &ExplorerConfig,
    selection: &FilterSelection,
    output: &mut W,
) -> Result<(), BikeshareError> {
    writeln!(output, "{selection}")?;
    let dataset = loader::load_dataset(config, selection)?;
    report::write_all_reports(&dataset, output)
}
