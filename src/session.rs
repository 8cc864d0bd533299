//! The interactive explore loop: collect a selection, report on it, offer
//! the raw rows, then ask whether to start over.

use std::io::Write;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::analyzers::{self, duration_stats, station_stats, time_stats, user_stats};
use crate::config::CitySources;
use crate::dataset::Dataset;
use crate::error::SessionError;
use crate::filter::{FilterSpec, filter_trips};
use crate::loader::load_city;
use crate::output;
use crate::services::prompt::{Prompt, ask_yes_no, collect_filters, is_yes};
use crate::viewer::RowPager;

const RAW_QUESTION: &str = "Would you like to see individual trip data? Enter yes or no? ";
const MORE_QUESTION: &str = "Would you like to see more? Enter yes or no? ";
const NO_MORE_TRIPS: &str = "There is no more trip data for your selection.";
const RESTART_QUESTION: &str = "\nWould you like to restart? Enter yes or no.\n";

/// Where the session loop currently is.
#[derive(Debug)]
pub enum SessionState {
    /// Asking for a selection and loading its trips.
    Collecting,
    /// Running the aggregators and the raw row viewer over a filtered table.
    Reporting { spec: FilterSpec, trips: Dataset },
    /// Waiting for the restart answer.
    ConfirmRestart,
    Halted,
}

/// Drives the explore loop against a prompt and an output sink.
pub struct Session<P, W> {
    sources: CitySources,
    prompt: P,
    out: W,
    iterations: usize,
}

impl<P: Prompt, W: Write> Session<P, W> {
    pub fn new(sources: CitySources, prompt: P, out: W) -> Self {
        Self {
            sources,
            prompt,
            out,
            iterations: 0,
        }
    }

    /// Number of selections collected so far.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Runs until the user declines to restart.
    pub fn run(&mut self) -> Result<(), SessionError> {
        let mut state = SessionState::Collecting;
        while !matches!(state, SessionState::Halted) {
            state = self.step(state)?;
        }
        info!(iterations = self.iterations, "Session finished");
        Ok(())
    }

    /// Performs one transition of the state machine.
    pub fn step(&mut self, state: SessionState) -> Result<SessionState, SessionError> {
        match state {
            SessionState::Collecting => self.collect(),
            SessionState::Reporting { spec, trips } => {
                self.report(&spec, &trips)?;
                self.show_raw(&trips)?;
                Ok(SessionState::ConfirmRestart)
            }
            SessionState::ConfirmRestart => {
                let answer = self.prompt.ask(RESTART_QUESTION)?;
                if is_yes(&answer) {
                    Ok(SessionState::Collecting)
                } else {
                    Ok(SessionState::Halted)
                }
            }
            SessionState::Halted => Ok(SessionState::Halted),
        }
    }

    fn collect(&mut self) -> Result<SessionState, SessionError> {
        let spec = collect_filters(&mut self.prompt, &mut self.out, &self.sources)?;
        output::write_separator(&mut self.out)?;
        self.iterations += 1;
        info!(iteration = self.iterations, filter = %spec, "Selection collected");

        match load_city(&self.sources, &spec.city) {
            Ok(dataset) => {
                let trips = filter_trips(&dataset, &spec);
                Ok(SessionState::Reporting { spec, trips })
            }
            Err(e) => {
                warn!(error = %e, city = %spec.city, "Trip data unavailable");
                writeln!(self.out, "\nUnable to load trip data for {}: {e}", spec.city)?;
                Ok(SessionState::ConfirmRestart)
            }
        }
    }

    /// Writes all four report sections, each followed by its timing footer.
    pub fn report(&mut self, spec: &FilterSpec, trips: &Dataset) -> Result<(), SessionError> {
        debug!(filter = %spec, trips = trips.len(), "Reporting");

        let started = Instant::now();
        output::write_time_report(&mut self.out, &time_stats(trips))?;
        output::write_section_footer(&mut self.out, started.elapsed())?;

        let started = Instant::now();
        output::write_station_report(&mut self.out, &station_stats(trips))?;
        output::write_section_footer(&mut self.out, started.elapsed())?;

        let started = Instant::now();
        output::write_duration_report(&mut self.out, &duration_stats(trips))?;
        output::write_section_footer(&mut self.out, started.elapsed())?;

        let started = Instant::now();
        output::write_user_report(&mut self.out, &user_stats(trips))?;
        output::write_section_footer(&mut self.out, started.elapsed())?;
        Ok(())
    }

    /// Offers the filtered rows five at a time, asking after every page.
    /// Stops when the answer is not "yes" or once the offset has passed
    /// the last row.
    pub fn show_raw(&mut self, trips: &Dataset) -> Result<(), SessionError> {
        if !ask_yes_no(&mut self.prompt, &mut self.out, RAW_QUESTION)? {
            return Ok(());
        }

        let mut pager = RowPager::new(trips);
        loop {
            let page = pager.next_page();
            if page.is_empty() {
                writeln!(self.out, "{NO_MORE_TRIPS}")?;
            }
            for record in page {
                writeln!(self.out, "{}\n", trips.view(record))?;
            }
            if !is_yes(&self.prompt.ask(MORE_QUESTION)?) {
                return Ok(());
            }
            if pager.is_exhausted() {
                if !page.is_empty() {
                    writeln!(self.out, "{NO_MORE_TRIPS}")?;
                }
                return Ok(());
            }
        }
    }
}

/// Output format for a one-shot report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

/// Loads, filters and reports on a single selection without prompting.
/// With `raw`, every filtered row is written after the summary.
pub fn run_once(
    sources: &CitySources,
    spec: &FilterSpec,
    format: ReportFormat,
    raw: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let dataset = load_city(sources, &spec.city)?;
    let trips = filter_trips(&dataset, spec);
    let summary = analyzers::summarize(spec, &trips);

    match format {
        ReportFormat::Text => {
            writeln!(out, "Trips matching {spec}: {}", summary.trips)?;
            output::write_summary(out, &summary)?;
        }
        ReportFormat::Json => output::write_json(out, &summary)?,
    }

    if raw {
        for page in RowPager::new(&trips) {
            for record in page {
                writeln!(out, "{}\n", trips.view(record))?;
            }
        }
    }
    Ok(())
}
