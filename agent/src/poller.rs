//! The polling loop: fetch, validate, notify, advance, sleep.
//!
//! # Design
//! One cycle is `run_cycle`, which never fails: any error from the fetch,
//! validation or formatting steps is logged, reported to the chat and turned
//! into `CycleOutcome::Failed`. The cursor moves only when a response has
//! passed validation and its first record was formatted. `run` repeats cycles
//! forever with a fixed blocking sleep in between.

use std::time::Duration;

use homework_core::{
    format_failure, format_status, validate_response, EmptyHomeworks, PracticumClient,
};
use serde_json::Value;

use crate::config::Config;
use crate::error::PollError;
use crate::notifier::Notifier;
use crate::transport::Transport;

/// What a single cycle did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A status change was found and this text was sent.
    Notified(String),
    /// The response held no records.
    NoUpdates,
    /// The cycle failed and this diagnostic was sent instead.
    Failed(String),
}

pub struct Poller<T> {
    transport: T,
    practicum: PracticumClient,
    notifier: Notifier<T>,
    cursor: i64,
    interval: Duration,
    empty_homeworks: EmptyHomeworks,
}

impl<T: Transport + Clone> Poller<T> {
    /// `start` is the initial `from_date`, normally the current Unix time.
    pub fn new(config: &Config, transport: T, start: i64) -> Self {
        Self {
            notifier: Notifier::new(config, transport.clone()),
            transport,
            practicum: PracticumClient::new(&config.practicum_endpoint, &config.practicum_token),
            cursor: start,
            interval: config.retry_interval,
            empty_homeworks: config.empty_homeworks,
        }
    }

    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Poll forever. Only an external signal stops the process.
    pub fn run(&mut self) -> ! {
        tracing::info!(
            from_date = self.cursor,
            interval_secs = self.interval.as_secs(),
            "Polling homework statuses"
        );
        loop {
            self.run_cycle();
            std::thread::sleep(self.interval);
        }
    }

    pub fn run_cycle(&mut self) -> CycleOutcome {
        match self.check_statuses() {
            Ok(outcome) => {
                tracing::info!(cursor = self.cursor, "Poll cycle complete");
                outcome
            }
            Err(err) => {
                tracing::error!(error = %err, cursor = self.cursor, "Poll cycle failed");
                let message = format_failure(&err);
                self.notifier.notify(&message);
                CycleOutcome::Failed(message)
            }
        }
    }

    fn check_statuses(&mut self) -> Result<CycleOutcome, PollError> {
        let body = self.fetch()?;
        let validated = validate_response(&body, self.empty_homeworks)?;

        let outcome = match validated.homeworks.first() {
            Some(record) => {
                let message = format_status(record)?;
                self.notifier.notify(&message);
                CycleOutcome::Notified(message)
            }
            None => {
                tracing::debug!("No new statuses");
                CycleOutcome::NoUpdates
            }
        };

        self.cursor = validated.current_date;
        Ok(outcome)
    }

    fn fetch(&self) -> Result<Value, PollError> {
        let request = self.practicum.build_homework_statuses(self.cursor);
        let response = self.transport.execute(&request)?;
        Ok(self.practicum.parse_homework_statuses(response)?)
    }
}
