//! Periodic backend health check.
//!
//! The backend sleeps when idle on some hosts, so the client pings
//! `GET /health` every few minutes and shows the result as a status dot.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use flume::{Receiver, Sender};
use log::{error, info, warn};

use crate::{BusinessConfig, FetchService};

/// Minutes between two pings while the backend is healthy.
pub const CHECK_INTERVAL_MINUTES: i64 = 5;

/// Minutes before retrying after a failed ping.
pub const RETRY_INTERVAL_MINUTES: i64 = 1;

pub enum APIAvailability<'a> {
    Available(DateTime<Utc>),
    Unavailable((DateTime<Utc>, &'a str)),
    Unknown,
}

#[derive(Debug)]
struct HealthReport {
    checked_at: DateTime<Utc>,
    error: Option<String>,
}

#[derive(Debug)]
pub struct ApiStatus {
    config: BusinessConfig,
    fetcher: Arc<dyn FetchService>,
    last_update_time: Option<DateTime<Utc>>,
    // None after a successful ping
    last_error: Option<String>,
    checking: bool,
    sender: Sender<HealthReport>,
    receiver: Receiver<HealthReport>,
    repaint: Option<egui::Context>,
}

impl ApiStatus {
    pub fn new(config: BusinessConfig, fetcher: Arc<dyn FetchService>) -> Self {
        let (sender, receiver) = flume::unbounded();
        Self {
            config,
            fetcher,
            last_update_time: None,
            last_error: None,
            checking: false,
            sender,
            receiver,
            repaint: None,
        }
    }

    pub fn set_repaint(&mut self, ctx: egui::Context) {
        self.repaint = Some(ctx);
    }

    pub fn api_availability(&self) -> APIAvailability<'_> {
        match (self.last_update_time, &self.last_error) {
            (Some(time), None) => APIAvailability::Available(time),
            (Some(time), Some(err)) => APIAvailability::Unavailable((time, err.as_str())),
            (None, _) => APIAvailability::Unknown,
        }
    }

    pub fn is_checking(&self) -> bool {
        self.checking
    }

    pub fn should_check(&self, now: DateTime<Utc>) -> bool {
        if self.checking {
            return false;
        }
        match self.last_update_time {
            None => true,
            Some(last) => {
                let interval = if self.last_error.is_some() {
                    RETRY_INTERVAL_MINUTES
                } else {
                    CHECK_INTERVAL_MINUTES
                };
                now.signed_duration_since(last) >= Duration::minutes(interval)
            }
        }
    }

    /// Applies finished pings, then starts a new one if it is due.
    ///
    /// Call once per frame.
    pub fn poll(&mut self, now: DateTime<Utc>) {
        self.sync();
        if self.should_check(now) {
            self.check(now);
        }
    }

    pub fn sync(&mut self) {
        while let Ok(report) = self.receiver.try_recv() {
            self.checking = false;
            self.last_update_time = Some(report.checked_at);
            self.last_error = report.error;
        }
    }

    pub fn check(&mut self, now: DateTime<Utc>) {
        let url = self.config.health_url();
        info!("Pinging backend health at {url}");
        self.checking = true;

        let sender = self.sender.clone();
        let repaint = self.repaint.clone();
        self.fetcher.fetch(
            ehttp::Request::get(&url),
            Box::new(move |result| {
                let error = match result {
                    Ok(response) if response.status == 200 => {
                        info!("Backend available, checked at {now:?}");
                        None
                    }
                    Ok(response) => {
                        warn!("Backend health returned status {}", response.status);
                        Some(format!("status {}", response.status))
                    }
                    Err(err) => {
                        error!("Backend health check failed: {err}");
                        Some(err)
                    }
                };
                let _ = sender.send(HealthReport {
                    checked_at: now,
                    error,
                });
                if let Some(ctx) = repaint {
                    ctx.request_repaint();
                }
            }),
        );
    }
}
