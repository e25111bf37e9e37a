// Quiet hours - swaps in a placeholder image overnight
use crate::application::image_service::DashImageService;
use crate::domain::section::DashboardRequest;
use chrono::{Duration, Local, NaiveDateTime, Timelike};
use serde_json::json;

pub const QUIET_HOURS_MODULE: &str = "quiet_hours";
const NOTICE_COLOR: &str = "#909090";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuietHours {
    start: u32,
    end: u32,
}

impl QuietHours {
    pub fn new(start: u32, end: u32) -> Option<Self> {
        (start < 24 && end < 24).then_some(Self { start, end })
    }

    /// A window with `start > end` wraps past midnight.
    pub fn contains(&self, hour: u32) -> bool {
        if self.start > self.end {
            hour >= self.start || hour < self.end
        } else {
            (self.start..self.end).contains(&hour)
        }
    }

    /// The next top of the hour, strictly after `now`, at which the
    /// window opens or closes.
    pub fn next_transition(&self, now: NaiveDateTime) -> NaiveDateTime {
        let hour_start = now
            .with_minute(0)
            .and_then(|t| t.with_second(0))
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(now);
        (1..=24)
            .map(|h| hour_start + Duration::hours(h))
            .find(|t| t.hour() == self.start || t.hour() == self.end)
            .unwrap_or(hour_start + Duration::hours(24))
    }

    /// The placeholder shown while quiet hours are in effect.
    pub fn request(&self) -> DashboardRequest {
        let notice = |value: String| json!({"type": "text", "color": NOTICE_COLOR, "value": value});
        DashboardRequest::new(
            QUIET_HOURS_MODULE,
            "Quiet Hours",
            vec![
                notice("Quiet hours are in effect. Images won't be updated.".to_string()),
                notice(format!("Start time: {}:00", self.start)),
                notice(format!("End time: {}:00", self.end)),
            ],
        )
    }
}

/// Keeps the placeholder image in sync with the window, forever.
pub async fn run_quiet_hours(service: DashImageService, quiet_hours: QuietHours) {
    tracing::info!(?quiet_hours, "quiet hours scheduler started");
    loop {
        let now = Local::now().naive_local();

        if quiet_hours.contains(now.hour()) {
            if let Err(e) = service.create(&quiet_hours.request()).await {
                tracing::error!("Failed to create quiet hours image: {}", e);
            }
        } else {
            match service.delete(QUIET_HOURS_MODULE).await {
                Ok(()) => {}
                Err(e) if e.is_not_found() => tracing::debug!("no quiet hours image to delete"),
                Err(e) => tracing::error!("Failed to delete quiet hours image: {}", e),
            }
        }

        let wake = quiet_hours.next_transition(now);
        let wait = (wake - now).to_std().unwrap_or(std::time::Duration::from_secs(60));
        tracing::debug!(%wake, "quiet hours scheduler sleeping");
        tokio::time::sleep(wait).await;
    }
}
