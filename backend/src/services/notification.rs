//! Notification sink for inquiry workflow events
//!
//! The workflow treats notifications as fire-and-forget: sink failures are
//! logged at warn level and never roll back the transition that fired them.
//! The real timeline/activity backend lives outside this crate; embedders
//! implement the trait against it.

use uuid::Uuid;

/// Receives workflow messages for an inquiry, optionally with a follow-up
/// reminder for the operator's activity queue.
pub trait NotificationSink {
    fn notify(
        &mut self,
        inquiry_id: Uuid,
        message: &str,
        reminder_summary: Option<&str>,
    ) -> Result<(), String>;
}

/// Logs every notification through `tracing`; the default sink for embedders
/// without a timeline backend wired yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingNotifier;

impl NotificationSink for LoggingNotifier {
    fn notify(
        &mut self,
        inquiry_id: Uuid,
        message: &str,
        reminder_summary: Option<&str>,
    ) -> Result<(), String> {
        tracing::info!(%inquiry_id, message, ?reminder_summary, "inquiry notification");
        Ok(())
    }
}

/// One captured notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentNotification {
    pub inquiry_id: Uuid,
    pub message: String,
    pub reminder_summary: Option<String>,
}

/// Captures notifications in memory, in order of emission
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub sent: Vec<SentNotification>,
}

impl NotificationSink for RecordingNotifier {
    fn notify(
        &mut self,
        inquiry_id: Uuid,
        message: &str,
        reminder_summary: Option<&str>,
    ) -> Result<(), String> {
        self.sent.push(SentNotification {
            inquiry_id,
            message: message.to_string(),
            reminder_summary: reminder_summary.map(str::to_string),
        });
        Ok(())
    }
}

/// Always fails; exercises the swallow-and-log path
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingNotifier;

impl NotificationSink for FailingNotifier {
    fn notify(&mut self, _: Uuid, _: &str, _: Option<&str>) -> Result<(), String> {
        Err("notification sink unavailable".to_string())
    }
}
