use chrono::{DateTime, Duration, Utc};

use crate::response_vo::queue::QueueEntry;

pub struct NotificationDomain;

impl NotificationDomain {
    /// Signatories who still owe an approval and were not reminded within `cooldown`.
    ///
    /// Input order is kept and duplicates are dropped.
    pub fn recipients(
        entry: &QueueEntry,
        signatories: &[String],
        now: DateTime<Utc>,
        cooldown: Duration,
    ) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for signatory in signatories {
            if entry.has_approved(signatory) || out.contains(signatory) {
                continue;
            }
            let recently_notified = entry
                .notifications
                .get(signatory)
                .is_some_and(|at| multisig_utils::time::elapsed_since(*at, now) < cooldown);
            if recently_notified {
                continue;
            }
            out.push(signatory.clone());
        }
        out
    }
}
