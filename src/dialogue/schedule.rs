//! Scheduled feedback events, released once their delay has elapsed.
use std::time::Duration;

use bevy::prelude::*;

use super::types::FeedbackTicket;

#[derive(Debug)]
struct ScheduledFeedback {
    ticket: FeedbackTicket,
    remaining: Duration,
}

/// One-shot timers for feedback windows. Advanced only between state updates,
/// so a fired ticket is always handled on the main tick, never mid-pass.
#[derive(Resource, Debug, Default)]
pub struct FeedbackSchedule {
    pending: Vec<ScheduledFeedback>,
}

impl FeedbackSchedule {
    pub fn schedule(&mut self, ticket: FeedbackTicket, delay: Duration) {
        self.pending.push(ScheduledFeedback {
            ticket,
            remaining: delay,
        });
    }

    /// Advances all timers and returns the tickets that came due, in the
    /// order they were scheduled.
    pub fn advance(&mut self, delta: Duration) -> Vec<FeedbackTicket> {
        let mut fired = Vec::new();
        let mut still_pending = Vec::with_capacity(self.pending.len());
        for mut entry in self.pending.drain(..) {
            entry.remaining = entry.remaining.saturating_sub(delta);
            if entry.remaining.is_zero() {
                fired.push(entry.ticket);
            } else {
                still_pending.push(entry);
            }
        }
        self.pending = still_pending;
        fired
    }

    /// Drops every outstanding timer and returns how many were cancelled.
    pub fn cancel_all(&mut self) -> usize {
        let cancelled = self.pending.len();
        self.pending.clear();
        cancelled
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
