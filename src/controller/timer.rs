use chrono::{DateTime, Duration as ChronoDuration, Utc};

use crate::model::{MAX_HOLES, format_elapsed};

/// Pace-of-play stopwatch with a duration bucket per hole.
///
/// The timer never reads the clock itself; callers pass `now`. Time of the
/// running segment is charged to the hole that was current when the segment
/// started.
#[derive(Debug, Clone)]
pub struct PaceTimer {
    started_at: Option<DateTime<Utc>>,
    hole: usize,
    hole_seconds: Vec<i64>,
}

impl Default for PaceTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl PaceTimer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            started_at: None,
            hole: 1,
            hole_seconds: vec![0; MAX_HOLES as usize],
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Starts timing `hole` (1-based). Starting a running timer only moves it
    /// to `hole`.
    pub fn start(&mut self, now: DateTime<Utc>, hole: usize) {
        if self.is_running() {
            self.switch_hole(now, hole);
            return;
        }
        self.hole = self.bucket_hole(hole);
        self.started_at = Some(now);
    }

    /// Folds the running segment into the current hole and halts. Stopping a
    /// stopped timer does nothing.
    pub fn stop(&mut self, now: DateTime<Utc>) {
        self.fold(now);
        self.started_at = None;
    }

    /// Charges time so far to the old hole and continues on `hole`.
    pub fn switch_hole(&mut self, now: DateTime<Utc>, hole: usize) {
        let hole = self.bucket_hole(hole);
        if hole == self.hole {
            return;
        }
        if self.is_running() {
            self.fold(now);
            self.started_at = Some(now);
        }
        self.hole = hole;
    }

    /// Total elapsed time including the running segment.
    #[must_use]
    pub fn tick(&self, now: DateTime<Utc>) -> ChronoDuration {
        let folded: i64 = self.hole_seconds.iter().sum();
        ChronoDuration::seconds(folded) + self.running(now)
    }

    /// Time spent on `hole` (1-based), including the running segment when it
    /// belongs to that hole.
    #[must_use]
    pub fn hole_duration(&self, now: DateTime<Utc>, hole: usize) -> ChronoDuration {
        let Some(&secs) = hole.checked_sub(1).and_then(|i| self.hole_seconds.get(i)) else {
            return ChronoDuration::zero();
        };
        let mut total = ChronoDuration::seconds(secs);
        if hole == self.hole {
            total += self.running(now);
        }
        total
    }

    /// Average time per hole over the holes that have any time recorded.
    #[must_use]
    pub fn average_per_hole(&self, now: DateTime<Utc>) -> Option<ChronoDuration> {
        let timed = (1..=self.hole_seconds.len())
            .filter(|&h| self.hole_duration(now, h) > ChronoDuration::zero())
            .count();
        let timed = i32::try_from(timed).ok().filter(|&n| n > 0)?;
        Some(self.tick(now) / timed)
    }

    /// One-line status for the UI, e.g. `running 12:41 (hole 4: 3:10, avg 4:14)`.
    /// The average is left out until some hole has time on it.
    #[must_use]
    pub fn status(&self, now: DateTime<Utc>) -> String {
        let state = if self.is_running() { "running" } else { "stopped" };
        let average = self
            .average_per_hole(now)
            .map(|avg| format!(", avg {}", format_elapsed(avg)))
            .unwrap_or_default();
        format!(
            "{state} {} (hole {}: {}{average})",
            format_elapsed(self.tick(now)),
            self.hole,
            format_elapsed(self.hole_duration(now, self.hole))
        )
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn running(&self, now: DateTime<Utc>) -> ChronoDuration {
        match self.started_at {
            Some(start) if now > start => now - start,
            _ => ChronoDuration::zero(),
        }
    }

    fn fold(&mut self, now: DateTime<Utc>) {
        let secs = self.running(now).num_seconds();
        if let Some(bucket) = self.hole_seconds.get_mut(self.hole - 1) {
            *bucket += secs;
        }
        if self.started_at.is_some() {
            self.started_at = Some(now);
        }
    }

    fn bucket_hole(&self, hole: usize) -> usize {
        hole.clamp(1, self.hole_seconds.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn switching_holes_splits_time() {
        let mut timer = PaceTimer::new();
        timer.start(at(0), 1);
        timer.switch_hole(at(300), 2);
        timer.stop(at(420));
        assert_eq!(timer.hole_duration(at(999), 1).num_seconds(), 300);
        assert_eq!(timer.hole_duration(at(999), 2).num_seconds(), 120);
        assert_eq!(timer.tick(at(999)).num_seconds(), 420);
        assert_eq!(timer.average_per_hole(at(999)).map(|d| d.num_seconds()), Some(210));
    }

    #[test]
    fn stop_is_idempotent() {
        let mut timer = PaceTimer::new();
        assert_eq!(timer.average_per_hole(at(0)), None);
        timer.start(at(0), 3);
        timer.stop(at(60));
        timer.stop(at(500));
        assert!(!timer.is_running());
        assert_eq!(timer.hole_duration(at(900), 3).num_seconds(), 60);
        assert_eq!(timer.status(at(900)), "stopped 1:00 (hole 3: 1:00, avg 1:00)");
    }
}
