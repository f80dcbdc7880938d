//! Elapsed-time tally
//!
//! Accumulates laps from a starting timestamp. Exercises the conversions
//! between `Duration`, `Timestamp` and `Clock` in one place.

use horae_time::{Clock, Duration, Seconds, Timestamp};

pub struct ElapsedTally {
    /// Instant the tally started at
    start: Timestamp<Seconds>,
    /// Recorded laps, in order
    laps: Vec<Duration<Seconds>>,
}

impl ElapsedTally {
    pub fn new(start: Timestamp<Seconds>) -> Self {
        ElapsedTally {
            start,
            laps: Vec::new(),
        }
    }

    pub fn record(&mut self, lap: Duration<Seconds>) {
        self.laps.push(lap);
    }

    pub fn laps(&self) -> &[Duration<Seconds>] {
        &self.laps
    }

    pub fn elapsed(&self) -> Duration<Seconds> {
        self.laps.iter().copied().sum()
    }

    /// Start plus everything recorded so far
    pub fn now(&self) -> Timestamp<Seconds> {
        self.start + self.elapsed().as_secs()
    }

    /// Elapsed time split into h:m:s
    pub fn clock(&self) -> Clock<Seconds> {
        Clock::from_duration(self.elapsed())
    }

    /// Lap clocks added field by field; minutes and seconds may exceed 59
    pub fn lap_clock_sum(&self) -> Clock<Seconds> {
        self.laps
            .iter()
            .map(|&lap| Clock::from_duration(lap))
            .fold(Clock::ZERO, |acc, lap| acc + lap)
    }

    /// Longest lap, if any
    pub fn longest_lap(&self) -> Option<Duration<Seconds>> {
        self.laps.iter().copied().max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horae_time::HighPrecision;

    #[test]
    fn test_tally_clock_normalizes() {
        let mut tally = ElapsedTally::new(Timestamp::EPOCH);
        tally.record(Duration::from_minutes(50));
        tally.record(Duration::from_minutes(20));
        tally.record(Duration::from_millis(30_500));

        let clock = tally.clock();
        assert_eq!((clock.hours(), clock.minutes()), (1, 10));
        assert_eq!(clock.to_string(), "01:10:30.500000000");
        assert_eq!(tally.elapsed().to_string(), "4230.5s");
    }

    #[test]
    fn test_lap_sum_keeps_raw_fields() {
        let mut tally = ElapsedTally::new(Timestamp::EPOCH);
        tally.record(Duration::from_minutes(50));
        tally.record(Duration::from_minutes(20));

        let summed = tally.lap_clock_sum();
        assert_eq!((summed.hours(), summed.minutes()), (0, 70));
        // Same span as the normalized clock
        assert_eq!(summed, tally.clock());
    }

    #[test]
    fn test_now_moves_with_laps() {
        let start = Timestamp::from_epoch_offset(Seconds::from_i64(1_000));
        let mut tally = ElapsedTally::new(start);
        assert_eq!(tally.now(), start);

        tally.record(Duration::from_secs(30));
        tally.record(Duration::from_secs(-10));
        assert_eq!(tally.now() - start, Seconds::from_i64(20));
        assert_eq!(Duration::from_timestamp(tally.now()), Duration::from_secs(1_020));
        assert_eq!(tally.longest_lap(), Some(Duration::from_secs(30)));
        assert_eq!(tally.laps().len(), 2);
    }
}
