//! Talk packing algorithm.
//!
//! Places the registered talk pool into track sessions.
//!
//! # Algorithm Summary
//!
//! 1. Clear every session so each pass starts from the full pool
//! 2. Sort fixed-length talks by minutes descending, ties by registration order
//! 3. Walk sessions in track order, morning before evening
//! 4. In each session take the longest remaining talk that still fits, repeatedly
//! 5. Give whatever gap is left to the earliest unplaced open-ended talk
//! 6. Report everything still unplaced, in registration order

use std::cmp::Reverse;
use std::collections::VecDeque;

use crate::talk::Talk;
use crate::track::Track;

/// Result of a scheduling pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleOutcome {
    /// Talks placed into some session.
    pub placed: usize,

    /// Talks that fit nowhere, in registration order.
    pub unscheduled: Vec<Talk>,

    /// Capacity left unused across all sessions, in minutes.
    pub idle_minutes: u64,
}

impl ScheduleOutcome {
    pub fn is_complete(&self) -> bool {
        self.unscheduled.is_empty()
    }
}

/// A placement policy.
///
/// Implementations overwrite session contents in place and must produce the
/// same placement when run again on the same tracks and talks.
pub trait Scheduler {
    fn schedule(&self, tracks: &mut [Track], talks: &[Talk]) -> ScheduleOutcome;
}

/// Greedy best-fit-decreasing packing, one session at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct BestFitDecreasing;

impl Scheduler for BestFitDecreasing {
    fn schedule(&self, tracks: &mut [Track], talks: &[Talk]) -> ScheduleOutcome {
        for track in tracks.iter_mut() {
            track.clear();
        }

        // Indices into `talks` keep registration order recoverable.
        let mut fixed: Vec<(usize, u32)> = talks
            .iter()
            .enumerate()
            .filter_map(|(i, talk)| talk.duration().effective_minutes().map(|m| (i, m)))
            .collect();
        fixed.sort_by_key(|&(i, minutes)| (Reverse(minutes), i));

        let mut open_ended: VecDeque<usize> = talks
            .iter()
            .enumerate()
            .filter(|(_, talk)| talk.duration().is_open_ended())
            .map(|(i, _)| i)
            .collect();

        let mut placed = 0;
        let mut idle_minutes = 0u64;

        for track in tracks.iter_mut() {
            let title = track.title().to_string();
            for session in track.sessions_mut() {
                // Remaining capacity only shrinks, so a talk skipped here
                // cannot fit later in the same session.
                fixed.retain(|&(i, _)| match session.try_place(&talks[i]) {
                    Ok(placement) => {
                        tracing::debug!(
                            track = %title,
                            session = %session.kind(),
                            topic = talks[i].topic(),
                            start = %placement.start,
                            remaining = placement.remaining,
                            "placed talk"
                        );
                        placed += 1;
                        false
                    }
                    Err(_) => true,
                });

                if let Some(&i) = open_ended.front() {
                    if let Ok(placement) = session.try_place(&talks[i]) {
                        tracing::debug!(
                            track = %title,
                            session = %session.kind(),
                            topic = talks[i].topic(),
                            start = %placement.start,
                            minutes = session.talks().last().map_or(0, |s| s.minutes),
                            "placed open-ended talk"
                        );
                        open_ended.pop_front();
                        placed += 1;
                    }
                }

                idle_minutes += u64::from(session.remaining());
            }
        }

        let mut leftover: Vec<usize> = fixed
            .into_iter()
            .map(|(i, _)| i)
            .chain(open_ended)
            .collect();
        leftover.sort_unstable();
        let unscheduled: Vec<Talk> = leftover.into_iter().map(|i| talks[i].clone()).collect();

        if unscheduled.is_empty() {
            tracing::info!(placed, idle_minutes, "all talks scheduled");
        } else {
            tracing::warn!(
                placed,
                unscheduled = unscheduled.len(),
                "some talks did not fit any session"
            );
        }

        ScheduleOutcome {
            placed,
            unscheduled,
            idle_minutes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{TrackConfig, Window};
    use crate::duration::Duration;
    use crate::session::Session;
    use chrono::NaiveTime;

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn track(title: &str, morning: (u32, u32), evening: (u32, u32)) -> Track {
        let config = TrackConfig {
            title: title.to_string(),
            morning: Window::from_hm((9, 0), morning).unwrap(),
            lunch: Window::from_hm(morning, (morning.0 + 1, morning.1)).unwrap(),
            evening: Window::from_hm((morning.0 + 1, morning.1), evening).unwrap(),
            networking: at(evening.0, evening.1),
        };
        Track::from_config(&config).unwrap()
    }

    /// 180-minute morning (09:00-12:00) and 180-minute evening (13:00-16:00).
    fn short_track(title: &str) -> Track {
        track(title, (12, 0), (16, 0))
    }

    fn talk(topic: &str, minutes: u32) -> Talk {
        Talk::new(topic, Duration::minutes(minutes)).unwrap()
    }

    fn topics(session: &Session) -> Vec<&str> {
        session.talks().iter().map(|s| s.talk.topic()).collect()
    }

    fn all_placed_topics(tracks: &[Track]) -> Vec<String> {
        tracks
            .iter()
            .flat_map(Track::sessions)
            .flat_map(|s| s.talks().iter().map(|t| t.talk.topic().to_string()))
            .collect()
    }

    #[test]
    fn five_hour_talks_fit_two_tracks() {
        let mut tracks = vec![short_track("Track 1"), short_track("Track 2")];
        let talks: Vec<Talk> = (1..=5).map(|i| talk(&format!("Talk {i}"), 60)).collect();

        let outcome = BestFitDecreasing.schedule(&mut tracks, &talks);

        assert!(outcome.is_complete());
        assert_eq!(outcome.placed, 5);
        assert_eq!(topics(tracks[0].morning()), vec!["Talk 1", "Talk 2", "Talk 3"]);
        assert_eq!(topics(tracks[0].evening()), vec!["Talk 4", "Talk 5"]);
        assert!(tracks[1].morning().talks().is_empty());
        assert_eq!(outcome.idle_minutes, 60 + 180 + 180);
    }

    #[test]
    fn open_ended_takes_the_rest_of_the_session() {
        let mut tracks = vec![short_track("Track 1")];
        let talks = vec![
            Talk::new("Open Panel", Duration::open_ended()).unwrap(),
            talk("Keynote", 60),
        ];

        let outcome = BestFitDecreasing.schedule(&mut tracks, &talks);

        assert!(outcome.is_complete());
        let morning = tracks[0].morning().talks();
        assert_eq!(morning[0].talk.topic(), "Keynote");
        assert_eq!(morning[1].talk.topic(), "Open Panel");
        assert_eq!(morning[1].minutes, 120);
        assert_eq!(morning[1].start, at(10, 0));
        assert!(tracks[0].evening().talks().is_empty());
    }

    #[test]
    fn talk_too_long_for_morning_lands_in_evening() {
        // Morning 09:00-10:00, evening 11:00-14:00.
        let mut tracks = vec![track("Tiny", (10, 0), (14, 0))];
        let talks = vec![talk("Marathon", 90)];

        let outcome = BestFitDecreasing.schedule(&mut tracks, &talks);

        assert_eq!(outcome.placed, 1);
        assert!(tracks[0].morning().talks().is_empty());
        assert_eq!(topics(tracks[0].evening()), vec!["Marathon"]);
    }

    #[test]
    fn talk_longer_than_every_session_is_unscheduled() {
        // Both sessions hold 60 minutes.
        let mut tracks = vec![track("Tiny", (10, 0), (12, 0))];
        let talks = vec![talk("Marathon", 90)];

        let outcome = BestFitDecreasing.schedule(&mut tracks, &talks);

        assert_eq!(outcome.placed, 0);
        assert_eq!(outcome.unscheduled, talks);
        assert!(tracks[0].morning().talks().is_empty());
        assert!(tracks[0].evening().talks().is_empty());
    }

    #[test]
    fn longest_first_with_registration_tiebreak() {
        let mut tracks = vec![short_track("Track 1")];
        let talks = vec![
            talk("Short A", 30),
            talk("Long", 90),
            talk("Short B", 30),
            talk("Medium", 45),
        ];

        BestFitDecreasing.schedule(&mut tracks, &talks);

        assert_eq!(
            topics(tracks[0].morning()),
            vec!["Long", "Medium", "Short A"]
        );
        assert_eq!(topics(tracks[0].evening()), vec!["Short B"]);
        let starts: Vec<_> = tracks[0].morning().talks().iter().map(|s| s.start).collect();
        assert_eq!(starts, vec![at(9, 0), at(10, 30), at(11, 15)]);
    }

    #[test]
    fn skipped_talk_retries_in_later_session() {
        let mut tracks = vec![short_track("Track 1")];
        let talks = vec![talk("Big", 120), talk("Bigger", 150)];

        BestFitDecreasing.schedule(&mut tracks, &talks);

        assert_eq!(topics(tracks[0].morning()), vec!["Bigger"]);
        assert_eq!(topics(tracks[0].evening()), vec!["Big"]);
    }

    #[test]
    fn rerun_gives_identical_placement() {
        let mut tracks = vec![short_track("Track 1"), short_track("Track 2")];
        let talks = vec![
            talk("A", 60),
            talk("B", 45),
            Talk::new("C", Duration::lightning()).unwrap(),
            talk("D", 30),
            Talk::new("E", Duration::open_ended()).unwrap(),
            talk("F", 200),
        ];

        let first = BestFitDecreasing.schedule(&mut tracks, &talks);
        let snapshot = tracks.clone();
        let second = BestFitDecreasing.schedule(&mut tracks, &talks);

        assert_eq!(first, second);
        assert_eq!(snapshot, tracks);
    }

    #[test]
    fn every_talk_accounted_for_exactly_once() {
        let mut tracks = vec![short_track("Track 1"), short_track("Track 2")];
        let mut talks: Vec<Talk> = (0..20)
            .map(|i| talk(&format!("Talk {i}"), 15 + (i * 17) % 80))
            .collect();
        talks.push(Talk::new("Open 1", Duration::open_ended()).unwrap());
        talks.push(Talk::new("Open 2", Duration::open_ended()).unwrap());
        talks.push(talk("Too Long", 400));

        let outcome = BestFitDecreasing.schedule(&mut tracks, &talks);

        let mut seen = all_placed_topics(&tracks);
        seen.extend(outcome.unscheduled.iter().map(|t| t.topic().to_string()));
        seen.sort();
        let mut expected: Vec<String> = talks.iter().map(|t| t.topic().to_string()).collect();
        expected.sort();
        assert_eq!(seen, expected);
        assert_eq!(outcome.placed + outcome.unscheduled.len(), talks.len());
        assert!(outcome.unscheduled.iter().any(|t| t.topic() == "Too Long"));
    }

    #[test]
    fn sessions_never_overflow() {
        let mut tracks = vec![short_track("Track 1"), short_track("Track 2")];
        let mut talks: Vec<Talk> = (0..30)
            .map(|i| talk(&format!("Talk {i}"), 5 + (i * 13) % 70))
            .collect();
        talks.push(Talk::new("Open", Duration::open_ended()).unwrap());

        BestFitDecreasing.schedule(&mut tracks, &talks);

        for session in tracks.iter().flat_map(Track::sessions) {
            let used: u32 = session.talks().iter().map(|s| s.minutes).sum();
            assert!(used <= session.capacity());
            let open = session
                .talks()
                .iter()
                .filter(|s| s.talk.duration().is_open_ended())
                .count();
            assert!(open <= 1);
            if open == 1 {
                assert_eq!(used, session.capacity());
            }
        }
    }

    #[test]
    fn one_open_ended_talk_per_session() {
        let mut tracks = vec![short_track("Track 1")];
        let talks = vec![
            Talk::new("Open 1", Duration::open_ended()).unwrap(),
            Talk::new("Open 2", Duration::open_ended()).unwrap(),
            Talk::new("Open 3", Duration::open_ended()).unwrap(),
        ];

        let outcome = BestFitDecreasing.schedule(&mut tracks, &talks);

        assert_eq!(topics(tracks[0].morning()), vec!["Open 1"]);
        assert_eq!(topics(tracks[0].evening()), vec!["Open 2"]);
        assert_eq!(outcome.unscheduled.len(), 1);
        assert_eq!(outcome.unscheduled[0].topic(), "Open 3");
        assert_eq!(outcome.idle_minutes, 0);
    }

    #[test]
    fn open_ended_skips_full_session() {
        let mut tracks = vec![short_track("Track 1")];
        let talks = vec![
            talk("Fills Morning", 180),
            Talk::new("Open", Duration::open_ended()).unwrap(),
        ];

        BestFitDecreasing.schedule(&mut tracks, &talks);

        assert_eq!(topics(tracks[0].morning()), vec!["Fills Morning"]);
        assert_eq!(topics(tracks[0].evening()), vec!["Open"]);
        assert_eq!(tracks[0].evening().talks()[0].minutes, 180);
    }

    #[test]
    fn zero_length_talks_go_last() {
        let mut tracks = vec![short_track("Track 1")];
        let talks = vec![talk("Welcome", 0), talk("Keynote", 180)];

        let outcome = BestFitDecreasing.schedule(&mut tracks, &talks);

        assert!(outcome.is_complete());
        assert_eq!(topics(tracks[0].morning()), vec!["Keynote", "Welcome"]);
        assert_eq!(tracks[0].morning().talks()[1].start, at(12, 0));
    }

    #[test]
    fn empty_pool_leaves_sessions_empty() {
        let mut tracks = vec![short_track("Track 1")];
        let outcome = BestFitDecreasing.schedule(&mut tracks, &[]);
        assert_eq!(outcome.placed, 0);
        assert!(outcome.is_complete());
        assert_eq!(outcome.idle_minutes, 360);
    }
}
