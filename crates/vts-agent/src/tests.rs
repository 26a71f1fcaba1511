//! Unit tests for vts-agent.

use vts_core::{ElevatorId, Floor, RiderId, SimRng, SimTime};

use crate::{CabinSpec, DEFAULT_RELIABILITY, Elevator, Lobbies, Rider, SCORE_MAX, SCORE_MIN};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn spec(capacity: u32) -> CabinSpec {
    CabinSpec {
        capacity,
        speed:       3.0,
        door_time:   10.6,
        reliability: DEFAULT_RELIABILITY,
        vibration:   1.01,
        noise:       55.9,
    }
}

fn rider(id: u32, origin: u32, destination: u32, at: f64) -> Rider {
    Rider::new(RiderId(id), Floor(origin), Floor(destination), SimTime(at))
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ── Rider ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod riders {
    use super::*;
    use crate::rider::satisfaction_for_wait;

    #[test]
    fn new_rider_is_waiting() {
        let r = rider(0, 2, 5, 3.0);
        assert_eq!(r.wait_start, SimTime(3.0));
        assert!(!r.is_aboard());
        assert_eq!(r.comfort(), None);
    }

    #[test]
    #[should_panic(expected = "different floor")]
    fn same_floor_journey_panics() {
        rider(0, 2, 2, 0.0);
    }

    #[test]
    fn satisfaction_drops_one_point_per_minute() {
        assert_eq!(satisfaction_for_wait(0.0), 5.0);
        assert!(approx(satisfaction_for_wait(90.0), 3.5));
        assert_eq!(satisfaction_for_wait(240.0), 1.0);
        assert_eq!(satisfaction_for_wait(10_000.0), 1.0);
    }

    #[test]
    fn completed_record_is_consistent() {
        let mut r = rider(4, 0, 3, 5.0);
        r.board(SimTime(35.0));
        r.set_comfort(9.0); // clamped
        let done = r.alight(SimTime(50.0));
        assert_eq!(done.id, RiderId(4));
        assert!(approx(done.wait_time, 30.0));
        assert!(approx(done.travel_time, 15.0));
        assert!(approx(done.journey_time, 45.0));
        assert!(approx(done.wait_time + done.travel_time, done.journey_time));
        assert!(approx(done.satisfaction, 4.5));
        assert_eq!(done.perceived_quality, SCORE_MAX);
        assert!(done.wait_start <= done.enter_time && done.enter_time <= done.exit_time);
    }
}

// ── Elevator ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod elevator {
    use super::*;

    #[test]
    fn starts_on_ground_floor_empty() {
        let e = Elevator::new(ElevatorId(0), &spec(16));
        assert_eq!(e.current_floor(), Floor::GROUND);
        assert_eq!(e.passenger_count(), 0);
        assert_eq!(e.free_space(), 16);
        assert_eq!(e.load_factor(), 0.0);
        assert!(!e.is_idle());
    }

    #[test]
    fn request_wakes_idle_car_and_queues_otherwise() {
        let mut e = Elevator::new(ElevatorId(0), &spec(8));

        // Busy (not yet waiting): requests queue up in order.
        assert_eq!(e.request(Floor(3)), None);
        assert_eq!(e.request(Floor(1)), None);
        assert_eq!(e.pending_requests().collect::<Vec<_>>(), vec![Floor(3), Floor(1)]);

        assert_eq!(e.next_request(), Some(Floor(3)));
        assert_eq!(e.next_request(), Some(Floor(1)));
        assert!(!e.is_idle());

        // Queue drained: the car blocks, and the next request is handed over.
        assert_eq!(e.next_request(), None);
        assert!(e.is_idle());
        assert_eq!(e.request(Floor(4)), Some(Floor(4)));
        assert!(!e.is_idle());
        assert_eq!(e.pending_requests().count(), 0);
    }

    #[test]
    fn move_time_without_slowdown() {
        let mut s = spec(8);
        s.reliability = 1.0;
        let mut e = Elevator::new(ElevatorId(0), &s);
        let mut rng = SimRng::new(1);

        let m = e.plan_move(Floor(1), &mut rng);
        assert!(approx(m.duration, 3.5 / 3.0));
        assert_eq!(m.slowdown, None);

        let m = e.plan_move(Floor(4), &mut rng);
        assert!(approx(m.duration, 4.0 * 3.5 / 3.0));

        e.arrive(Floor(4));
        let m = e.plan_move(Floor(4), &mut rng);
        assert_eq!(m.duration, 0.0);
    }

    #[test]
    fn unreliable_car_always_slows_down_within_bounds() {
        let mut s = spec(8);
        s.reliability = 0.0;
        let e = Elevator::new(ElevatorId(0), &s);
        let mut rng = SimRng::new(9);
        for _ in 0..200 {
            let m = e.plan_move(Floor(2), &mut rng);
            let extra = m.slowdown.expect("reliability 0 always slows down");
            assert!((10.0..=30.0).contains(&extra));
            assert!(approx(m.duration, 2.0 * 3.5 / 3.0 + extra));
        }
    }

    #[test]
    fn slowdown_frequency_tracks_reliability() {
        let e = Elevator::new(ElevatorId(0), &spec(8));
        let mut rng = SimRng::new(5);
        let n = 20_000;
        let slowed = (0..n).filter(|_| e.plan_move(Floor(1), &mut rng).slowdown.is_some()).count();
        let rate = slowed as f64 / n as f64;
        assert!((rate - 0.03).abs() < 0.01, "slowdown rate {rate}");
    }

    #[test]
    fn board_unload_and_keep_order() {
        let mut e = Elevator::new(ElevatorId(0), &spec(8));
        let mut rng = SimRng::new(2);
        e.board(vec![rider(0, 0, 3, 0.0), rider(1, 0, 2, 1.0), rider(2, 0, 3, 2.0)], SimTime(5.0));
        e.refresh_comfort(&mut rng);
        assert_eq!(e.passenger_count(), 3);

        e.arrive(Floor(3));
        let out = e.unload(Floor(3), SimTime(9.0));
        let ids: Vec<_> = out.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![RiderId(0), RiderId(2)]);
        assert_eq!(e.passengers()[0].id, RiderId(1));

        // Nobody bound for floor 5.
        assert!(e.unload(Floor(5), SimTime(10.0)).is_empty());
        assert_eq!(e.passenger_count(), 1);
    }

    #[test]
    #[should_panic(expected = "cannot board")]
    fn boarding_past_capacity_panics() {
        let mut e = Elevator::new(ElevatorId(0), &spec(1));
        e.board(vec![rider(0, 0, 1, 0.0), rider(1, 0, 1, 0.0)], SimTime(1.0));
    }

    #[test]
    fn comfort_is_clamped_and_varies_between_passengers() {
        let mut s = spec(10);
        s.vibration = 3.0;
        s.noise = 80.0;
        let mut e = Elevator::new(ElevatorId(0), &s);
        let mut rng = SimRng::new(11);
        let riders = (0..10).map(|i| rider(i, 0, 1 + i % 4, 0.0)).collect();
        e.board(riders, SimTime(1.0));

        // base = 5 - 3 - 4.5 - 4 → far below 1, so everyone clamps to the floor.
        assert!(e.comfort_base() < SCORE_MIN);
        e.refresh_comfort(&mut rng);
        assert!(e.passengers().iter().all(|r| r.comfort() == Some(SCORE_MIN)));

        let mut calm = Elevator::new(ElevatorId(1), &CabinSpec { vibration: 0.5, noise: 40.0, ..spec(30) });
        calm.board(vec![rider(20, 0, 1, 0.0), rider(21, 0, 2, 0.0), rider(22, 0, 3, 0.0)], SimTime(1.0));
        calm.refresh_comfort(&mut rng);
        let readings: Vec<f64> = calm.passengers().iter().filter_map(|r| r.comfort()).collect();
        assert_eq!(readings.len(), 3);
        assert!(readings.iter().all(|c| (SCORE_MIN..=SCORE_MAX).contains(c)));
        assert!(readings[0] != readings[1] || readings[1] != readings[2]);
    }

    #[test]
    fn empty_car_leaves_comfort_untouched() {
        let mut e = Elevator::new(ElevatorId(0), &spec(4));
        let mut rng = SimRng::new(0);
        let before: u64 = SimRng::new(0).random();
        e.refresh_comfort(&mut rng);
        // No draw was consumed.
        assert_eq!(rng.random::<u64>(), before);
    }

    #[test]
    fn sweep_visits_distinct_destinations_ascending() {
        let mut e = Elevator::new(ElevatorId(0), &spec(8));
        e.board(
            vec![rider(0, 2, 5, 0.0), rider(1, 2, 0, 0.0), rider(2, 2, 5, 0.0), rider(3, 2, 3, 0.0)],
            SimTime(1.0),
        );
        e.plan_sweep(Floor(2));
        assert_eq!(e.remaining_stops().collect::<Vec<_>>(), vec![Floor(0), Floor(3), Floor(5)]);
        assert_eq!(e.next_stop(), Some(Floor(0)));
        assert_eq!(e.next_stop(), Some(Floor(3)));
        assert_eq!(e.next_stop(), Some(Floor(5)));
        assert_eq!(e.next_stop(), None);
    }
}

// ── Lobbies ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod lobbies {
    use super::*;

    #[test]
    fn fifo_per_floor() {
        let mut l = Lobbies::new(4);
        l.push(rider(0, 1, 3, 0.0));
        l.push(rider(1, 2, 0, 1.0));
        l.push(rider(2, 1, 0, 2.0));
        l.push(rider(3, 1, 2, 3.0));
        assert_eq!(l.sizes(), vec![0, 3, 1, 0]);
        assert_eq!(l.total_waiting(), 4);

        let taken = l.take(Floor(1), 2);
        let ids: Vec<_> = taken.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![RiderId(0), RiderId(2)]);
        assert_eq!(l.waiting(Floor(1)).map(|r| r.id).collect::<Vec<_>>(), vec![RiderId(3)]);
    }

    #[test]
    fn take_more_than_waiting_and_unknown_floor() {
        let mut l = Lobbies::new(2);
        l.push(rider(0, 0, 1, 0.0));
        assert_eq!(l.take(Floor(0), 10).len(), 1);
        assert!(l.is_empty());
        assert!(l.take(Floor(7), 3).is_empty());
        assert_eq!(l.len(Floor(7)), 0);
    }

    #[test]
    #[should_panic(expected = "2-floor building")]
    fn arrival_on_missing_floor_panics() {
        let mut l = Lobbies::new(2);
        l.push(rider(0, 5, 1, 0.0));
    }
}
