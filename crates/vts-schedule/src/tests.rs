//! Unit tests for vts-schedule.

use vts_core::SimTime;

use crate::EventQueue;

#[cfg(test)]
mod ordering {
    use super::*;

    #[test]
    fn empty_queue() {
        let mut q: EventQueue<u32> = EventQueue::new();
        assert!(q.is_empty());
        assert_eq!(q.peek_time(), None);
        assert!(q.pop().is_none());
        assert_eq!(q.now(), SimTime::ZERO);
    }

    #[test]
    fn pops_in_time_order() {
        let mut q = EventQueue::new();
        q.schedule_at(SimTime(5.0), "c");
        q.schedule_at(SimTime(1.0), "a");
        q.schedule_at(SimTime(3.0), "b");
        assert_eq!(q.peek_time(), Some(SimTime(1.0)));
        let order: Vec<_> = std::iter::from_fn(|| q.pop().map(|(_, p)| p)).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn ties_break_by_insertion_order() {
        let mut q = EventQueue::new();
        for i in 0..10 {
            q.schedule_at(SimTime(2.0), i);
        }
        q.schedule_at(SimTime(1.0), 99);
        let order: Vec<_> = std::iter::from_fn(|| q.pop().map(|(_, p)| p)).collect();
        assert_eq!(order, vec![99, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn schedule_now_runs_after_existing_entries_for_the_same_instant() {
        let mut q = EventQueue::new();
        q.schedule_at(SimTime::ZERO, "first");
        q.schedule_now("second");
        assert_eq!(q.pop().map(|(_, p)| p), Some("first"));
        q.schedule_now("third");
        assert_eq!(q.pop().map(|(_, p)| p), Some("second"));
        assert_eq!(q.pop().map(|(_, p)| p), Some("third"));
    }
}

#[cfg(test)]
mod clock {
    use super::*;

    #[test]
    fn pop_advances_clock_to_fire_time() {
        let mut q = EventQueue::new();
        q.schedule_in(4.5, ());
        assert_eq!(q.now(), SimTime::ZERO);
        let (at, ()) = q.pop().unwrap();
        assert_eq!(at, SimTime(4.5));
        assert_eq!(q.now(), SimTime(4.5));

        // Relative delays are measured from the new current time.
        q.schedule_in(1.5, ());
        assert_eq!(q.peek_time(), Some(SimTime(6.0)));
    }

    #[test]
    fn clock_is_monotonic_over_mixed_schedule() {
        let mut q = EventQueue::new();
        q.schedule_in(3.0, 0);
        q.schedule_in(0.0, 1);
        q.schedule_in(7.0, 2);
        let mut last = q.now();
        while let Some((at, p)) = q.pop() {
            assert!(at >= last);
            last = at;
            if p < 5 {
                q.schedule_in(p as f64, p + 3);
            }
        }
    }

    #[test]
    fn counts_scheduled_entries() {
        let mut q = EventQueue::new();
        q.schedule_now(1);
        q.schedule_now(2);
        q.pop();
        assert_eq!(q.len(), 1);
        assert_eq!(q.scheduled_total(), 2);
    }

    #[test]
    #[should_panic(expected = "before the current time")]
    fn scheduling_into_the_past_panics() {
        let mut q = EventQueue::new();
        q.schedule_in(10.0, ());
        q.pop();
        q.schedule_at(SimTime(5.0), ());
    }

    #[test]
    #[should_panic(expected = "delay")]
    fn negative_delay_panics() {
        let mut q: EventQueue<()> = EventQueue::new();
        q.schedule_in(-1.0, ());
    }
}
