mod common;

mod tests {
    use embassy_time::{Duration, Instant};
    use wearable_light::{CommandQueue, FrameScheduler};

    use crate::common::engine;

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    #[test]
    fn test_poll_renders_on_deadline() {
        let queue: CommandQueue<4> = CommandQueue::new();
        let receiver = queue.receiver();
        let mut scheduler = FrameScheduler::new(engine());

        let result = scheduler.poll(&receiver, at(0));
        assert_eq!(result.next_deadline, at(50));
        assert_eq!(result.sleep_duration, Duration::from_millis(50));
        assert_eq!(scheduler.engine().driver().frames.len(), 1);

        let result = scheduler.poll(&receiver, at(10));
        assert_eq!(result.sleep_duration, Duration::from_millis(40));
        assert_eq!(scheduler.engine().driver().frames.len(), 1);

        let result = scheduler.poll(&receiver, at(50));
        assert_eq!(result.next_deadline, at(100));
        assert_eq!(scheduler.engine().driver().frames.len(), 2);
    }

    #[test]
    fn test_drift_resets_deadline() {
        let mut scheduler = FrameScheduler::new(engine());
        scheduler.tick(at(0));

        let result = scheduler.tick(at(1000));
        assert_eq!(result.next_deadline, at(1050));
        assert_eq!(result.sleep_duration, Duration::from_millis(50));
    }

    #[test]
    fn test_small_lag_keeps_cadence() {
        let mut scheduler = FrameScheduler::new(engine());
        scheduler.tick(at(0));

        let result = scheduler.tick(at(70));
        assert_eq!(result.next_deadline, at(100));
        assert_eq!(result.sleep_duration, Duration::from_millis(30));
    }

    #[test]
    fn test_speed_command_changes_cadence() {
        let queue: CommandQueue<4> = CommandQueue::new();
        let receiver = queue.receiver();
        let mut scheduler = FrameScheduler::new(engine());
        scheduler.poll(&receiver, at(0));

        queue.sender().try_send("speed:20").unwrap();
        let result = scheduler.poll(&receiver, at(50));
        assert_eq!(result.next_deadline, at(70));
        assert_eq!(scheduler.engine().frame_interval(), Duration::from_millis(20));
    }

    #[test]
    fn test_commands_render_between_frames() {
        let queue: CommandQueue<4> = CommandQueue::new();
        let receiver = queue.receiver();
        let mut scheduler = FrameScheduler::new(engine());
        scheduler.poll(&receiver, at(0));

        queue.sender().try_send("next").unwrap();
        scheduler.poll(&receiver, at(10));
        let engine = scheduler.into_engine();
        assert_eq!(engine.current_index(), 1);
        assert_eq!(engine.driver().frames.len(), 2);
    }

    #[test]
    fn test_huge_interval_saturates_deadline() {
        let queue: CommandQueue<4> = CommandQueue::new();
        let receiver = queue.receiver();
        let mut scheduler = FrameScheduler::new(engine());
        scheduler.poll(&receiver, at(0));

        queue.sender().try_send("speed:18446744073709551").unwrap();
        let result = scheduler.poll(&receiver, at(50));
        assert_eq!(result.next_deadline, Instant::MAX);

        let result = scheduler.poll(&receiver, at(100));
        assert_eq!(result.next_deadline, Instant::MAX);
        assert_eq!(scheduler.engine().driver().frames.len(), 2);
    }
}
