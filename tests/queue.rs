mod tests {
    use wearable_light::queue::{CommandQueue, MAX_COMMAND_LEN, QueueError};

    #[test]
    fn test_fifo_order() {
        let queue: CommandQueue<4> = CommandQueue::new();
        let sender = queue.sender();
        let receiver = queue.receiver();

        sender.try_send("next").unwrap();
        sender.try_send("prev").unwrap();
        assert_eq!(queue.len(), 2);

        assert_eq!(receiver.try_receive().unwrap().as_str(), "next");
        assert_eq!(receiver.try_receive().unwrap().as_str(), "prev");
        assert!(receiver.try_receive().is_none());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_line_terminators_are_trimmed() {
        let queue: CommandQueue<4> = CommandQueue::new();
        queue.try_send("set:1\r\n").unwrap();
        queue.try_send("set:2\n").unwrap();
        assert_eq!(queue.try_receive().unwrap().as_str(), "set:1");
        assert_eq!(queue.try_receive().unwrap().as_str(), "set:2");
    }

    #[test]
    fn test_full_queue_rejects() {
        let queue: CommandQueue<2> = CommandQueue::new();
        queue.try_send("next").unwrap();
        queue.try_send("next").unwrap();
        assert_eq!(queue.try_send("prev"), Err(QueueError::Full));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_long_line_rejects() {
        let queue: CommandQueue<2> = CommandQueue::new();
        let line = "x".repeat(MAX_COMMAND_LEN + 1);
        assert_eq!(queue.try_send(&line), Err(QueueError::TooLong));
        assert!(queue.is_empty());

        let line = "x".repeat(MAX_COMMAND_LEN);
        assert!(queue.try_send(&line).is_ok());
    }
}
