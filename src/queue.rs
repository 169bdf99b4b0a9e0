//! Command line queue shared by all transports
//!
//! Transports run outside the control loop (socket callbacks, HTTP handlers,
//! UART interrupts). They only copy their extracted command text into this
//! queue; the control loop drains it through the single engine dispatcher.
//! Synchronization uses `critical-section`, so senders may live in interrupt
//! context.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::{Deque, String};
use thiserror::Error;

/// Longest accepted command line, line terminator excluded
pub const MAX_COMMAND_LEN: usize = 256;

/// Owned copy of one command line
pub type CommandLine = String<MAX_COMMAND_LEN>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("command line is too long")]
    TooLong,
    #[error("command queue is full")]
    Full,
}

/// Bounded FIFO of command lines
pub struct CommandQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<CommandLine, SIZE>>>,
}

impl<const SIZE: usize> CommandQueue<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Handle for a transport
    pub const fn sender(&self) -> CommandSender<'_, SIZE> {
        CommandSender { queue: self }
    }

    /// Handle for the control loop
    pub const fn receiver(&self) -> CommandReceiver<'_, SIZE> {
        CommandReceiver { queue: self }
    }

    /// Copy a line into the queue, dropping trailing CR/LF
    pub fn try_send(&self, line: &str) -> Result<(), QueueError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let mut owned = CommandLine::new();
        owned.push_str(line).map_err(|()| QueueError::TooLong)?;

        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(owned).map_err(|_| QueueError::Full)
        })
    }

    /// Take the oldest queued line
    pub fn try_receive(&self) -> Option<CommandLine> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }

    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for CommandQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Transport-side handle of a [`CommandQueue`]
#[derive(Clone, Copy)]
pub struct CommandSender<'a, const SIZE: usize> {
    queue: &'a CommandQueue<SIZE>,
}

impl<const SIZE: usize> CommandSender<'_, SIZE> {
    pub fn try_send(&self, line: &str) -> Result<(), QueueError> {
        self.queue.try_send(line)
    }
}

/// Control-loop handle of a [`CommandQueue`]
#[derive(Clone, Copy)]
pub struct CommandReceiver<'a, const SIZE: usize> {
    queue: &'a CommandQueue<SIZE>,
}

impl<const SIZE: usize> CommandReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Option<CommandLine> {
        self.queue.try_receive()
    }
}
