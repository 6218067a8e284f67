//! Message bus from the workspace event loop to frontends.

use super::Message;
use tokio::sync::broadcast;

/// Sender half of the message bus.
#[derive(Clone)]
pub struct MessageSender {
    tx: broadcast::Sender<Message>,
}

impl MessageSender {
    /// Send a message.
    pub fn send(&self, message: Message) -> Result<(), BusError> {
        self.tx.send(message).map_err(|_| BusError::Closed)?;
        Ok(())
    }

    /// Send every message in order, ignoring the absence of subscribers.
    pub fn send_all(&self, messages: impl IntoIterator<Item = Message>) {
        for message in messages {
            let _ = self.send(message);
        }
    }
}

/// Receiver half of the message bus.
pub struct MessageReceiver {
    rx: broadcast::Receiver<Message>,
}

impl MessageReceiver {
    /// Try to receive a message without waiting.
    pub fn try_recv(&mut self) -> Result<Option<Message>, BusError> {
        match self.rx.try_recv() {
            Ok(msg) => Ok(Some(msg)),
            Err(broadcast::error::TryRecvError::Empty) => Ok(None),
            Err(broadcast::error::TryRecvError::Closed) => Err(BusError::Closed),
            Err(broadcast::error::TryRecvError::Lagged(n)) => Err(BusError::Lagged(n)),
        }
    }

    /// Drain everything currently buffered.
    pub fn drain(&mut self) -> Vec<Message> {
        let mut out = Vec::new();
        loop {
            match self.try_recv() {
                Ok(Some(msg)) => out.push(msg),
                Ok(None) | Err(BusError::Closed) => break,
                Err(BusError::Lagged(n)) => {
                    tracing::warn!("Message receiver lagged behind by {} messages", n);
                }
            }
        }
        out
    }
}

/// Broadcast bus for workspace notices.
pub struct MessageBus {
    tx: broadcast::Sender<Message>,
}

impl MessageBus {
    /// Create a new message bus.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(256);
        Self { tx }
    }

    /// Get a sender.
    pub fn sender(&self) -> MessageSender {
        MessageSender {
            tx: self.tx.clone(),
        }
    }

    /// Subscribe to messages.
    pub fn subscribe(&self) -> MessageReceiver {
        MessageReceiver {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for MessageBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Bus errors.
#[derive(Debug, thiserror::Error)]
pub enum BusError {
    #[error("Channel closed")]
    Closed,
    #[error("Lagged behind by {0} messages")]
    Lagged(u64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_without_subscribers_is_closed() {
        let bus = MessageBus::new();
        assert!(matches!(
            bus.sender().send(Message::info("nobody listening")),
            Err(BusError::Closed)
        ));
    }

    #[test]
    fn test_drain_in_order() {
        let bus = MessageBus::new();
        let mut rx = bus.subscribe();
        bus.sender()
            .send_all(vec![Message::info("a"), Message::warning("b")]);
        let drained = rx.drain();
        assert_eq!(drained, vec![Message::info("a"), Message::warning("b")]);
        assert!(rx.drain().is_empty());
    }

    #[test]
    fn test_try_recv_after_bus_dropped() {
        let bus = MessageBus::new();
        let mut rx = bus.subscribe();
        assert_eq!(rx.try_recv().unwrap(), None);
        bus.sender().send(Message::success("done")).unwrap();
        drop(bus);
        assert_eq!(rx.try_recv().unwrap(), Some(Message::success("done")));
        assert!(matches!(rx.try_recv(), Err(BusError::Closed)));
    }
}
