//! View notification bus
//!
//! The windowing layer publishes notifications about a decorated view; each
//! decoration subscribes explicitly to the topics it cares about and drains
//! its own queue on the compositor thread.
//!
//! Key principles:
//! - Topic-based registration (only interested subscribers are queued)
//! - Explicit subscribe/unsubscribe, no implicit global dispatch
//! - Per-subscriber FIFO queues, drained by the subscriber

use std::collections::{HashMap, HashSet, VecDeque};

use crate::foundation::Rect;

/// Notification topic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewTopic {
    /// The view's title string changed
    TitleChanged,
    /// The view's window-manager geometry changed
    Resized,
    /// The view entered or left fullscreen
    FullscreenChanged,
    /// The view gained or lost activation
    ActivationChanged,
    /// The view or its decoration lost input focus
    FocusLost,
}

impl ViewTopic {
    /// Every topic, in declaration order
    pub const ALL: [Self; 5] = [
        Self::TitleChanged,
        Self::Resized,
        Self::FullscreenChanged,
        Self::ActivationChanged,
        Self::FocusLost,
    ];
}

/// Notification about a decorated view
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// New title string
    TitleChanged(String),
    /// New window-manager (decorated) geometry
    Resized(Rect),
    /// New fullscreen state
    FullscreenChanged(bool),
    /// New activation state
    ActivationChanged(bool),
    /// Input focus was lost
    FocusLost,
}

impl ViewEvent {
    /// Topic this event is published under
    pub const fn topic(&self) -> ViewTopic {
        match self {
            Self::TitleChanged(_) => ViewTopic::TitleChanged,
            Self::Resized(_) => ViewTopic::Resized,
            Self::FullscreenChanged(_) => ViewTopic::FullscreenChanged,
            Self::ActivationChanged(_) => ViewTopic::ActivationChanged,
            Self::FocusLost => ViewTopic::FocusLost,
        }
    }
}

/// Identifies one subscriber on an [`EventBus`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

/// Topic-based event bus with per-subscriber queues
#[derive(Debug, Default)]
pub struct EventBus {
    next_id: u64,
    topics: HashMap<ViewTopic, HashSet<SubscriberId>>,
    queues: HashMap<SubscriberId, VecDeque<ViewEvent>>,
}

impl EventBus {
    /// Create a new empty event bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber with an empty queue and no topics
    pub fn add_subscriber(&mut self) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.queues.insert(id, VecDeque::new());
        id
    }

    /// Remove a subscriber, its topics, and anything still queued for it
    pub fn remove_subscriber(&mut self, id: SubscriberId) {
        for subscribers in self.topics.values_mut() {
            subscribers.remove(&id);
        }
        self.queues.remove(&id);
    }

    /// Start delivering `topic` to `id`
    ///
    /// Returns `false` if `id` is not a registered subscriber.
    pub fn subscribe(&mut self, id: SubscriberId, topic: ViewTopic) -> bool {
        if !self.queues.contains_key(&id) {
            log::warn!("subscribe({:?}) for unknown subscriber {:?}", topic, id);
            return false;
        }
        self.topics.entry(topic).or_default().insert(id)
    }

    /// Stop delivering `topic` to `id`; already queued events stay queued
    pub fn unsubscribe(&mut self, id: SubscriberId, topic: ViewTopic) -> bool {
        self.topics
            .get_mut(&topic)
            .is_some_and(|subscribers| subscribers.remove(&id))
    }

    /// Whether `id` currently receives `topic`
    pub fn is_subscribed(&self, id: SubscriberId, topic: ViewTopic) -> bool {
        self.topics
            .get(&topic)
            .is_some_and(|subscribers| subscribers.contains(&id))
    }

    /// Queue `event` for every subscriber of its topic
    ///
    /// Returns the number of subscribers it was queued for.
    pub fn publish(&mut self, event: ViewEvent) -> usize {
        let Some(subscribers) = self.topics.get(&event.topic()) else {
            return 0;
        };

        let mut delivered = 0;
        for id in subscribers {
            if let Some(queue) = self.queues.get_mut(id) {
                queue.push_back(event.clone());
                delivered += 1;
            }
        }
        delivered
    }

    /// Take every event queued for `id`, oldest first
    pub fn drain(&mut self, id: SubscriberId) -> Vec<ViewEvent> {
        self.queues
            .get_mut(&id)
            .map(|queue| queue.drain(..).collect())
            .unwrap_or_default()
    }

    /// Number of events waiting for `id`
    pub fn pending(&self, id: SubscriberId) -> usize {
        self.queues.get(&id).map_or(0, VecDeque::len)
    }
}
