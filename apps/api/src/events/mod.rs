//! Event Board: upcoming alumni events and their RSVP counts.

use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::models::event::Event;

pub mod handlers;

pub struct EventBoard {
    events: RwLock<Vec<Event>>,
}

impl EventBoard {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: RwLock::new(events),
        }
    }

    /// Board pre-filled with the bundled events.
    pub fn seeded() -> Self {
        Self::new(default_events())
    }

    /// Events in date order, earliest first.
    pub async fn list(&self) -> Vec<Event> {
        let mut events = self.events.read().await.clone();
        events.sort_by_key(|e| e.date);
        events
    }

    /// Records one RSVP. Returns the updated event, or `None` for an unknown id.
    pub async fn rsvp(&self, id: &str) -> Option<Event> {
        let mut events = self.events.write().await;
        let event = events.iter_mut().find(|e| e.id == id)?;
        event.rsvps = event.rsvps.saturating_add(1);
        Some(event.clone())
    }
}

fn event(
    id: &str,
    title: &str,
    (year, month, day): (i32, u32, u32),
    location: &str,
    description: &str,
    rsvps: u32,
) -> Option<Event> {
    Some(Event {
        id: id.to_string(),
        title: title.to_string(),
        date: NaiveDate::from_ymd_opt(year, month, day)?,
        location: location.to_string(),
        description: description.to_string(),
        image_url: format!("https://picsum.photos/seed/event-{id}/600/400"),
        rsvps,
    })
}

pub fn default_events() -> Vec<Event> {
    [
        event(
            "1",
            "Annual Alumni Homecoming",
            (2026, 10, 24),
            "Main Campus Quad",
            "Reconnect with classmates over food, music, and campus tours.",
            142,
        ),
        event(
            "2",
            "Tech Careers Panel",
            (2026, 11, 12),
            "Engineering Hall, Room 101",
            "Alumni working in cloud, security, and product share how they got there.",
            64,
        ),
        event(
            "3",
            "Mentorship Mixer",
            (2026, 12, 3),
            "Online",
            "Speed-networking between students and alumni mentors.",
            37,
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_events_are_valid() {
        assert_eq!(default_events().len(), 3);
    }

    #[tokio::test]
    async fn test_list_is_date_ordered() {
        let mut events = default_events();
        events.reverse();
        let board = EventBoard::new(events);

        let listed = board.list().await;
        assert!(listed.windows(2).all(|w| w[0].date <= w[1].date));
    }

    #[tokio::test]
    async fn test_rsvp_increments_count() {
        let board = EventBoard::seeded();
        let before = board.list().await.into_iter().find(|e| e.id == "2").unwrap();

        let after = board.rsvp("2").await.unwrap();
        assert_eq!(after.rsvps, before.rsvps + 1);
    }

    #[tokio::test]
    async fn test_rsvp_unknown_event() {
        assert!(EventBoard::seeded().rsvp("missing").await.is_none());
    }
}
