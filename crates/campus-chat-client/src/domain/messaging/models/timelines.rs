// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use crate::domain::messaging::models::Timeline;
use crate::domain::shared::models::RoomId;

/// Holds the timelines of all open rooms.
///
/// A room may be opened more than once. Its timeline stays alive until every `open` is matched
/// by a `close`.
///
/// Every time a closed room is opened its timeline gets a new session number. Operations that
/// started before the room was closed (or closed and reopened) compare their session with the
/// current one and drop their result if they differ.
#[derive(Default)]
pub struct Timelines {
    rooms: Mutex<HashMap<RoomId, Timeline>>,
    last_session: AtomicU64,
}

impl Timelines {
    pub fn open(&self, room_id: &RoomId) {
        let mut rooms = self.rooms.lock();
        let timeline = rooms
            .entry(room_id.clone())
            .or_insert_with(|| Timeline::with_session(self.new_session()));
        timeline.open_count += 1;
    }

    /// Removes the room's timeline once it was closed as often as it was opened.
    pub fn close(&self, room_id: &RoomId) {
        let mut rooms = self.rooms.lock();
        let Some(timeline) = rooms.get_mut(room_id) else {
            return;
        };
        if timeline.open_count > 1 {
            timeline.open_count -= 1;
            return;
        }
        rooms.remove(room_id);
    }

    pub fn clear(&self) {
        self.rooms.lock().clear();
    }

    pub fn is_open(&self, room_id: &RoomId) -> bool {
        self.rooms.lock().contains_key(room_id)
    }

    pub fn read<R>(&self, room_id: &RoomId, f: impl FnOnce(&Timeline) -> R) -> Option<R> {
        self.rooms.lock().get(room_id).map(f)
    }

    /// Runs `f` on the room's timeline if the room is open.
    pub fn update<R>(&self, room_id: &RoomId, f: impl FnOnce(&mut Timeline) -> R) -> Option<R> {
        self.rooms.lock().get_mut(room_id).map(f)
    }

    /// Runs `f` on the room's timeline, opening the room if needed.
    pub fn update_or_open<R>(&self, room_id: &RoomId, f: impl FnOnce(&mut Timeline) -> R) -> R {
        let mut rooms = self.rooms.lock();
        let timeline = rooms
            .entry(room_id.clone())
            .or_insert_with(|| Timeline::with_session(self.new_session()));
        f(timeline)
    }

    /// Marks the room as loading. Returns `None` if a load is already in flight.
    pub fn begin_loading(&self, room_id: &RoomId) -> Option<LoadingGuard<'_>> {
        let mut rooms = self.rooms.lock();
        let timeline = rooms
            .entry(room_id.clone())
            .or_insert_with(|| Timeline::with_session(self.new_session()));

        if timeline.is_loading {
            return None;
        }
        timeline.is_loading = true;

        Some(LoadingGuard {
            timelines: self,
            room_id: room_id.clone(),
            session: timeline.session,
        })
    }

    /// The session a timeline currently belongs to. Used to detect that a room was closed
    /// while an operation was in flight.
    pub fn session(&self, room_id: &RoomId) -> Option<u64> {
        self.read(room_id, |timeline| timeline.session)
    }

    /// Like `update` but only if the timeline still belongs to `session`.
    pub fn update_in_session<R>(
        &self,
        room_id: &RoomId,
        session: u64,
        f: impl FnOnce(&mut Timeline) -> R,
    ) -> Option<R> {
        self.rooms
            .lock()
            .get_mut(room_id)
            .filter(|timeline| timeline.session == session)
            .map(f)
    }

    fn new_session(&self) -> u64 {
        self.last_session.fetch_add(1, Ordering::Relaxed) + 1
    }
}

/// Clears the loading flag of a timeline when dropped.
pub struct LoadingGuard<'a> {
    timelines: &'a Timelines,
    room_id: RoomId,
    session: u64,
}

impl LoadingGuard<'_> {
    /// Applies the result of the load, unless the room was closed in the meantime.
    pub fn update<R>(&self, f: impl FnOnce(&mut Timeline) -> R) -> Option<R> {
        self.timelines
            .update_in_session(&self.room_id, self.session, f)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.timelines
            .update_in_session(&self.room_id, self.session, |timeline| {
                timeline.is_loading = false
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allows_one_load_per_room() {
        let timelines = Timelines::default();
        let room_a = RoomId::from("a");
        let room_b = RoomId::from("b");

        let guard = timelines.begin_loading(&room_a);
        assert!(guard.is_some());
        assert!(timelines.begin_loading(&room_a).is_none());
        assert!(timelines.begin_loading(&room_b).is_some());

        drop(guard);
        assert!(timelines.begin_loading(&room_a).is_some());
    }

    #[test]
    fn test_discards_results_after_close() {
        let timelines = Timelines::default();
        let room_id = RoomId::from("a");

        let guard = timelines.begin_loading(&room_id).unwrap();
        timelines.close(&room_id);
        timelines.open(&room_id);

        assert_eq!(guard.update(|_| ()), None);
        drop(guard);
        assert_eq!(timelines.read(&room_id, |t| t.is_loading()), Some(false));
    }

    #[test]
    fn test_keeps_timeline_until_last_close() {
        let timelines = Timelines::default();
        let room_id = RoomId::from("a");

        timelines.open(&room_id);
        timelines.open(&room_id);
        let session = timelines.session(&room_id);

        timelines.close(&room_id);
        assert!(timelines.is_open(&room_id));
        assert_eq!(timelines.session(&room_id), session);

        timelines.close(&room_id);
        assert!(!timelines.is_open(&room_id));

        timelines.close(&room_id);
        assert!(!timelines.is_open(&room_id));
    }
}
