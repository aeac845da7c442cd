// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use itertools::Itertools;
use parking_lot::RwLock;

use crate::domain::messaging::models::Message;
use crate::domain::rooms::models::{ChatRoom, LastMessage};
use crate::domain::shared::models::{RoomId, UserId};

/// The user's conversations, most recently active first, plus who is typing where.
#[derive(Default)]
pub struct RoomList {
    rooms: RwLock<Vec<ChatRoom>>,
    composing_users: RwLock<HashMap<RoomId, HashMap<String, DateTime<Utc>>>>,
}

impl RoomList {
    pub fn rooms(&self) -> Vec<ChatRoom> {
        self.rooms.read().clone()
    }

    pub fn get(&self, room_id: &RoomId) -> Option<ChatRoom> {
        self.rooms
            .read()
            .iter()
            .find(|room| &room.id == room_id)
            .cloned()
    }

    pub fn replace_all(&self, rooms: Vec<ChatRoom>) {
        let mut rooms = rooms;
        sort_by_activity(&mut rooms);
        *self.rooms.write() = rooms;
    }

    pub fn upsert(&self, room: ChatRoom) {
        let mut rooms = self.rooms.write();
        match rooms.iter().position(|existing| existing.id == room.id) {
            Some(idx) => rooms[idx] = room,
            None => rooms.push(room),
        }
        sort_by_activity(&mut rooms);
    }

    /// Updates the preview of the message's room. Messages from other users that are not
    /// read yet increase the unread count. Returns false if the room is unknown or the
    /// message was already applied.
    pub fn apply_message(&self, message: &Message, viewer: &UserId) -> bool {
        let mut rooms = self.rooms.write();
        let Some(room) = rooms.iter_mut().find(|room| room.id == message.room_id) else {
            return false;
        };

        if room.last_message.as_ref().map(|last| &last.id) == Some(&message.id) {
            return false;
        }

        if message.is_unread_for(viewer) {
            room.unread_count += 1;
        }

        let is_newer = room
            .last_message
            .as_ref()
            .map(|last| last.timestamp <= message.timestamp)
            .unwrap_or(true);

        if is_newer {
            room.last_message = Some(LastMessage::from(message));
        }

        sort_by_activity(&mut rooms);
        true
    }

    /// Returns false if the count was zero already.
    pub fn reset_unread_count(&self, room_id: &RoomId) -> bool {
        let mut rooms = self.rooms.write();
        let Some(room) = rooms.iter_mut().find(|room| &room.id == room_id) else {
            return false;
        };
        let changed = room.unread_count > 0;
        room.unread_count = 0;
        changed
    }

    pub fn unread_count(&self, room_id: &RoomId) -> Option<u32> {
        self.get(room_id).map(|room| room.unread_count)
    }

    /// Records that `user` started or stopped typing. Returns true if the set of composing
    /// users changed.
    pub fn set_user_composing(
        &self,
        room_id: &RoomId,
        user: &str,
        is_composing: bool,
        expires_at: DateTime<Utc>,
    ) -> bool {
        let mut composing_users = self.composing_users.write();
        let users = composing_users.entry(room_id.clone()).or_default();

        if is_composing {
            users.insert(user.to_string(), expires_at).is_none()
        } else {
            users.remove(user).is_some()
        }
    }

    /// The users that are currently typing in the room, sorted by name.
    pub fn composing_users(&self, room_id: &RoomId, now: DateTime<Utc>) -> Vec<String> {
        let mut composing_users = self.composing_users.write();
        let Some(users) = composing_users.get_mut(room_id) else {
            return vec![];
        };
        users.retain(|_, expires_at| *expires_at > now);

        users.keys().cloned().sorted().collect()
    }

    pub fn clear(&self) {
        self.rooms.write().clear();
        self.composing_users.write().clear();
    }
}

fn sort_by_activity(rooms: &mut [ChatRoom]) {
    rooms.sort_by(|lhs, rhs| rhs.last_activity().cmp(&lhs.last_activity()));
}
