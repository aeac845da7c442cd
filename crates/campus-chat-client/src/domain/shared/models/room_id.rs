// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use campus_utils::id_string;

id_string!(
    /// Identifies a one-to-one chat room on the backend.
    RoomId
);
