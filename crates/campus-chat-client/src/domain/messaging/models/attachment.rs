// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Formatter};

use mime::Mime;
use url::Url;

#[derive(Debug, Clone, PartialEq)]
pub enum Attachment {
    /// A file stored on the backend.
    Remote(Url),
    /// A file picked by the local user that was not yet accepted by the backend.
    Local(LocalAttachment),
}

#[derive(Clone, PartialEq)]
pub struct LocalAttachment {
    pub file_name: String,
    pub media_type: Mime,
    pub data: Vec<u8>,
}

impl LocalAttachment {
    pub fn new(file_name: impl Into<String>, media_type: Mime, data: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            media_type,
            data,
        }
    }

    /// Pictures taken from the device's library are always uploaded as JPEG.
    pub fn jpeg_image(data: Vec<u8>) -> Self {
        Self::new("image.jpg", mime::IMAGE_JPEG, data)
    }
}

impl Debug for LocalAttachment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalAttachment")
            .field("file_name", &self.file_name)
            .field("media_type", &self.media_type)
            .field("len", &self.data.len())
            .finish()
    }
}
