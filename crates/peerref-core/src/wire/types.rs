use std::fmt;

use serde::{Deserialize, Serialize};

/// `InputPeer` boxed type: a peer named in an outbound request.
///
/// JSON uses the TL constructor name under `@type`, e.g.
/// `{"@type":"inputPeerUser","user_id":42,"access_hash":777}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "@type")]
pub enum InputPeer {
    #[serde(rename = "inputPeerEmpty")]
    Empty,

    #[serde(rename = "inputPeerSelf")]
    SelfPeer,

    #[serde(rename = "inputPeerChat")]
    Chat { chat_id: i64 },

    #[serde(rename = "inputPeerUser")]
    User { user_id: i64, access_hash: i64 },

    #[serde(rename = "inputPeerChannel")]
    Channel { channel_id: i64, access_hash: i64 },

    /// A user seen only inside a message of `peer`; has no access hash of its own.
    #[serde(rename = "inputPeerUserFromMessage")]
    UserFromMessage {
        peer: Box<InputPeer>,
        msg_id: i32,
        user_id: i64,
    },

    #[serde(rename = "inputPeerChannelFromMessage")]
    ChannelFromMessage {
        peer: Box<InputPeer>,
        msg_id: i32,
        channel_id: i64,
    },
}

impl InputPeer {
    /// TL constructor name of this variant.
    pub fn constructor(&self) -> &'static str {
        match self {
            InputPeer::Empty => "inputPeerEmpty",
            InputPeer::SelfPeer => "inputPeerSelf",
            InputPeer::Chat { .. } => "inputPeerChat",
            InputPeer::User { .. } => "inputPeerUser",
            InputPeer::Channel { .. } => "inputPeerChannel",
            InputPeer::UserFromMessage { .. } => "inputPeerUserFromMessage",
            InputPeer::ChannelFromMessage { .. } => "inputPeerChannelFromMessage",
        }
    }
}

impl fmt::Display for InputPeer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.constructor();
        match self {
            InputPeer::Empty | InputPeer::SelfPeer => write!(f, "{name} {{}}"),
            InputPeer::Chat { chat_id } => write!(f, "{name} {{ chat_id = {chat_id} }}"),
            InputPeer::User {
                user_id,
                access_hash,
            } => write!(
                f,
                "{name} {{ user_id = {user_id}, access_hash = {access_hash} }}"
            ),
            InputPeer::Channel {
                channel_id,
                access_hash,
            } => write!(
                f,
                "{name} {{ channel_id = {channel_id}, access_hash = {access_hash} }}"
            ),
            InputPeer::UserFromMessage {
                peer,
                msg_id,
                user_id,
            } => write!(
                f,
                "{name} {{ peer = {peer}, msg_id = {msg_id}, user_id = {user_id} }}"
            ),
            InputPeer::ChannelFromMessage {
                peer,
                msg_id,
                channel_id,
            } => write!(
                f,
                "{name} {{ peer = {peer}, msg_id = {msg_id}, channel_id = {channel_id} }}"
            ),
        }
    }
}

/// `inputDialogPeer`: the wrapper some requests want instead of a bare peer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "@type", rename = "inputDialogPeer")]
pub struct InputDialogPeer {
    pub peer: InputPeer,
}

impl From<InputPeer> for InputDialogPeer {
    fn from(peer: InputPeer) -> Self {
        Self { peer }
    }
}
