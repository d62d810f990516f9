use std::fmt;

use serde::{Deserialize, Serialize};

/// Largest user identifier the server hands out (40-bit space).
pub const MAX_USER_ID: i64 = (1 << 40) - 1;

/// Largest basic group identifier.
pub const MAX_CHAT_ID: i64 = 999_999_999_999;

/// Largest channel identifier. Channels share the packed dialog id space with
/// secret chats, which reserve the top `2^31` values.
pub const MAX_CHANNEL_ID: i64 = 1_000_000_000_000 - (1 << 31);

/// Telegram user id (numeric).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl UserId {
    pub fn is_valid(self) -> bool {
        self.0 > 0 && self.0 <= MAX_USER_ID
    }
}

/// Basic group id (numeric).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatId(pub i64);

impl ChatId {
    pub fn is_valid(self) -> bool {
        self.0 > 0 && self.0 <= MAX_CHAT_ID
    }
}

/// Channel / supergroup id (numeric).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(pub i64);

impl ChannelId {
    pub fn is_valid(self) -> bool {
        self.0 > 0 && self.0 <= MAX_CHANNEL_ID
    }
}

/// End-to-end encrypted chat id. Local to this device, never sent as a peer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecretChatId(pub i32);

impl SecretChatId {
    pub fn is_valid(self) -> bool {
        self.0 != 0
    }
}

/// Kind of a [`DialogId`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DialogType {
    None,
    User,
    Chat,
    Channel,
    SecretChat,
}

/// Internal identity of a conversation partner.
///
/// `None` is a real variant rather than an `Option` around the enum: decoding
/// is total and always yields a `DialogId`, invalid input included.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum DialogId {
    #[default]
    None,
    User(UserId),
    Chat(ChatId),
    Channel(ChannelId),
    SecretChat(SecretChatId),
}

impl DialogId {
    pub fn dialog_type(self) -> DialogType {
        match self {
            DialogId::None => DialogType::None,
            DialogId::User(_) => DialogType::User,
            DialogId::Chat(_) => DialogType::Chat,
            DialogId::Channel(_) => DialogType::Channel,
            DialogId::SecretChat(_) => DialogType::SecretChat,
        }
    }

    pub fn is_none(self) -> bool {
        matches!(self, DialogId::None)
    }

    pub fn user_id(self) -> Option<UserId> {
        match self {
            DialogId::User(id) => Some(id),
            _ => None,
        }
    }

    pub fn chat_id(self) -> Option<ChatId> {
        match self {
            DialogId::Chat(id) => Some(id),
            _ => None,
        }
    }

    pub fn channel_id(self) -> Option<ChannelId> {
        match self {
            DialogId::Channel(id) => Some(id),
            _ => None,
        }
    }

    pub fn secret_chat_id(self) -> Option<SecretChatId> {
        match self {
            DialogId::SecretChat(id) => Some(id),
            _ => None,
        }
    }
}

impl From<UserId> for DialogId {
    fn from(id: UserId) -> Self {
        DialogId::User(id)
    }
}

impl From<ChatId> for DialogId {
    fn from(id: ChatId) -> Self {
        DialogId::Chat(id)
    }
}

impl From<ChannelId> for DialogId {
    fn from(id: ChannelId) -> Self {
        DialogId::Channel(id)
    }
}

impl From<SecretChatId> for DialogId {
    fn from(id: SecretChatId) -> Self {
        DialogId::SecretChat(id)
    }
}

impl fmt::Display for DialogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DialogId::None => f.write_str("invalid dialog"),
            DialogId::User(id) => write!(f, "user {}", id.0),
            DialogId::Chat(id) => write!(f, "chat {}", id.0),
            DialogId::Channel(id) => write!(f, "channel {}", id.0),
            DialogId::SecretChat(id) => write!(f, "secret chat {}", id.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_bounds() {
        assert!(!UserId(0).is_valid());
        assert!(!UserId(-1).is_valid());
        assert!(UserId(1).is_valid());
        assert!(UserId(MAX_USER_ID).is_valid());
        assert!(!UserId(MAX_USER_ID + 1).is_valid());
    }

    #[test]
    fn chat_and_channel_bounds() {
        assert!(ChatId(MAX_CHAT_ID).is_valid());
        assert!(!ChatId(MAX_CHAT_ID + 1).is_valid());
        assert!(!ChatId(0).is_valid());

        assert!(ChannelId(MAX_CHANNEL_ID).is_valid());
        assert!(!ChannelId(MAX_CHANNEL_ID + 1).is_valid());
        assert!(!ChannelId(-100).is_valid());
    }

    #[test]
    fn secret_chat_only_rejects_zero() {
        assert!(SecretChatId(-5).is_valid());
        assert!(SecretChatId(i32::MAX).is_valid());
        assert!(!SecretChatId(0).is_valid());
    }

    #[test]
    fn dialog_type_and_accessors() {
        let d = DialogId::from(ChannelId(9));
        assert_eq!(d.dialog_type(), DialogType::Channel);
        assert_eq!(d.channel_id(), Some(ChannelId(9)));
        assert_eq!(d.user_id(), None);
        assert!(DialogId::default().is_none());
        assert_eq!(DialogId::default().dialog_type(), DialogType::None);
    }

    #[test]
    fn display_names_the_kind() {
        assert_eq!(DialogId::User(UserId(42)).to_string(), "user 42");
        assert_eq!(DialogId::SecretChat(SecretChatId(7)).to_string(), "secret chat 7");
        assert_eq!(DialogId::None.to_string(), "invalid dialog");
    }
}
