use serde::{Deserialize, Serialize};

use crate::{
    domain::{ChannelId, ChatId, DialogId, UserId},
    ports::DiagnosticSink,
    wire::types::{InputDialogPeer, InputPeer},
};

/// A dialog together with the access hash needed to name it in a request.
///
/// The hash only means something for users and channels. It is 0 for basic
/// groups and never set for secret chats or `DialogId::None`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InputDialogId {
    pub dialog_id: DialogId,
    #[serde(default)]
    pub access_hash: i64,
}

impl InputDialogId {
    /// Wrap an already known dialog without an access hash.
    pub fn new(dialog_id: DialogId) -> Self {
        Self {
            dialog_id,
            access_hash: 0,
        }
    }

    /// Decode a wire peer. Never fails: anything that is not a valid user, chat or
    /// channel comes back as `DialogId::None` and is reported to `diagnostics`.
    pub fn decode(input_peer: &InputPeer, diagnostics: &dyn DiagnosticSink) -> Self {
        let decoded = match *input_peer {
            InputPeer::User {
                user_id,
                access_hash,
            } => {
                let user_id = UserId(user_id);
                user_id.is_valid().then_some(Self {
                    dialog_id: DialogId::User(user_id),
                    access_hash,
                })
            }
            InputPeer::Chat { chat_id } => {
                let chat_id = ChatId(chat_id);
                chat_id
                    .is_valid()
                    .then(|| Self::new(DialogId::Chat(chat_id)))
            }
            InputPeer::Channel {
                channel_id,
                access_hash,
            } => {
                let channel_id = ChannelId(channel_id);
                channel_id.is_valid().then_some(Self {
                    dialog_id: DialogId::Channel(channel_id),
                    access_hash,
                })
            }
            InputPeer::Empty
            | InputPeer::SelfPeer
            | InputPeer::UserFromMessage { .. }
            | InputPeer::ChannelFromMessage { .. } => None,
        };

        decoded.unwrap_or_else(|| {
            diagnostics.report(&format!("Receive {input_peer}"));
            Self::default()
        })
    }

    pub fn is_valid(&self) -> bool {
        !self.dialog_id.is_none()
    }

    pub fn dialog_id(&self) -> DialogId {
        self.dialog_id
    }

    pub fn access_hash(&self) -> i64 {
        self.access_hash
    }

    /// Wire form of this dialog. Secret chats and `None` have no peer form and
    /// yield `None`; that is not an error.
    pub fn encode(&self) -> Option<InputPeer> {
        match self.dialog_id {
            DialogId::User(user_id) => Some(InputPeer::User {
                user_id: user_id.0,
                access_hash: self.access_hash,
            }),
            DialogId::Chat(chat_id) => Some(InputPeer::Chat { chat_id: chat_id.0 }),
            DialogId::Channel(channel_id) => Some(InputPeer::Channel {
                channel_id: channel_id.0,
                access_hash: self.access_hash,
            }),
            DialogId::SecretChat(_) | DialogId::None => None,
        }
    }

    /// Decode every peer, keeping only the valid ones in their original order.
    pub fn decode_many(
        input_peers: &[InputPeer],
        diagnostics: &dyn DiagnosticSink,
    ) -> Vec<InputDialogId> {
        let mut result = Vec::with_capacity(input_peers.len());
        for input_peer in input_peers {
            let input_dialog_id = Self::decode(input_peer, diagnostics);
            if input_dialog_id.is_valid() {
                result.push(input_dialog_id);
            }
        }
        result
    }

    pub fn encode_many_as_peers(input_dialog_ids: &[InputDialogId]) -> Vec<InputPeer> {
        let mut result = Vec::with_capacity(input_dialog_ids.len());
        result.extend(input_dialog_ids.iter().filter_map(Self::encode));
        result
    }

    /// Like [`encode_many_as_peers`](Self::encode_many_as_peers), wrapping each
    /// peer in an `inputDialogPeer`.
    pub fn encode_many_as_envelopes(input_dialog_ids: &[InputDialogId]) -> Vec<InputDialogPeer> {
        let mut result = Vec::with_capacity(input_dialog_ids.len());
        result.extend(
            input_dialog_ids
                .iter()
                .filter_map(Self::encode)
                .map(InputDialogPeer::from),
        );
        result
    }

    pub fn dialog_ids(input_dialog_ids: &[InputDialogId]) -> Vec<DialogId> {
        input_dialog_ids.iter().map(|d| d.dialog_id).collect()
    }

    /// Same dialogs in the same order; access hashes are not compared.
    pub fn are_equivalent(lhs: &[InputDialogId], rhs: &[InputDialogId]) -> bool {
        lhs.len() == rhs.len()
            && lhs
                .iter()
                .zip(rhs)
                .all(|(l, r)| l.dialog_id == r.dialog_id)
    }

    pub fn contains(input_dialog_ids: &[InputDialogId], dialog_id: DialogId) -> bool {
        input_dialog_ids.iter().any(|d| d.dialog_id == dialog_id)
    }

    /// Removes the first entry for `dialog_id`. Returns whether one was found.
    pub fn remove(input_dialog_ids: &mut Vec<InputDialogId>, dialog_id: DialogId) -> bool {
        match input_dialog_ids
            .iter()
            .position(|d| d.dialog_id == dialog_id)
        {
            Some(idx) => {
                input_dialog_ids.remove(idx);
                true
            }
            None => false,
        }
    }
}

impl From<DialogId> for InputDialogId {
    fn from(dialog_id: DialogId) -> Self {
        Self::new(dialog_id)
    }
}
