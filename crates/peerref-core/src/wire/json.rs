use serde::Serialize;

use crate::{wire::types::InputPeer, Result};

/// Parse a JSON array of wire peers (e.g. the `peers` list of a response).
pub fn parse_input_peers(json: &str) -> Result<Vec<InputPeer>> {
    Ok(serde_json::from_str(json)?)
}

pub fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{errors::Error, wire::types::InputDialogPeer};

    #[test]
    fn parses_tagged_peers() {
        let raw = r#"[
            {"@type": "inputPeerUser", "user_id": 42, "access_hash": 777},
            {"@type": "inputPeerChat", "chat_id": 5},
            {"@type": "inputPeerSelf"}
        ]"#;
        let peers = parse_input_peers(raw).unwrap();
        assert_eq!(
            peers,
            vec![
                InputPeer::User {
                    user_id: 42,
                    access_hash: 777
                },
                InputPeer::Chat { chat_id: 5 },
                InputPeer::SelfPeer,
            ]
        );
    }

    #[test]
    fn unknown_constructor_is_a_json_error() {
        let err = parse_input_peers(r#"[{"@type": "inputPeerBogus"}]"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn envelope_carries_its_own_tag() {
        let env = InputDialogPeer::from(InputPeer::Chat { chat_id: 5 });
        let s = to_json(&env, false).unwrap();
        assert_eq!(
            s,
            r#"{"@type":"inputDialogPeer","peer":{"@type":"inputPeerChat","chat_id":5}}"#
        );
    }
}
