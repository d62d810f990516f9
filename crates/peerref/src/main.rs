use std::io::{self, Read};

use clap::{Parser, Subcommand};

use peerref_core::{
    config::Config,
    wire::{json, types::InputPeer},
    Error, InputDialogId,
};

/// Marshal peer lists between the wire JSON form and dialog references.
#[derive(Parser, Debug)]
#[command(name = "peerref", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Read wire peers from stdin, print the valid dialog references
    Decode,
    /// Read dialog references from stdin, print their wire peers
    Encode {
        /// Wrap each peer in an inputDialogPeer envelope
        #[arg(long)]
        envelopes: bool,
    },
    /// Decode then encode again, dropping whatever does not survive
    Roundtrip {
        #[arg(long)]
        envelopes: bool,
    },
}

fn main() -> Result<(), Error> {
    peerref_core::logging::init("peerref")?;

    let cfg = Config::load()?;
    let cli = Cli::parse();
    let pretty = cli.pretty || cfg.pretty_json;
    let diagnostics = cfg.diagnostics();

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let output = match cli.command {
        Commands::Decode => {
            let peers = json::parse_input_peers(&input)?;
            let decoded = InputDialogId::decode_many(&peers, diagnostics.as_ref());
            tracing::info!(received = peers.len(), valid = decoded.len(), "decoded peers");
            json::to_json(&decoded, pretty)?
        }
        Commands::Encode { envelopes } => {
            let refs: Vec<InputDialogId> = serde_json::from_str(&input)?;
            encode(&refs, envelopes || cfg.envelopes, pretty)?
        }
        Commands::Roundtrip { envelopes } => {
            let peers: Vec<InputPeer> = json::parse_input_peers(&input)?;
            let refs = InputDialogId::decode_many(&peers, diagnostics.as_ref());
            encode(&refs, envelopes || cfg.envelopes, pretty)?
        }
    };

    println!("{output}");
    Ok(())
}

fn encode(refs: &[InputDialogId], envelopes: bool, pretty: bool) -> Result<String, Error> {
    let out = if envelopes {
        let wrapped = InputDialogId::encode_many_as_envelopes(refs);
        tracing::info!(requested = refs.len(), encoded = wrapped.len(), "encoded envelopes");
        json::to_json(&wrapped, pretty)?
    } else {
        let peers = InputDialogId::encode_many_as_peers(refs);
        tracing::info!(requested = refs.len(), encoded = peers.len(), "encoded peers");
        json::to_json(&peers, pretty)?
    };
    Ok(out)
}
