//! Simple command-line transcoder to try the codec by hand.
//!
//! Usage:
//!   cargo run --example transcode -- encode "Hello, World"
//!   cargo run --example transcode -- decode 91jprv3f5gg5evvjdhj0
//!   cargo run --example transcode -- keyid payment-key

use crock32::{decode, derived_key_id, encode, format_key_id};

fn main() {
    let mut args = std::env::args().skip(1);
    let command = args.next().unwrap_or_else(|| "encode".to_string());
    let input = args.next().unwrap_or_else(|| "Hello, World".to_string());

    match command.as_str() {
        "encode" => {
            println!("{}", encode(input.as_bytes()));
        }
        "decode" => match decode(&input) {
            Ok(bytes) => {
                let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
                println!("{} bytes: {}", bytes.len(), hex);
                if let Ok(text) = std::str::from_utf8(&bytes) {
                    println!("utf-8: {text}");
                }
            }
            Err(err) => {
                eprintln!("invalid code: {err}");
                std::process::exit(1);
            }
        },
        "keyid" => {
            println!("{}", format_key_id(&derived_key_id(input.as_bytes())));
        }
        other => {
            eprintln!("unknown command: {other} (expected encode, decode, or keyid)");
            std::process::exit(2);
        }
    }
}
