//! Line-oriented local client
//!
//! Each input line is sent as a write on the game topic; the reply published
//! back to this client is printed as-is.

use crate::broker::{Access, AclCheck, LocalBroker, WordlePlugin};
use std::io::{BufRead, Write};

/// Identity of the local player
pub struct PlayConfig {
    pub client_id: String,
    pub address: String,
}

/// Run the interactive loop until `quit` or end of input
///
/// Returns the number of guesses sent.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `output` fails.
pub fn run_play<R: BufRead, W: Write>(
    plugin: &WordlePlugin,
    config: &PlayConfig,
    input: R,
    mut output: W,
) -> std::io::Result<usize> {
    let broker = LocalBroker::new();
    let send = |access: Access, payload: &[u8]| {
        let check = AclCheck {
            client_id: &config.client_id,
            address: &config.address,
            topic: plugin.topic(),
            access,
            payload,
        };
        plugin.acl_check(&check, &broker);
    };

    send(Access::Subscribe, &[]);

    let mut sent = 0;
    for line in input.lines() {
        let line = line?;
        let guess = line.trim();
        match guess {
            "" => continue,
            "quit" | "exit" => break,
            _ => {}
        }

        send(Access::Write, guess.as_bytes());
        sent += 1;

        for delivery in broker.take_for(&config.client_id) {
            writeln!(output, "{}", delivery.payload)?;
        }
        output.flush()?;
    }

    send(Access::Unsubscribe, &[]);

    Ok(sent)
}
