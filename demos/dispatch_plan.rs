//! Dispatch Planning
//!
//! Load chunker settings, split a reply, and address every part to the
//! message that triggered it. Diagnostics go through `tracing`.
//!
//! ```bash
//! RUST_LOG=missive=debug cargo run --example dispatch_plan
//! ```

use missive::{plan, ChunkerConfig, Destination, LengthUnit, SeparatorAccounting};
use tracing_subscriber::EnvFilter;

fn main() -> missive::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // A bot would read this from its config file
    let config = ChunkerConfig {
        limit: 80,
        unit: LengthUnit::Graphemes,
        accounting: SeparatorAccounting::Strict,
    };
    let chunker = config.build()?;

    let reply = "Deploy report\n\
                 - api: rolled out to 12/12 hosts\n\
                 - worker: rolled out to 7/8 hosts, 1 pending drain\n\
                 - web: skipped, no changes\n\
                 Résumé: 2 services updated, 1 waiting on a host drain.";

    let to = Destination::Reply {
        channel_id: 1_100_200_300,
        message_id: 4_400_500_600,
    };

    for message in plan(&chunker, to, reply) {
        println!(
            "-> channel {} (part {}/{}):\n{}\n",
            message.destination.channel_id(),
            message.part,
            message.parts,
            message.text
        );
    }

    Ok(())
}
