//! Basic Message Splitting
//!
//! The minimal example: split a long reply into Discord-sized messages.
//!
//! ```bash
//! cargo run --example 01_basic_split
//! ```

fn main() {
    let mut reply = String::from("Search results:\n");
    for i in 1..=120 {
        reply.push_str(&format!("{i:>3}. https://example.com/articles/{i}\n"));
    }
    reply.push_str(&"=".repeat(2500));

    let chunks = missive::chunk(&reply, 2000).expect("2000 is a valid limit");

    println!("Reply: {} chars", reply.chars().count());
    println!("Messages: {}\n", chunks.len());

    for (i, chunk) in chunks.iter().enumerate() {
        let lines = chunk.lines().count();
        println!("[{}] {} chars, {} lines", i, chunk.chars().count(), lines);
    }

    // Every message fits, and the listing lines are never cut in half:
    // only the 2500-char ruler at the end had to be split.
}
