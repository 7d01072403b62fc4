//! Interactive CLI mode
//!
//! Text-based loop where a human plays the oracle: the solver proposes a
//! guess, the human reports how many positions matched their secret
//! vector. The win check (`matches == length`) happens here — the engine
//! has no notion of winning and would keep producing guesses forever.

use crate::core::BitVec;
use crate::solver::Engine;
use crate::solver::entropy::guess_entropy;
use anyhow::{Context, Result};
use std::io::{self, Write};

/// Run the interactive solver loop
///
/// # Errors
///
/// Returns an error only on I/O failure reading user input; every solver
/// state degrades gracefully instead of failing.
pub fn run_simple(length: usize) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════╗");
    println!("║            Bitbreaker - Interactive Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════╝\n");

    println!("Think of a secret {length}-bit vector. I'll guess it from");
    println!("match counts alone.\n");
    println!("After each guess, enter how many positions matched (0-{length}).");
    println!("Commands: 'new' for a new game, 'quit' to exit\n");

    let mut engine = Engine::new(length);
    let mut last: Option<(BitVec, usize)> = None;
    let mut turn = 0;

    loop {
        let guess = engine.next_guess(last.take(), turn);
        turn += 1;

        let possible = engine.possible_count();
        println!("────────────────────────────────────────────────────────────");
        println!("Turn {turn}: {possible} candidates remaining");

        let entropy = guess_entropy(&guess, engine.possible());
        println!("\n📊 My guess: {guess}");
        println!("   Entropy:  {entropy:.3} bits\n");

        let matches = loop {
            let input = prompt(&format!("Matching positions (0-{length})"))?;

            match input.as_str() {
                "quit" | "q" => return Ok(()),
                "new" => {
                    engine.reset(length);
                    turn = 0;
                    println!("\n🔄 New game started!\n");
                    break None;
                }
                text => match text.parse::<usize>() {
                    Ok(count) if count <= length => break Some(count),
                    Ok(count) => {
                        println!("A {length}-bit vector can't match {count} positions.");
                    }
                    Err(_) => {
                        println!("Enter a number between 0 and {length}, 'new', or 'quit'.");
                    }
                },
            }
        };

        let Some(matches) = matches else {
            continue; // new game
        };

        if matches == length {
            println!("\n✅ Got it in {turn} guesses: {guess}");
            println!("Type 'new' to play again, anything else to quit.");
            if prompt("Command")? == "new" {
                engine.reset(length);
                turn = 0;
                println!("\n🔄 New game started!\n");
                continue;
            }
            return Ok(());
        }

        last = Some((guess, matches));
    }
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("failed to read input")?;

    Ok(input.trim().to_lowercase())
}
