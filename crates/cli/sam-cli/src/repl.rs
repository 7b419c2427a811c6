//! Interactive `[o]ccurrence`/`[f]irst`/`[a]ll`/`[q]uit` menu, mirroring
//! the original tool's REPL.

use std::io::{self, Write};

use sam::algorithms::suffix_automaton::{SuffixAutomaton, Transitions};
use sam::SamError;

pub(crate) fn run<T: Transitions>(text: &str) -> Result<(), SamError> {
    let mut sam = SuffixAutomaton::<T>::new(text);
    log::info!(
        "automaton for a text of size {} has {} states",
        text.len(),
        sam.state_count()
    );

    loop {
        println!(
            "Would you like to check for the [o]ccurrence of a substring, \
             the [f]irst position of a substring, [a]ll positions of a \
             substring, or [q]uit?"
        );
        let Some(choice) = prompt_char()? else {
            log::info!("stdin closed, quitting");
            return Ok(());
        };

        match choice {
            'o' => {
                let pattern = prompt_line("Enter a substring to see if it occurs:")?;
                if sam.contains(&pattern) {
                    println!("YES, \"{text}\" contains the substring \"{pattern}\"");
                } else {
                    println!("NO, \"{text}\" does not contain the substring \"{pattern}\"");
                }
            }
            'f' => {
                let pattern = prompt_line("Enter a substring to see its first position:")?;
                match sam.first(&pattern) {
                    Some(position) => println!(
                        "YES, \"{text}\" contains the substring \"{pattern}\" at position {position}"
                    ),
                    None => println!(
                        "NO, \"{text}\" does not contain the substring \"{pattern}\""
                    ),
                }
            }
            'a' => {
                let pattern = prompt_line("Enter a substring to see its positions:")?;
                let positions = sam.positions(&pattern);
                if positions.is_empty() {
                    println!("NO, \"{text}\" does not contain the substring \"{pattern}\"");
                } else {
                    print!("YES, \"{text}\" contains the substring \"{pattern}\" at positions\n[ ");
                    for p in &positions {
                        print!("{p} ");
                    }
                    println!("]");
                }
            }
            'q' => {
                println!("Quitting");
                return Ok(());
            }
            other => {
                println!("Unrecognized choice '{other}', try again.");
            }
        }
    }
}

fn prompt_line(prompt: &str) -> Result<String, SamError> {
    println!("{prompt}");
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

/// Reads one non-whitespace character from stdin, or `None` at EOF.
fn prompt_char() -> Result<Option<char>, SamError> {
    io::stdout().flush()?;
    let mut line = String::new();
    let read = io::stdin().read_line(&mut line)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(line.trim().chars().next())
}
