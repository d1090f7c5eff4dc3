//! ctok CLI
//!
//! Tokenizes a C-like source file and prints one line per token. The file
//! can be given as an argument; without one, the tool prompts for a name
//! and retries until a readable file is provided.

use std::env;
use std::io::{self, Write};
use std::process;

use ctok::{report, scan_file, Token, VERSION};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut show_help = false;
    let mut filename: Option<&String> = None;

    for arg in &args[1..] {
        match arg.as_str() {
            "--help" | "-h" => show_help = true,
            _ if arg.starts_with('-') => {
                eprintln!("Unknown flag: {}", arg);
                print_usage();
                process::exit(1);
            }
            _ => filename = Some(arg),
        }
    }

    if show_help {
        print_help();
        return;
    }

    let tokens = match filename {
        Some(file) => match scan_file(file) {
            Ok(tokens) => tokens,
            Err(e) => {
                eprintln!("{}", e);
                process::exit(1);
            }
        },
        None => prompt_and_scan(),
    };

    report::print_tokens(&tokens);
}

fn print_usage() {
    eprintln!("Usage: ctok [file]");
    eprintln!("       ctok --help");
}

fn print_help() {
    println!("ctok v{} - fault-tolerant tokenizer for C-like source", VERSION);
    println!();
    println!("USAGE:");
    println!("    ctok [file]");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help      Show this help message");
    println!();
    println!("Without a file argument, ctok prompts for a filename and");
    println!("retries until the file can be opened.");
    println!();
    println!("Each token prints as 'content (Category)', with the literal");
    println!("content replaced by 'whitespace' for whitespace runs and a");
    println!("', invalid' marker appended to malformed tokens.");
}

/// Prompt for a filename and retry until a file can be read and scanned
fn prompt_and_scan() -> Vec<Token> {
    loop {
        print!("Enter name of the file: ");
        if io::stdout().flush().is_err() {
            process::exit(1);
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => process::exit(1), // EOF
            Ok(_) => {
                let file = input.trim();
                if file.is_empty() {
                    continue;
                }

                match scan_file(file) {
                    Ok(tokens) => return tokens,
                    Err(e) => {
                        eprintln!("{}. Please, try again.", e);
                    }
                }
            }
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                process::exit(1);
            }
        }
    }
}
