use std::io::{self, BufRead, Write};

use anyhow::Result;
use gradecast_client::Session;
use gradecast_core::{render_dataset_stats, render_gpa_bands, GradecastConfig};

use crate::output;
use crate::parse_assignment;

pub fn run(session: &mut Session, config: &GradecastConfig) -> Result<()> {
    display_welcome(session);
    session.start();
    print!("{}", output::range_table(&session.controller().range_rows()));
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        let cmd = parts[0].to_lowercase();

        match cmd.as_str() {
            "help" | "h" | "?" => display_help(),
            "ranges" | "r" => print!("{}", output::range_table(&session.controller().range_rows())),
            "form" | "f" => print!("{}", output::form_table(session.controller().form())),
            "set" => handle_set(session, &parts[1..]),
            "sample" | "s" => {
                let written = session.fill_sample();
                if written.is_empty() {
                    print!("{}", output::view_state(session.view(), config.display.bar_width));
                } else {
                    println!("  Filled {} fields from sample.", written.len());
                    print!("{}", output::form_table(session.controller().form()));
                }
            }
            "validate" | "v" => {
                let check = session.check_inputs();
                print!("{}", output::form_table(session.controller().form()));
                println!("  {}", check.message);
            }
            "predict" | "p" => {
                println!("  Predicting...");
                let view = session.submit().clone();
                print!("{}", output::view_state(&view, config.display.bar_width));
            }
            "gpa" => match session.gpa_bands() {
                Ok(bands) => print!("{}", output::gpa_table(&render_gpa_bands(&bands))),
                Err(e) => println!("Error: {}", e),
            },
            "stats" => match session.dataset_stats() {
                Ok(stats) => print!("{}", output::stats_table(&render_dataset_stats(&stats))),
                Err(e) => println!("Error: {}", e),
            },
            "classes" => {
                let classes = session.controller().classes();
                if classes.is_empty() {
                    println!("  No classes loaded.");
                } else {
                    println!("  {}", classes.join(", "));
                }
            }
            "reset" => {
                session.reset();
                println!("  Form cleared.");
            }
            "clear" | "cls" => {
                print!("\x1B[2J\x1B[1;1H");
                stdout.flush()?;
            }
            "exit" | "quit" | "q" => break,
            _ => {
                println!("Unknown command: {}. Type 'help' for available commands.", cmd);
            }
        }
    }

    Ok(())
}

/// `set name value`, `set name=value`, or `set name` to clear.
fn handle_set(session: &mut Session, args: &[&str]) {
    let assignment = match args {
        [single] if single.contains('=') => parse_assignment(single),
        [name] => Ok((name.to_string(), String::new())),
        [name, value] => Ok((name.to_string(), value.to_string())),
        _ => {
            println!("Usage: set <field> <value>");
            return;
        }
    };

    let (name, value) = match assignment {
        Ok(pair) => pair,
        Err(e) => {
            println!("Error: {}", e);
            return;
        }
    };

    let outcome = session
        .controller_mut()
        .input(&name, value)
        .map(|result| result.diagnostic().map(str::to_owned));
    match outcome {
        Some(diagnostic) => match diagnostic {
            Some(diagnostic) => println!("  ! {}", diagnostic),
            None => println!("  ok"),
        },
        None if session.controller().form().schema().field(&name).is_some() => println!("  ok"),
        None => println!("  Unknown field: {}", name),
    }
}

fn display_welcome(session: &Session) {
    println!();
    println!("  Gradecast - Student Performance Predictor");
    println!("  Server: {}", session.client().host());
    println!();
    println!("  sample, s           # Fill the form with sample values");
    println!("  set <field> <value> # Set one field");
    println!("  predict, p          # Predict a performance category");
    println!("  help                # Show all command options");
    println!("  exit, quit, q       # Leave");
    println!();
}

fn display_help() {
    println!();
    println!("Available Commands:");
    println!("  ranges, r           Show valid feature ranges");
    println!("  form, f             Show current values and diagnostics");
    println!("  set <field> <value> Set one field (also: set field=value)");
    println!("  sample, s           Fill the form with the server's sample values");
    println!("  validate, v         Check every value against its range");
    println!("  predict, p          Submit the form and show the prediction");
    println!("  classes             Show the prediction classes");
    println!("  gpa                 Show the GPA band behind each class");
    println!("  stats               Show dataset statistics");
    println!("  reset               Clear the form, diagnostics and last result");
    println!("  clear, cls          Clear screen");
    println!("  help, h             Show this help message");
    println!("  exit, quit, q       Leave");
    println!();
}
