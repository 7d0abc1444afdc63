//! Egg CLI
//!
//! Parses and evaluates Egg programs.

use eggc::commands::{eval_inline, fmt_file, invalid_binding, parse_file, run_file};
use eggc::{init_tracing, parse_run_args, RunArgs};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" | "eval" => {
            let RunArgs { target, bindings } = match parse_run_args(&args[2..]) {
                Ok(run_args) => run_args,
                Err(error) => invalid_binding(&error),
            };

            let Some(target) = target else {
                if command == "run" {
                    eprintln!("Usage: egg run <file.egg> [-D name=value]...");
                } else {
                    eprintln!("Usage: egg eval <source> [-D name=value]...");
                }
                std::process::exit(1);
            };

            if command == "run" {
                run_file(target, bindings);
            } else {
                eval_inline(target, bindings);
            }
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: egg parse <file.egg>");
                std::process::exit(1);
            }
            parse_file(&args[2]);
        }
        "fmt" => {
            if args.len() < 3 {
                eprintln!("Usage: egg fmt <file.egg>");
                std::process::exit(1);
            }
            fmt_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("egg {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Egg language front end");
    println!();
    println!("Usage: egg <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file>       Evaluate a program file and print its value");
    println!("  eval <source>    Evaluate a program given on the command line");
    println!("  parse <file>     Print the syntax tree of a program");
    println!("  fmt <file>       Print a program in canonical form");
    println!("  help             Show this help message");
    println!("  version          Show version information");
    println!();
    println!("Options (run, eval):");
    println!("  -D name=value    Bind a number or \"string\" literal before evaluating");
    println!();
    println!("Environment:");
    println!("  RUST_LOG         Enable tracing, e.g. RUST_LOG=egg_eval=debug");
}
