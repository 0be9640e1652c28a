use std::{env, fs::read_to_string, process};

use minic::{errors::reporter::ErrorReporter, parser::parser::Parser, scanner::scanner::Scanner};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: minic filename");
        process::exit(1);
    }

    println!("********** MiniC Compiler **********");

    let source = read_to_string(&args[1]).expect("Failed to read source file!");

    println!("Syntax Analysis ...");

    let scanner = Scanner::new(source);
    let mut reporter = ErrorReporter::new();
    let mut parser = Parser::new(scanner, &mut reporter);
    parser.parse();

    // Compilation failure is reported through the message, not the
    // process exit code.
    if reporter.num_errors() == 0 {
        println!("Compilation was successful.");
    } else {
        println!("Compilation was unsuccessful.");
    }
}
