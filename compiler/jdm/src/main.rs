//! `jdm` command-line entry point.

use jdm::commands::{describe_method, describe_type, similar, simple_names};

fn main() {
    jdm::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];
    let report = match command.as_str() {
        "decode" => {
            let Some(text) = args.get(2) else {
                eprintln!("Usage: jdm decode <type-signature>");
                std::process::exit(1);
            };
            describe_type(text)
        }
        "method" => {
            let Some(text) = args.get(2) else {
                eprintln!("Usage: jdm method <method-signature>");
                std::process::exit(1);
            };
            describe_method(text)
        }
        "simple" => Ok(simple_names(&args[2..])),
        "similar" => {
            let [name, first, second] = &args[2..] else {
                eprintln!("Usage: jdm similar <name> <method-signature> <method-signature>");
                std::process::exit(1);
            };
            similar(name, first, second)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    match report {
        Ok(text) => print!("{text}"),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("jdm - inspect encoded type and method signatures");
    println!();
    println!("Usage: jdm <command> [args]");
    println!();
    println!("Commands:");
    println!("  decode <type>                 Show the structure and names of a type signature");
    println!("  method <method>               Show parameters and return type of a method signature");
    println!("  simple <type>...              Print the simple name of each signature");
    println!("  similar <name> <m1> <m2>      Compare two methods by name and simple parameter types");
    println!("  help                          Show this message");
    println!();
    println!("Examples:");
    println!("  jdm decode 'Ljava/util/List<Ljava/lang/String;>;'");
    println!("  jdm method '(QString;I)V'");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=jdm_model=trace) for debug output.");
}
