use exprc::{CompileError, compile};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    let args = std::env::args().collect::<Vec<String>>();
    let program = args.first().map(String::as_str).unwrap_or("exprc");

    // Handle flags
    if args.len() == 2 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("exprc {}", VERSION);
                return;
            }
            "--help" | "-h" => {
                print_usage(program);
                return;
            }
            _ => {}
        }
    }

    if args.len() != 2 {
        let err = CompileError::Usage(format!("{} <expr>", program));
        eprintln!("{}", err.format_with_source(""));
        std::process::exit(1);
    }

    let source = &args[1];

    match compile(source) {
        Ok(asm) => print!("{}", asm),
        Err(e) => {
            eprintln!("{}", e.format_with_source(source));
            std::process::exit(1);
        }
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <expr>", program);
    eprintln!();
    eprintln!("Compiles an arithmetic expression to x86-64 assembly on stdout.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -h, --help       Print this help message");
    eprintln!("  -v, --version    Print version information");
}
