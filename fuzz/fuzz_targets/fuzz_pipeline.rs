use afl::fuzz;
use exprc::eval::EvalError;
use exprc::machine::MachineError;

fn main() {
    fuzz!(|data: &[u8]| {
        // Convert bytes to string
        if let Ok(input) = std::str::from_utf8(data) {
            // Lex the input
            let Ok(tokens) = exprc::lex(input) else {
                return;
            };

            // Parse the tokens
            let Ok(ast) = exprc::Parser::parse(&tokens) else {
                return;
            };

            // Any tree the parser accepts must generate a balanced program
            let asm = match exprc::codegen::generate(&ast) {
                Ok(asm) => asm,
                Err(e) => panic!("generator failed on {:?}: {}", input, e),
            };

            // The program computes what the evaluator computes, faults included
            match (exprc::eval::evaluate(&ast), exprc::machine::run(&asm)) {
                (Ok(expected), Ok(actual)) if expected == actual => {}
                (Err(EvalError::DivisionByZero { .. }), Err(MachineError::DivideError)) => {}
                (Err(EvalError::DivisionOverflow { .. }), Err(MachineError::DivideOverflow)) => {}
                (expected, actual) => panic!(
                    "evaluator and program disagree on {:?}: {:?} vs {:?}\n{}",
                    input, expected, actual, asm
                ),
            }
        }
    });
}
