mod repl {
    use rpncalc::{CalculatorBrain, Program};

    // ASCII spellings for symbols that are awkward to type
    pub fn alias(token: &str) -> &str {
        match token {
            "*" | "x" => "✕",
            "/" => "÷",
            "-" => "−",
            "neg" => "+/−",
            "pi" => "π",
            "sq" => "^2",
            "cube" => "^3",
            "sin" => "sin()",
            "cos" => "cos()",
            "tan" => "tan()",
            other => other,
        }
    }

    pub fn show(brain: &CalculatorBrain, result: Option<f64>) -> String {
        match result {
            Some(r) => format!("{} = {}", brain.stack_description(), r),
            None => format!("{} = no result", brain.stack_description()),
        }
    }

    pub fn evalprogram(input: &str) -> String {
        let program: Program = input.split_whitespace().map(alias).collect();
        let mut brain = CalculatorBrain::new();
        brain.deserialize(&program);
        let result = brain.evaluate();
        show(&brain, result)
    }

    fn command(brain: &mut CalculatorBrain, cmd: &str, arg: &str) -> String {
        match cmd {
            ":clear" => {
                brain.clear();
                show(brain, None)
            }
            ":program" => match brain.serialize().to_json() {
                Err(e) => format!("Program error: {}", e),
                Ok(json) => json,
            },
            ":load" => match Program::from_json(arg) {
                Err(e) => format!("Program error: {}", e),
                Ok(program) => {
                    brain.deserialize(&program);
                    let result = brain.evaluate();
                    show(brain, result)
                }
            },
            ":history" => brain
                .history()
                .iter()
                .enumerate()
                .map(|(i, entry)| format!("{:>4}  {}", i + 1, entry))
                .collect::<Vec<String>>()
                .join("\n"),
            ":ops" => brain.registry().symbols().join(" "),
            ":infix" => brain.infix_description(),
            _ => format!("Unknown command: {}", cmd),
        }
    }

    pub fn parse_line(brain: &mut CalculatorBrain, input: &str) -> String {
        let input = input.trim();
        if input.starts_with(':') {
            let (cmd, arg) = input.split_once(char::is_whitespace).unwrap_or((input, ""));
            return command(brain, cmd, arg.trim());
        }
        let mut result = None;
        let mut tokens = input.split_whitespace().peekable();
        if tokens.peek().is_none() {
            result = brain.evaluate();
        }
        for token in tokens {
            result = match token.parse::<f64>() {
                Ok(operand) if operand.is_finite() => brain.push_operand(operand),
                _ => brain.perform_operation(alias(token)),
            };
        }
        show(brain, result)
    }
}

fn main() -> Result<(), String> {
    env_logger::init();

    if std::env::args().len() > 1 {
        let input = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
        println!("{}", repl::evalprogram(&input));
        return Ok(());
    }

    use rustyline::error::ReadlineError;
    let histpath = dirs::home_dir().map(|h| h.join(".rpncalc_history"));
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    if let Some(ref path) = histpath {
        if rl.load_history(path).is_err() {
            println!("No history yet");
        }
    }
    let mut brain = rpncalc::CalculatorBrain::new();
    loop {
        match rl.readline(">> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                println!("{}", repl::parse_line(&mut brain, &line));
            }
        }
    }
    if let Some(path) = histpath {
        rl.save_history(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}
