use colored::Colorize;

pub fn print_command(command: &[String]) {
    match command.split_first() {
        Some((program, args)) => println!(
            "Running command: {} {}",
            program.cyan().bold(),
            args.join(" ")
        ),
        None => println!("Running command:"),
    }
}

pub fn print_success(msg: &str) {
    println!("{}", msg.green());
}

// stdout, not stderr: the CLI reports failures on stdout.
pub fn print_error(msg: &str) {
    println!("{}", msg.red());
}
