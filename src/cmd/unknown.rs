/// Handles a missing or unrecognized command. Nothing is written.
pub fn run(args: &[String]) {
    match args.first() {
        Some(name) => println!("Unknown command '{name}'. Run with --help to list commands."),
        None => println!("No command given. Run with --help to list commands."),
    }
}
