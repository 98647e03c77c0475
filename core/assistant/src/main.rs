use std::io;
use std::process;

use assistant::cli::{parse_args, print_completion, print_help, ParseOutcome};
use assistant::console::run_console;
use assistant::wiring::wire_app;
use common::adapter::StdEnvResolver;
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};

fn run() -> Result<(), Error> {
    let config = match parse_args()? {
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(());
        }
        ParseOutcome::Config(config) => config,
    };
    if config.help {
        print_help();
        return Ok(());
    }

    let mut app = wire_app(&config, &StdEnvResolver)?;
    let stdin = io::stdin();
    let result = run_console(
        &mut app.session,
        stdin.lock(),
        &mut io::stdout(),
        &mut io::stderr(),
    );
    let _ = app.log.log(
        &LogRecord::new(LogLevel::Info, "session ended")
            .layer("cli")
            .kind("lifecycle")
            .field("messages", app.session.conversation().len())
            .field("history", app.history_path.to_string()),
    );
    result
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}
