use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    hbnb_observability::init();

    let summary = hbnb_cli::run(std::io::stdin().lock(), std::io::stdout().lock())?;

    if summary.all_accepted() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(hbnb_cli::EXIT_REJECTED))
    }
}
