use std::process::ExitCode;

fn main() -> ExitCode {
    match git_taz::cli::run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            git_taz::ui::output::error(format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}
