use logo_bg_remover::config::init;
use logo_bg_remover::error::AppError;
use logo_bg_remover::remove_bg::process_job;
use logo_bg_remover::utils::job_progress_bar;

use std::process::ExitCode;

use env_logger::Env;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(path) = err.path() {
                log::error!("job for {} failed", path.display());
            }
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let config = init()?;

    // Jobs run one after another; the first failure ends the run.
    for job in &config.jobs {
        let pb = job_progress_bar();
        pb.set_message(format!("Processing: {}", job.input.display()));

        if let Err(err) = process_job(job, &pb) {
            pb.abandon_with_message(format!("Failed: {}", job.input.display()));
            return Err(err);
        }
    }

    println!("Background removal complete!");
    Ok(())
}
