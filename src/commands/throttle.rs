use crate::core::{evaluate, read_counters, run_action, status_line, Decision, ThrottleConfig};
use crate::error::Result;

/// Sample the interface once and act on the result.
///
/// Prints the status line when no limits are set, runs the action when a
/// limit is exceeded, and stays silent otherwise. The action's own outcome
/// never turns into an error here.
pub fn execute(config: &ThrottleConfig) -> Result<Decision> {
    let sample = read_counters(&config.source, &config.interface)?;
    let decision = evaluate(&config.limits, &sample);

    match &decision {
        Decision::Report => {
            println!("{}", status_line(&config.interface, &sample));
        }
        Decision::Quiescent => {
            log::debug!("{}: no limit exceeded", config.interface);
        }
        Decision::Fire(breaches) => {
            let summary = breaches
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");

            match &config.action {
                Some(action) => {
                    log::info!("{}: {}", config.interface, summary);
                    if let Err(e) = run_action(action) {
                        log::warn!("{}", e);
                    }
                }
                None => {
                    log::warn!(
                        "{}: {}, but no action is configured",
                        config.interface,
                        summary
                    );
                }
            }
        }
    }

    Ok(decision)
}
