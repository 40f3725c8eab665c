//! Terminal event loop: render the current step, read one submission,
//! hand it to the service, repeat until the wizard closes.

use std::io::{self, BufRead, Write};

use rand::Rng;

use crate::application::{ServiceError, WizardService};
use crate::domain::wizard::{StepAction, WizardStep};
use crate::ports::ReportSink;

use super::screens;

/// Runs one wizard session over the given reader/writer pair.
///
/// A rejected submission prints the validation message and re-renders the
/// same screen; this loop is the only retry mechanism. End of input at any
/// prompt aborts the session.
pub fn run<S, G, R, W>(
    service: &mut WizardService<S, G>,
    input: &mut R,
    output: &mut W,
) -> io::Result<()>
where
    S: ReportSink,
    G: Rng,
    R: BufRead,
    W: Write,
{
    loop {
        let step = service.step();
        if step == WizardStep::Closed {
            writeln!(output, "Goodbye!")?;
            return Ok(());
        }

        let action = read_action(service, step, input, output)?;
        match service.submit(action) {
            Ok(_) => {}
            Err(ServiceError::Sink(err)) => {
                writeln!(output, "Warning: report could not be saved: {}", err)?;
            }
            Err(err) => {
                writeln!(output, "Error: {}", err)?;
            }
        }
    }
}

/// Renders the screen for `step` and reads one submission.
fn read_action<S, G, R, W>(
    service: &WizardService<S, G>,
    step: WizardStep,
    input: &mut R,
    output: &mut W,
) -> io::Result<StepAction>
where
    S: ReportSink,
    G: Rng,
    R: BufRead,
    W: Write,
{
    screens::render_header(output, step)?;

    match step {
        WizardStep::Intro => {
            writeln!(output, "Welcome to the Rehabilitation Assistant!")?;
            writeln!(
                output,
                "Your personal guide to recovery and progress tracking."
            )?;
            writeln!(output, "  1) Start New Session")?;
            writeln!(output, "  2) Close")?;
            loop {
                let Some(choice) = screens::prompt_line(input, output, "Choose an option: ")?
                else {
                    return Ok(StepAction::Close);
                };
                match choice.as_str() {
                    "1" => return Ok(StepAction::Start),
                    "2" => return Ok(StepAction::Close),
                    _ => writeln!(output, "Please enter 1 or 2.")?,
                }
            }
        }

        WizardStep::Identity => {
            let Some(name) = screens::prompt_line(input, output, "Enter your name: ")? else {
                return Ok(StepAction::Close);
            };
            screens::render_year_menu(output)?;
            let Some(choice) = screens::prompt_line(input, output, "Year level: ")? else {
                return Ok(StepAction::Close);
            };
            Ok(StepAction::SubmitIdentity {
                name,
                year_level: screens::parse_year_choice(&choice),
            })
        }

        WizardStep::Pain => {
            let Some(rating) = screens::prompt_line(input, output, "Rate your pain (0-10): ")?
            else {
                return Ok(StepAction::Close);
            };
            Ok(StepAction::SubmitPain { input: rating })
        }

        WizardStep::BodyArea => {
            screens::render_area_menu(output)?;
            let Some(selection) =
                screens::prompt_line(input, output, "Affected areas (comma-separated): ")?
            else {
                return Ok(StepAction::Close);
            };
            let (areas, unrecognized) = screens::parse_area_selection(&selection);
            for token in unrecognized {
                writeln!(output, "(ignoring unrecognized area '{}')", token)?;
            }

            screens::render_activity_menu(output)?;
            let Some(choice) = screens::prompt_line(input, output, "Activity type: ")? else {
                return Ok(StepAction::Close);
            };
            Ok(StepAction::SubmitBodyArea {
                areas,
                activity: screens::parse_activity_choice(&choice),
            })
        }

        WizardStep::Report => {
            if let Some(block) = service.rendered_report() {
                write!(output, "{}", block)?;
            }
            let _ = screens::prompt_line(input, output, "Press Enter to close. ")?;
            Ok(StepAction::Close)
        }

        // The loop exits before reading on a terminal step.
        WizardStep::Closed => Ok(StepAction::Close),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::report::InMemoryReportSink;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    fn run_script(script: &str) -> (WizardService<InMemoryReportSink, StdRng>, String) {
        let mut service =
            WizardService::new(InMemoryReportSink::new(), StdRng::seed_from_u64(42));
        let mut input = Cursor::new(script.to_string());
        let mut output = Vec::new();
        run(&mut service, &mut input, &mut output).unwrap();
        (service, String::from_utf8(output).unwrap())
    }

    #[test]
    fn scripted_session_runs_to_completion() {
        // Intro, name, year, pain, areas, activity, close report.
        let (service, output) = run_script("1\nAminder\n2\n2\n1\n2\n\n");

        assert_eq!(service.step(), WizardStep::Closed);
        assert_eq!(service.sink().block_count(), 1);
        assert!(output.contains("----- Rehab Report -----"));
        assert!(output.contains("Name: Aminder"));
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn invalid_pain_input_reprompts_same_screen() {
        let (service, output) = run_script("1\nAminder\n2\nabc\n5\n1\n2\n\n");

        assert_eq!(service.step(), WizardStep::Closed);
        assert!(output.contains("could not be read from 'abc'"));
        assert!(output.contains("Pain Level: 5 (Moderate)"));
        // The pain screen rendered twice: once initially, once after the
        // rejection.
        assert_eq!(output.matches("=== Pain Level ===").count(), 2);
    }

    #[test]
    fn empty_name_reprompts_identity_screen() {
        let (service, output) = run_script("1\n\n2\nAminder\n2\n3\n1\n2\n\n");

        assert_eq!(service.step(), WizardStep::Closed);
        assert!(output.contains("Field 'name' is required"));
        assert_eq!(output.matches("=== Student Info ===").count(), 2);
        assert_eq!(service.record().name(), Some("Aminder"));
    }

    #[test]
    fn closing_from_intro_appends_nothing() {
        let (service, output) = run_script("2\n");

        assert_eq!(service.step(), WizardStep::Closed);
        assert_eq!(service.sink().block_count(), 0);
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn end_of_input_aborts_mid_run() {
        let (service, _) = run_script("1\nAminder\n2\n");

        assert_eq!(service.step(), WizardStep::Closed);
        assert_eq!(service.sink().block_count(), 0);
    }

    #[test]
    fn unrecognized_area_tokens_are_reported_and_ignored() {
        let (service, output) = run_script("1\nAminder\n2\n2\nknee, elbow\n2\n\n");

        assert_eq!(service.step(), WizardStep::Closed);
        assert!(output.contains("(ignoring unrecognized area 'elbow')"));
        assert!(output.contains("Affected Area(s): Knee"));
    }
}
