//! Screen rendering and input parsing for the terminal front-end.
//!
//! Each helper is a pure function over generic reader/writer handles so
//! tests can drive screens from scripted buffers.

use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};

use crate::domain::foundation::{ActivityType, BodyArea, YearLevel};
use crate::domain::wizard::WizardStep;

/// Writes the screen title and, for the numbered screens, the progress line.
pub fn render_header<W: Write>(output: &mut W, step: WizardStep) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "=== {} ===", step.display_name())?;
    if let Some((position, total)) = step.progress() {
        writeln!(output, "Step {} of {}", position, total)?;
    }
    Ok(())
}

/// Prompts for one line of input.
///
/// Returns `None` on end of input, which the wizard treats as an abort.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", label)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Writes the numbered year level menu.
pub fn render_year_menu<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "Select your year level:")?;
    for (index, year) in YearLevel::all().iter().enumerate() {
        writeln!(output, "  {}) {}", index + 1, year)?;
    }
    Ok(())
}

/// Writes the numbered body area checklist.
pub fn render_area_menu<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "Which parts of your body hurt?")?;
    for (index, area) in BodyArea::all().iter().enumerate() {
        writeln!(output, "  {}) {}", index + 1, area)?;
    }
    Ok(())
}

/// Writes the numbered activity type menu.
pub fn render_activity_menu<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "Select activity type:")?;
    for (index, activity) in ActivityType::all().iter().enumerate() {
        writeln!(output, "  {}) {}", index + 1, activity)?;
    }
    Ok(())
}

/// Resolves a year menu submission: a 1-based menu number or a label.
///
/// Anything else resolves to `None`, the placeholder the sequencer rejects.
pub fn parse_year_choice(input: &str) -> Option<YearLevel> {
    let trimmed = input.trim();
    if let Ok(number) = trimmed.parse::<usize>() {
        return number
            .checked_sub(1)
            .and_then(|index| YearLevel::all().get(index).copied());
    }
    YearLevel::parse(trimmed)
}

/// Resolves an activity menu submission: a 1-based menu number or a name.
pub fn parse_activity_choice(input: &str) -> Option<ActivityType> {
    let trimmed = input.trim();
    if let Ok(number) = trimmed.parse::<usize>() {
        return number
            .checked_sub(1)
            .and_then(|index| ActivityType::all().get(index).copied());
    }
    ActivityType::parse(trimmed)
}

/// Resolves a comma-separated multi-select of body areas.
///
/// Returns the recognized selection plus any tokens that matched nothing;
/// the caller reports those and moves on (the selection itself is
/// validated by the sequencer).
pub fn parse_area_selection(input: &str) -> (BTreeSet<BodyArea>, Vec<String>) {
    let mut areas = BTreeSet::new();
    let mut unrecognized = Vec::new();

    for token in input.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let parsed = token
            .parse::<usize>()
            .ok()
            .and_then(|number| number.checked_sub(1))
            .and_then(|index| BodyArea::all().get(index).copied())
            .or_else(|| BodyArea::parse(token));
        match parsed {
            Some(area) => {
                areas.insert(area);
            }
            None => unrecognized.push(token.to_string()),
        }
    }

    (areas, unrecognized)
}
