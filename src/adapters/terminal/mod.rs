//! Terminal front-end: sequential screens over stdin/stdout.

mod runner;
mod screens;

pub use runner::run;
pub use screens::{
    parse_activity_choice, parse_area_selection, parse_year_choice, prompt_line,
};
