use std::io::{self, IsTerminal, Write};

use attackr_common::models::report::Report;
use attackr_core::render::{self, ReportLine};
use colored::*;

use crate::terminal::colors;

/// Turns colour off when stdout is redirected.
pub fn initialize() {
    if !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }
}

pub fn report(report: &Report) {
    for line in render::lines(report) {
        println!("{}", styled(&line));
    }
}

/// Fatal errors bypass tracing so no log filter can hide them.
pub fn error(err: &anyhow::Error) {
    let _ = write_error(&mut io::stderr().lock(), err);
}

fn write_error(out: &mut impl Write, err: &anyhow::Error) -> io::Result<()> {
    writeln!(out, "{} {err:#}", "Error:".color(colors::HEADER).bold())
}

fn styled(line: &ReportLine) -> ColoredString {
    match line {
        ReportLine::Title(text) => text.color(colors::TITLE).bold(),
        ReportLine::Header(text) => text.color(colors::HEADER).bold(),
        ReportLine::Row(text) => text.color(colors::TEXT_DEFAULT),
        ReportLine::Empty(text) => text.color(colors::NOTICE),
        ReportLine::Blank => "".normal(),
    }
}
