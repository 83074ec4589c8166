//! Different ways of running an item list through a fallible transformation.
//!
//! Every [`Strategy`] uppercases each item with [`shout`], which fails on a
//! missing item. They differ in what happens to that failure: swallowed and
//! replaced by a blank line, allowed to end the run, or carried along as a
//! [`Either::Left`] next to the successful results.

use std::{
    fmt::{self, Display},
    io::Write,
    str::FromStr,
};

use console::Style;
use log::{Level, Log, Record};
use thiserror::Error;

use crate::{lift, lift_with_input, Either, HeadlineError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemError {
    #[error("item is missing")]
    /// The item list had a gap where this item should be
    Missing,
}

/// Uppercase an item
pub fn shout(item: Option<&str>) -> Result<String, ItemError> {
    item.map(str::to_uppercase).ok_or(ItemError::Missing)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Catch the failure inside the mapping closure and print a blank line
    Inline,
    /// Same as [`Strategy::Inline`] with the handling moved to a helper
    Helper,
    /// Let the first failure end the run
    Propagate,
    /// Print every item as `Left(..)` or `Right(..)`
    Lift,
    /// As [`Strategy::Lift`], failures also show the input
    LiftWithInput,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::Inline,
        Strategy::Helper,
        Strategy::Propagate,
        Strategy::Lift,
        Strategy::LiftWithInput,
    ];

    /// Strategies run when none are asked for.
    ///
    /// [`Strategy::Propagate`] is left out since it stops at the first gap.
    pub const DEFAULT: [Strategy; 3] = [Strategy::Inline, Strategy::Helper, Strategy::Lift];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Inline => "inline",
            Strategy::Helper => "helper",
            Strategy::Propagate => "propagate",
            Strategy::Lift => "lift",
            Strategy::LiftWithInput => "lift-with-input",
        }
    }

    pub fn number(self) -> usize {
        match self {
            Strategy::Inline => 1,
            Strategy::Helper => 2,
            Strategy::Propagate => 3,
            Strategy::Lift => 4,
            Strategy::LiftWithInput => 5,
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ShowcaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();

        Strategy::ALL
            .iter()
            .copied()
            .find(|st| st.name() == wanted || st.number().to_string() == wanted)
            .ok_or_else(|| ShowcaseError::UnknownStrategy(s.to_string()))
    }
}

#[derive(Debug, Error)]
pub enum ShowcaseError {
    #[error("No strategy named {0:?}")]
    UnknownStrategy(String),

    #[error("Pipeline halted at item {index}: {source}")]
    Halted { index: usize, source: ItemError },

    #[error("Could not write output")]
    Io(#[from] std::io::Error),
}

impl HeadlineError for ShowcaseError {
    fn headline(&self) -> String {
        match self {
            ShowcaseError::UnknownStrategy(_) => format!("Unknown strategy"),
            ShowcaseError::Halted { .. } => format!("Pipeline halted"),
            ShowcaseError::Io(_) => format!("Could not write output"),
        }
    }

    fn body(&self) -> String {
        match self {
            ShowcaseError::UnknownStrategy(s) => format!(
                "{:?} is not one of {}",
                s,
                Strategy::ALL
                    .iter()
                    .map(|st| format!("{} ({})", st.name(), st.number()))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            ShowcaseError::Halted { index, source } => {
                format!("item {} failed with: {}", index, source)
            }
            ShowcaseError::Io(e) => format!("{}", e),
        }
    }
}

fn emit(logger: &dyn Log, level: Level, args: fmt::Arguments) {
    logger.log(
        &Record::builder()
            .args(args)
            .level(level)
            .target(module_path!())
            .module_path(Some(module_path!()))
            .build(),
    );
}

fn shout_or_blank(logger: &dyn Log, item: Option<&str>) -> String {
    match shout(item) {
        Ok(loud) => loud,
        Err(e) => {
            emit(logger, Level::Error, format_args!("helper failure: {}", e));
            String::new()
        }
    }
}

/// Runs strategies over item lists, writing results to `out` and log records
/// to the given logger.
pub struct Showcase<'l, W> {
    logger: &'l dyn Log,
    out: W,
    colored: bool,
}

impl<'l, W: Write> Showcase<'l, W> {
    pub fn new(logger: &'l dyn Log, out: W) -> Self {
        Self {
            logger,
            out,
            colored: false,
        }
    }

    /// Colour `Left` lines red and `Right` lines green
    pub fn colored(self, colored: bool) -> Self {
        Self { colored, ..self }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn run(&mut self, strategy: Strategy, items: &[Option<String>]) -> Result<(), ShowcaseError> {
        emit(
            self.logger,
            Level::Info,
            format_args!("-- begin {}", strategy),
        );

        match strategy {
            Strategy::Inline => self.inline(items)?,
            Strategy::Helper => self.helper(items)?,
            Strategy::Propagate => self.propagate(items)?,
            Strategy::Lift => self.lift(items)?,
            Strategy::LiftWithInput => self.lift_with_input(items)?,
        }

        emit(self.logger, Level::Info, format_args!("-- end {}", strategy));

        Ok(())
    }

    fn inline(&mut self, items: &[Option<String>]) -> Result<(), ShowcaseError> {
        let logger = self.logger;

        let lines = items.iter().map(|item| match shout(item.as_deref()) {
            Ok(loud) => loud,
            Err(e) => {
                emit(logger, Level::Error, format_args!("inline failure: {}", e));
                String::new()
            }
        });

        for line in lines {
            writeln!(self.out, "{}", line)?;
        }

        Ok(())
    }

    fn helper(&mut self, items: &[Option<String>]) -> Result<(), ShowcaseError> {
        let logger = self.logger;

        for line in items
            .iter()
            .map(|item| shout_or_blank(logger, item.as_deref()))
        {
            writeln!(self.out, "{}", line)?;
        }

        Ok(())
    }

    fn propagate(&mut self, items: &[Option<String>]) -> Result<(), ShowcaseError> {
        let out = &mut self.out;

        items
            .iter()
            .map(|item| shout(item.as_deref()))
            .enumerate()
            .try_for_each(|(index, loud)| -> Result<(), ShowcaseError> {
                let loud = loud.map_err(|source| ShowcaseError::Halted { index, source })?;
                writeln!(out, "{}", loud)?;
                Ok(())
            })
    }

    fn lift(&mut self, items: &[Option<String>]) -> Result<(), ShowcaseError> {
        for result in items.iter().map(Option::as_deref).map(lift(shout)) {
            self.print_either(&result)?;
        }

        Ok(())
    }

    fn lift_with_input(&mut self, items: &[Option<String>]) -> Result<(), ShowcaseError> {
        let logger = self.logger;

        let results = items
            .iter()
            .map(Option::as_deref)
            .map(lift_with_input(|item: &Option<&str>| shout(*item)));

        for result in results {
            if let Some(ctx) = result.get_left() {
                emit(
                    logger,
                    Level::Warn,
                    format_args!("{:?} failed: {}", ctx.input, ctx.error),
                );
            }

            self.print_either(&result)?;
        }

        Ok(())
    }

    fn print_either<L: Display, R: Display>(
        &mut self,
        result: &Either<L, R>,
    ) -> std::io::Result<()> {
        let line = result.to_string();

        if self.colored {
            let style = if result.is_left() {
                Style::new().red()
            } else {
                Style::new().green()
            };

            writeln!(self.out, "{}", style.force_styling(true).apply_to(line))
        } else {
            writeln!(self.out, "{}", line)
        }
    }
}
