//! Interactive session state machine.
//!
//! The session walks an explicit state graph (main menu, keyword entry,
//! mode selection, comparison, continue prompt) driven by an
//! [`InputSource`]. Comparison work never reads input itself, and an
//! exhausted input stream ends the session cleanly.

use std::path::Path;

use crate::compare::directory::DirectoryComparator;
use crate::compare::SearchMode;
use crate::config::Config;
use crate::error::CompareError;
use crate::ports::{FileTree, InputSource, ReportSink};

const BANNER: &str = "\n=== smalidiff: keyword-scoped smali comparison ===\n";

const MAIN_MENU: &str = "Choose an option:
1) Compare using default keywords
2) Compare using a custom keyword
3) Exit";

const MODE_MENU: &str = "Choose a search type:
1) Class name
2) Method name
3) Method content
4) Back to main menu";

/// Where the current keyword came from, and what follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
enum KeywordSource {
    /// Walking the built-in list; `next` is the index to try after the
    /// current keyword.
    Defaults { next: usize },
    /// A keyword typed by the user.
    Custom,
}

/// One node of the session state graph.
#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    MainMenu,
    EnteringKeyword,
    SelectingMode { keyword: String, source: KeywordSource },
    Comparing { keyword: String, mode: SearchMode, source: KeywordSource },
    AwaitingContinue { source: KeywordSource },
    Exit,
}

/// Drives interactive comparison rounds over two extracted trees.
pub struct Session<'a> {
    config: &'a Config,
    tree: &'a dyn FileTree,
    report: &'a dyn ReportSink,
    input: &'a mut dyn InputSource,
}

impl<'a> Session<'a> {
    /// Builds a session over the given collaborators.
    #[must_use]
    pub fn new(
        config: &'a Config,
        tree: &'a dyn FileTree,
        report: &'a dyn ReportSink,
        input: &'a mut dyn InputSource,
    ) -> Self {
        Self { config, tree, report, input }
    }

    /// Runs the session until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::Input`] when the input source fails.
    /// Comparison errors are reported and never end the session.
    pub fn run(&mut self, dir_a: &Path, dir_b: &Path) -> Result<(), CompareError> {
        let mut state = State::MainMenu;
        loop {
            if state == State::Exit {
                return Ok(());
            }
            state = match self.step(state, dir_a, dir_b) {
                Ok(next) => next,
                Err(CompareError::InputClosed) => State::Exit,
                Err(err) => return Err(err),
            };
        }
    }

    fn step(&mut self, state: State, dir_a: &Path, dir_b: &Path) -> Result<State, CompareError> {
        match state {
            State::MainMenu => self.main_menu(),
            State::EnteringKeyword => self.entering_keyword(),
            State::SelectingMode { keyword, source } => self.selecting_mode(keyword, source),
            State::Comparing { keyword, mode, source } => {
                Ok(self.comparing(dir_a, dir_b, &keyword, mode, source))
            }
            State::AwaitingContinue { source } => self.awaiting_continue(source),
            State::Exit => Ok(State::Exit),
        }
    }

    fn main_menu(&mut self) -> Result<State, CompareError> {
        self.report.banner(BANNER);
        self.report.banner(MAIN_MENU);
        let choice = self.input.read_line("Enter your choice (1-3): ")?;
        Ok(match choice.as_str() {
            "1" => match self.config.keywords.first() {
                Some(keyword) => State::SelectingMode {
                    keyword: keyword.clone(),
                    source: KeywordSource::Defaults { next: 1 },
                },
                None => {
                    self.report.info("No default keywords configured.");
                    State::MainMenu
                }
            },
            "2" => State::EnteringKeyword,
            "3" => {
                self.report.info("Exiting the comparison session.");
                State::Exit
            }
            _ => {
                self.report.warn("Invalid choice, please select 1, 2, or 3.");
                State::MainMenu
            }
        })
    }

    fn entering_keyword(&mut self) -> Result<State, CompareError> {
        let keyword = self
            .input
            .read_line("Enter a custom keyword to search for (or 'exit' to go back): ")?;
        Ok(if keyword.eq_ignore_ascii_case("exit") {
            State::MainMenu
        } else if keyword.is_empty() {
            self.report.warn("Keyword must not be empty.");
            State::EnteringKeyword
        } else {
            State::SelectingMode { keyword, source: KeywordSource::Custom }
        })
    }

    fn selecting_mode(
        &mut self,
        keyword: String,
        source: KeywordSource,
    ) -> Result<State, CompareError> {
        self.report.banner(MODE_MENU);
        let choice = self.input.read_line("Enter your choice (1-4): ")?;
        let mode = match choice.as_str() {
            "1" => SearchMode::Class,
            "2" => SearchMode::MethodName,
            "3" => SearchMode::MethodContent,
            "4" => return Ok(State::MainMenu),
            _ => {
                self.report.warn("Invalid choice, please select 1, 2, 3, or 4.");
                return Ok(State::SelectingMode { keyword, source });
            }
        };
        Ok(State::Comparing { keyword, mode, source })
    }

    fn comparing(
        &mut self,
        dir_a: &Path,
        dir_b: &Path,
        keyword: &str,
        mode: SearchMode,
        source: KeywordSource,
    ) -> State {
        let comparator = DirectoryComparator::new(self.tree, self.report, &self.config.extension);
        match comparator.compare(dir_a, dir_b, keyword, mode) {
            Ok(true) => {}
            Ok(false) => self.report.warn(&format!(
                "No differences found for keyword: '{keyword}' with search type: '{}'",
                mode.label()
            )),
            // Lookup misses and I/O trouble are reported per keyword;
            // the session always moves on.
            Err(err) => self.report.warn(&err.to_string()),
        }
        State::AwaitingContinue { source }
    }

    fn awaiting_continue(&mut self, source: KeywordSource) -> Result<State, CompareError> {
        match source {
            KeywordSource::Defaults { next } => {
                let answer =
                    self.input.read_line("Continue with the next keyword? (yes/no): ")?;
                if !answer.eq_ignore_ascii_case("yes") {
                    return Ok(State::MainMenu);
                }
                match self.config.keywords.get(next) {
                    Some(keyword) => Ok(State::SelectingMode {
                        keyword: keyword.clone(),
                        source: KeywordSource::Defaults { next: next + 1 },
                    }),
                    None => {
                        self.report.info("All default keywords have been tried.");
                        Ok(State::MainMenu)
                    }
                }
            }
            KeywordSource::Custom => {
                let answer =
                    self.input.read_line("Search with another custom keyword? (yes/no): ")?;
                if answer.eq_ignore_ascii_case("yes") {
                    Ok(State::EnteringKeyword)
                } else {
                    Ok(State::MainMenu)
                }
            }
        }
    }
}
