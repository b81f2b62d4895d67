// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// Pretty printers for reporting information.
use std::{
    borrow::Cow,
    sync::{Mutex, MutexGuard},
};

const VERTICAL: char = '│';
const UP_AND_RIGHT: char = '└';
const VERTICAL_AND_RIGHT: char = '├';

lazy_static::lazy_static! {
    static ref WARNING_PRINTER: Mutex<Blocks> = Mutex::new(Blocks::default());
}

type Block = Vec<Cow<'static, str>>;

#[derive(Default)]
struct Blocks(Vec<Block>);

impl Blocks {
    /// Log every line of every block, drawing a tree down the left-hand side.
    fn log(&self, level: log::Level) {
        let num_blocks = self.0.len();
        for (i_block, block) in self.0.iter().enumerate() {
            let num_lines = block.len();
            for (i_line, line) in block.iter().enumerate() {
                let symbol = match (i_line, i_line + 1 == num_lines, i_block + 1 == num_blocks) {
                    (0, false, _) => VERTICAL_AND_RIGHT,
                    (0, _, false) => VERTICAL_AND_RIGHT,
                    (0, true, true) => UP_AND_RIGHT,
                    _ => VERTICAL,
                };
                log::log!(level, "{symbol} {line}");
            }
        }
        log::log!(level, "");
    }
}

/// Collects lines of information under a title, and logs them all at once.
pub(crate) struct InfoPrinter {
    title: Cow<'static, str>,
    blocks: Blocks,
}

impl InfoPrinter {
    pub(crate) fn new<S: Into<Cow<'static, str>>>(title: S) -> Self {
        Self {
            title: title.into(),
            blocks: Blocks::default(),
        }
    }

    pub(crate) fn push_line<S: Into<Cow<'static, str>>>(&mut self, line: S) {
        self.blocks.0.push(vec![line.into()]);
    }

    pub(crate) fn push_block(&mut self, block: Vec<Cow<'static, str>>) {
        self.blocks.0.push(block);
    }

    pub(crate) fn display(self) {
        log::info!("{}", console::style(self.title).bold());
        self.blocks.log(log::Level::Info);
    }
}

fn warning_printer() -> MutexGuard<'static, Blocks> {
    // A poisoned lock still holds valid warnings.
    WARNING_PRINTER
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub(crate) trait Warn {
    fn warn(self);
}

impl Warn for Vec<Cow<'static, str>> {
    fn warn(self) {
        warning_printer().0.push(self);
    }
}

/// Print out any warnings that have been collected as CLI arguments have been
/// parsed. This should only be called once all arguments have been parsed into
/// parameters.
pub(crate) fn display_warnings() {
    let mut printer = warning_printer();
    log::debug!("Displaying warnings");
    if printer.0.is_empty() {
        return;
    }

    log::warn!("{}", console::style("Warnings").bold());
    printer.log(log::Level::Warn);
    printer.0.clear();
}
