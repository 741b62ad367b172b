// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tree-shaped reports of what moonmap is about to do, and warnings deferred
//! until argument parsing is finished.

use std::{borrow::Cow, sync::Mutex};

use log::Level;

const VERTICAL: char = '│';
const UP_AND_RIGHT: char = '└';
const VERTICAL_AND_RIGHT: char = '├';

type Block = Vec<Cow<'static, str>>;

lazy_static::lazy_static! {
    static ref DEFERRED_WARNINGS: Mutex<Vec<Block>> = Mutex::new(vec![]);
}

/// The tree symbol preceding a line of a block. Only the first line of the
/// last block closes the tree; continuation lines hang off a vertical bar.
pub(super) fn symbol(i_line: usize, last_line: bool, last_block: bool) -> char {
    match (i_line, last_line && last_block) {
        (0, true) => UP_AND_RIGHT,
        (0, false) => VERTICAL_AND_RIGHT,
        _ => VERTICAL,
    }
}

fn log_tree(level: Level, title: &str, blocks: &[Block]) {
    log::log!(level, "{}", console::style(title).bold());
    for (i_block, block) in blocks.iter().enumerate() {
        let last_block = i_block + 1 == blocks.len();
        for (i_line, line) in block.iter().enumerate() {
            let symbol = symbol(i_line, i_line + 1 == block.len(), last_block);
            log::log!(level, "{symbol} {line}");
        }
    }
    log::log!(level, "");
}

/// Reports a titled tree of parameters, e.g. the geometry an image will be
/// drawn with.
pub(crate) struct InfoPrinter {
    title: Cow<'static, str>,
    blocks: Vec<Block>,
}

impl InfoPrinter {
    pub(crate) fn new(title: Cow<'static, str>) -> Self {
        Self {
            title,
            blocks: vec![],
        }
    }

    pub(crate) fn push_line(&mut self, line: Cow<'static, str>) {
        self.blocks.push(vec![line]);
    }

    pub(crate) fn push_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub(crate) fn display(self) {
        log_tree(Level::Info, &self.title, &self.blocks);
    }
}

/// Defer a warning until [`display_warnings`] is called, so that warnings
/// raised while parsing arguments are printed together.
pub(crate) trait Warn {
    fn warn(self);
}

impl<T: Into<Cow<'static, str>>> Warn for T {
    fn warn(self) {
        if let Ok(mut warnings) = DEFERRED_WARNINGS.lock() {
            warnings.push(vec![self.into()]);
        }
    }
}

/// Print and forget any deferred warnings. Call this once all arguments have
/// been parsed into parameters.
pub(crate) fn display_warnings() {
    log::debug!("Displaying warnings");
    if let Ok(mut warnings) = DEFERRED_WARNINGS.lock() {
        if !warnings.is_empty() {
            log_tree(Level::Warn, "Warnings", &warnings);
            warnings.clear();
        }
    }
}
