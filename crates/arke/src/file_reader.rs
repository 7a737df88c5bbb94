// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The arke authors

//! Zone file loading.
//!
//! Files below [`MMAP_THRESHOLD`] are read into a `String`; larger ones are
//! memory-mapped. Either way the text is checked as UTF-8 once, up front.

// memmap2 needs unsafe to create a mapping.
#![allow(unsafe_code)]

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use memmap2::Mmap;

use crate::config::defaults::size::MMAP_THRESHOLD;

/// Text of a zone file.
pub enum FileContent {
    Owned(String),
    /// Holds bytes already validated as UTF-8.
    Mapped(Mmap),
}

impl FileContent {
    /// Read `path`, mapping it when large. Non-UTF-8 content is
    /// `InvalidData`.
    pub fn read(path: &Path) -> io::Result<Self> {
        let mut file = File::open(path)?;
        let len = file.metadata()?.len();

        if len < MMAP_THRESHOLD {
            let mut text = String::with_capacity(usize::try_from(len).unwrap_or(0));
            file.read_to_string(&mut text)?;
            return Ok(FileContent::Owned(text));
        }

        tracing::debug!(path = %path.display(), len, "memory-mapping zone file");
        // SAFETY: read-only map of a file we just opened. It is dropped when
        // the parse that borrows it finishes.
        let map = unsafe { Mmap::map(&file)? };
        std::str::from_utf8(&map).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(FileContent::Mapped(map))
    }

    pub fn as_str(&self) -> &str {
        match self {
            FileContent::Owned(text) => text,
            // SAFETY: validated in `read`, and the map is never written.
            FileContent::Mapped(map) => unsafe { std::str::from_utf8_unchecked(map) },
        }
    }

    pub fn is_mapped(&self) -> bool {
        matches!(self, FileContent::Mapped(_))
    }
}

#[cfg(test)]
#[path = "file_reader_tests.rs"]
mod tests;
