//! Display sink abstraction
//!
//! This module provides the trait for LED matrix collaborators and two
//! software implementations: an in-memory recorder for tests and a console
//! stand-in for running without hardware.

use crate::error::DisplayError;
use crate::reading::Rgb;

/// Trait for display collaborators
///
/// `scroll_message` blocks until the scroll animation completes; animation
/// timing is the collaborator's concern, not the caller's.
pub trait DisplaySink {
    /// Scroll a colored message across the LED matrix
    fn scroll_message(&mut self, text: &str, color: Rgb) -> Result<(), DisplayError>;
}

/// An in-memory display that records every scrolled message
///
/// Closing the display makes further scrolls fail, which exercises the
/// display-failure path without hardware.
#[derive(Debug)]
pub struct MemoryDisplay {
    messages: Vec<(String, Rgb)>,
    is_open: bool,
}

impl Default for MemoryDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDisplay {
    /// Create a new open display
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            is_open: true,
        }
    }

    /// Messages scrolled so far, in order
    pub fn messages(&self) -> &[(String, Rgb)] {
        &self.messages
    }

    /// Close the display; subsequent scrolls return an error
    pub fn close(&mut self) {
        self.is_open = false;
    }
}

impl DisplaySink for MemoryDisplay {
    fn scroll_message(&mut self, text: &str, color: Rgb) -> Result<(), DisplayError> {
        if !self.is_open {
            return Err(DisplayError::Unavailable {
                reason: "Display is closed".to_string(),
            });
        }
        self.messages.push((text.to_string(), color));
        Ok(())
    }
}

/// A console stand-in for the LED matrix
///
/// Prints the message instead of animating it. Useful for demos on machines
/// without a matrix attached.
#[derive(Debug, Default)]
pub struct ConsoleDisplay;

impl ConsoleDisplay {
    pub fn new() -> Self {
        Self
    }
}

impl DisplaySink for ConsoleDisplay {
    fn scroll_message(&mut self, text: &str, color: Rgb) -> Result<(), DisplayError> {
        println!("*** {text} *** [scrolling {color}]");
        Ok(())
    }
}
