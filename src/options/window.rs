//! Window options: line wrapping and word wrapping.

use serde::Serialize;

/// Default for the `wrap` option.
const WRAP: bool = true;

/// Default for the `line_break` option.
const LINE_BREAK: bool = false;

/// Canonical values of the window options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WindowOptions {
    wrap: bool,
    line_break: bool,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl WindowOptions {
    pub fn builder() -> WindowOptionsBuilder {
        WindowOptionsBuilder::default()
    }

    /// Long lines continue on the next row instead of running off screen.
    /// Defaults to `true`.
    pub fn wrap(&self) -> bool {
        self.wrap
    }

    pub fn set_wrap(&mut self, value: bool) {
        self.wrap = value;
    }

    /// Wrapped lines break at word boundaries rather than at the last
    /// column. Only meaningful while `wrap` is on. Defaults to `false`.
    pub fn line_break(&self) -> bool {
        self.line_break
    }

    pub fn set_line_break(&mut self, value: bool) {
        self.line_break = value;
    }
}

/// Builder for [`WindowOptions`]
#[derive(Debug, Clone)]
pub struct WindowOptionsBuilder {
    wrap: bool,
    line_break: bool,
}

impl Default for WindowOptionsBuilder {
    fn default() -> Self {
        Self {
            wrap: WRAP,
            line_break: LINE_BREAK,
        }
    }
}

impl WindowOptionsBuilder {
    pub fn wrap(&mut self, value: bool) -> &mut Self {
        self.wrap = value;
        self
    }

    pub fn line_break(&mut self, value: bool) -> &mut Self {
        self.line_break = value;
        self
    }

    pub fn build(&self) -> WindowOptions {
        WindowOptions {
            wrap: self.wrap,
            line_break: self.line_break,
        }
    }
}
