//! Formatting configuration for Tern

/// Formatting configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Number of spaces per indentation level
    pub indent_width: usize,
    /// Number of blank lines separating a function declaration from its neighbours
    pub blank_lines_around_functions: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            blank_lines_around_functions: 1,
        }
    }
}

impl FormatConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Set the blank lines emitted around function declarations
    pub fn with_blank_lines_around_functions(mut self, count: usize) -> Self {
        self.blank_lines_around_functions = count;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormatConfig::default();
        assert_eq!(config.indent_width, 4);
        assert_eq!(config.blank_lines_around_functions, 1);
        assert_eq!(FormatConfig::new(), config);
    }

    #[test]
    fn test_builder_chain() {
        let config = FormatConfig::new()
            .with_indent_width(2)
            .with_blank_lines_around_functions(0)
            .with_indent_width(8);
        assert_eq!(config.indent_width, 8); // Last value wins
        assert_eq!(config.blank_lines_around_functions, 0);
    }
}
