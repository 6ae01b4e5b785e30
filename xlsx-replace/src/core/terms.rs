// src/core/terms.rs
use crate::core::escape::escape_xml_text;
use crate::error::SetupError;

/// The search and replacement pair for one run, in plain and escaped form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceTerms {
    search: String,
    replacement: String,
    escaped_search: String,
    escaped_replacement: String,
}

impl ReplaceTerms {
    /// Validates both terms and escapes them for matching inside shared strings.
    ///
    /// # Arguments
    ///
    /// * `search` - Text to look for, as typed by the user
    /// * `replacement` - Text to put in its place, as typed by the user
    ///
    /// # Errors
    ///
    /// * `SetupError::EmptySearchTerm` if `search` is empty or only whitespace
    /// * `SetupError::EmptyReplacement` if `replacement` is empty or only whitespace
    #[inline]
    pub fn new(search: &str, replacement: &str) -> Result<Self, SetupError> {
        if is_blank(search) {
            return Err(SetupError::EmptySearchTerm);
        }
        if is_blank(replacement) {
            return Err(SetupError::EmptyReplacement);
        }

        Ok(Self {
            search: search.to_owned(),
            replacement: replacement.to_owned(),
            escaped_search: escape_xml_text(search),
            escaped_replacement: escape_xml_text(replacement),
        })
    }

    #[inline]
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    #[inline]
    #[must_use]
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    #[inline]
    #[must_use]
    pub fn escaped_search(&self) -> &str {
        &self.escaped_search
    }

    #[inline]
    #[must_use]
    pub fn escaped_replacement(&self) -> &str {
        &self.escaped_replacement
    }
}

/// Empty or whitespace-only.
#[inline]
#[must_use]
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
