//! Fixed display notices

/// The fixed texts the display region shows in place of an answer
///
/// `EmptyQuestion` replaces a submission whose trimmed text was empty.
/// `RequestFailed` replaces any exchange that failed, regardless of whether
/// the failure was a refused connection, an error status or an unreadable
/// body. The wording is part of the product surface and must not vary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Shown when submit finds nothing but whitespace in the field
    EmptyQuestion,
    /// Shown when the exchange with the answering service failed
    RequestFailed,
}

impl Notice {
    /// The exact text shown to the user
    pub fn text(&self) -> &'static str {
        match self {
            Notice::EmptyQuestion => "Please enter a question!",
            Notice::RequestFailed => "Error: Could not process your request.",
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_texts_are_fixed() {
        assert_eq!(Notice::EmptyQuestion.text(), "Please enter a question!");
        assert_eq!(
            Notice::RequestFailed.text(),
            "Error: Could not process your request."
        );
    }

    #[test]
    fn test_notice_display_matches_text() {
        assert_eq!(Notice::RequestFailed.to_string(), Notice::RequestFailed.text());
    }
}
