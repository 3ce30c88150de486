pub trait ToDashSeparators {
    /// Returns a copy with all `/` replaced by `-` and leading/trailing
    /// whitespace trimmed.
    fn to_dash_separators(&self) -> String;
}

impl ToDashSeparators for str {
    fn to_dash_separators(&self) -> String {
        self.trim().replace('/', "-")
    }
}

impl ToDashSeparators for String {
    fn to_dash_separators(&self) -> String {
        self.as_str().to_dash_separators()
    }
}

pub trait StripQuotes {
    /// Removes one pair of matching single or double quotes around the value.
    fn strip_wrapping_quotes(&self) -> &str;
}

impl StripQuotes for str {
    fn strip_wrapping_quotes(&self) -> &str {
        let trimmed = self.trim();
        for q in ['"', '\''] {
            if trimmed.len() >= 2 && trimmed.starts_with(q) && trimmed.ends_with(q) {
                return &trimmed[1..trimmed.len() - 1];
            }
        }
        trimmed
    }
}
