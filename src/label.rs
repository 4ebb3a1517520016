use smallstr::SmallString;
use std::fmt;

/// Number of bytes below which a [`Label`] does not allocate.
pub const INLINE_LABEL: usize = 8;

/// Text drawn in place of an atom, such as `OH` or `NH2`.
///
/// Atom labels are almost always a handful of characters, so they are kept inline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Label(SmallString<[u8; INLINE_LABEL]>);

impl Label {
    pub fn new(text: &str) -> Label {
        Label(SmallString::from_str(text))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `true` when the label text did not fit inline.
    pub fn spilled(&self) -> bool {
        self.0.spilled()
    }
}

impl From<&str> for Label {
    fn from(text: &str) -> Self {
        Label::new(text)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_labels_stay_inline() {
        let label = Label::new("NH2");
        assert_eq!(label.as_str(), "NH2");
        assert_eq!(label.to_string(), "NH2");
        assert!(!label.spilled());
    }

    #[test]
    fn test_long_labels_spill() {
        let label = Label::from("CH2CH2OH");
        assert!(!label.spilled());
        let label = Label::from("CH2CH2CH2OH");
        assert!(label.spilled());
        assert_eq!(label.as_str(), "CH2CH2CH2OH");
    }
}
