//! Light/dark color scheme.

/// Color scheme reported by the host preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    #[inline]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Value written to the root element's `data-theme` attribute.
    pub fn attr(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dark() {
        assert_eq!(ColorScheme::from_dark(true), ColorScheme::Dark);
        assert_eq!(ColorScheme::from_dark(false), ColorScheme::Light);
        assert!(ColorScheme::Dark.is_dark());
        assert_eq!(ColorScheme::Dark.attr(), "dark");
        assert_eq!(ColorScheme::default().attr(), "light");
    }
}
