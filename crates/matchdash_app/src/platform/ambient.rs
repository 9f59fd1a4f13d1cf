use matchdash_core::ResolvedTheme;

/// Source of the environment's light/dark signal. The headless shell reads
/// it from `MATCHDASH_COLOR_SCHEME`; a windowed shell would query the OS.
pub(crate) trait AmbientSource: Send {
    fn current(&self) -> ResolvedTheme;
}

pub(crate) struct EnvAmbientSource;

impl AmbientSource for EnvAmbientSource {
    fn current(&self) -> ResolvedTheme {
        let value = std::env::var("MATCHDASH_COLOR_SCHEME").ok();
        scheme_from(value.as_deref())
    }
}

/// Anything other than an explicit "dark" counts as light, including an
/// unset variable.
fn scheme_from(value: Option<&str>) -> ResolvedTheme {
    match value {
        Some(text) if text.trim().eq_ignore_ascii_case("dark") => ResolvedTheme::Dark,
        _ => ResolvedTheme::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_is_recognized_case_insensitively() {
        assert_eq!(scheme_from(Some("dark")), ResolvedTheme::Dark);
        assert_eq!(scheme_from(Some(" DARK ")), ResolvedTheme::Dark);
    }

    #[test]
    fn everything_else_is_light() {
        assert_eq!(scheme_from(Some("light")), ResolvedTheme::Light);
        assert_eq!(scheme_from(Some("solarized")), ResolvedTheme::Light);
        assert_eq!(scheme_from(None), ResolvedTheme::Light);
    }
}
