//! Real terminal width query.

use tracing::trace;

use super::Terminal;

/// Column count used when nothing else can be determined.
pub const DEFAULT_COLUMNS: u16 = 80;

/// Production terminal-size source.
///
/// Resolution order: a positive `COLUMNS` environment variable, then the size
/// reported by `crossterm` (which falls back to the controlling tty when
/// stdout is redirected), then the configured fallback.
pub struct RealTerminal {
    fallback: u16,
}

impl RealTerminal {
    pub fn new(fallback: u16) -> Self {
        Self { fallback }
    }
}

impl Default for RealTerminal {
    fn default() -> Self {
        Self::new(DEFAULT_COLUMNS)
    }
}

impl Terminal for RealTerminal {
    fn columns(&self) -> i32 {
        if let Some(cols) = columns_from_env(std::env::var("COLUMNS").ok().as_deref()) {
            trace!("Terminal width {cols} from COLUMNS");
            return cols;
        }
        match crossterm::terminal::size() {
            Ok((cols, _)) if cols > 0 => {
                trace!("Terminal width {cols} from tty");
                i32::from(cols)
            }
            _ => {
                trace!("Terminal width unknown, using {}", self.fallback);
                i32::from(self.fallback)
            }
        }
    }
}

/// Parse a `COLUMNS` value; only positive integers count.
fn columns_from_env(value: Option<&str>) -> Option<i32> {
    let cols = value?.trim().parse::<i32>().ok()?;
    (cols > 0).then_some(cols)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_positive_value_used() {
        assert_eq!(columns_from_env(Some("120")), Some(120));
        assert_eq!(columns_from_env(Some(" 40 ")), Some(40));
    }

    #[test]
    fn env_zero_negative_or_garbage_ignored() {
        assert_eq!(columns_from_env(Some("0")), None);
        assert_eq!(columns_from_env(Some("-5")), None);
        assert_eq!(columns_from_env(Some("wide")), None);
        assert_eq!(columns_from_env(None), None);
    }

    #[test]
    fn always_positive() {
        assert!(RealTerminal::default().columns() > 0);
    }
}
