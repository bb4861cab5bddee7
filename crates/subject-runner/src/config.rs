//! Configuración del runner desde variables de entorno.
//! Convención: `SUBJECTFLOW_GREP` (filtro por título) y `SUBJECTFLOW_BAIL`
//! (detener tras el primer fallo).

use std::env;

use dotenvy::dotenv;
use once_cell::sync::Lazy;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Sólo se ejecutan tests cuyo título completo contiene este texto.
    pub grep: Option<String>,
    /// Tras el primer fallo no se ejecutan más tests.
    pub bail: bool,
}

impl RunnerConfig {
    pub fn from_env() -> Self {
        Lazy::force(&DOTENV_LOADED);
        let grep = env::var("SUBJECTFLOW_GREP").ok().filter(|g| !g.is_empty());
        let bail = env::var("SUBJECTFLOW_BAIL").ok().map(|v| parse_flag(&v)).unwrap_or(false);
        Self { grep, bail }
    }

    pub fn with_grep(mut self, grep: impl Into<String>) -> Self {
        self.grep = Some(grep.into());
        self
    }

    pub fn with_bail(mut self, bail: bool) -> Self {
        self.bail = bail;
        self
    }

    /// ¿El test con este título completo pasa el filtro?
    pub fn selects(&self, full_title: &str) -> bool {
        self.grep.as_deref().map_or(true, |g| full_title.contains(g))
    }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_accept_common_truthy_spellings() {
        for v in ["1", "true", "TRUE", " yes ", "on"] {
            assert!(parse_flag(v), "{v:?} should be truthy");
        }
        for v in ["0", "false", "", "nope"] {
            assert!(!parse_flag(v), "{v:?} should be falsy");
        }
    }

    #[test]
    fn grep_filters_by_substring() {
        let all = RunnerConfig::default();
        assert!(all.selects("anything"));
        let some = RunnerConfig::default().with_grep("nested");
        assert!(some.selects("Subjects nested within another"));
        assert!(!some.selects("Subjects after test context"));
    }
}
