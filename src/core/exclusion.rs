/// Ausschlussliste für Fahrernamen; Abgleich als Teilstring ohne
/// Beachtung der Groß-/Kleinschreibung.
#[derive(Debug, Clone)]
pub struct ExclusionFilter {
    keywords: Vec<String>,
}

impl ExclusionFilter {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();

        Self { keywords }
    }

    pub fn is_excluded(&self, driver_name: &str) -> bool {
        let name_lower = driver_name.to_lowercase();
        self.keywords.iter().any(|k| name_lower.contains(k.as_str()))
    }
}
