//! Display formatting helpers for the chat page.

/// Formats a model size in bytes as a human readable gigabyte string.
///
/// Ollama reports sizes in bytes; the picker shows them rounded to one
/// decimal. A missing or zero size reads as "Taille inconnue".
pub fn format_size(bytes: Option<u64>) -> String {
    match bytes {
        Some(b) if b > 0 => {
            let gb = b as f64 / (1024u64.pow(3)) as f64;
            format!("{:.1} GB", gb)
        }
        _ => "Taille inconnue".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(Some(4_700_000_000)), "4.4 GB");
        assert_eq!(format_size(Some(776_000_000)), "0.7 GB");
        assert_eq!(format_size(Some(18_000_000_000)), "16.8 GB");
        assert_eq!(format_size(Some(5_000_000_000)), "4.7 GB");
    }

    #[test]
    fn test_format_size_unknown() {
        assert_eq!(format_size(None), "Taille inconnue");
        assert_eq!(format_size(Some(0)), "Taille inconnue");
    }
}
