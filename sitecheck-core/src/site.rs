// robots.txt and sitemap-index consistency checks.
//
// Every failure here is a descriptive warning string; nothing aborts a run.

/// Validate robots.txt content: it must reference the expected sitemap
/// index and must not disallow the secondary-language path.
pub fn validate_robots(
    content: &str,
    expected_sitemap: &str,
    secondary_language_path: &str,
) -> Vec<String> {
    let mut sitemap_referenced = false;
    let mut disallows_secondary = false;
    let secondary_lower = secondary_language_path.to_ascii_lowercase();

    for line in content.lines() {
        if let Some(value) = directive_value(line, "sitemap")
            && value.eq_ignore_ascii_case(expected_sitemap)
        {
            sitemap_referenced = true;
        }

        if let Some(value) = directive_value(line, "disallow")
            && value.to_ascii_lowercase().starts_with(&secondary_lower)
        {
            disallows_secondary = true;
        }
    }

    let mut warnings = Vec::new();
    if !sitemap_referenced {
        warnings.push(format!("robots.txt: {} not referenced", expected_sitemap));
    }
    if disallows_secondary {
        warnings.push(format!(
            "robots.txt: {} must not be disallowed",
            secondary_language_path
        ));
    }
    warnings
}

/// Case-insensitive `Name: value` directive parsing.
fn directive_value<'a>(line: &'a str, name: &str) -> Option<&'a str> {
    let (key, value) = line.trim().split_once(':')?;
    if key.trim().eq_ignore_ascii_case(name) {
        Some(value.trim())
    } else {
        None
    }
}

/// Validate the sitemap index: it must reference both per-language sitemaps
/// as absolute URLs under the expected origin.
pub fn validate_sitemap_index(xml: &str, expected_origin: &str) -> Vec<String> {
    let haystack = xml.to_ascii_lowercase();
    let mut warnings = Vec::new();

    for child in ["sitemap-fr.xml", "sitemap-en.xml"] {
        let expected = format!("{}{}", expected_origin, child);
        if !haystack.contains(&expected.to_ascii_lowercase()) {
            warnings.push(format!("sitemap.xml: missing reference to {}", expected));
        }
    }

    warnings
}
