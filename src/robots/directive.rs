/// The directive kinds recognised in a robots.txt line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    UserAgent,
    Allow,
    Disallow,
    CrawlDelay,
    Sitemap,
    Unknown,
}

impl DirectiveKind {
    fn as_str(&self) -> &'static str {
        match self {
            DirectiveKind::UserAgent => "user-agent",
            DirectiveKind::Allow => "allow",
            DirectiveKind::Disallow => "disallow",
            DirectiveKind::CrawlDelay => "crawl-delay",
            DirectiveKind::Sitemap => "sitemap",
            DirectiveKind::Unknown => "unknown",
        }
    }
}

const KNOWN_DIRECTIVES: [DirectiveKind; 5] = [
    DirectiveKind::UserAgent,
    DirectiveKind::Allow,
    DirectiveKind::Disallow,
    DirectiveKind::CrawlDelay,
    DirectiveKind::Sitemap,
];

/// Classifies a single line as a directive kind and its trimmed value.
///
/// Comments are not stripped: `# Allow: /x` has the key `# Allow` and is unknown,
/// while a line without a colon is always unknown.
pub fn classify_line(line: &str) -> (DirectiveKind, &str) {
    let Some((key, value)) = line.trim().split_once(':') else {
        return (DirectiveKind::Unknown, "");
    };
    let key = key.trim();

    KNOWN_DIRECTIVES
        .iter()
        .find(|kind| key.eq_ignore_ascii_case(kind.as_str()))
        .map(|kind| (*kind, value.trim()))
        .unwrap_or((DirectiveKind::Unknown, ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_known_directives_case_insensitively() {
        assert_eq!(classify_line("User-agent: *"), (DirectiveKind::UserAgent, "*"));
        assert_eq!(classify_line("ALLOW: /news"), (DirectiveKind::Allow, "/news"));
        assert_eq!(classify_line("disallow:/user"), (DirectiveKind::Disallow, "/user"));
        assert_eq!(classify_line("Crawl-Delay : 5"), (DirectiveKind::CrawlDelay, "5"));
    }

    #[test]
    fn splits_on_first_colon_only() {
        assert_eq!(
            classify_line("  Sitemap: https://www.example.com/sitemap.xml  "),
            (DirectiveKind::Sitemap, "https://www.example.com/sitemap.xml")
        );
    }

    #[test]
    fn blank_comment_and_unrecognised_lines_are_unknown() {
        assert_eq!(classify_line(""), (DirectiveKind::Unknown, ""));
        assert_eq!(classify_line("   "), (DirectiveKind::Unknown, ""));
        assert_eq!(classify_line("# Comment"), (DirectiveKind::Unknown, ""));
        assert_eq!(classify_line("Host: example.com"), (DirectiveKind::Unknown, ""));
        assert_eq!(classify_line("# Allow: /x"), (DirectiveKind::Unknown, ""));
    }

    #[test]
    fn empty_value_is_kept() {
        assert_eq!(classify_line("Disallow:"), (DirectiveKind::Disallow, ""));
    }
}
