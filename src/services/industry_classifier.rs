//! Keyword-based industry inference from page title and description

use std::collections::HashSet;

use crate::models::IndustryTag;

/// Keyword sets in tie-break order: the first set with any hit wins.
/// Entries containing a space match as a phrase.
const INDUSTRY_KEYWORDS: &[(IndustryTag, &[&str])] = &[
    (
        IndustryTag::Tech,
        &[
            "software", "developer", "developers", "api", "apis", "sdk", "code", "coding",
            "programming", "javascript", "typescript", "python", "rust", "golang", "react",
            "framework", "library", "cloud", "devops", "documentation", "docs", "database",
            "kubernetes", "compiler", "cli", "open source",
        ],
    ),
    (
        IndustryTag::Finance,
        &[
            "bank", "banking", "finance", "financial", "fintech", "payment", "payments",
            "invest", "investing", "investment", "trading", "crypto", "loan", "loans",
            "insurance", "accounting",
        ],
    ),
    (
        IndustryTag::Healthcare,
        &[
            "health", "healthcare", "medical", "medicine", "clinic", "hospital", "doctor",
            "doctors", "patient", "patients", "pharmacy", "wellness", "telehealth",
        ],
    ),
    (
        IndustryTag::Ecommerce,
        &[
            "shop", "shopping", "store", "buy", "cart", "ecommerce", "e-commerce",
            "marketplace", "products", "retail", "checkout",
        ],
    ),
    (
        IndustryTag::Education,
        &[
            "learn", "learning", "course", "courses", "education", "school", "university",
            "student", "students", "tutorial", "tutorials", "teaching", "academy",
        ],
    ),
    (
        IndustryTag::Marketing,
        &[
            "marketing", "seo", "advertising", "campaign", "campaigns", "brand", "branding",
            "agency", "analytics", "newsletter", "social media",
        ],
    ),
    (
        IndustryTag::Gaming,
        &[
            "game", "games", "gaming", "esports", "play", "player", "players", "console",
            "steam",
        ],
    ),
];

/// Coarse industry of a page from its title and description
pub fn infer(title: &str, description: &str) -> IndustryTag {
    let text = format!("{title} {description}").to_lowercase();
    let tokens: Vec<&str> = text
        .split(|c: char| !(c.is_alphanumeric() || c == '-'))
        .filter(|t| !t.is_empty())
        .collect();

    if tokens.is_empty() {
        return IndustryTag::General;
    }

    let words: HashSet<&str> = tokens.iter().copied().collect();
    let phrase_text = format!(" {} ", tokens.join(" "));

    INDUSTRY_KEYWORDS
        .iter()
        .find(|(_, keywords)| {
            keywords.iter().any(|keyword| {
                if keyword.contains(' ') {
                    phrase_text.contains(&format!(" {keyword} "))
                } else {
                    words.contains(keyword)
                }
            })
        })
        .map(|(tag, _)| *tag)
        .unwrap_or_default()
}
