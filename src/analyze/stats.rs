use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentStats {
    pub lines: usize,
    pub h2_sections: usize,
    pub shields_badges: usize,
    pub code_blocks: usize,
    pub tagged_code_blocks: usize,
    pub images: usize,
    pub tables: usize,
    pub links: usize,
    pub horizontal_rules: usize,
}

struct StatPatterns {
    h2_section: Regex,
    image: Regex,
    shields_badge: Regex,
    code_block: Regex,
    tagged_code_block: Regex,
    table: Regex,
    link: Regex,
    horizontal_rule: Regex,
}

static PATTERNS: OnceLock<StatPatterns> = OnceLock::new();

fn patterns() -> &'static StatPatterns {
    PATTERNS.get_or_init(|| StatPatterns {
        h2_section: Regex::new(r"(?mR)^## .+").unwrap(),
        image: Regex::new(r"!\[.+?\]\(.+?\)").unwrap(),
        shields_badge: Regex::new(r"!\[.+?\]\(https://img\.shields\.io/.+?\)").unwrap(),
        code_block: Regex::new(r"(?s)```.*?```").unwrap(),
        tagged_code_block: Regex::new(r"(?s)```\w+\r?\n.*?```").unwrap(),
        table: Regex::new(
            r"\|[^\r\n]+\|[\r\n]+\|[-:\s|]+\|[\r\n]+(?:\|[^\r\n]+\|[\r\n]*)*",
        )
        .unwrap(),
        link: Regex::new(r"\[.+?\]\(.+?\)").unwrap(),
        horizontal_rule: Regex::new(r"(?mR)^(?:-{3,}|\*{3,}|_{3,})$").unwrap(),
    })
}

pub fn document_stats(document: &str) -> DocumentStats {
    let p = patterns();
    DocumentStats {
        lines: document.lines().count(),
        h2_sections: p.h2_section.find_iter(document).count(),
        shields_badges: p.shields_badge.find_iter(document).count(),
        code_blocks: p.code_block.find_iter(document).count(),
        tagged_code_blocks: p.tagged_code_block.find_iter(document).count(),
        images: p.image.find_iter(document).count(),
        tables: p.table.find_iter(document).count(),
        links: p.link.find_iter(document).count(),
        horizontal_rules: p.horizontal_rule.find_iter(document).count(),
    }
}
