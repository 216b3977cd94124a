/// Derive the URL slug for a post title.
///
/// Lowercases, drops everything except `a-z`, `0-9`, whitespace and hyphens,
/// then turns each run of whitespace and hyphens into a single hyphen. Edge
/// separators are kept, so "Anxiety: " becomes `anxiety-`. Distinct titles
/// may produce the same slug.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.to_lowercase().chars() {
        match c {
            'a'..='z' | '0'..='9' => slug.push(c),
            '-' => push_separator(&mut slug),
            c if c.is_whitespace() => push_separator(&mut slug),
            _ => {}
        }
    }
    slug
}

fn push_separator(slug: &mut String) {
    if !slug.ends_with('-') {
        slug.push('-');
    }
}
