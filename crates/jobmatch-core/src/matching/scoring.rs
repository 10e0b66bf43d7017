use std::collections::HashSet;

use crate::models::posting::Posting;

/// Lower-cased `title + " " + description`, the text skills are matched in.
fn haystack(posting: &Posting) -> String {
    format!("{} {}", posting.title, posting.description).to_lowercase()
}

/// Profile skills that appear in the posting, in skill order.
///
/// Case-insensitive substring containment, each distinct skill at most once.
/// The company and location fields are not searched.
pub fn matched_skills<'a, S: AsRef<str>>(posting: &Posting, skills: &'a [S]) -> Vec<&'a str> {
    let text = haystack(posting);
    let mut seen = HashSet::new();

    skills
        .iter()
        .map(|s| s.as_ref())
        .filter(|skill| {
            let key = skill.to_lowercase();
            !key.is_empty() && seen.insert(key.clone()) && text.contains(&key)
        })
        .collect()
}

/// Relevance of a posting: the number of distinct skills it mentions.
///
/// Never exceeds the number of unique (case-folded) skills.
pub fn score<S: AsRef<str>>(posting: &Posting, skills: &[S]) -> u32 {
    matched_skills(posting, skills).len() as u32
}
