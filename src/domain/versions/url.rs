/// Concatenates URL fragments, keeping a single `/` where one fragment ends
/// with a slash and the next starts with one. Nothing else is normalised.
pub fn join_url(parts: &[&str]) -> String {
    let mut joined = String::with_capacity(parts.iter().map(|part| part.len()).sum());
    for part in parts {
        if joined.ends_with('/') && part.starts_with('/') {
            joined.push_str(&part[1..]);
        } else {
            joined.push_str(part);
        }
    }
    joined
}
