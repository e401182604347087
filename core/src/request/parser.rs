use std::collections::HashMap;

/// Split a request target into path and query string at the first `?`.
pub fn split_target(target: &str) -> (&str, &str) {
    match target.split_once('?') {
        Some((path, query)) => (path, query),
        None => (target, ""),
    }
}

/// Parse an `application/x-www-form-urlencoded` query string.
///
/// Keys and values are percent-decoded; a key without `=` maps to the empty
/// string. When a key repeats, the last occurrence wins. Pairs that fail to
/// decode are dropped.
pub fn parse_query_string(query: &str) -> HashMap<String, String> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            Some((
                urlencoding::decode(key).ok()?.into_owned(),
                urlencoding::decode(value).ok()?.into_owned(),
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_target_with_query() {
        assert_eq!(split_target("/users/42?tab=posts"), ("/users/42", "tab=posts"));
    }

    #[test]
    fn test_split_target_without_query() {
        assert_eq!(split_target("/users/42"), ("/users/42", ""));
    }

    #[test]
    fn test_split_target_keeps_later_question_marks() {
        assert_eq!(split_target("/search?q=a?b"), ("/search", "q=a?b"));
    }

    #[test]
    fn test_parse_query_string_simple() {
        let result = parse_query_string("key1=value1&key2=value2");
        assert_eq!(result.get("key1"), Some(&"value1".to_string()));
        assert_eq!(result.get("key2"), Some(&"value2".to_string()));
    }

    #[test]
    fn test_parse_query_string_encoded() {
        let result = parse_query_string("name=John%20Doe&city=New%20York");
        assert_eq!(result.get("name"), Some(&"John Doe".to_string()));
        assert_eq!(result.get("city"), Some(&"New York".to_string()));
    }

    #[test]
    fn test_parse_query_string_empty() {
        assert!(parse_query_string("").is_empty());
    }

    #[test]
    fn test_parse_query_string_valueless_key() {
        let result = parse_query_string("flag&key=value");
        assert_eq!(result.get("flag"), Some(&String::new()));
        assert_eq!(result.get("key"), Some(&"value".to_string()));
    }

    #[test]
    fn test_parse_query_string_value_containing_equals() {
        let result = parse_query_string("filter=a=b");
        assert_eq!(result.get("filter"), Some(&"a=b".to_string()));
    }

    #[test]
    fn test_parse_query_string_last_occurrence_wins() {
        let result = parse_query_string("id=1&id=2");
        assert_eq!(result.get("id"), Some(&"2".to_string()));
    }
}
