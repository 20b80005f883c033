use uuid::Uuid;

/// Longest recipe identifier accepted from a request path
const MAX_RECIPE_ID_LEN: usize = 64;

/// Generates a new recipe identifier (32 lowercase hex chars)
pub fn generate_recipe_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Recipe ids are used as keys inside the user document, so anything that
/// could be read as a field path (`.`) or operator (`$`) is rejected.
/// Ids issued by older clients were base36, which this also accepts.
pub fn is_valid_recipe_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_RECIPE_ID_LEN
        && id.chars().all(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_valid_and_distinct() {
        let a = generate_recipe_id();
        let b = generate_recipe_id();
        assert_eq!(a.len(), 32);
        assert!(is_valid_recipe_id(&a));
        assert_ne!(a, b);
    }

    #[test]
    fn test_rejects_path_like_ids() {
        assert!(is_valid_recipe_id("k3j9x0a1b2c3d4e5f6"));
        assert!(!is_valid_recipe_id(""));
        assert!(!is_valid_recipe_id("a.b"));
        assert!(!is_valid_recipe_id("$set"));
        assert!(!is_valid_recipe_id(&"a".repeat(65)));
    }
}
