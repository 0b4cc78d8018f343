/// URL slug of a title: lowercase, every run of characters outside
/// `[a-z0-9]` collapsed to one hyphen, no leading or trailing hyphen.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for ch in title.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_canonical(slug: &str) -> bool {
        slug.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
            && !slug.starts_with('-')
            && !slug.ends_with('-')
            && !slug.contains("--")
    }

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Hello, World!  Foo"), "hello-world-foo");
        assert_eq!(slugify("Naat Academy 2024"), "naat-academy-2024");
    }

    #[test]
    fn test_slugify_trims_hyphens() {
        assert_eq!(slugify("  --Hello--  "), "hello");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_slugify_drops_non_ascii_letters() {
        assert_eq!(slugify("نعت Shareef"), "shareef");
        assert_eq!(slugify("Café au lait"), "caf-au-lait");
    }

    #[test]
    fn test_slugify_output_is_canonical() {
        let samples = [
            "Hello, World!  Foo",
            "a_b_c",
            "__init__",
            "Mehr-Nastaliq / Bold",
            "ÅNGSTRÖM İstanbul",
            "x",
            "   ",
            "1 - 2 - 3",
        ];
        for sample in samples {
            let slug = slugify(sample);
            assert!(is_canonical(&slug), "{:?} -> {:?}", sample, slug);
        }
    }
}
