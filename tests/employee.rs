#[cfg(test)]
mod tests {
    use rekap::libs::employee::{normalize_hr_name, normalize_oa_name};

    #[test]
    fn test_oa_name_strips_spaces_from_cjk_names() {
        assert_eq!(normalize_oa_name("张 三"), "张三");
        assert_eq!(normalize_oa_name("李　四"), "李四"); // full-width space
        assert_eq!(normalize_oa_name(" 王五 "), "王五");
    }

    #[test]
    fn test_oa_name_keeps_latin_names_intact() {
        // Spaces in pure-Latin names are separators, not padding.
        assert_eq!(normalize_oa_name("John Smith"), "John Smith");
    }

    #[test]
    fn test_oa_name_mixed_scripts_still_stripped() {
        assert_eq!(normalize_oa_name("张三 A"), "张三A");
    }

    #[test]
    fn test_hr_name_keeps_leading_cjk_run() {
        assert_eq!(normalize_hr_name("张三Zhang San"), "张三");
        assert_eq!(normalize_hr_name("张三 Zhang San"), "张三");
    }

    #[test]
    fn test_hr_name_without_cjk_prefix_is_unchanged() {
        assert_eq!(normalize_hr_name("John Smith"), "John Smith");
        assert_eq!(normalize_hr_name(""), "");
    }

    #[test]
    fn test_both_normalizations_agree_on_the_join_key() {
        // The OA log pads the name, the HR register appends a
        // transliteration; both must reduce to the same key.
        assert_eq!(normalize_oa_name("张 三"), normalize_hr_name("张三 Zhang San"));
    }
}
