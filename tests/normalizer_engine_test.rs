// ==========================================
// Normalizer 引擎集成测试
// ==========================================
// 测试目标: 验证报名号清洗与首现保留去重
// 覆盖范围: 科学计数法修复、回退策略、去重幂等
// ==========================================


use marksheet_gen::Normalizer;
use test_helpers::student;

#[test]
fn test_clean_integer_id_unchanged() {
    let normalizer = Normalizer::new();
    assert_eq!(
        normalizer.clean_enrollment(Some("12345")),
        Some("12345".to_string())
    );
}

#[test]
fn test_clean_trims_whitespace() {
    let normalizer = Normalizer::new();
    assert_eq!(
        normalizer.clean_enrollment(Some("  12345  ")),
        Some("12345".to_string())
    );
}

#[test]
fn test_scientific_notation_repaired() {
    let normalizer = Normalizer::new();

    // 长报名号被电子表格污染为科学计数法
    assert_eq!(
        normalizer.clean_enrollment(Some("1.2345e4")),
        Some("12345".to_string())
    );
    assert_eq!(
        normalizer.clean_enrollment(Some("4.530201E11")),
        Some("453020100000".to_string())
    );
}

#[test]
fn test_scientific_reparse_failure_keeps_trimmed_text() {
    let normalizer = Normalizer::new();

    // 含 e 但并非数值，保留去空白原文
    assert_eq!(
        normalizer.clean_enrollment(Some("  ENR-e-01  ")),
        Some("ENR-e-01".to_string())
    );
}

#[test]
fn test_missing_id_stays_missing() {
    let normalizer = Normalizer::new();
    assert_eq!(normalizer.clean_enrollment(None), None);
    assert_eq!(normalizer.clean_enrollment(Some("   ")), None);
}

#[test]
fn test_dedup_keeps_first_occurrence_in_order() {
    let normalizer = Normalizer::new();
    let mut roster = vec![
        student(Some("101"), "Amit", None),
        student(Some("102"), "Bela", None),
        student(Some("101"), "Amit Duplicate", None),
        student(Some("103"), "Chitra", None),
    ];

    let stats = normalizer.normalize(&mut roster);

    assert_eq!(stats.total_rows, 4);
    assert_eq!(stats.duplicates_removed, 1);
    let names: Vec<&str> = roster.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Amit", "Bela", "Chitra"]);
}

#[test]
fn test_missing_ids_never_deduped_against_each_other() {
    let normalizer = Normalizer::new();
    let mut roster = vec![
        student(None, "NoId One", None),
        student(None, "NoId Two", None),
        student(Some("200"), "WithId", None),
    ];

    let stats = normalizer.normalize(&mut roster);

    assert_eq!(stats.duplicates_removed, 0);
    assert_eq!(roster.len(), 3);
}

#[test]
fn test_whitespace_only_ids_treated_as_missing_not_deduped() {
    let normalizer = Normalizer::new();
    let mut roster = vec![
        student(Some("   "), "Blank One", None),
        student(Some("  "), "Blank Two", None),
        student(Some("300"), "WithId", None),
    ];

    let stats = normalizer.normalize(&mut roster);

    // 空白报名号按缺失处理，互不视为重复
    assert_eq!(stats.duplicates_removed, 0);
    assert_eq!(roster.len(), 3);
    assert_eq!(roster[0].enrollment_id, None);
    assert_eq!(roster[1].enrollment_id, None);
}

#[test]
fn test_dedup_compares_cleaned_ids() {
    let normalizer = Normalizer::new();

    // 科学计数法形式与纯数字形式清洗后相同，视为重复
    let mut roster = vec![
        student(Some("12345"), "Original", None),
        student(Some("1.2345e4"), "Corrupted Twin", None),
    ];

    let stats = normalizer.normalize(&mut roster);

    assert_eq!(stats.duplicates_removed, 1);
    assert_eq!(roster[0].name, "Original");
}

#[test]
fn test_normalize_is_idempotent() {
    let normalizer = Normalizer::new();
    let mut roster = vec![
        student(Some("1.2345e4"), "A", None),
        student(Some("12345"), "B", None),
        student(None, "C", None),
        student(Some("7"), "D", None),
    ];

    normalizer.normalize(&mut roster);
    let after_first: Vec<_> = roster.clone();

    let stats = normalizer.normalize(&mut roster);

    assert_eq!(stats.duplicates_removed, 0);
    assert_eq!(roster, after_first);
}
