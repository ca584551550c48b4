// ==========================================
// 名册导入集成测试
// ==========================================
// 测试目标: 验证文件解析与列映射
// 覆盖范围: CSV/Excel 解析、必需列检查、透传列
// ==========================================


use marksheet_gen::{ImportError, RosterMapper, UniversalRosterParser};
use std::io::Write;
use tempfile::TempDir;

fn write_csv(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

#[test]
fn test_csv_roster_parsed_and_mapped() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "roster.csv",
        "Enrollment no,Name,Branch,Remark\n101,Amit,CE,tall\n102,Bela,ME,\n",
    );

    let rows = UniversalRosterParser.parse(&path).unwrap();
    let roster = RosterMapper.map_rows(rows).unwrap();

    assert_eq!(roster.len(), 2);
    assert_eq!(roster[0].enrollment_id.as_deref(), Some("101"));
    assert_eq!(roster[0].name, "Amit");
    assert_eq!(roster[0].branch.as_deref(), Some("CE"));
    // 其余列原样透传
    assert_eq!(roster[0].extra.get("Remark").map(String::as_str), Some("tall"));
}

#[test]
fn test_blank_rows_skipped() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "roster.csv",
        "Enrollment no,Name\n101,Amit\n,\n102,Bela\n",
    );

    let rows = UniversalRosterParser.parse(&path).unwrap();
    assert_eq!(rows.len(), 2);
}

#[test]
fn test_blank_cells_become_missing() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "roster.csv",
        "Enrollment no,Name,Branch\n,NoId,CE\n102,Bela,\n",
    );

    let rows = UniversalRosterParser.parse(&path).unwrap();
    let roster = RosterMapper.map_rows(rows).unwrap();

    assert_eq!(roster[0].enrollment_id, None);
    assert_eq!(roster[1].branch, None);
}

#[test]
fn test_missing_required_column_aborts() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "roster.csv", "Enrollment no,Branch\n101,CE\n");

    let rows = UniversalRosterParser.parse(&path).unwrap();
    let err = RosterMapper.map_rows(rows).unwrap_err();

    assert!(matches!(err, ImportError::MissingColumn(col) if col == "Name"));
}

#[test]
fn test_column_names_are_case_sensitive() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "roster.csv", "enrollment no,Name\n101,Amit\n");

    let rows = UniversalRosterParser.parse(&path).unwrap();
    let err = RosterMapper.map_rows(rows).unwrap_err();

    assert!(matches!(err, ImportError::MissingColumn(col) if col == "Enrollment no"));
}

#[test]
fn test_unsupported_extension_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "roster.txt", "Enrollment no,Name\n");

    let err = UniversalRosterParser.parse(&path).unwrap_err();
    assert!(matches!(err, ImportError::UnsupportedFormat(_)));
}

#[test]
fn test_missing_file_rejected() {
    let err = UniversalRosterParser.parse("no_such_roster.csv").unwrap_err();
    assert!(matches!(err, ImportError::FileNotFound(_)));
}

#[test]
fn test_xlsx_roster_parsed() {
    let dir = TempDir::new().unwrap();

    // 用 umya 写出名册，再经 calamine 解析
    let mut book = umya_spreadsheet::new_file();
    {
        let sheet = book.get_sheet_collection_mut().first_mut().unwrap();
        sheet.get_cell_mut((1, 1)).set_value_string("Enrollment no");
        sheet.get_cell_mut((2, 1)).set_value_string("Name");
        sheet.get_cell_mut((1, 2)).set_value_string("101");
        sheet.get_cell_mut((2, 2)).set_value_string("Amit");
        sheet.get_cell_mut((1, 3)).set_value_string("102");
        sheet.get_cell_mut((2, 3)).set_value_string("Bela");
    }
    let path = dir.path().join("roster.xlsx");
    umya_spreadsheet::writer::xlsx::write(&book, &path).unwrap();

    let rows = UniversalRosterParser.parse(&path).unwrap();
    let roster = RosterMapper.map_rows(rows).unwrap();

    assert_eq!(roster.len(), 2);
    assert_eq!(roster[1].enrollment_id.as_deref(), Some("102"));
    assert_eq!(roster[1].name, "Bela");
}
