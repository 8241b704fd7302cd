use super::*;

#[test]
fn format_file_size_bytes() {
    assert_eq!(format_file_size(0), "0 B");
    assert_eq!(format_file_size(1023), "1023 B");
}

#[test]
fn format_file_size_kilobytes() {
    assert_eq!(format_file_size(1024), "1.0 KB");
    assert_eq!(format_file_size(12_698), "12.4 KB");
}

#[test]
fn format_file_size_megabytes_and_gigabytes() {
    assert_eq!(format_file_size(3 * 1024 * 1024), "3.0 MB");
    assert_eq!(format_file_size(1_288_490_189), "1.2 GB");
}

#[test]
fn format_file_size_caps_at_gigabytes() {
    assert_eq!(format_file_size(2048 * 1024 * 1024 * 1024), "2048.0 GB");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn uploaded_files_from_list_is_empty_off_browser() {
    assert!(uploaded_files_from_list(&()).is_empty());
}
