//! Date recognition through the full pipeline

use tana_convert::convert_to_tana;

#[test]
fn test_long_forms_normalize_identically() {
    let a = convert_to_tana(Some("- Shipped 14th March 2016"));
    let b = convert_to_tana(Some("- Shipped March 14, 2016"));
    assert_eq!(a, "%%tana%%\n- Shipped [[date:2016-03-14]]");
    assert_eq!(b, "%%tana%%\n- Shipped [[date:2016-03-14]]");
}

#[test]
fn test_typed_reference_byte_for_byte() {
    let output = convert_to_tana(Some("- Due [[date:2016-03-14]]"));
    assert_eq!(output, "%%tana%%\n- Due [[date:2016-03-14]]");
}

#[test]
fn test_iso_and_numeric_day_first() {
    assert_eq!(
        convert_to_tana(Some("- Logged 2016-03-14")),
        "%%tana%%\n- Logged [[date:2016-03-14]]"
    );
    assert_eq!(
        convert_to_tana(Some("- Logged 3/4/2016")),
        "%%tana%%\n- Logged [[date:2016-04-03]]"
    );
}

#[test]
fn test_week_and_month_year_forms() {
    assert_eq!(
        convert_to_tana(Some("- Review Week 5, 2016")),
        "%%tana%%\n- Review [[date:2016-W05]]"
    );
    assert_eq!(
        convert_to_tana(Some("- Archive from March 2016")),
        "%%tana%%\n- Archive from [[date:2016-03]]"
    );
}

#[test]
fn test_identifier_digits_not_dated() {
    assert_eq!(
        convert_to_tana(Some("- See ticket #2016 and build 3.2016")),
        "%%tana%%\n- See ticket #2016 and build 3.2016"
    );
}

#[test]
fn test_dates_inside_urls_untouched() {
    let input = "- https://example.com/2016-03-14/post";
    assert_eq!(
        convert_to_tana(Some(input)),
        "%%tana%%\n- https://example.com/2016-03-14/post"
    );
}
