use super::*;

#[test]
fn test_number_formatting() {
    assert_eq!(format_f64_1(40.0), "40.0");
    assert_eq!(format_f64_1(154.84), "154.8");
    assert_eq!(format_f64_2(99.95), "99.95");
    assert_eq!(format_f64_2(30.0), "30.00");
}
