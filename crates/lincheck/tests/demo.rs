//! Drives the full configure → display → read → check sequence through scripted input, the same
//! flow the interactive binary runs.

use lincheck::input::Scripted;
use lincheck::system::{LinearSystem, Verification};

#[test]
fn scripted_end_to_end() {
    // 2×2: x + y = 3, 2x - y = 0, candidate (1, 2). Then 3×3 identity with b = (1, 2, 3) and a
    // candidate that misses the third equation. Decimal commas appear mid-script on purpose.
    #[rustfmt::skip]
    let mut input = Scripted::new([
        // 2×2 coefficients, row-major, rhs after each row
        "1", "1", "3",
        "2", "-1", "0",
        // 2×2 candidate
        "1", "2,0",
        // 3×3 coefficients
        "1", "0", "0", "1",
        "0", "1", "0", "2",
        "0", "0", "1", "3",
        // 3×3 candidate
        "1", "2", "3.00001",
    ]);

    let mut sys2 = LinearSystem::<2>::labeled("2×2");
    sys2.set_coefficients(&mut input).unwrap();
    assert_eq!(sys2.to_string(), "1*x1 + 1*x2 = 3\n2*x1 + -1*x2 = 0\n");

    let x2 = sys2.read_vector(&mut input).unwrap();
    assert!(sys2.check(x2.as_slice()).satisfied());

    let mut sys3 = LinearSystem::<3>::labeled("3×3 (SLAE)");
    sys3.set_coefficients(&mut input).unwrap();

    let x3 = sys3.read_vector(&mut input).unwrap();
    let report = sys3.check(x3.as_slice());
    assert!(!report.satisfied());
    assert_eq!(report.equations().len(), 3);

    // The dimension guard fires for the deliberately mismatched candidate, and the system stays
    // usable afterwards.
    let report = sys2.check(&[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(
        report,
        Verification::SizeMismatch {
            expected: 2,
            found: 4
        }
    );
    assert!(sys2.check(&[1.0, 2.0]).satisfied());
}

#[test]
fn script_exhaustion_surfaces_as_error() {
    let mut input = Scripted::new(["1", "2"]);
    let mut sys = LinearSystem::<2>::new();
    let err = sys.set_coefficients(&mut input).unwrap_err();
    assert!(err.to_string().contains("ran out of input"));
}
