mod common;
use common::*;
use trs80::mach::Runtime;

#[test]
fn test_array_basics() {
    let mut r = Runtime::default();
    enter(
        &mut r,
        &[
            "10 A(42)=7",
            "20 B$(3)=\"X\"",
            "30 PRINT A(42);B$(3);A(1)",
            "RUN",
        ],
    );
    assert_eq!(exec(&mut r), " 7X 0\n");
}

#[test]
fn test_array_separate_from_scalar() {
    let mut r = Runtime::default();
    r.enter("A=1:A(0)=2:PRINT A;A(0)");
    assert_eq!(exec(&mut r), " 1 2\n");
}

#[test]
fn test_subscript_truncates() {
    let mut r = Runtime::default();
    r.enter("A(2.9)=5:PRINT A(2)");
    assert_eq!(exec(&mut r), " 5\n");
}

#[test]
fn test_subscript_range() {
    let mut r = Runtime::default();
    r.enter("A(4095)=1:PRINT A(4095)");
    assert_eq!(exec(&mut r), " 1\n");
    r.enter("A(4096)=1");
    assert_eq!(exec(&mut r), "HOW?\nSUBSCRIPT OUT OF RANGE\n");
    r.enter("PRINT A(-1)");
    assert_eq!(exec(&mut r), "HOW?\nSUBSCRIPT OUT OF RANGE\n");
}

#[test]
fn test_array_type() {
    let mut r = Runtime::default();
    r.enter("A(1)=\"S\"");
    assert_eq!(exec(&mut r), "HOW?\nTYPE MISMATCH\n");
}
