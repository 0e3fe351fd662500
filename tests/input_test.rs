mod common;
use common::*;
use trs80::mach::Runtime;

#[test]
fn test_input_to_array() {
    let mut r = Runtime::default();
    r.enter("input a,b(a):print a;: print b(2-a);");
    assert_eq!(exec(&mut r), "? ");
    r.enter("1,2");
    assert_eq!(exec(&mut r), " 1 2");
}

#[test]
fn test_input_prompt_and_strings() {
    let mut r = Runtime::default();
    r.enter("INPUT \"NAME\";N$:PRINT \"HI \";N$");
    assert_eq!(exec(&mut r), "NAME? ");
    r.enter("Zaphod");
    assert_eq!(exec(&mut r), "HI Zaphod\n");
    r.enter("INPUT N$:PRINT N$");
    assert_eq!(exec(&mut r), "? ");
    r.enter("\"  SPACED  \"");
    assert_eq!(exec(&mut r), "  SPACED  \n");
}

#[test]
fn test_input_too_few() {
    let mut r = Runtime::default();
    r.enter("INPUT A,B,C:PRINT A+B+C");
    assert_eq!(exec(&mut r), "? ");
    r.enter("");
    assert_eq!(exec(&mut r), "?? ");
    r.enter("1,2");
    assert_eq!(exec(&mut r), "?? ");
    r.enter("3");
    assert_eq!(exec(&mut r), " 6\n");
}

#[test]
fn test_input_extra_ignored() {
    let mut r = Runtime::default();
    r.enter("INPUT A:PRINT A");
    assert_eq!(exec(&mut r), "? ");
    r.enter("1,2");
    assert_eq!(exec(&mut r), " 1\n");
}

#[test]
fn test_input_bad_number() {
    let mut r = Runtime::default();
    r.enter("INPUT A:PRINT A");
    assert_eq!(exec(&mut r), "? ");
    r.enter("ONE");
    assert_eq!(exec(&mut r), "WHAT?\n? ");
    r.enter("1.5");
    assert_eq!(exec(&mut r), " 1.5\n");
}

#[test]
fn test_input_in_program() {
    let mut r = Runtime::default();
    enter(&mut r, &["10 INPUT A$", "20 PRINT A$;A$", "RUN"]);
    assert_eq!(exec(&mut r), "? ");
    r.enter("5");
    assert_eq!(exec(&mut r), "55\n");
}
