mod common;
use common::*;
use trs80::mach::Runtime;

#[test]
fn test_for_loop_counts() {
    let mut r = Runtime::default();
    r.enter("FOR I=1 TO 3:PRINT I:NEXT I");
    assert_eq!(exec(&mut r), " 1\n 2\n 3\n");
    r.enter("PRINT I");
    assert_eq!(exec(&mut r), " 4\n");
}

#[test]
fn test_for_loop_assign_step_after_var() {
    let mut r = Runtime::default();
    r.enter("I=1:FOR I=3 TO 9 STEP I:PRINT I;:NEXT");
    assert_eq!(exec(&mut r), " 3 4 5 6 7 8 9");
}

#[test]
fn test_edit_program() {
    let mut r = Runtime::default();
    enter(&mut r, &["30 PRINT I", "10 I=3", "20 I=I*2", "RUN"]);
    assert_eq!(exec(&mut r), " 6\n");
    enter(&mut r, &["20", "RUN"]);
    assert_eq!(exec(&mut r), " 3\n");
    enter(&mut r, &["30 PRINT I+1", "LIST"]);
    assert_eq!(exec(&mut r), "10 I=3\n30 PRINT I+1\n");
}

#[test]
fn test_nested_gosub() {
    let mut r = Runtime::default();
    enter(
        &mut r,
        &[
            "10 GOSUB 100",
            "20 END",
            "100 GOSUB 200",
            "110 PRINT \"B\"",
            "120 RETURN",
            "200 PRINT \"A\"",
            "210 RETURN",
            "RUN",
        ],
    );
    assert_eq!(exec(&mut r), "A\nB\n");
}

#[test]
fn test_variables_survive_error() {
    let mut r = Runtime::default();
    enter(&mut r, &["10 A=5", "20 GOTO 99", "RUN"]);
    assert_eq!(exec(&mut r), "HOW?\nUNDEFINED LINE IN 20; 99\n");
    r.enter("PRINT A");
    assert_eq!(exec(&mut r), " 5\n");
    r.enter("LIST");
    assert_eq!(exec(&mut r), "10 A=5\n20 GOTO 99\n");
}

#[test]
fn test_computed_goto() {
    let mut r = Runtime::default();
    enter(
        &mut r,
        &["10 A=2", "20 GOTO A*20", "30 PRINT \"NO\"", "40 PRINT \"YES\"", "RUN"],
    );
    assert_eq!(exec(&mut r), "YES\n");
}

#[test]
fn test_end_cont() {
    let mut r = Runtime::default();
    enter(&mut r, &["10 PRINT 1", "20 END", "30 PRINT 2", "RUN"]);
    assert_eq!(exec(&mut r), " 1\n");
    r.enter("CONT");
    assert_eq!(exec(&mut r), "HOW?\nCAN'T CONTINUE\n");
}

#[test]
fn test_stop_cont() {
    let mut r = Runtime::default();
    enter(
        &mut r,
        &["10 PRINT 1;", "20 STOP", "30 PRINT 2", "RUN"],
    );
    assert_eq!(exec(&mut r), " 1\nBREAK AT 20\n");
    r.enter("CONT");
    assert_eq!(exec(&mut r), " 2\n");
}

#[test]
fn test_stop_in_direct_mode() {
    let mut r = Runtime::default();
    r.enter("PRINT 1:STOP:PRINT 2");
    assert_eq!(exec(&mut r), " 1\nBREAK\n");
    r.enter("CONT:PRINT 3");
    assert_eq!(exec(&mut r), " 2\n");
}

#[test]
fn test_read_data() {
    let mut r = Runtime::default();
    enter(
        &mut r,
        &[
            "10 READ A$,B",
            "20 PRINT A$;B",
            "30 DATA \"HI\", 2",
            "40 RESTORE:READ C$:PRINT C$",
            "RUN",
        ],
    );
    assert_eq!(exec(&mut r), "HI 2\nHI\n");
}

#[test]
fn test_rem_swallows_line() {
    let mut r = Runtime::default();
    enter(&mut r, &["10 REM A:PRINT 1", "RUN"]);
    assert_eq!(exec(&mut r), "");
    r.enter("LIST");
    assert_eq!(exec(&mut r), "10 REM A:PRINT 1\n");
}

#[test]
fn test_bad_line_not_stored() {
    let mut r = Runtime::default();
    r.enter("10 PRINT (");
    assert!(exec(&mut r).starts_with("WHAT?\nSYNTAX ERROR"));
    r.enter("LIST");
    assert_eq!(exec(&mut r), "");
    assert!(r.program().is_empty());
}

#[test]
fn test_line_number_range() {
    let mut r = Runtime::default();
    r.enter("32767 END");
    assert_eq!(exec(&mut r), "");
    r.enter("32768 END");
    assert!(exec(&mut r).starts_with("HOW?\nOVERFLOW"));
    assert_eq!(r.program().len(), 1);
}

#[test]
fn test_screen_statements() {
    let mut r = Runtime::default();
    r.enter("CLS:PRINT AT 64;\"X\"");
    assert_eq!(exec(&mut r), "<CLS><1,0>X\n");
}

#[test]
fn test_file_statements() {
    let mut r = Runtime::default();
    r.enter("10 END");
    r.enter("CSAVE \"A.BAS\"");
    assert_eq!(exec(&mut r), "<A.BAS>");
    r.enter("MERGE \"B.BAS\"");
    assert_eq!(exec(&mut r), "<B.BAS>");
}
