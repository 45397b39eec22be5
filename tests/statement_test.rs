mod common;
use common::*;

#[test]
fn test_for_loop_program() {
    let mut r = runtime();
    r.enter("10 FOR I=1 TO 3");
    r.enter("20 PRINT I");
    r.enter("30 NEXT I");
    assert_eq!(exec(&mut r, "RUN"), "1\n2\n3\n");
}

#[test]
fn test_for_loop_step_expression() {
    let mut r = runtime();
    assert_eq!(
        exec(&mut r, "FOR I=10 TO 1 STEP -3:PRINT I;\" \";:NEXT I"),
        "10 7 4 1 "
    );
}

#[test]
fn test_print_separators() {
    let mut r = runtime();
    assert_eq!(exec(&mut r, "PRINT 1;2,3"), "12\t3\n");
    assert_eq!(exec(&mut r, "PRINT \"A\";"), "A");
    assert_eq!(exec(&mut r, "PRINT 1,"), "1\t");
    assert_eq!(exec(&mut r, "PRINT"), "\n");
    assert_eq!(exec(&mut r, "? CHR(72);CHR(73)"), "HI\n");
}

#[test]
fn test_print_escapes() {
    let mut r = runtime();
    assert_eq!(exec(&mut r, r#"PRINT "x\ty""#), "x\ty\n");
    assert_eq!(exec(&mut r, r#"PRINT "\x41\"""#), "A\"\n");
}

#[test]
fn test_print_fields() {
    let mut r = runtime();
    assert_eq!(exec(&mut r, "PRINT 0(42,4)"), "  42\n");
    assert_eq!(exec(&mut r, "PRINT 0(7,-3)"), "007\n");
    assert_eq!(exec(&mut r, "PRINT $(255,4)"), "  FF\n");
    assert_eq!(exec(&mut r, "PRINT $(10,-4)"), "000A\n");
    assert_eq!(exec(&mut r, "PRINT 0(1234,205)"), " 12.34\n");
    assert_eq!(exec(&mut r, "PRINT $(-1)"), format!("{:X}\n", -1i64 as nanobasic::lang::UInt));
}

#[test]
fn test_division_by_zero() {
    let mut r = runtime();
    assert_eq!(exec(&mut r, "PRINT 10/0"), "\nDivision by 0 error\n");
    assert_eq!(exec(&mut r, "PRINT 7%0"), "\nDivision by 0 error\n");
}

#[test]
fn test_division_by_zero_keeps_target() {
    let mut r = runtime();
    assert_eq!(exec(&mut r, "A=5:A/=0"), "\nDivision by 0 error\n");
    assert_eq!(exec(&mut r, "PRINT A"), "5\n");
    assert_eq!(exec(&mut r, "A%=0"), "\nDivision by 0 error\n");
    assert_eq!(exec(&mut r, "PRINT A"), "5\n");
    assert_eq!(exec(&mut r, "@[1]=9:@[1]/=0"), "\nDivision by 0 error\n");
    assert_eq!(exec(&mut r, "@[1]%=0"), "\nDivision by 0 error\n");
    assert_eq!(exec(&mut r, "PRINT @[1]"), "9\n");
}

#[cfg(feature = "wide")]
#[test]
fn test_print_fields_extreme_width() {
    let mut r = runtime();
    assert_eq!(exec(&mut r, "PRINT 0(1,-2147483648)"), "0.000000001\n");
    assert_eq!(exec(&mut r, "PRINT $(1,2147483647)"), "0.000000001\n");
}

#[test]
fn test_error_reports_line() {
    let mut r = runtime();
    prog(&mut r, &["A=1", "B=A/0"]);
    assert_eq!(exec(&mut r, "RUN"), "\nDivision by 0 error in 2\n");
}

#[test]
fn test_assignment_operators() {
    let mut r = runtime();
    assert_eq!(
        exec(&mut r, "A=10:A+=5:A-=1:A*=2:A/=7:A%=3:PRINT A"),
        "1\n"
    );
    assert_eq!(exec(&mut r, "A=1:A<<=4:A|=3:A^=1:A&=6:PRINT A"), "2\n");
    assert_eq!(exec(&mut r, "A=5:A++:A++:A--:PRINT A"), "6\n");
    assert_eq!(exec(&mut r, "A=-8:A>>=1:PRINT A"), "-4\n");
}

#[test]
fn test_array() {
    let mut r = runtime();
    assert_eq!(exec(&mut r, "@[3]=7:PRINT @[3]*2"), "14\n");
    assert_eq!(exec(&mut r, "I=2:@[I+1]+=1:PRINT @[3]"), "8\n");
    assert_eq!(exec(&mut r, "@[64]=1"), "\nArray index over error\n");
    assert_eq!(exec(&mut r, "@[-1]=1"), "\nArray index over error\n");
}

#[test]
fn test_read_data_wraps_around() {
    let mut r = runtime();
    prog(&mut r, &["DATA 1,2", "FOR I=1 TO 3:READ A:PRINT A;:NEXT"]);
    assert_eq!(exec(&mut r, "RUN"), "121");
}

#[test]
fn test_restore() {
    let mut r = runtime();
    prog(&mut r, &["DATA 5,6", "READ A:RESTORE:READ B:PRINT A+B"]);
    assert_eq!(exec(&mut r, "RUN"), "10\n");
}

#[test]
fn test_read_without_data() {
    let mut r = runtime();
    assert_eq!(exec(&mut r, "READ A"), "\nUnexpected Read error\n");
    prog(&mut r, &["PRINT 1"]);
    assert_eq!(exec(&mut r, "READ A"), "\nUnexpected Read error\n");
}

#[test]
fn test_list() {
    let mut r = runtime();
    prog(&mut r, &["A=1", "PRINT A"]);
    assert_eq!(exec(&mut r, "LIST"), "A=1\nPRINT A\n[8 bytes]\n");
    assert_eq!(exec(&mut r, "NEW"), "");
    assert_eq!(exec(&mut r, "LIST"), "[0 bytes]\n");
}

#[test]
fn test_labelled_lines_replace_and_delete() {
    let mut r = runtime();
    r.enter("10 PRINT 1");
    r.enter("20 PRINT 2");
    r.enter("10 PRINT 3");
    assert_eq!(exec(&mut r, "LIST"), "10 PRINT 3\n20 PRINT 2\n[11 bytes]\n");
    r.enter("10");
    assert_eq!(exec(&mut r, "LIST"), "20 PRINT 2\n[6 bytes]\n");
}

#[test]
fn test_program_area_overflow_in_prog() {
    let mut r = runtime();
    r.enter("PROG");
    let line = format!("PRINT \"{}\"", "x".repeat(40));
    let mut out = String::new();
    for _ in 0..20 {
        if !r.is_entry_mode() {
            break;
        }
        r.enter(&line);
        out = tidy(&r.bios().output);
    }
    assert!(out.contains("\nPG area overflow error\n"));
    assert!(!r.is_entry_mode());
    assert!(r.program().len() <= config().program_size);
    assert_eq!(exec(&mut r, "PRINT 1"), "1\n");
}

#[test]
fn test_program_area_overflow_by_label() {
    let mut r = runtime();
    let mut errors = 0;
    for label in 1..=20 {
        let line = format!("{} PRINT \"{}\"", label, "x".repeat(40));
        match exec(&mut r, &line).as_str() {
            "" => {}
            "\nPG area overflow error\n" => errors += 1,
            other => panic!("unexpected output {:?}", other),
        }
    }
    assert!(errors > 0);
    assert!(r.program().len() <= config().program_size);
    // replacing a stored line with a shorter one still fits
    assert_eq!(exec(&mut r, "1 PRINT 1:END"), "");
    assert_eq!(exec(&mut r, "GOTO 1"), "1\n");
}

#[test]
fn test_goto_missing_label() {
    let mut r = runtime();
    assert_eq!(exec(&mut r, "GOTO 99"), "\nLabel not found error\n");
}

#[test]
fn test_goto_from_prompt() {
    let mut r = runtime();
    prog(&mut r, &["PRINT 1", "20 PRINT 2"]);
    assert_eq!(exec(&mut r, "GOTO 20"), "2\n");
}

#[test]
fn test_stop_and_resume() {
    let mut r = runtime();
    prog(&mut r, &["PRINT 1", "STOP", "PRINT 2"]);
    assert_eq!(exec(&mut r, "RUN"), "1\n\nBreak in 2\n");
    assert_eq!(exec(&mut r, "RESUME"), "2\n");
    assert_eq!(exec(&mut r, "RESUME"), "\nCan't resume error\n");
}

#[test]
fn test_break_and_resume() {
    let mut r = runtime();
    prog(&mut r, &["PRINT 1", "PRINT 2"]);
    r.bios_mut().type_str("x\x03");
    assert_eq!(exec(&mut r, "RUN"), "\nBreak in 1\n");
    assert_eq!(exec(&mut r, "RESUME"), "1\n2\n");
}

#[test]
fn test_editing_forgets_resume() {
    let mut r = runtime();
    prog(&mut r, &["STOP", "PRINT 2"]);
    assert_eq!(exec(&mut r, "RUN"), "\nBreak in 1\n");
    r.enter("30 PRINT 3");
    assert_eq!(exec(&mut r, "RESUME"), "\nCan't resume error\n");
}

#[test]
fn test_end_and_new_inside_program() {
    let mut r = runtime();
    prog(&mut r, &["PRINT 1", "END", "PRINT 2"]);
    assert_eq!(exec(&mut r, "RUN"), "1\n");
    prog(&mut r, &["PRINT 1", "NEW", "PRINT 2"]);
    assert_eq!(exec(&mut r, "RUN"), "1\n");
    assert_eq!(exec(&mut r, "LIST"), "[0 bytes]\n");
}

#[test]
fn test_prog_inside_program() {
    let mut r = runtime();
    prog(&mut r, &["PROG"]);
    assert_eq!(exec(&mut r, "RUN"), "\nRun mode error in 1\n");
}

#[test]
fn test_run_clears_variables() {
    let mut r = runtime();
    prog(&mut r, &["PRINT A", "A=5"]);
    assert_eq!(exec(&mut r, "RUN"), "0\n");
    assert_eq!(exec(&mut r, "PRINT A"), "5\n");
    assert_eq!(exec(&mut r, "RUN"), "0\n");
}

#[test]
fn test_pins() {
    let mut r = runtime();
    assert_eq!(exec(&mut r, "OUTP 13,1:PRINT INP(13)"), "1\n");
    assert_eq!(r.bios().pins[13], 1);
    assert_eq!(exec(&mut r, "OUTP 40,1"), "\nParameter error\n");
    assert_eq!(exec(&mut r, "PRINT INP(-1)"), "\nParameter error\n");
    assert_eq!(exec(&mut r, "PWM 3,128"), "");
    assert_eq!(r.bios().pwm, vec![(3, 128)]);
    assert_eq!(exec(&mut r, "PWM 4,1"), "\nParameter error\n");
    assert_eq!(exec(&mut r, "PWM 3,256"), "\nParameter error\n");
    assert_eq!(exec(&mut r, "PRINT ADC(2)"), "200\n");
    assert_eq!(exec(&mut r, "PRINT ADC(9)"), "\nParameter error\n");
}

#[test]
fn test_delay_waits() {
    let mut r = runtime();
    let start = r.bios().clock;
    assert_eq!(exec(&mut r, "DELAY 100"), "");
    assert!(r.bios().clock.wrapping_sub(start) >= 100);
}

#[test]
fn test_pause_waits_for_a_key() {
    let mut r = runtime();
    r.bios_mut().type_str("k");
    assert_eq!(exec(&mut r, "PAUSE:PRINT 1"), "1\n");
    assert!(r.bios().input.is_empty());
}

#[test]
fn test_randomize_repeats_sequence() {
    let mut r = runtime();
    assert_eq!(
        exec(&mut r, "RANDOMIZE 7:A=RND(1000):RANDOMIZE 7:PRINT A==RND(1000)"),
        "1\n"
    );
}

#[test]
fn test_reset_reboots() {
    let mut r = runtime();
    let out = exec(&mut r, "RESET");
    assert!(out.contains("NanoBASIC RS Ver"));
    assert_eq!(r.bios().resets, 1);
}

#[test]
fn test_comments() {
    let mut r = runtime();
    assert_eq!(exec(&mut r, "PRINT 1 ' one"), "1\n");
    assert_eq!(exec(&mut r, "' nothing"), "");
}

#[test]
fn test_syntax_error() {
    let mut r = runtime();
    assert_eq!(exec(&mut r, "PRINT 1+"), "\nSyntax error\n");
    assert_eq!(exec(&mut r, "A"), "\nSyntax error\n");
    assert_eq!(exec(&mut r, "THEN"), "\nSyntax error\n");
}
