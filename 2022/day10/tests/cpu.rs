use day10::{Instruction, CRT_WIDTH, KEY_CYCLES};

#[test]
fn register_holds_value_during_addx() {
    let insts = day10::read_insts("sample_inputs.txt").unwrap();
    assert_eq!(
        insts,
        vec![
            Instruction::Noop,
            Instruction::AddX(3),
            Instruction::AddX(-5)
        ]
    );
    assert_eq!(day10::register_trace(&insts), vec![1, 1, 1, 4, 4, -1]);
}

#[test]
fn empty_program_has_single_cycle() {
    assert_eq!(day10::register_trace(&[]), vec![1]);
}

#[test]
fn strength_skips_cycles_past_trace() {
    let trace_values = vec![2; 60];
    assert_eq!(
        day10::signal_strength_sum(&trace_values, &KEY_CYCLES),
        2 * (20 + 60)
    );
}

#[test]
fn crt_renders_only_complete_rows() {
    let trace_values = vec![1; CRT_WIDTH * 2 + 3];
    let rows = day10::render_crt(&trace_values);
    assert_eq!(rows.len(), 2);
    assert!(rows[0].starts_with("###."));
    assert_eq!(rows[0].len(), CRT_WIDTH);
    assert!(day10::render_crt(&[1; 10]).is_empty());
}

#[test]
fn crt_height_is_capped() {
    let trace_values = vec![38; CRT_WIDTH * 8];
    let rows = day10::render_crt(&trace_values);
    assert_eq!(rows.len(), 6);
    assert!(rows.iter().all(|r| r.ends_with(".###")));
}

#[test]
fn instruction_text_is_validated() {
    assert_eq!(Instruction::try_from("addx -12").unwrap(), Instruction::AddX(-12));
    assert!(Instruction::try_from("addx").is_err());
    assert!(Instruction::try_from("addx 1 2").is_err());
    assert!(Instruction::try_from("nop").is_err());
}

#[test]
fn published_program_key_cycles() {
    let insts = day10::read_insts("sample_inputs2.txt").unwrap();
    let trace_values = day10::register_trace(&insts);
    let key_values = KEY_CYCLES
        .iter()
        .map(|cycle| trace_values[cycle - 1])
        .collect::<Vec<_>>();
    assert_eq!(key_values, vec![21, 19, 18, 21, 16, 18]);
    assert_eq!(
        day10::signal_strength_sum(&trace_values, &KEY_CYCLES),
        13140
    );
}
