use plenary_fmt::driver::{FormatOptions, format_text, format_to_vec, run, split_input_lines};
use plenary_fmt::format::status_line::StatusLine;
use plenary_fmt::format::wrap::char_len;

const GRAY: &str = "\u{1b}[90m";
const RESET: &str = "\u{1b}[0m";

const TRANSCRIPT: &str = "\
==========
Testing: empty_spec.lua

==========
Testing: parser_spec.lua
  ✓ parses a buffer
  ✗ reports a helpful error when the closing bracket is missing entirely
    12) a_failure_identifier_that_is_far_too_long_to_fit_anywhere here
==========
Testing: init_spec.lua
plenary initialized
";

fn plain(columns: usize) -> FormatOptions {
    FormatOptions {
        color: false,
        ..FormatOptions::with_columns(columns)
    }
}

#[test]
fn empty_section_header_is_dimmed() {
    let input = "==========\nTesting: foo_spec.lua\n\n==========";
    let out = format_text(input, &FormatOptions::with_columns(120));
    similar_asserts::assert_eq!(
        out,
        format!("{GRAY}=========={RESET}\n{GRAY}Testing: foo_spec.lua{RESET}\n\n==========\n")
    );
}

#[test]
fn long_checkmark_line_wraps_at_forty_columns() {
    let line = "  ✓ a very long description that exceeds one hundred and twenty characters in \
                total length when combined with its leading marker and indentation";
    let out = format_to_vec(&[line.to_string()], &FormatOptions::with_columns(40));

    similar_asserts::assert_eq!(
        out,
        vec![
            "  ✓ a very long description that exceeds".to_string(),
            "    one hundred and twenty".to_string(),
            "    characters in total length when".to_string(),
            "    combined with its leading marker".to_string(),
            "    and indentation".to_string(),
        ]
    );
    assert!(out[1..].iter().all(|l| l.starts_with("    ") && !l.starts_with("     ")));

    let description = StatusLine::parse(line).unwrap().description;
    let rebuilt = std::iter::once(out[0].trim_start().trim_start_matches('✓'))
        .chain(out[1..].iter().map(String::as_str))
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>();
    similar_asserts::assert_eq!(rebuilt, description.split_whitespace().collect::<Vec<_>>());
}

#[test]
fn realistic_transcript_without_color() {
    let out = format_text(TRANSCRIPT, &plain(40));
    insta::assert_snapshot!(out.trim_end(), @r"
    ==========
    Testing: empty_spec.lua

    ==========
    Testing: parser_spec.lua
      ✓ parses a buffer
      ✗ reports a helpful error when the
        closing bracket is missing
        entirely
        12)         a_failure_identifier_that_is_far_too_long_to_fit_anywhere
            here
    ==========
    Testing: init_spec.lua
    plenary initialized
    ");
}

#[test]
fn realistic_transcript_dims_only_empty_sections() {
    let out = format_to_vec(&split_input_lines(TRANSCRIPT), &FormatOptions::with_columns(40));
    let dimmed = out
        .iter()
        .filter(|l| l.starts_with(GRAY))
        .cloned()
        .collect::<Vec<_>>();
    similar_asserts::assert_eq!(
        dimmed,
        vec![
            format!("{GRAY}=========={RESET}"),
            format!("{GRAY}Testing: empty_spec.lua{RESET}"),
            format!("{GRAY}=========={RESET}"),
            format!("{GRAY}Testing: init_spec.lua{RESET}"),
        ]
    );
    assert!(out.iter().all(|l| !l.contains(GRAY) || l.starts_with(GRAY)));
}

#[test]
fn unmatched_lines_pass_through_in_order() {
    let input = split_input_lines(
        "Starting...\nScheduling: a_spec.lua\n   odd   spacing   \n\t\n=====\nTesting: not after divider\n",
    );
    let out = format_to_vec(&input, &FormatOptions::with_columns(10));
    similar_asserts::assert_eq!(out, input);
}

#[test]
fn short_status_lines_are_byte_identical() {
    let input = split_input_lines("  ✓ ok\n  ✗   spaced   out\n  •  info\n* star\n  1) boom\n");
    let out = format_to_vec(&input, &FormatOptions::with_columns(120));
    similar_asserts::assert_eq!(out, input);
}

#[test]
fn output_never_has_fewer_lines_than_input() {
    for columns in [1usize, 8, 20, 40, 80, 120] {
        let input = split_input_lines(TRANSCRIPT);
        let out = format_to_vec(&input, &FormatOptions::with_columns(columns));
        assert!(out.len() >= input.len(), "columns={columns}");
    }
}

#[test]
fn wrapped_lines_fit_unless_a_single_word_overflows() {
    let columns = 30;
    let line = "    ✗ when the cache is cold the loader falls back to reading from disk \
                and supercalifragilisticexpialidocious-is-too-long";
    let out = format_to_vec(&[line.to_string()], &FormatOptions::with_columns(columns));
    assert!(out.len() > 1);
    for produced in &out {
        let words = produced.split_whitespace().count();
        let is_first_with_marker = produced.trim_start().starts_with('✗');
        let overflow_ok = words == 1 || (is_first_with_marker && words == 2);
        assert!(char_len(produced) <= columns || overflow_ok, "{produced:?}");
    }
}

#[test]
fn run_reads_lossily_and_writes_every_line_terminated() {
    let input = b"plain\n\xff bytes\n==========\nTesting: x_spec.lua\n".to_vec();
    let mut output: Vec<u8> = vec![];
    let stats = run(input.as_slice(), &mut output, &plain(120)).unwrap();

    assert_eq!(stats.lines_in, 4);
    assert_eq!(stats.lines_out, 4);
    assert_eq!(stats.sections_dimmed, 1);
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "plain\n\u{fffd} bytes\n==========\nTesting: x_spec.lua\n"
    );
}

#[test]
fn empty_input_produces_no_output() {
    let mut output: Vec<u8> = vec![];
    let stats = run(&b""[..], &mut output, &FormatOptions::default()).unwrap();
    assert_eq!(stats.lines_out, 0);
    assert!(output.is_empty());
}
