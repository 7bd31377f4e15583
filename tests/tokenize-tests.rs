use rust_topath::{errors::PathError, tokenize};

macro_rules! tokenize_tests {
    ($($name:ident: $value:expr,)*) => {
    mod tokenize {
        use super::*;
        $(
            #[test]
            fn $name() -> Result<(), PathError> {
                let (input, expected): (&str, Vec<&str>) = $value;
                let segments = tokenize(input)?;
                assert_eq!(segments, expected);
                Ok(())
            }
        )*
        }
    }
}

tokenize_tests! {
    single_name: ("a", vec!["a"]),
    dotted_names: ("a.b.c", vec!["a", "b", "c"]),
    bracketed_name: ("a[b].c", vec!["a", "b", "c"]),
    dot_inside_brackets: ("a[b.c].e.f", vec!["a", "b.c", "e", "f"]),
    consecutive_brackets: ("a[b][c][d]", vec!["a", "b", "c", "d"]),
    leading_dot: (".a", vec!["", "a"]),
    consecutive_dots: ("a..b", vec!["a", "b"]),
    empty_brackets: ("a[]b", vec!["a", "", "b"]),
    trailing_dot: ("a.", vec!["a"]),
    empty_path: ("", vec![]),
    leading_brackets: ("[a.b]", vec!["a.b"]),
    many_dots_inside_brackets: ("x[...]", vec!["x", "..."]),
    name_after_bracket: ("a[b]c.d", vec!["a", "b", "c", "d"]),
    numeric_names: ("items[0].1", vec!["items", "0", "1"]),
}

#[test]
fn bracket_and_dot_notation_agree() -> Result<(), PathError> {
    assert_eq!(tokenize("a[b].c")?, tokenize("a.b.c")?);
    assert_eq!(tokenize("a[b][c]")?, tokenize("a.b.c")?);
    Ok(())
}

#[test]
fn plain_paths_split_on_dots() -> Result<(), PathError> {
    let paths = ["x", "x.y", "one.two.three.four", "a-b.c_d.e f"];
    for path in paths {
        assert_eq!(tokenize(path)?, path.split('.').collect::<Vec<&str>>());
    }
    Ok(())
}

#[test]
fn segments_are_returned_unchanged() -> Result<(), PathError> {
    let segments: Vec<String> = ["a[", "]b", "", "c.d"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(tokenize(segments.clone())?, segments);
    Ok(())
}

#[test]
fn segments_do_not_round_trip_as_paths() -> Result<(), PathError> {
    let segments = tokenize("a[b.c]")?;
    assert_eq!(segments, vec!["a", "b.c"]);
    assert_eq!(tokenize(segments[1].as_str())?, vec!["b", "c"]);
    Ok(())
}
