//! Parsing of ctags tab-separated output
//!
//! Each tag line looks like:
//!
//! ```text
//! name<TAB>file<TAB>ex_command;"<TAB>kind:function<TAB>line:12<TAB>class:Foo ...
//! ```
//!
//! Everything from the fourth column on is a `key:value` extension field.
//! Lines that don't fit the shape (pseudo-tag headers, truncated lines,
//! tags without a kind) are skipped; garbage in means an empty tree out,
//! never an error.

use super::{Tag, TagKind};

/// Parse raw ctags output into tag records, attributing every tag to `uri`.
///
/// The `uri` is the document identity as the editor knows it, which differs
/// from the path ctags saw when the buffer was snapshotted to a temp file.
pub fn parse_output(output: &str, uri: &str) -> Vec<Tag> {
    let mut tags = Vec::new();

    for line in output.lines() {
        if let Some(tag) = parse_line(line, uri) {
            tags.push(tag);
        }
    }

    tracing::debug!("Parsed {} tags for {}", tags.len(), uri);
    tags
}

fn parse_line(line: &str, uri: &str) -> Option<Tag> {
    // Pseudo-tag headers (!_TAG_FILE_FORMAT etc.) are metadata, not symbols
    if line.is_empty() || line.starts_with("!_") {
        return None;
    }

    let mut columns = line.split('\t');
    let name = columns.next()?;
    let _file = columns.next()?;
    let _ex_command = columns.next()?;

    if name.is_empty() {
        return None;
    }

    let mut kind = None;
    let mut class = None;
    let mut tag_line = None;

    for field in columns {
        let Some((key, value)) = field.split_once(':') else {
            continue;
        };
        match key {
            "kind" => kind = Some(TagKind::from_name(value)),
            "class" => {
                if !value.is_empty() {
                    class = Some(value.to_string());
                }
            }
            "line" => tag_line = value.parse::<u32>().ok().filter(|n| *n > 0),
            _ => {}
        }
    }

    // A tag with no kind can't be grouped, so it can't appear in the tree
    let kind = kind?;

    Some(Tag {
        name: name.to_string(),
        kind,
        class,
        line: tag_line,
        uri: uri.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
!_TAG_FILE_FORMAT\t2\t/extended format/\n\
Foo\tx.py\t/^class Foo:$/;\"\tkind:class\tline:1\tlanguage:Python\n\
bar\tx.py\t/^    def bar(self):$/;\"\tkind:member\tline:10\tlanguage:Python\tclass:Foo\n\
baz\tx.py\t/^def baz():$/;\"\tkind:function\tline:20\tlanguage:Python\n";

    #[test]
    fn test_parses_tags_with_fields() {
        let tags = parse_output(SAMPLE, "file:///x.py");
        assert_eq!(tags.len(), 3);

        assert_eq!(tags[0].name, "Foo");
        assert_eq!(tags[0].kind, TagKind::Class);
        assert_eq!(tags[0].class, None);
        assert_eq!(tags[0].line, Some(1));
        assert_eq!(tags[0].uri, "file:///x.py");

        assert_eq!(tags[1].name, "bar");
        assert_eq!(tags[1].kind, TagKind::Member);
        assert_eq!(tags[1].class.as_deref(), Some("Foo"));
        assert_eq!(tags[1].line, Some(10));
    }

    #[test]
    fn test_pseudo_tags_are_skipped() {
        let tags = parse_output("!_TAG_PROGRAM_NAME\tExuberant Ctags\t//\n", "file:///x.py");
        assert!(tags.is_empty());
    }

    #[test]
    fn test_truncated_line_is_skipped() {
        let tags = parse_output("name_only\n", "file:///x.py");
        assert!(tags.is_empty());
    }

    #[test]
    fn test_tag_without_kind_is_skipped() {
        let tags = parse_output("foo\tx.py\t/^foo$/;\"\tline:3\n", "file:///x.py");
        assert!(tags.is_empty());
    }

    #[test]
    fn test_missing_line_field_gives_none() {
        let tags = parse_output("foo\tx.py\t/^foo$/;\"\tkind:function\n", "file:///x.py");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].line, None);
    }

    #[test]
    fn test_zero_or_garbage_line_gives_none() {
        let tags = parse_output(
            "a\tx.py\t//;\"\tkind:function\tline:0\nb\tx.py\t//;\"\tkind:function\tline:x\n",
            "file:///x.py",
        );
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].line, None);
        assert_eq!(tags[1].line, None);
    }

    #[test]
    fn test_garbage_output_yields_no_tags() {
        let tags = parse_output("this is not ctags output\nneither is this\n", "file:///x.py");
        assert!(tags.is_empty());
    }

    #[test]
    fn test_empty_class_field_is_dropped() {
        let tags = parse_output("foo\tx.py\t//;\"\tkind:method\tclass:\n", "file:///x.py");
        assert_eq!(tags[0].class, None);
    }
}
