//! Extraction of `MIRYOKU_*` macro definitions from a `custom_config.h`.
//!
//! Layer tables are spelled as `#define MIRYOKU_LAYER_<NAME>` with `\` line
//! continuations; everything else starting with `MIRYOKU_` is an option flag
//! (e.g. `MIRYOKU_CLIPBOARD_MAC`). Definition order is preserved.

use tracing::warn;

/// One `#define MIRYOKU_LAYER_*` table, continuations joined and whitespace
/// collapsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawLayer {
    /// Layer name without the `MIRYOKU_LAYER_` prefix, e.g. `BASE`
    pub name: String,
    pub definition: String,
}

/// A non-layer `#define MIRYOKU_*` option flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawFlag {
    /// Flag name without the `MIRYOKU_` prefix
    pub name: String,
    pub value: Option<String>,
}

/// All `MIRYOKU_*` definitions of one header, in file order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawHeader {
    pub layers: Vec<RawLayer>,
    pub flags: Vec<RawFlag>,
}

impl RawHeader {
    pub fn layer(&self, name: &str) -> Option<&RawLayer> {
        self.layers.iter().find(|l| l.name == name)
    }

    pub fn layer_names(&self) -> impl Iterator<Item = &str> {
        self.layers.iter().map(|l| l.name.as_str())
    }
}

/// Parse all `MIRYOKU_*` definitions out of a header source.
pub fn parse_header(content: &str) -> RawHeader {
    let mut header = RawHeader::default();
    let mut lines = content.lines();

    while let Some(line) = lines.next() {
        let Some(rest) = line.trim().strip_prefix("#define") else {
            continue;
        };
        let rest = rest.trim_start();
        let (name, first_segment) = match rest.split_once(char::is_whitespace) {
            Some((name, value)) => (name, value),
            None => (rest, ""),
        };
        // A continuation backslash can sit glued to the name
        let (name, first_segment) = match name.strip_suffix('\\') {
            Some(trimmed) if first_segment.is_empty() => (trimmed, "\\"),
            Some(trimmed) => (trimmed, first_segment),
            None => (name, first_segment),
        };
        let Some(miryoku_name) = name.strip_prefix("MIRYOKU_") else {
            continue;
        };

        // Join `\` continuations into one segment
        let mut definition = first_segment.to_string();
        while definition.trim_end().ends_with('\\') {
            let joined = definition.trim_end();
            definition = joined[..joined.len() - 1].to_string();
            match lines.next() {
                Some(next) => {
                    definition.push(' ');
                    definition.push_str(next);
                }
                None => break,
            }
        }
        let definition = definition.split_whitespace().collect::<Vec<_>>().join(" ");

        if let Some(layer_name) = miryoku_name.strip_prefix("LAYER_") {
            if header.layer(layer_name).is_some() {
                warn!(layer = layer_name, "duplicate layer definition ignored");
                continue;
            }
            header.layers.push(RawLayer {
                name: layer_name.to_string(),
                definition,
            });
        } else {
            header.flags.push(RawFlag {
                name: miryoku_name.to_string(),
                value: if definition.is_empty() {
                    None
                } else {
                    Some(definition)
                },
            });
        }
    }

    header
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
#define MIRYOKU_LAYER_BASE \\
&kp Q,    &kp W,    \\
\\
&kp A,    &kp S

#define MIRYOKU_LAYER_NAV \\
U_BOOT,   U_NA, U_NA, U_NA

#define MIRYOKU_CLIPBOARD_MAC
#define MIRYOKU_KLUDGE_THUMBCOMBOS 1
";

    #[test]
    fn joins_continuations_and_collapses_whitespace() {
        let header = parse_header(SAMPLE);
        let base = header.layer("BASE").unwrap();
        assert_eq!(base.definition, "&kp Q, &kp W, &kp A, &kp S");
        assert!(!base.definition.contains('\\'));
    }

    #[test]
    fn preserves_definition_order() {
        let header = parse_header(SAMPLE);
        let names: Vec<_> = header.layer_names().collect();
        assert_eq!(names, vec!["BASE", "NAV"]);
    }

    #[test]
    fn collects_option_flags() {
        let header = parse_header(SAMPLE);
        assert_eq!(header.flags.len(), 2);
        assert_eq!(header.flags[0].name, "CLIPBOARD_MAC");
        assert_eq!(header.flags[0].value, None);
        assert_eq!(header.flags[1].name, "KLUDGE_THUMBCOMBOS");
        assert_eq!(header.flags[1].value.as_deref(), Some("1"));
    }

    #[test]
    fn missing_layer_lookup_returns_none() {
        let header = parse_header(SAMPLE);
        assert!(header.layer("NONEXISTENT").is_none());
    }

    #[test]
    fn reparsing_is_idempotent() {
        assert_eq!(parse_header(SAMPLE), parse_header(SAMPLE));
    }

    #[test]
    fn continuation_glued_to_name_is_handled() {
        let header = parse_header(
            "#define MIRYOKU_LAYER_BASE\\\n&kp Q,    &kp W, \\\n&kp A\n",
        );
        assert_eq!(header.layer_names().collect::<Vec<_>>(), vec!["BASE"]);
        let base = header.layer("BASE").unwrap();
        assert_eq!(base.definition, "&kp Q, &kp W, &kp A");
    }

    #[test]
    fn non_miryoku_defines_are_ignored() {
        let header = parse_header("#define FOO 1\n#define MIRYOKU_LAYER_BASE &kp A\n");
        assert_eq!(header.layers.len(), 1);
        assert!(header.flags.is_empty());
    }
}
