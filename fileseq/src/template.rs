//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Named-field templates for rendering file sequences.
//!
//! A template is literal text with `{field}` placeholders. `{{` and `}}`
//! produce literal braces. Only the fields of [`TemplateField`] exist; any
//! other name is rejected.

use crate::{SequenceError, SequenceResult, TemplateErrorKind};

/// The fields a template may reference.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TemplateField {
    /// `{basename}` - the basename of the sequence
    Basename,
    /// `{extension}` - the extension, leading `.` included
    Extension,
    /// `{start}` - the first frame
    Start,
    /// `{end}` - the last frame
    End,
    /// `{length}` - the number of frames
    Length,
    /// `{padding}` - the padding characters
    Padding,
    /// `{range}` - the zero-filled frame range
    Range,
    /// `{inverted}` - the zero-filled inverted frame range
    Inverted,
    /// `{dirname}` - the directory, trailing separator included
    Dirname,
}

impl TemplateField {
    /// Every field, in documentation order.
    pub const ALL: [TemplateField; 9] = [
        TemplateField::Basename,
        TemplateField::Extension,
        TemplateField::Start,
        TemplateField::End,
        TemplateField::Length,
        TemplateField::Padding,
        TemplateField::Range,
        TemplateField::Inverted,
        TemplateField::Dirname,
    ];

    /// Look up a field by its placeholder name.
    pub fn from_name(name: &str) -> Option<TemplateField> {
        TemplateField::ALL
            .into_iter()
            .find(|field| field.name() == name)
    }

    /// The placeholder name of this field.
    pub fn name(&self) -> &'static str {
        match self {
            TemplateField::Basename => "basename",
            TemplateField::Extension => "extension",
            TemplateField::Start => "start",
            TemplateField::End => "end",
            TemplateField::Length => "length",
            TemplateField::Padding => "padding",
            TemplateField::Range => "range",
            TemplateField::Inverted => "inverted",
            TemplateField::Dirname => "dirname",
        }
    }
}

impl std::fmt::Display for TemplateField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Render `template`, asking `lookup` for the value of each placeholder.
pub(crate) fn render<F>(template: &str, mut lookup: F) -> SequenceResult<String>
where
    F: FnMut(TemplateField) -> String,
{
    let error = |position: usize, kind: TemplateErrorKind| SequenceError::Template {
        template: template.to_string(),
        position,
        kind,
    };

    let mut out = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();
    while let Some((position, ch)) = chars.next() {
        match ch {
            '{' if chars.next_if(|(_, next)| *next == '{').is_some() => out.push('{'),
            '}' if chars.next_if(|(_, next)| *next == '}').is_some() => out.push('}'),
            '{' => {
                let name_start = position + 1;
                let name_end = loop {
                    match chars.next() {
                        Some((at, '}')) => break at,
                        Some(_) => continue,
                        None => return Err(error(position, TemplateErrorKind::Unterminated)),
                    }
                };
                let name = &template[name_start..name_end];
                let field = TemplateField::from_name(name).ok_or_else(|| {
                    error(
                        position,
                        TemplateErrorKind::UnknownField {
                            name: name.to_string(),
                        },
                    )
                })?;
                out.push_str(&lookup(field));
            }
            '}' => return Err(error(position, TemplateErrorKind::UnmatchedBrace)),
            _ => out.push(ch),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(field: TemplateField) -> String {
        format!("<{}>", field)
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in TemplateField::ALL {
            assert_eq!(TemplateField::from_name(field.name()), Some(field));
        }
        assert_eq!(TemplateField::from_name("frame"), None);
    }

    #[test]
    fn test_render_fields() {
        assert_eq!(
            render("{dirname}{basename}{range}{padding}{extension}", names).unwrap(),
            "<dirname><basename><range><padding><extension>"
        );
        assert_eq!(
            render("{start} to {end} ({length})", names).unwrap(),
            "<start> to <end> (<length>)"
        );
    }

    #[test]
    fn test_render_escaped_braces() {
        assert_eq!(render("{{basename}}", names).unwrap(), "{basename}");
        assert_eq!(render("a{{b}}c", names).unwrap(), "a{b}c");
    }

    #[test]
    fn test_render_unknown_field() {
        match render("x{frame}", names) {
            Err(SequenceError::Template { position, kind, .. }) => {
                assert_eq!(position, 1);
                assert_eq!(
                    kind,
                    TemplateErrorKind::UnknownField {
                        name: "frame".to_string()
                    }
                );
            }
            other => panic!("expected template error, got {:?}", other),
        }
    }

    #[test]
    fn test_render_malformed() {
        assert!(matches!(
            render("{basename", names),
            Err(SequenceError::Template {
                kind: TemplateErrorKind::Unterminated,
                ..
            })
        ));
        assert!(matches!(
            render("basename}", names),
            Err(SequenceError::Template {
                kind: TemplateErrorKind::UnmatchedBrace,
                ..
            })
        ));
    }
}
