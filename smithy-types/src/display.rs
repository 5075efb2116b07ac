/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Helpers for the compact, null-omitting `Display` rendering of generated shapes.
//!
//! A shape renders as `{Name: value, Other: value}` using wire member names in declaration
//! order. Members that are `None` are skipped entirely. Lists render as `[a, b]` and maps as
//! `{k=v, k2=v2}` with keys in sorted order so the output is stable.

use std::collections::HashMap;
use std::fmt;

/// Incrementally writes the members of a structure.
pub struct DisplayStruct<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    result: fmt::Result,
    has_fields: bool,
}

impl<'a, 'b> DisplayStruct<'a, 'b> {
    pub fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        let result = f.write_str("{");
        DisplayStruct {
            f,
            result,
            has_fields: false,
        }
    }

    /// Writes `name: value` if `value` is present.
    pub fn field<T: fmt::Display>(&mut self, name: &str, value: Option<T>) -> &mut Self {
        let value = match value {
            Some(value) => value,
            None => return self,
        };
        let has_fields = self.has_fields;
        let f = &mut *self.f;
        self.result = self.result.and_then(|_| {
            if has_fields {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", name, value)
        });
        self.has_fields = true;
        self
    }

    pub fn finish(&mut self) -> fmt::Result {
        let f = &mut *self.f;
        self.result.and_then(|_| f.write_str("}"))
    }
}

/// Renders a slice as `[a, b, c]`.
pub struct DisplayList<'a, T>(pub &'a [T]);

impl<T: fmt::Display> fmt::Display for DisplayList<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, item) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", item)?;
        }
        f.write_str("]")
    }
}

/// Renders a map as `{k=v, k2=v2}`, sorted by key.
pub struct DisplayMap<'a, K, V>(pub &'a HashMap<K, V>);

impl<K: fmt::Display + Ord, V: fmt::Display> fmt::Display for DisplayMap<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self.0.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        f.write_str("{")?;
        for (idx, (k, v)) in entries.into_iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", k, v)?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod test {
    use super::{DisplayList, DisplayMap, DisplayStruct};
    use std::collections::HashMap;
    use std::fmt;

    struct Shape {
        name: Option<String>,
        count: Option<i32>,
        tags: Option<Vec<String>>,
        props: Option<HashMap<String, String>>,
    }

    impl fmt::Display for Shape {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut out = DisplayStruct::new(f);
            out.field("Name", self.name.as_ref());
            out.field("Count", self.count);
            out.field("Tags", self.tags.as_deref().map(DisplayList));
            out.field("Props", self.props.as_ref().map(DisplayMap));
            out.finish()
        }
    }

    #[test]
    fn absent_fields_are_omitted() {
        let shape = Shape {
            name: None,
            count: Some(3),
            tags: None,
            props: None,
        };
        assert_eq!(shape.to_string(), "{Count: 3}");
        let empty = Shape {
            name: None,
            count: None,
            tags: None,
            props: None,
        };
        assert_eq!(empty.to_string(), "{}");
    }

    #[test]
    fn collections_render_inline() {
        let mut props = HashMap::new();
        props.insert("b".to_string(), "2".to_string());
        props.insert("a".to_string(), "1".to_string());
        let shape = Shape {
            name: Some("stack".to_string()),
            count: None,
            tags: Some(vec!["x".to_string(), "y".to_string()]),
            props: Some(props),
        };
        assert_eq!(
            shape.to_string(),
            "{Name: stack, Tags: [x, y], Props: {a=1, b=2}}"
        );
    }

    #[test]
    fn empty_list_is_not_absent() {
        let shape = Shape {
            name: None,
            count: None,
            tags: Some(vec![]),
            props: None,
        };
        assert_eq!(shape.to_string(), "{Tags: []}");
    }
}
