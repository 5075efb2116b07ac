/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::decode::XmlError;
use std::borrow::Cow;

/// Unescape XML encoded characters
///
/// This function will unescape the 5 predefined entities (`&lt;`, `&gt;`, `&amp;`, `&quot;`,
/// `&apos;`) as well as decimal (`&#123;`) and hexadecimal (`&#x7b;`) character references.
///
/// If no escape sequences are present, the input is returned borrowed.
pub(crate) fn unescape(s: &str) -> Result<Cow<'_, str>, XmlError> {
    if !s.contains('&') {
        return Ok(Cow::Borrowed(s));
    }
    let mut res = String::with_capacity(s.len());
    let mut sections = s.split('&');
    // the first section precedes any `&`
    if let Some(prefix) = sections.next() {
        res.push_str(prefix);
    }
    for section in sections {
        let end = section
            .find(';')
            .ok_or_else(|| XmlError::invalid_escape(format!("unterminated escape: {}", section)))?;
        let (entity, rest) = section.split_at(end);
        match entity {
            "lt" => res.push('<'),
            "gt" => res.push('>'),
            "amp" => res.push('&'),
            "quot" => res.push('"'),
            "apos" => res.push('\''),
            numeric => res.push(char_reference(numeric)?),
        }
        res.push_str(&rest[1..]);
    }
    Ok(Cow::Owned(res))
}

fn char_reference(entity: &str) -> Result<char, XmlError> {
    let invalid = || XmlError::invalid_escape(format!("&{};", entity));
    let code_point = if let Some(hex) = entity.strip_prefix("#x") {
        u32::from_str_radix(hex, 16).map_err(|_| invalid())?
    } else if let Some(decimal) = entity.strip_prefix('#') {
        if !decimal.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        decimal.parse::<u32>().map_err(|_| invalid())?
    } else {
        return Err(invalid());
    };
    std::char::from_u32(code_point).ok_or_else(invalid)
}

#[cfg(test)]
mod test {
    use crate::unescape::unescape;
    use proptest::prelude::*;
    use std::borrow::Cow;

    #[test]
    fn basic_unescape() {
        assert_eq!(
            unescape("&lt; &gt; &apos; &quot; &amp;").unwrap(),
            "< > ' \" &"
        );
        assert_eq!(
            unescape("Since a &gt; b, b is less than a").unwrap(),
            "Since a > b, b is less than a"
        );
    }

    #[test]
    fn no_escapes_borrows() {
        assert!(matches!(unescape("CREATE_COMPLETE").unwrap(), Cow::Borrowed(_)));
    }

    #[test]
    fn character_references() {
        assert_eq!(unescape("&#123;").unwrap(), "{");
        assert_eq!(unescape("&#x7b;").unwrap(), "{");
        assert_eq!(unescape("line&#10;break").unwrap(), "line\nbreak");
    }

    #[test]
    fn invalid_escapes() {
        unescape("&lte;").expect_err("unknown entity");
        unescape("&lt").expect_err("unterminated");
        unescape("&#xD800;").expect_err("surrogates are not chars");
        unescape("&#-1;").expect_err("negative code point");
        unescape("&#;").expect_err("empty code point");
    }

    proptest! {
        #[test]
        fn no_panics(s: String) {
            let _ = unescape(&s);
        }

        #[test]
        fn escaped_text_round_trips(s in "[^&]*") {
            let escaped = s.replace('<', "&lt;").replace('>', "&gt;").replace('"', "&quot;");
            prop_assert_eq!(unescape(&escaped).unwrap(), s);
        }
    }
}
