/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! The awsQuery error envelope:
//!
//! ```xml
//! <ErrorResponse>
//!   <Error>
//!     <Type>Sender</Type>
//!     <Code>StackSetNotFoundException</Code>
//!     <Message>StackSet my-set not found</Message>
//!   </Error>
//!   <RequestId>4b4c6ee6-3a2b-4b8e-a6ee-1c3f0b1a0b11</RequestId>
//! </ErrorResponse>
//! ```

use smithy_xml::decode::{try_data, Document, ScopedDecoder, XmlError};
use std::convert::TryFrom;

/// Reads the code, message and request id of an error response.
pub fn parse_generic_error(body: &[u8]) -> Result<smithy_types::Error, XmlError> {
    let mut doc = Document::try_from(body)?;
    let mut root = doc.root_element()?;
    if !root.start_el().matches("ErrorResponse") {
        return Err(XmlError::custom("expected ErrorResponse as root"));
    }
    let mut err_builder = smithy_types::Error::builder();
    while let Some(mut tag) = root.next_tag() {
        match tag.start_el().local() {
            "Error" => {
                while let Some(mut error_field) = tag.next_tag() {
                    match error_field.start_el().local() {
                        "Code" => {
                            err_builder.code(try_data(&mut error_field)?);
                        }
                        "Message" => {
                            err_builder.message(try_data(&mut error_field)?);
                        }
                        _ => {}
                    }
                }
            }
            "RequestId" => {
                err_builder.request_id(try_data(&mut tag)?);
            }
            _ => {}
        }
    }
    Ok(err_builder.build())
}

/// Positions a decoder on the `<Error>` element so that modeled exception members can be read.
pub fn error_scope<'a, 'b>(doc: &'a mut Document<'b>) -> Result<ScopedDecoder<'b, 'a>, XmlError> {
    let root = doc
        .next_start_element()
        .ok_or_else(|| XmlError::custom("no root found searching for an Error"))?;
    if !root.matches("ErrorResponse") {
        return Err(XmlError::custom("expected ErrorResponse as root"));
    }

    while let Some(el) = doc.next_start_element() {
        if el.matches("Error") && el.depth() == 1 {
            return Ok(doc.scoped_to(el));
        }
    }
    Err(XmlError::custom("no Error found inside of ErrorResponse"))
}

#[cfg(test)]
mod test {
    use super::{error_scope, parse_generic_error};
    use smithy_xml::decode::{try_data, Document};

    const BODY: &str = r#"<ErrorResponse xmlns="http://cloudformation.amazonaws.com/doc/2010-05-15/">
  <Error>
    <Type>Sender</Type>
    <Code>AlreadyExistsException</Code>
    <Message>Stack [my-stack] already exists</Message>
  </Error>
  <RequestId>e5dbd8c2-7a1e-4d6b-9a7f-8f06c0a2f6a1</RequestId>
</ErrorResponse>"#;

    #[test]
    fn parses_code_message_and_request_id() {
        let err = parse_generic_error(BODY.as_bytes()).expect("valid error");
        assert_eq!(err.code(), Some("AlreadyExistsException"));
        assert_eq!(err.message(), Some("Stack [my-stack] already exists"));
        assert_eq!(err.request_id(), Some("e5dbd8c2-7a1e-4d6b-9a7f-8f06c0a2f6a1"));
    }

    #[test]
    fn missing_members_are_absent() {
        let err = parse_generic_error(b"<ErrorResponse><Error><Code>Throttling</Code></Error></ErrorResponse>")
            .expect("valid error");
        assert_eq!(err.code(), Some("Throttling"));
        assert_eq!(err.message(), None);
        assert_eq!(err.request_id(), None);
    }

    #[test]
    fn rejects_other_documents() {
        assert!(parse_generic_error(b"<ListStacksResponse/>").is_err());
        assert!(parse_generic_error(b"").is_err());
        assert!(parse_generic_error(b"not xml at all").is_err());
    }

    #[test]
    fn scopes_to_the_error_element() {
        let mut doc = Document::new(BODY);
        let mut error = error_scope(&mut doc).expect("error element");
        let mut seen = vec![];
        while let Some(mut tag) = error.next_tag() {
            if tag.start_el().matches("Message") {
                seen.push(try_data(&mut tag).expect("text").into_owned());
            }
        }
        assert_eq!(seen, vec!["Stack [my-stack] already exists".to_string()]);
    }

    #[test]
    fn nested_error_elements_are_not_the_envelope() {
        let mut doc = Document::new("<ErrorResponse><Wrapper><Error/></Wrapper></ErrorResponse>");
        assert!(error_scope(&mut doc).is_err());
    }
}
