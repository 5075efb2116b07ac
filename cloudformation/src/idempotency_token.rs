/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Generation of the client tokens CloudFormation uses to recognize retried requests.
//!
//! Members such as `CreateStackSetInput.ClientRequestToken` or `UpdateStackSetInput.OperationId`
//! are filled with a fresh UUIDv4 when the caller leaves them unset.

use std::sync::Mutex;

pub(crate) fn uuid_v4(input: u128) -> String {
    let mut out = String::with_capacity(36);
    // u4-aligned index into [input]
    let mut rnd_idx: u8 = 0;
    const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

    for str_idx in 0..36 {
        if str_idx == 8 || str_idx == 13 || str_idx == 18 || str_idx == 23 {
            out.push('-');
        // UUID version character
        } else if str_idx == 14 {
            out.push('4');
        } else {
            let mut dat: u8 = ((input >> (rnd_idx * 4)) & 0x0F) as u8;
            // UUID variant bits
            if str_idx == 19 {
                dat |= 0b00001000;
            }
            rnd_idx += 1;
            out.push(HEX_CHARS[dat as usize] as char);
        }
    }
    out
}

/// Produces idempotency tokens for operations that carry one.
pub trait MakeIdempotencyToken: Send + Sync {
    fn make_idempotency_token(&self) -> String;
}

/// The token provider used when none is configured: random UUIDv4s from a seeded generator.
pub fn default_provider() -> impl MakeIdempotencyToken {
    Mutex::new(fastrand::Rng::new())
}

impl MakeIdempotencyToken for Mutex<fastrand::Rng> {
    fn make_idempotency_token(&self) -> String {
        let input: u128 = match self.lock() {
            Ok(rng) => rng.u128(..),
            // a poisoned lock still holds a usable generator
            Err(poisoned) => poisoned.into_inner().u128(..),
        };
        uuid_v4(input)
    }
}

/// A fixed token, useful to make requests reproducible in tests.
impl MakeIdempotencyToken for &'static str {
    fn make_idempotency_token(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod test {
    use super::{default_provider, uuid_v4, MakeIdempotencyToken};
    use proptest::prelude::*;

    #[test]
    fn formats_as_uuid_v4() {
        assert_eq!(uuid_v4(0), "00000000-0000-4000-8000-000000000000");
        assert_eq!(uuid_v4(u128::MAX), "ffffffff-ffff-4fff-ffff-ffffffffffff");
    }

    #[test]
    fn default_provider_makes_distinct_tokens() {
        let provider = default_provider();
        let first = provider.make_idempotency_token();
        let second = provider.make_idempotency_token();
        assert_eq!(first.len(), 36);
        assert_ne!(first, second);
    }

    #[test]
    fn static_tokens_are_returned_verbatim() {
        assert_eq!("00000000-0000-4000-8000-000000000000".make_idempotency_token(), "00000000-0000-4000-8000-000000000000");
    }

    proptest! {
        #[test]
        fn version_and_variant_are_fixed(input in any::<u128>()) {
            let uuid = uuid_v4(input);
            let bytes = uuid.as_bytes();
            prop_assert_eq!(uuid.len(), 36);
            prop_assert_eq!(bytes[14], b'4');
            prop_assert!(matches!(bytes[19], b'8' | b'9' | b'a' | b'b' | b'c' | b'd' | b'e' | b'f'));
            prop_assert!(uuid.chars().all(|c| c == '-' || c.is_ascii_hexdigit()));
        }
    }
}
