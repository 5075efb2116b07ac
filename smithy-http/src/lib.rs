/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! HTTP plumbing shared between generated operations and the client that dispatches them.

pub mod body;
pub mod middleware;
pub mod operation;
pub mod response;
pub mod result;
