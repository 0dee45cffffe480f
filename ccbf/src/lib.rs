// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! # CCBF Bloom Filter
//!
//! A space-efficient probabilistic set-membership filter together with the `CCBF` binary file
//! format used to persist it.
//!
//! The crate is divided into modules that constitute distinct groups of functionality:
//!
//! - [`bloom`]: the filter itself, its sizing rules and its serialization.
//! - [`hash`]: the seeded MurmurHash3 x64-128 hash family the filter is built on.
//! - [`error`]: the error type returned by fallible operations.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

pub mod bloom;
pub mod error;
pub mod hash;

mod codec;
